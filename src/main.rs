#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use changelog_docs::config::{DocsConfig, resolve_config};
use changelog_docs::notes::FileNotes;
use changelog_docs::{DocsResult, check_cmd, index_cmd, write_cmd};

#[derive(Parser, Debug)]
#[command(name = "changelog-docs")]
#[command(about = "Write release-notes pages and keep the release-notes index in version order", long_about = None)]
struct Cli {
    /// Enable verbose logging (or set CHANGELOG_DOCS_LOG)
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct Location {
    /// Config file (defaults to ./changelog-docs.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory holding the release-notes documents
    #[arg(long)]
    docs_dir: Option<PathBuf>,
    /// Index document (defaults to <docs-dir>/_index.md)
    #[arg(long)]
    index: Option<PathBuf>,
}

impl Location {
    fn resolve(self) -> DocsResult<DocsConfig> {
        Ok(resolve_config(self.config.as_deref())?.with_overrides(self.docs_dir, self.index))
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the notes document for a release and add it to the index
    Write {
        /// Release version (e.g., 1.2.3)
        #[arg(long)]
        release: String,
        /// Page title, used verbatim
        #[arg(long)]
        title: String,
        /// File with the rendered notes body ("-" reads stdin)
        #[arg(long, default_value = "-")]
        body: PathBuf,
        #[command(flatten)]
        location: Location,
        /// Compute changes without writing; prints the updated index
        #[arg(long)]
        dry_run: bool,
        /// Write machine-readable JSON report to this file
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Add a release to the index without writing its notes document
    Index {
        /// Release version (e.g., 1.2.3)
        #[arg(long)]
        release: String,
        #[command(flatten)]
        location: Location,
        /// Compute changes without writing; prints the updated index
        #[arg(long)]
        dry_run: bool,
        /// Write machine-readable JSON report to this file
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Check that the index lists releases newest first, once each
    Check {
        #[command(flatten)]
        location: Location,
    },
}

fn init_tracing(verbose: bool) {
    let env = std::env::var("CHANGELOG_DOCS_LOG").unwrap_or_else(|_| {
        if verbose { "changelog_docs=debug".to_string() } else { "changelog_docs=info".to_string() }
    });
    let _ = tracing_subscriber::fmt()
        .with_span_events(FmtSpan::ACTIVE)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn run(command: Commands) -> DocsResult<()> {
    match command {
        Commands::Write { release, title, body, location, dry_run, json } => {
            let config = location.resolve()?;
            let notes = FileNotes::new(title, body);
            write_cmd::run(&release, &notes, &config, dry_run, json).map(|_| ())
        }
        Commands::Index { release, location, dry_run, json } => {
            let config = location.resolve()?;
            index_cmd::run(&release, &config, dry_run, json).map(|_| ())
        }
        Commands::Check { location } => check_cmd::run(&location.resolve()?),
    }
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
