//! Command-line interface for cvgen.
//!
//! Three subcommands, one per pipeline plus a combined run:
//!
//! - `cv` - expand the LaTeX template and compile the PDF
//! - `homepage` - expand the HTML template
//! - `build` - run both pipelines in sequence
//!
//! Every command takes its paths explicitly (`--root`, `--output-dir`);
//! nothing here or below ever changes the process working directory.
//! Global `--verbose`/`--quiet` flags drive the tracing filter.

pub mod build;
pub mod cv;
pub mod homepage;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

pub use build::BuildCommand;
pub use cv::CvCommand;
pub use homepage::HomepageCommand;

/// Runtime configuration derived from global CLI flags.
///
/// Kept separate from [`Cli`] so tests can inject a configuration without
/// going through argument parsing.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log level for the tracing filter; `None` silences logging entirely.
    pub log_level: Option<String>,
}

impl CliConfig {
    /// Install the global tracing subscriber.
    ///
    /// An explicit `RUST_LOG` in the environment wins over the CLI flags;
    /// repeated initialization (tests) is ignored.
    pub fn init_logging(&self) {
        let filter = match &self.log_level {
            Some(level) => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(level.clone())),
            None => EnvFilter::new("off"),
        };
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}

/// Main CLI application structure for cvgen.
#[derive(Parser)]
#[command(
    name = "cvgen",
    about = "Generate a CV and homepage from a JSON data file",
    version,
    long_about = "cvgen expands placeholder markers in a LaTeX template and an HTML template \
                  from a single personalData.json, compiling the former to PDF with pdflatex."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (pdflatex log, substitution details)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate cv.tex from cv-in.tex and compile cv.pdf
    Cv(CvCommand),
    /// Generate index.html from index-in.html
    Homepage(HomepageCommand),
    /// Run both pipelines
    Build(BuildCommand),
}

impl Cli {
    /// Execute the parsed command.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Translate global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some("info".to_string())
        };

        CliConfig { log_level }
    }

    /// Execute with an injected configuration (used by tests).
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();

        match self.command {
            Commands::Cv(cmd) => cmd.execute().await,
            Commands::Homepage(cmd) => cmd.execute().await,
            Commands::Build(cmd) => cmd.execute().await,
        }
    }
}
