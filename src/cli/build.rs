//! The `build` command: both pipelines in sequence.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::{CvCommand, HomepageCommand};

/// Command to run the document pipeline followed by the webpage pipeline.
#[derive(Args)]
pub struct BuildCommand {
    /// Directory containing the data file and both templates
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Directory receiving cv.pdf and index.html (defaults to the parent of --root)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Stop the CV pipeline after writing cv.tex; do not run pdflatex
    #[arg(long)]
    skip_pdf: bool,
}

impl BuildCommand {
    /// Run both pipelines. The pipelines are independent; they share
    /// nothing but the data file, which each loads for itself.
    pub async fn execute(self) -> Result<()> {
        let cv = CvCommand {
            root: self.root.clone(),
            output_dir: self.output_dir.clone(),
            skip_pdf: self.skip_pdf,
        };
        cv.execute().await?;

        let homepage = HomepageCommand {
            root: self.root,
            output_dir: self.output_dir,
        };
        homepage.execute().await
    }
}
