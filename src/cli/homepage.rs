//! The `homepage` command: the webpage pipeline.
//!
//! Reads `personalData.json` and `index-in.html` from the project root
//! and writes the expanded `index.html` into the output directory. There
//! is no finalizer here; the expanded file is the artifact.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tracing::info;

use crate::constants::{DATA_FILE, HOMEPAGE_OUTPUT, HOMEPAGE_TEMPLATE};
use crate::data::RecordStore;
use crate::render::html;
use crate::template;
use crate::utils::fs;

/// Command to generate the homepage.
#[derive(Args)]
pub struct HomepageCommand {
    /// Directory containing personalData.json and index-in.html
    #[arg(long, default_value = ".")]
    pub(crate) root: PathBuf,

    /// Directory receiving index.html (defaults to the parent of --root)
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
}

impl HomepageCommand {
    /// Run the webpage pipeline.
    pub async fn execute(self) -> Result<()> {
        let store = RecordStore::load(&self.root.join(DATA_FILE))?;
        let template_text = fs::read_text(&self.root.join(HOMEPAGE_TEMPLATE))?;

        let expanded = template::expand(&template_text, html::MARKERS, |section| {
            html::render_section(section, &store)
        })?;

        let output_dir = self
            .output_dir
            .clone()
            .unwrap_or_else(|| self.root.join(".."));
        fs::ensure_dir(&output_dir)?;

        let html_path = output_dir.join(HOMEPAGE_OUTPUT);
        fs::write_text(&html_path, &expanded)?;
        info!("wrote {}", html_path.display());
        println!("{} {}", "Generated".green().bold(), html_path.display());

        Ok(())
    }
}
