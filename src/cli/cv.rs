//! The `cv` command: the document pipeline.
//!
//! Reads `personalData.json` and `cv-in.tex` from the project root,
//! writes the expanded `cv.tex` next to the template (prefixed with a
//! generated-file banner), then compiles it with pdflatex and copies
//! `cv.pdf` into the output directory. `--skip-pdf` stops after writing
//! `cv.tex`, which is useful on machines without a TeX distribution.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tracing::info;

use crate::compile;
use crate::constants::{CV_OUTPUT, CV_PDF, CV_TEMPLATE, DATA_FILE};
use crate::data::RecordStore;
use crate::render::tex;
use crate::template;
use crate::utils::fs;

/// Command to generate and compile the CV.
#[derive(Args)]
pub struct CvCommand {
    /// Directory containing personalData.json and cv-in.tex
    #[arg(long, default_value = ".")]
    pub(crate) root: PathBuf,

    /// Directory receiving cv.pdf (defaults to the parent of --root)
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,

    /// Stop after writing cv.tex; do not run pdflatex
    #[arg(long)]
    pub(crate) skip_pdf: bool,
}

impl CvCommand {
    /// Run the document pipeline end to end.
    pub async fn execute(self) -> Result<()> {
        let store = RecordStore::load(&self.root.join(DATA_FILE))?;
        let template_text = fs::read_text(&self.root.join(CV_TEMPLATE))?;

        let expanded = template::expand(&template_text, tex::MARKERS, |section| {
            tex::render_section(section, &store)
        })?;

        let mut document = tex::banner();
        document.push_str(&expanded);

        let tex_path = self.root.join(CV_OUTPUT);
        fs::write_text(&tex_path, &document)?;
        info!("wrote {}", tex_path.display());
        println!("{} {}", "Generated".green().bold(), tex_path.display());

        if self.skip_pdf {
            return Ok(());
        }

        let output_dir = self
            .output_dir
            .clone()
            .unwrap_or_else(|| self.root.join(".."));
        fs::ensure_dir(&output_dir)?;

        let pdf_path = output_dir.join(CV_PDF);
        compile::compile_pdf(&tex_path, &pdf_path).await?;
        println!("{} {}", "Compiled".green().bold(), pdf_path.display());

        Ok(())
    }
}
