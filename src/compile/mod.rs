//! LaTeX compilation: the document pipeline's artifact finalizer.
//!
//! Runs `pdflatex` as a subprocess with its intermediate output (aux,
//! log, pdf) directed into a scoped temporary directory, then copies the
//! resulting PDF to the destination. The temporary directory is cleaned
//! up on every exit path, success or not.
//!
//! Success is judged solely by the post-hoc presence of the expected
//! artifact, not the exit code: pdflatex routinely exits nonzero on
//! warnings it recovered from, and can also exit zero without producing a
//! PDF. There is no timeout and no retry; warnings are never inspected.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::process::Command;
use tracing::{debug, info};

use crate::constants::PDFLATEX_BIN;
use crate::core::CvgenError;

/// Compile `tex_file` and copy the resulting PDF to `destination`,
/// overwriting any previous artifact there.
pub async fn compile_pdf(tex_file: &Path, destination: &Path) -> Result<()> {
    let pdflatex = which::which(PDFLATEX_BIN).map_err(|_| CvgenError::PdflatexNotFound)?;

    let workdir = tempfile::tempdir()
        .context("failed to create temporary directory for pdflatex output")?;

    info!("compiling {} with {}", tex_file.display(), pdflatex.display());
    let output = Command::new(&pdflatex)
        .arg("-interaction=nonstopmode")
        .arg("-output-directory")
        .arg(workdir.path())
        .arg(tex_file)
        .stdin(Stdio::null())
        .output()
        .await
        .with_context(|| format!("failed to run {}", pdflatex.display()))?;

    debug!(status = %output.status, "pdflatex finished");
    debug!("pdflatex output:\n{}", String::from_utf8_lossy(&output.stdout));

    // By convention the PDF lands in the output directory under the same
    // base name as the input file.
    let artifact = expected_artifact(workdir.path(), tex_file)?;
    if !artifact.exists() {
        return Err(CvgenError::Compilation {
            artifact: artifact.display().to_string(),
        }
        .into());
    }

    std::fs::copy(&artifact, destination).map_err(|_| CvgenError::FileSystem {
        operation: "copy".to_string(),
        path: destination.display().to_string(),
    })?;

    Ok(())
}

/// Where the PDF for `tex_file` is expected to appear inside `dir`.
fn expected_artifact(dir: &Path, tex_file: &Path) -> Result<PathBuf, CvgenError> {
    let stem = tex_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| CvgenError::FileSystem {
            operation: "resolve".to_string(),
            path: tex_file.display().to_string(),
        })?;
    Ok(dir.join(format!("{stem}.pdf")))
}
