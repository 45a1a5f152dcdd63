//! File-name and label conventions shared across the pipelines.
//!
//! All paths here are relative to the project root passed on the command
//! line; no component ever changes the process working directory.

/// The single JSON data file every pipeline reads.
pub const DATA_FILE: &str = "personalData.json";

/// LaTeX template consumed by the document pipeline.
pub const CV_TEMPLATE: &str = "cv-in.tex";

/// Expanded LaTeX document written next to the template.
pub const CV_OUTPUT: &str = "cv.tex";

/// Compiled PDF artifact copied into the output directory.
pub const CV_PDF: &str = "cv.pdf";

/// HTML template consumed by the webpage pipeline.
pub const HOMEPAGE_TEMPLATE: &str = "index-in.html";

/// Expanded homepage written into the output directory.
pub const HOMEPAGE_OUTPUT: &str = "index.html";

/// Name of the external LaTeX compiler binary, resolved via PATH.
pub const PDFLATEX_BIN: &str = "pdflatex";

/// Label substituted for the patent number of a pending patent in the CV.
pub const PENDING_PATENT_LABEL: &str = "(pending)";
