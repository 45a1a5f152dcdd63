//! cvgen - CV and homepage generator
//!
//! cvgen reads structured personal/career data (education, experience,
//! publications, patents, skills, and more) from a single JSON file and
//! substitutes it into placeholder markers inside two templates, producing
//! a compiled CV and a personal homepage.
//!
//! # Architecture Overview
//!
//! There are two independent pipelines built from the same parts:
//!
//! - **Document pipeline** (`cvgen cv`): expands `cv-in.tex` into `cv.tex`
//!   and compiles it to `cv.pdf` with an external `pdflatex` process.
//! - **Webpage pipeline** (`cvgen homepage`): expands `index-in.html` into
//!   `index.html`. No compile step; the expanded file is the artifact.
//!
//! Each pipeline is a single linear pass:
//!
//! 1. [`data`] loads `personalData.json` into an immutable record store.
//! 2. [`render`] turns each section's entries into output-format lines
//!    (LaTeX `cvEvent` blocks, Bootstrap rows) with per-section rules.
//! 3. [`template`] streams the template line by line; a line whose trimmed
//!    text exactly matches a reserved marker is replaced by the rendered
//!    lines (each prefixed with the marker line's own indentation), and
//!    everything else is copied verbatim.
//! 4. [`compile`] (document pipeline only) runs `pdflatex` into a scoped
//!    temporary directory and copies the resulting PDF out.
//!
//! Runs are fully sequential and self-contained: no state persists across
//! runs, and re-running on identical inputs regenerates identical output
//! (aside from timestamps pdflatex embeds on its own).
//!
//! # Core Modules
//!
//! - [`cli`] - Command-line interface (`cv`, `homepage`, `build`)
//! - [`core`] - Error types and user-facing error reporting
//! - [`data`] - Data file loading and lazily-typed section entries
//! - [`render`] - Per-section formatting rules for both output formats
//! - [`template`] - Placeholder classification and single-pass expansion
//! - [`compile`] - pdflatex invocation and artifact collection

pub mod cli;
pub mod compile;
pub mod constants;
pub mod core;
pub mod data;
pub mod render;
pub mod template;
pub mod utils;
