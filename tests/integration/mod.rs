//! Integration test suite for cvgen
//!
//! Drives the compiled binary over throwaway fixture projects and checks
//! the generated artifacts byte by byte where it matters.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! Organization:
//! - **cv**: document pipeline up to `cv.tex` (pdflatex is not assumed
//!   to be installed on test machines)
//! - **homepage**: webpage pipeline end to end
//! - **errors**: data-file failures and their exit behavior

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod cv;
mod errors;
mod homepage;
