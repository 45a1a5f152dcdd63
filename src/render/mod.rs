//! Per-section rendering rules.
//!
//! A renderer is a pure function from (section, entries, roster) to an
//! ordered sequence of output lines. The two output formats each define a
//! closed section enum and a marker vocabulary consumed by the template
//! expander:
//!
//! - [`tex`] - LaTeX fragments for the document pipeline
//! - [`html`] - Bootstrap-flavored HTML for the webpage pipeline
//! - [`authors`] - author-list formatting shared by both

pub mod authors;
pub mod html;
pub mod tex;
