//! Single-pass template expansion.
//!
//! A template is an ordered sequence of text lines. A line is a
//! placeholder iff its trimmed content exactly equals one of the markers
//! in the pipeline's closed vocabulary; every other line is literal and
//! is copied through verbatim, whitespace included. Marker-like text that
//! does not match exactly (a typo, a partial marker) is deliberately
//! treated as literal rather than an error, so it can never vanish
//! silently from the output.
//!
//! Substituted lines inherit the placeholder line's own leading
//! whitespace, which keeps the expanded markup aligned with the
//! surrounding template. A marker may appear any number of times; each
//! occurrence independently substitutes the full fragment sequence.
//!
//! The expander is generic over the section tag so each pipeline brings
//! its own vocabulary (`render::tex::MARKERS`, `render::html::MARKERS`)
//! and rendering function.

use tracing::{debug, trace};

use crate::core::CvgenError;

/// Classification of one template line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateLine<'a, S> {
    /// Copied through unchanged, original whitespace included.
    Literal(&'a str),
    /// Replaced wholesale by the section's rendered lines.
    Placeholder {
        /// Which section's fragments to substitute
        section: S,
        /// Leading whitespace of the marker line, prefixed to every
        /// substituted line
        indent: &'a str,
    },
}

/// Classify a single line against a marker vocabulary.
pub fn classify<'a, S: Copy>(
    line: &'a str,
    markers: &[(&str, S)],
) -> TemplateLine<'a, S> {
    let trimmed = line.trim();
    for (marker, section) in markers {
        if trimmed == *marker {
            let indent = &line[..line.len() - line.trim_start().len()];
            return TemplateLine::Placeholder {
                section: *section,
                indent,
            };
        }
    }
    TemplateLine::Literal(line)
}

/// Expand a template in one forward pass.
///
/// `render` is invoked once per placeholder occurrence and must return
/// the full ordered line sequence for that section. Any render error
/// aborts the expansion; partial output is never returned.
pub fn expand<S, F>(
    template: &str,
    markers: &[(&str, S)],
    mut render: F,
) -> Result<String, CvgenError>
where
    S: Copy + std::fmt::Debug,
    F: FnMut(S) -> Result<Vec<String>, CvgenError>,
{
    let mut output = String::new();
    let mut substitutions = 0usize;

    for line in template.lines() {
        match classify(line, markers) {
            TemplateLine::Literal(text) => {
                output.push_str(text);
                output.push('\n');
            }
            TemplateLine::Placeholder { section, indent } => {
                let fragment_lines = render(section)?;
                trace!(
                    ?section,
                    lines = fragment_lines.len(),
                    "substituting placeholder"
                );
                for fragment_line in &fragment_lines {
                    output.push_str(indent);
                    output.push_str(fragment_line);
                    output.push('\n');
                }
                substitutions += 1;
            }
        }
    }

    debug!(substitutions, "template expanded");
    Ok(output)
}
