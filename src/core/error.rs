//! Error handling for cvgen
//!
//! The error system has two layers:
//! - [`CvgenError`] - enumerated error types for every failure the
//!   generator can hit on its own (bad data file, missing entry field,
//!   compiler produced nothing, ...)
//! - [`ErrorContext`] - a wrapper that adds a user-facing suggestion and
//!   details, displayed with terminal colors by `main`
//!
//! Every error is fatal: the run aborts immediately and any partially
//! written output file must be treated as invalid and regenerated. There
//! are no retries anywhere.
//!
//! Common foreign errors are mapped by [`user_friendly_error`]:
//! [`serde_json::Error`] becomes [`CvgenError::DataFormat`] and the usual
//! [`std::io::Error`] kinds get targeted suggestions.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for cvgen operations.
///
/// Variants carry enough context (file path, section name, entry index)
/// for the message alone to identify what went wrong, since no error here
/// is ever recovered from.
#[derive(Error, Debug, Clone)]
pub enum CvgenError {
    /// The data file is not well-formed JSON, or a section has the wrong
    /// shape (e.g. an object where a list of entries is expected).
    #[error("Malformed data in {what}: {reason}")]
    DataFormat {
        /// The data file path or section that failed to parse
        what: String,
        /// Parser-supplied reason for the failure
        reason: String,
    },

    /// A required field is absent (or mistyped) on one entry.
    ///
    /// Raised lazily while rendering, before any output is emitted for
    /// the offending entry. `index` is the entry's zero-based position
    /// within its section.
    #[error("Invalid entry {index} in section '{section}': {reason}")]
    MissingField {
        /// Section the entry belongs to (e.g. "papers")
        section: String,
        /// Zero-based position of the entry within the section
        index: usize,
        /// What was missing or mistyped
        reason: String,
    },

    /// A template references a section the data file does not contain.
    #[error("Data file has no '{section}' section but the template references it")]
    SectionMissing {
        /// The section key looked up in the data file
        section: String,
    },

    /// pdflatex finished but the expected PDF was never produced.
    ///
    /// Covers both a nonzero exit and a silent failure; success is judged
    /// solely by the artifact's presence.
    #[error("pdflatex did not produce the expected artifact: {artifact}")]
    Compilation {
        /// Path where the PDF was expected to appear
        artifact: String,
    },

    /// pdflatex executable is not available
    #[error("pdflatex is not installed or not found in PATH")]
    PdflatexNotFound,

    /// File system operation failed
    #[error("File system error during {operation}: {path}")]
    FileSystem {
        /// The operation that failed (e.g. "read", "write", "copy")
        operation: String,
        /// The path involved
        path: String,
    },

    /// Generic error wrapper for cases not covered by other variants
    #[error("{message}")]
    Other {
        /// The error message
        message: String,
    },
}

/// Wrapper that pairs a [`CvgenError`] with a user-facing suggestion and
/// optional details.
///
/// Displayed to stderr by `main` with color coding: the error in red, the
/// details in yellow, the suggestion in green.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: CvgenError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: CvgenError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add an actionable suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into a user-friendly [`ErrorContext`].
///
/// Known [`CvgenError`] variants get targeted suggestions; common
/// [`std::io::Error`] kinds and [`serde_json::Error`] are translated into
/// the closest [`CvgenError`]; everything else falls back to a generic
/// message.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(cvgen_error) = error.downcast_ref::<CvgenError>() {
        return create_error_context(cvgen_error.clone());
    }

    if let Some(json_error) = error.downcast_ref::<serde_json::Error>() {
        return ErrorContext::new(CvgenError::DataFormat {
            what: "data file".to_string(),
            reason: json_error.to_string(),
        })
        .with_suggestion("Check the JSON syntax: quotes, commas, and brackets must balance")
        .with_details("The data file could not be parsed as JSON");
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(CvgenError::FileSystem {
                    operation: "read".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion(
                    "Check that the project root contains the data file and templates, \
                     or pass --root to point at the right directory",
                );
            }
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(CvgenError::FileSystem {
                    operation: "write".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check file ownership and permissions on the output directory");
            }
            _ => {}
        }
    }

    ErrorContext::new(CvgenError::Other {
        message: error.to_string(),
    })
}

/// Attach standard suggestions and details to a known [`CvgenError`].
fn create_error_context(error: CvgenError) -> ErrorContext {
    match &error {
        CvgenError::DataFormat { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Check the JSON syntax: quotes, commas, and brackets must balance"),
        CvgenError::MissingField { section, .. } => {
            let details = format!(
                "Every entry in '{section}' must carry that section's required fields; \
                 see the data file documentation in the README"
            );
            ErrorContext::new(error.clone())
                .with_suggestion("Add the missing field to the entry in the data file")
                .with_details(details)
        }
        CvgenError::SectionMissing { section } => {
            let suggestion = format!("Add a top-level '{section}' key to the data file");
            ErrorContext::new(error.clone()).with_suggestion(suggestion)
        }
        CvgenError::Compilation { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Re-run with --verbose to see the pdflatex log")
            .with_details("pdflatex exited without writing the PDF; the .tex file likely has an error"),
        CvgenError::PdflatexNotFound => ErrorContext::new(error.clone())
            .with_suggestion(
                "Install a TeX distribution (TeX Live, MiKTeX) or use --skip-pdf to stop after cv.tex",
            ),
        _ => ErrorContext::new(error.clone()),
    }
}
