//! Error types for the mail-corpus crate.
//!
//! This module defines semantic error enums for template loading, message
//! generation, and corpus output, following the project's error handling
//! conventions with `thiserror`.

use std::path::PathBuf;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a template file.
///
/// These errors cover file I/O and JSON parsing failures. Callers that want
/// the lenient load path should use [`crate::TemplateSet::load_or_empty`],
/// which downgrades both variants to a diagnostic and an empty set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The template file could not be read.
    #[error("failed to read template file at '{path}': {message}")]
    Io {
        /// Path to the template file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The template JSON is malformed or missing required fields.
    #[error("invalid template JSON: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
    },
}

/// Errors that can occur during message generation.
///
/// Pattern errors indicate a corrupt or incompatible template file and are
/// fatal for the run; they are never silently skipped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    /// The template set contains no templates to select from.
    #[error("template set contains no templates to select from")]
    NoTemplates,

    /// A pattern references a placeholder the field generator does not
    /// support.
    #[error("unsupported placeholder '{{{name}}}' in template pattern")]
    UnknownPlaceholder {
        /// The unsupported placeholder name.
        name: String,
    },

    /// A pattern opens a placeholder that is never closed.
    #[error("unterminated placeholder in template pattern '{pattern}'")]
    UnterminatedPlaceholder {
        /// The offending pattern text.
        pattern: String,
    },

    /// A pattern contains a closing brace with no matching opener.
    #[error("stray '}}' in template pattern '{pattern}'")]
    StrayBrace {
        /// The offending pattern text.
        pattern: String,
    },

    /// The typo probability is outside the unit interval.
    #[error("typo probability must be within [0, 1], got {value}")]
    InvalidTypoProbability {
        /// The rejected probability value.
        value: f64,
    },
}

/// Errors that can occur while writing corpus files.
///
/// Write failures are fatal; partial output is not rolled back, but
/// individual files are never left partially written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteError {
    /// The category directory could not be created.
    #[error("failed to create output directory '{path}': {message}")]
    CreateDir {
        /// Path of the directory that could not be created.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The category directory could not be opened.
    #[error("failed to open output directory '{path}': {message}")]
    OpenDir {
        /// Path of the directory that could not be opened.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// A message file could not be written.
    #[error("failed to write corpus file '{path}': {message}")]
    Write {
        /// Path of the file that could not be written.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
}
