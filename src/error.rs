//! Error types for prompt document parsing and formatting.
//!
//! Uses thiserror for derive macros. Parsing is deliberately lenient about
//! structural absence (a missing tag or missing frontmatter yields an absent
//! value, not an error); these variants cover accessor misuse, strict
//! substitution, malformed metadata, and file I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for promptfile operations.
#[derive(Error, Debug)]
pub enum PromptError {
    /// A forced accessor or formatting operation was invoked on an attribute
    /// or block that is not set. Carries the attribute/block name.
    #[error("required attribute '{0}' is not set")]
    MissingRequiredAttribute(String),

    /// Indexed access to a name that is neither a known attribute nor a
    /// previously supplied extra field.
    #[error("unknown attribute '{0}'")]
    UnknownAttribute(String),

    /// Strict substitution found a placeholder with no supplied value.
    /// Never raised in non-strict (partial) mode.
    #[error("no value supplied for placeholder '{0}'")]
    MissingPlaceholder(String),

    /// A metadata value failed to parse, or a structured value had an
    /// incompatible shape.
    #[error("malformed value: {0}")]
    MalformedValue(String),

    /// Reading a prompt file from disk failed.
    #[error("failed to read prompt file '{}': {source}", path.display())]
    Io {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Result type alias for promptfile operations.
pub type Result<T> = std::result::Result<T, PromptError>;
