//! Unified error types for chatlab.
//!
//! The conversion core never fails: every source message maps to some export
//! message. Errors only come from the surface around it, reading source
//! messages from disk and writing the finished envelope back out.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlab operations.
///
/// # Example
///
/// ```rust
/// use chatlab::error::Result;
/// use chatlab::SourceMessage;
///
/// fn load() -> Result<Vec<SourceMessage>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlabError>;

/// The error type for all chatlab operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlabError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Failed to decode source messages.
    ///
    /// Contains the format being parsed, the underlying JSON error,
    /// and optionally the file path.
    #[error("Failed to parse {format}{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The format being parsed (e.g., "source messages JSON")
        format: &'static str,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// JSON serialization error while encoding an envelope.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A user-supplied value doesn't match any known option.
    ///
    /// Raised for unknown locale names and similar.
    #[error("Invalid {format}: {message}")]
    InvalidFormat {
        /// What kind of value was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlabError {
    /// Creates a parse error for a source-message dump.
    pub fn source_parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        ChatlabError::Parse {
            format: "source messages JSON",
            source,
            path,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlabError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlabError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatlabError::Parse { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlabError::InvalidFormat { .. })
    }
}
