//! # chatlab
//!
//! A Rust library for converting WeChat conversations into the ChatLab
//! exchange format, a versioned JSON envelope consumed by chat-analysis
//! tools.
//!
//! ## Overview
//!
//! A conversion takes the messages of one conversation plus its identifier
//! and display name, and produces an [`Envelope`](core::Envelope):
//!
//! - a header with format version, export time and generator label
//! - conversation metadata (private or group, inferred from the identifier)
//! - one member per distinct sender
//! - one export message per source message, in input order
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatlab::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let messages = parse_file("room.json".as_ref())?;
//!
//!     let config = ExportConfig::new().with_locale(Locale::Chinese);
//!     let mut envelope = build_envelope_with(&messages, "12345@chatroom", "Team", &config);
//!     envelope.sort_members();
//!
//!     write_json(&envelope, "chatlab.json", true)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`message`] - Source message model ([`SourceMessage`], [`MessageBody`](message::MessageBody))
//! - [`parser`] - Reading source message dumps
//! - [`config`] - Export options ([`ExportConfig`](config::ExportConfig), [`Locale`](config::Locale))
//! - [`core`] - Conversion
//!   - [`core::extract`] - Type mapping and content extraction
//!   - [`core::scope`] - Group detection
//!   - [`core::roster`] - Participant aggregation
//!   - [`core::builder`] - Envelope assembly
//!   - [`core::output`] - JSON writer
//! - [`error`] - Error types ([`ChatlabError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod message;
pub mod parser;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlabError, Result};
pub use message::SourceMessage;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlab::prelude::*;
/// ```
pub mod prelude {
    // Source side
    pub use crate::SourceMessage;
    pub use crate::message::{Contents, MessageBody, ShareBody};
    pub use crate::parser::{parse_file, parse_str};

    // Error types
    pub use crate::error::{ChatlabError, Result};

    // Configuration
    pub use crate::config::{ExportConfig, Locale};

    // Conversion
    pub use crate::core::{EnvelopeBuilder, build_envelope, build_envelope_with};

    // Envelope model
    pub use crate::core::models::{ChatType, Envelope, ExportKind, ExportMessage, Member};

    // Output
    pub use crate::core::output::{to_json, write_json};
}
