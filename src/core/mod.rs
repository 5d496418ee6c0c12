//! Core conversion logic for chatlab.
//!
//! This module contains:
//! - [`models`] - Export envelope data structures
//! - [`extract`] - Message classification and content extraction
//! - [`scope`] - Private/group inference from the conversation id
//! - [`roster`] - Participant aggregation
//! - [`builder`] - Envelope assembly
//! - [`output`] - JSON writer
//!
//! # Quick Start
//!
//! ```rust
//! use chatlab::core::{EnvelopeBuilder, to_json};
//! use chatlab::SourceMessage;
//! use chrono::Utc;
//!
//! let mut builder = EnvelopeBuilder::new("wxid_alice", "Alice");
//! builder.push(&SourceMessage::text("wxid_alice", "Alice", Utc::now(), "Hi"));
//! let json = to_json(&builder.finish(), false).unwrap();
//! assert!(json.contains(r#""type":"private""#));
//! ```

pub mod builder;
pub mod extract;
pub mod models;
pub mod output;
pub mod roster;
pub mod scope;

// Re-export main types for convenience
pub use builder::{EnvelopeBuilder, build_envelope, build_envelope_with};
pub use extract::{display_name, extract};
pub use models::{ChatType, Envelope, ExportKind, ExportMessage, Header, Member, Meta};
pub use output::{to_json, write_json};
pub use roster::Roster;
pub use scope::Scope;
