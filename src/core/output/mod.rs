//! Output writers.
//!
//! - [`write_json`] / [`to_json`] - the envelope as a single JSON document
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> chatlab::Result<()> {
//! use chatlab::core::builder::build_envelope;
//! use chatlab::core::output::{to_json, write_json};
//!
//! let envelope = build_envelope(&[], "wxid_alice", "Alice");
//!
//! // Write to a file
//! write_json(&envelope, "chatlab.json", true)?;
//!
//! // Or get as a string
//! let json = to_json(&envelope, false)?;
//! # Ok(())
//! # }
//! ```

mod json_writer;

pub use json_writer::{to_json, write_json};
