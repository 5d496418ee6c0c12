//! JSON output writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::models::Envelope;
use crate::error::Result;

/// Writes an envelope to a JSON file.
///
/// # Format
/// ```json
/// {
///   "chatlab": {"version": "0.0.1", "exportedAt": 1718452800, "generator": "Chatlog"},
///   "meta": {"name": "Alice", "platform": "wechat", "type": "private"},
///   "members": [...],
///   "messages": [...]
/// }
/// ```
pub fn write_json(envelope: &Envelope, output_path: impl AsRef<Path>, pretty: bool) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, envelope)?;
    } else {
        serde_json::to_writer(&mut writer, envelope)?;
    }
    writer.flush()?;
    Ok(())
}

/// Converts an envelope to a JSON string.
///
/// Same format as `write_json`, but returns a String instead of writing to file.
pub fn to_json(envelope: &Envelope, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(envelope)?
    } else {
        serde_json::to_string(envelope)?
    };
    Ok(json)
}
