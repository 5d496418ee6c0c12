//! Reading source messages from JSON dumps.
//!
//! The store layer dumps a conversation either as a bare array of raw
//! messages or as an object carrying them under `messages`:
//!
//! ```json
//! [{"sender": "wxid_a", "senderName": "Alice", "time": "2024-01-15T10:30:00+08:00", "type": 1, "content": "Hi"}]
//! ```
//!
//! ```json
//! {"messages": [{"sender": "wxid_a", "time": "2024-01-15T10:30:00+08:00", "type": 1, "content": "Hi"}]}
//! ```
//!
//! # Example
//!
//! ```rust
//! use chatlab::parser::parse_str;
//!
//! let messages = parse_str(r#"[
//!     {"sender": "wxid_a", "senderName": "Alice", "time": "2024-01-15T10:30:00Z", "type": 1, "content": "Hi"}
//! ]"#)?;
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].content, "Hi");
//! # Ok::<(), chatlab::ChatlabError>(())
//! ```

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{ChatlabError, Result};
use crate::message::{RawMessage, SourceMessage};

/// Parses a source-message dump from a string.
pub fn parse_str(content: &str) -> Result<Vec<SourceMessage>> {
    parse_dump(content).map_err(|e| with_path(e, None))
}

/// Parses a source-message dump from a file.
pub fn parse_file(path: &Path) -> Result<Vec<SourceMessage>> {
    let content = fs::read_to_string(path)?;
    let messages = parse_dump(&content).map_err(|e| with_path(e, Some(path)))?;
    tracing::debug!(path = %path.display(), count = messages.len(), "parsed source messages");
    Ok(messages)
}

fn parse_dump(content: &str) -> Result<Vec<SourceMessage>> {
    let value: Value = serde_json::from_str(content).map_err(|e| ChatlabError::source_parse(e, None))?;

    let list = match value {
        Value::Array(_) => value,
        Value::Object(mut obj) => match obj.remove("messages") {
            Some(list @ Value::Array(_)) => list,
            _ => {
                return Err(ChatlabError::invalid_format(
                    "source messages",
                    "object is missing a \"messages\" array",
                ));
            }
        },
        _ => {
            return Err(ChatlabError::invalid_format(
                "source messages",
                "expected an array of messages or an object with a \"messages\" array",
            ));
        }
    };

    let raw: Vec<RawMessage> =
        serde_json::from_value(list).map_err(|e| ChatlabError::source_parse(e, None))?;
    Ok(raw.into_iter().map(SourceMessage::from).collect())
}

fn with_path(err: ChatlabError, path: Option<&Path>) -> ChatlabError {
    match err {
        ChatlabError::Parse { source, .. } => ChatlabError::source_parse(source, path.map(Path::to_path_buf)),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{MessageBody, ShareBody};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_array() {
        let messages = parse_str(
            r#"[
                {"sender": "wxid_a", "senderName": "Alice", "time": "2024-01-15T10:30:00Z", "type": 1, "content": "Hi"},
                {"sender": "wxid_b", "time": "2024-01-15T10:31:00Z", "type": 49, "subType": 5, "contents": {"url": "https://x.test"}}
            ]"#,
        )
        .unwrap();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender_name, "Alice");
        assert_eq!(
            messages[1].body,
            MessageBody::Share(ShareBody::Link {
                url: Some("https://x.test".into())
            })
        );
    }

    #[test]
    fn test_parse_wrapped() {
        let messages = parse_str(
            r#"{"talker": "wxid_a", "messages": [{"time": "2024-01-15T10:30:00Z", "type": 34}]}"#,
        )
        .unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].body, MessageBody::Voice);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_str("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_str("not json").unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_parse_wrong_shape() {
        assert!(parse_str(r#"{"items": []}"#).unwrap_err().is_invalid_format());
        assert!(parse_str("42").unwrap_err().is_invalid_format());
    }

    #[test]
    fn test_parse_missing_type_is_unknown() {
        let messages = parse_str(
            r#"[
                {"sender": "a", "time": "2024-01-15T10:30:00Z", "content": "x"},
                {"sender": "b", "time": "2024-01-15T10:31:00Z", "type": null, "content": "y"},
                {"sender": "c", "time": "2024-01-15T10:32:00Z", "type": 1, "content": "z"}
            ]"#,
        )
        .unwrap();

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].body, MessageBody::Unknown { kind: 0 });
        assert_eq!(messages[0].content, "x");
        assert_eq!(messages[1].body, MessageBody::Unknown { kind: 0 });
        assert_eq!(messages[2].body, MessageBody::Text);
    }

    #[test]
    fn test_parse_missing_time() {
        // "time" is required
        let err = parse_str(r#"[{"type": 1}]"#).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_parse_file_reports_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[{{\"type\": 1}}]").unwrap();

        let err = parse_file(file.path()).unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_parse_file_missing() {
        let err = parse_file(Path::new("/nonexistent/chat.json")).unwrap_err();
        assert!(err.is_io());
    }
}
