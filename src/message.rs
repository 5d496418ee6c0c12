//! Source message types.
//!
//! This module provides [`SourceMessage`], the read-only input of a
//! conversion. Messages arrive from the store layer as [`RawMessage`] values:
//! a primary type code, an optional sub-type code and an open-ended map of
//! content attributes ([`Contents`]). On the way in, each raw message is
//! classified into a typed [`MessageBody`], so everything downstream matches
//! on variants instead of probing map keys.
//!
//! # Examples
//!
//! ## Building messages directly
//!
//! ```
//! use chatlab::message::{MessageBody, SourceMessage};
//! use chrono::{TimeZone, Utc};
//!
//! let time = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
//! let msg = SourceMessage::text("wxid_alice", "Alice", time, "Hello!");
//! assert_eq!(msg.body, MessageBody::Text);
//! assert_eq!(msg.timestamp(), time.timestamp());
//! ```
//!
//! ## Classifying a raw message
//!
//! ```
//! use chatlab::message::{MessageBody, RawMessage, SourceMessage};
//!
//! let raw: RawMessage = serde_json::from_str(r#"{
//!     "sender": "wxid_bob",
//!     "senderName": "Bob",
//!     "time": "2024-06-15T20:00:00+08:00",
//!     "type": 3,
//!     "contents": {"md5": "d41d8cd98f00b204e9800998ecf8427e", "extra": 42}
//! }"#)?;
//!
//! let msg = SourceMessage::from(raw);
//! assert_eq!(
//!     msg.body,
//!     MessageBody::Image { path: None, md5: Some("d41d8cd98f00b204e9800998ecf8427e".into()) }
//! );
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Primary type codes used by the source store.
pub mod kind {
    pub const TEXT: i64 = 1;
    pub const IMAGE: i64 = 3;
    pub const VOICE: i64 = 34;
    pub const CARD: i64 = 42;
    pub const VIDEO: i64 = 43;
    pub const ANIMATION: i64 = 47;
    pub const LOCATION: i64 = 48;
    pub const SHARE: i64 = 49;
    pub const VOIP: i64 = 50;
    pub const SYSTEM: i64 = 10000;
}

/// Sub-type codes for [`kind::SHARE`] messages.
pub mod share_kind {
    pub const MUSIC: i64 = 3;
    pub const LINK2: i64 = 4;
    pub const LINK: i64 = 5;
    pub const FILE: i64 = 6;
    pub const MERGE_FORWARD: i64 = 19;
    pub const NOTE: i64 = 24;
    pub const MINI_PROGRAM: i64 = 33;
    pub const MINI_PROGRAM2: i64 = 36;
    pub const QUOTE: i64 = 57;
    pub const PAT: i64 = 62;
    pub const CHAT_ROOM_NOTICE: i64 = 87;
    pub const PAY: i64 = 2000;
    pub const RED_ENVELOPE: i64 = 2001;
    pub const RED_ENVELOPE_COVER: i64 = 2003;
}

/// Untyped content attributes attached to a raw message.
///
/// Values are read through [`text`](Contents::text), which only yields
/// string values. Anything else reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Contents(Map<String, Value>);

impl Contents {
    /// Creates an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to insert an attribute.
    ///
    /// ```
    /// use chatlab::message::Contents;
    ///
    /// let contents = Contents::new().with("url", "https://x.test").with("size", 12);
    /// assert_eq!(contents.text("url"), Some("https://x.test"));
    /// assert_eq!(contents.text("size"), None);
    /// ```
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Reads an attribute as a string.
    ///
    /// Returns `None` when the key is missing or holds a non-string value.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    fn owned_text(&self, key: &str) -> Option<String> {
        self.text(key).map(ToString::to_string)
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Contents {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Typed message payload, one variant per primary type.
///
/// Only the attributes the export format reads are kept. A string attribute
/// that was present but empty is kept as `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    Text,
    Image {
        path: Option<String>,
        md5: Option<String>,
    },
    Voice,
    Video,
    /// Animated sticker.
    Sticker { cdn_url: Option<String> },
    Location { label: Option<String> },
    /// Contact card.
    Card,
    /// Voice or video call record.
    Call,
    System,
    Share(ShareBody),
    /// Primary type this crate does not recognize.
    Unknown { kind: i64 },
}

impl MessageBody {
    /// Classifies a raw type code, sub-type code and attribute map.
    ///
    /// Never fails: unrecognized codes become [`MessageBody::Unknown`] or
    /// [`ShareBody::Other`].
    pub fn classify(code: i64, sub_code: Option<i64>, contents: &Contents) -> Self {
        match code {
            kind::TEXT => MessageBody::Text,
            kind::IMAGE => MessageBody::Image {
                path: contents.owned_text("path"),
                md5: contents.owned_text("md5"),
            },
            kind::VOICE => MessageBody::Voice,
            kind::VIDEO => MessageBody::Video,
            kind::ANIMATION => MessageBody::Sticker {
                cdn_url: contents.owned_text("cdnurl"),
            },
            kind::LOCATION => MessageBody::Location {
                label: contents.owned_text("label"),
            },
            kind::CARD => MessageBody::Card,
            kind::VOIP => MessageBody::Call,
            kind::SYSTEM => MessageBody::System,
            kind::SHARE => MessageBody::Share(ShareBody::classify(sub_code, contents)),
            other => MessageBody::Unknown { kind: other },
        }
    }
}

/// Payload of a share message, one variant per sub-type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareBody {
    File { title: Option<String> },
    /// Covers both link sub-types.
    Link { url: Option<String> },
    /// Merged chat history, notes and room notices.
    Forward { title: Option<String> },
    MiniProgram { title: Option<String> },
    Quote,
    Pat,
    Music { url: Option<String> },
    Transfer,
    /// Red envelope or red-envelope cover.
    RedPacket,
    /// Sub-type this crate does not recognize, or none at all.
    Other { sub_kind: Option<i64> },
}

impl ShareBody {
    /// Classifies a share sub-type code.
    pub fn classify(sub_code: Option<i64>, contents: &Contents) -> Self {
        match sub_code {
            Some(share_kind::FILE) => ShareBody::File {
                title: contents.owned_text("title"),
            },
            Some(share_kind::LINK | share_kind::LINK2) => ShareBody::Link {
                url: contents.owned_text("url"),
            },
            Some(share_kind::MERGE_FORWARD | share_kind::NOTE | share_kind::CHAT_ROOM_NOTICE) => {
                ShareBody::Forward {
                    title: contents.owned_text("title"),
                }
            }
            Some(share_kind::MINI_PROGRAM | share_kind::MINI_PROGRAM2) => ShareBody::MiniProgram {
                title: contents.owned_text("title"),
            },
            Some(share_kind::QUOTE) => ShareBody::Quote,
            Some(share_kind::PAT) => ShareBody::Pat,
            Some(share_kind::MUSIC) => ShareBody::Music {
                url: contents.owned_text("url"),
            },
            Some(share_kind::PAY) => ShareBody::Transfer,
            Some(share_kind::RED_ENVELOPE | share_kind::RED_ENVELOPE_COVER) => ShareBody::RedPacket,
            other => ShareBody::Other { sub_kind: other },
        }
    }
}

/// A chat message as handed over by the store layer.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `sender` | `String` | Platform identifier of the author |
/// | `sender_name` | `String` | Display name, may be empty |
/// | `is_self` | `bool` | Authored by the account owner |
/// | `time` | `DateTime<Utc>` | When the message was sent |
/// | `content` | `String` | Original text content |
/// | `body` | [`MessageBody`] | Typed payload |
#[derive(Debug, Clone, PartialEq)]
pub struct SourceMessage {
    pub sender: String,
    pub sender_name: String,
    pub is_self: bool,
    pub time: DateTime<Utc>,
    pub content: String,
    pub body: MessageBody,
}

impl SourceMessage {
    /// Creates a message with the given payload and empty content.
    pub fn new(
        sender: impl Into<String>,
        sender_name: impl Into<String>,
        time: DateTime<Utc>,
        body: MessageBody,
    ) -> Self {
        Self {
            sender: sender.into(),
            sender_name: sender_name.into(),
            is_self: false,
            time,
            content: String::new(),
            body,
        }
    }

    /// Creates a plain text message.
    pub fn text(
        sender: impl Into<String>,
        sender_name: impl Into<String>,
        time: DateTime<Utc>,
        content: impl Into<String>,
    ) -> Self {
        Self::new(sender, sender_name, time, MessageBody::Text).with_content(content)
    }

    /// Builder method to set the original text content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Builder method to mark the message as authored by the account owner.
    #[must_use]
    pub fn mark_self(mut self) -> Self {
        self.is_self = true;
        self
    }

    /// Returns the send time as Unix epoch seconds.
    pub fn timestamp(&self) -> i64 {
        self.time.timestamp()
    }
}

impl From<RawMessage> for SourceMessage {
    fn from(raw: RawMessage) -> Self {
        let body = MessageBody::classify(raw.kind, raw.sub_type, &raw.contents);
        Self {
            sender: raw.sender,
            sender_name: raw.sender_name,
            is_self: raw.is_self,
            time: raw.time,
            content: raw.content,
            body,
        }
    }
}

/// Wire form of a source message, as dumped by the store layer.
///
/// ```json
/// {
///   "sender": "wxid_alice",
///   "senderName": "Alice",
///   "isSelf": false,
///   "time": "2024-06-15T20:00:00+08:00",
///   "type": 49,
///   "subType": 5,
///   "content": "",
///   "contents": {"url": "https://x.test", "title": "X"}
/// }
/// ```
///
/// Everything except `time` may be missing or `null`. A missing `type`
/// reads as 0, which no known type uses, so the message exports as other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMessage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sender: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sender_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_self: bool,
    pub time: DateTime<Utc>,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contents: Contents,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
