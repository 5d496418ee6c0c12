//! Export envelope data structures.
//!
//! Serialized field names follow the exchange format exactly:
//!
//! ```json
//! {
//!   "chatlab": {"version": "0.0.1", "exportedAt": 1718452800, "generator": "Chatlog"},
//!   "meta": {"name": "Team", "platform": "wechat", "type": "group", "groupId": "123@chatroom"},
//!   "members": [{"platformId": "wxid_a", "accountName": "Alice", "groupNickname": "Alice"}],
//!   "messages": [{"sender": "wxid_a", "accountName": "Alice", "groupNickname": "Alice",
//!                 "timestamp": 1718452800, "type": 0, "content": "Hi"}]
//! }
//! ```
//!
//! Optional fields are omitted when absent.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Version literal of the exchange format. Consumers may branch on it.
pub const FORMAT_VERSION: &str = "0.0.1";

/// Platform literal for conversations from this source.
pub const PLATFORM: &str = "wechat";

/// Generator label written to every header.
pub const GENERATOR: &str = "Chatlog";

/// Normalized message category in the export format.
///
/// Serialized as its integer code.
///
/// ```
/// use chatlab::core::models::ExportKind;
///
/// assert_eq!(ExportKind::Link.code(), 7);
/// assert_eq!(ExportKind::from_code(80), Some(ExportKind::System));
/// assert_eq!(serde_json::to_string(&ExportKind::RedPacket).unwrap(), "20");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExportKind {
    Text,
    Image,
    Voice,
    Video,
    File,
    Emoji,
    Link,
    Location,
    RedPacket,
    Transfer,
    Poke,
    Call,
    Share,
    Reply,
    Forward,
    Contact,
    System,
    /// Recalled message. Part of the format, never produced by this crate.
    Recall,
    Other,
}

impl ExportKind {
    /// Returns all export kinds in code order.
    pub fn all() -> &'static [ExportKind] {
        &[
            ExportKind::Text,
            ExportKind::Image,
            ExportKind::Voice,
            ExportKind::Video,
            ExportKind::File,
            ExportKind::Emoji,
            ExportKind::Link,
            ExportKind::Location,
            ExportKind::RedPacket,
            ExportKind::Transfer,
            ExportKind::Poke,
            ExportKind::Call,
            ExportKind::Share,
            ExportKind::Reply,
            ExportKind::Forward,
            ExportKind::Contact,
            ExportKind::System,
            ExportKind::Recall,
            ExportKind::Other,
        ]
    }

    /// Returns the integer code used on the wire.
    pub fn code(self) -> u8 {
        match self {
            ExportKind::Text => 0,
            ExportKind::Image => 1,
            ExportKind::Voice => 2,
            ExportKind::Video => 3,
            ExportKind::File => 4,
            ExportKind::Emoji => 5,
            ExportKind::Link => 7,
            ExportKind::Location => 8,
            ExportKind::RedPacket => 20,
            ExportKind::Transfer => 21,
            ExportKind::Poke => 22,
            ExportKind::Call => 23,
            ExportKind::Share => 24,
            ExportKind::Reply => 25,
            ExportKind::Forward => 26,
            ExportKind::Contact => 27,
            ExportKind::System => 80,
            ExportKind::Recall => 81,
            ExportKind::Other => 99,
        }
    }

    /// Looks up a kind by its wire code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.code() == code)
    }
}

impl std::fmt::Display for ExportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ExportKind::Text => "text",
            ExportKind::Image => "image",
            ExportKind::Voice => "voice",
            ExportKind::Video => "video",
            ExportKind::File => "file",
            ExportKind::Emoji => "emoji",
            ExportKind::Link => "link",
            ExportKind::Location => "location",
            ExportKind::RedPacket => "red-packet",
            ExportKind::Transfer => "transfer",
            ExportKind::Poke => "poke",
            ExportKind::Call => "call",
            ExportKind::Share => "share",
            ExportKind::Reply => "reply",
            ExportKind::Forward => "forward",
            ExportKind::Contact => "contact",
            ExportKind::System => "system",
            ExportKind::Recall => "recall",
            ExportKind::Other => "other",
        };
        f.write_str(name)
    }
}

impl Serialize for ExportKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for ExportKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        ExportKind::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown message type code {code}")))
    }
}

/// Conversation kind written to the metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatType {
    /// One-to-one conversation
    #[default]
    Private,
    /// Multi-party conversation
    Group,
}

impl std::fmt::Display for ChatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatType::Private => write!(f, "private"),
            ChatType::Group => write!(f, "group"),
        }
    }
}

/// Root of an export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "chatlab")]
    pub header: Header,
    pub meta: Meta,
    pub members: Vec<Member>,
    pub messages: Vec<ExportMessage>,
}

impl Envelope {
    /// Sorts the roster by platform identifier.
    ///
    /// The builder leaves the roster in arbitrary order; call this when the
    /// output must be reproducible.
    pub fn sort_members(&mut self) {
        self.members.sort_by(|a, b| a.platform_id.cmp(&b.platform_id));
    }

    /// Returns the roster entry for a sender, if present.
    pub fn member(&self, platform_id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.platform_id == platform_id)
    }

    /// Returns `true` if the conversation is a group.
    pub fn is_group(&self) -> bool {
        self.meta.chat_type == ChatType::Group
    }
}

/// Format header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub version: String,
    /// Unix epoch seconds.
    pub exported_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Header {
    /// Creates a header with the fixed version and generator labels.
    pub fn new(exported_at: i64) -> Self {
        Self {
            version: FORMAT_VERSION.to_string(),
            exported_at,
            generator: Some(GENERATOR.to_string()),
            description: None,
        }
    }
}

/// Conversation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub name: String,
    pub platform: String,
    #[serde(rename = "type")]
    pub chat_type: ChatType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_avatar: Option<String>,
}

/// A conversation participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub platform_id: String,
    pub account_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Member {
    /// Creates a member with no group nickname, aliases or avatar.
    pub fn new(platform_id: impl Into<String>, account_name: impl Into<String>) -> Self {
        Self {
            platform_id: platform_id.into(),
            account_name: account_name.into(),
            group_nickname: None,
            aliases: Vec::new(),
            avatar: None,
        }
    }

    /// Builder method to set the group nickname. Empty names are dropped.
    #[must_use]
    pub fn with_group_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.group_nickname = non_empty(nickname.into());
        self
    }
}

/// One exported message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMessage {
    pub sender: String,
    pub account_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_nickname: Option<String>,
    /// Unix epoch seconds.
    pub timestamp: i64,
    #[serde(rename = "type")]
    pub kind: ExportKind,
    pub content: String,
}

impl ExportMessage {
    /// Builder method to set the group nickname. Empty names are dropped.
    #[must_use]
    pub fn with_group_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.group_nickname = non_empty(nickname.into());
        self
    }
}

fn non_empty(s: String) -> Option<String> {
    Some(s).filter(|s| !s.is_empty())
}
