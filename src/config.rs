//! Configuration types for envelope building.
//!
//! This module provides clean configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ExportConfig`] - settings applied while building an envelope
//! - [`Locale`] - language of placeholder contents and the first-person label
//!
//! # Example
//!
//! ```rust
//! use chatlab::config::{ExportConfig, Locale};
//!
//! let config = ExportConfig::new()
//!     .with_locale(Locale::Chinese)
//!     .with_description("Weekly archive");
//!
//! assert_eq!(config.locale.self_label(), "我");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ChatlabError;

/// Placeholder contents for messages whose payload has no text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Image,
    Voice,
    Video,
    Sticker,
    Location,
    Card,
    Call,
    RedPacket,
}

/// Language used for placeholder contents and the first-person label.
///
/// # Example
///
/// ```rust
/// use chatlab::config::{Locale, Placeholder};
/// use std::str::FromStr;
///
/// let locale = Locale::from_str("zh").unwrap();
/// assert_eq!(locale, Locale::Chinese);
/// assert_eq!(locale.placeholder(Placeholder::Image), "[图片]");
/// assert_eq!(Locale::English.placeholder(Placeholder::Image), "[image]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Locale {
    /// English labels: `[image]`, `Me`, ...
    #[default]
    #[serde(alias = "en")]
    English,

    /// Simplified Chinese labels: `[图片]`, `我`, ...
    #[serde(alias = "zh")]
    Chinese,
}

impl Locale {
    /// Returns the placeholder content for the given payload kind.
    pub fn placeholder(&self, placeholder: Placeholder) -> &'static str {
        match self {
            Locale::English => match placeholder {
                Placeholder::Image => "[image]",
                Placeholder::Voice => "[voice]",
                Placeholder::Video => "[video]",
                Placeholder::Sticker => "[sticker]",
                Placeholder::Location => "[location]",
                Placeholder::Card => "[card]",
                Placeholder::Call => "[call]",
                Placeholder::RedPacket => "[red packet]",
            },
            Locale::Chinese => match placeholder {
                Placeholder::Image => "[图片]",
                Placeholder::Voice => "[语音]",
                Placeholder::Video => "[视频]",
                Placeholder::Sticker => "[表情]",
                Placeholder::Location => "[位置]",
                Placeholder::Card => "[名片]",
                Placeholder::Call => "[通话]",
                Placeholder::RedPacket => "[红包]",
            },
        }
    }

    /// Returns the display name used for the account owner's own messages
    /// when they carry no name.
    pub fn self_label(&self) -> &'static str {
        match self {
            Locale::English => "Me",
            Locale::Chinese => "我",
        }
    }

    /// Returns all locale names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &["english", "en", "chinese", "zh"]
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::English => write!(f, "English"),
            Locale::Chinese => write!(f, "Chinese"),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = ChatlabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "english" | "en" => Ok(Locale::English),
            "chinese" | "zh" => Ok(Locale::Chinese),
            _ => Err(ChatlabError::invalid_format(
                "locale",
                format!(
                    "Unknown locale: '{}'. Expected one of: {}",
                    s,
                    Locale::all_names().join(", ")
                ),
            )),
        }
    }
}

/// Settings applied while building an envelope.
///
/// The format version, platform and generator labels are fixed and are not
/// part of the configuration.
///
/// # Example
///
/// ```rust
/// use chatlab::config::ExportConfig;
///
/// let config = ExportConfig::new()
///     .with_description("Exported for archival")
///     .with_group_avatar("https://img.test/room.png");
/// assert_eq!(config.description.as_deref(), Some("Exported for archival"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Language of placeholder contents (default: English)
    #[serde(default)]
    pub locale: Locale,

    /// Free-text description written to the header (default: none)
    #[serde(default)]
    pub description: Option<String>,

    /// Avatar reference written to the metadata of group conversations
    /// (default: none)
    #[serde(default)]
    pub group_avatar: Option<String>,
}

impl ExportConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the locale.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Sets the header description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the group avatar reference.
    #[must_use]
    pub fn with_group_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.group_avatar = Some(avatar.into());
        self
    }
}
