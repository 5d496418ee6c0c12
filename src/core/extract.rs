//! Message classification and content extraction.
//!
//! [`extract`] maps a [`SourceMessage`] onto its [`ExportKind`] and the
//! content string written to the export. The mapping is total: every message
//! gets a kind, unrecognized primary types fall back to [`ExportKind::Other`]
//! with the original content.
//!
//! # Content rules
//!
//! | Source payload | Export kind | Content |
//! |----------------|-------------|---------|
//! | text | text | original |
//! | image | image | `path`, else `md5`, else `[image]` |
//! | voice / video | voice / video | `[voice]` / `[video]` |
//! | sticker | emoji | `cdnurl`, else `[sticker]` |
//! | location | location | non-empty `label`, else `[location]` |
//! | contact card | contact | `[card]` |
//! | call | call | `[call]` |
//! | system | system | original |
//! | share | per sub-type | see [`ShareBody`] |
//! | unknown | other | original |
//!
//! Placeholders follow the configured [`Locale`].
//!
//! # Example
//!
//! ```
//! use chatlab::config::Locale;
//! use chatlab::core::extract::extract;
//! use chatlab::core::models::ExportKind;
//! use chatlab::message::{MessageBody, SourceMessage};
//! use chrono::Utc;
//!
//! let msg = SourceMessage::new("wxid_a", "Alice", Utc::now(), MessageBody::Voice);
//! assert_eq!(extract(&msg, Locale::English), (ExportKind::Voice, "[voice]".to_string()));
//! ```

use crate::config::{Locale, Placeholder};
use crate::core::models::ExportKind;
use crate::message::{MessageBody, ShareBody, SourceMessage};

/// Returns the export kind and content for a message.
pub fn extract(msg: &SourceMessage, locale: Locale) -> (ExportKind, String) {
    let original = || msg.content.clone();
    let placeholder = |p: Placeholder| locale.placeholder(p).to_string();

    match &msg.body {
        MessageBody::Text => (ExportKind::Text, original()),
        MessageBody::Image { path, md5 } => (
            ExportKind::Image,
            path.as_ref()
                .or(md5.as_ref())
                .cloned()
                .unwrap_or_else(|| placeholder(Placeholder::Image)),
        ),
        MessageBody::Voice => (ExportKind::Voice, placeholder(Placeholder::Voice)),
        MessageBody::Video => (ExportKind::Video, placeholder(Placeholder::Video)),
        MessageBody::Sticker { cdn_url } => (
            ExportKind::Emoji,
            cdn_url
                .clone()
                .unwrap_or_else(|| placeholder(Placeholder::Sticker)),
        ),
        MessageBody::Location { label } => (
            ExportKind::Location,
            label
                .as_ref()
                .filter(|label| !label.is_empty())
                .cloned()
                .unwrap_or_else(|| placeholder(Placeholder::Location)),
        ),
        MessageBody::Card => (ExportKind::Contact, placeholder(Placeholder::Card)),
        MessageBody::Call => (ExportKind::Call, placeholder(Placeholder::Call)),
        MessageBody::System => (ExportKind::System, original()),
        MessageBody::Share(share) => extract_share(share, msg, locale),
        MessageBody::Unknown { kind } => {
            tracing::debug!(kind, sender = %msg.sender, "unrecognized message type, exporting as other");
            (ExportKind::Other, original())
        }
    }
}

fn extract_share(share: &ShareBody, msg: &SourceMessage, locale: Locale) -> (ExportKind, String) {
    let or_original = |attr: Option<&String>| attr.cloned().unwrap_or_else(|| msg.content.clone());

    match share {
        ShareBody::File { title } => (ExportKind::File, or_original(title.as_ref())),
        ShareBody::Link { url } => (ExportKind::Link, or_original(url.as_ref())),
        ShareBody::Forward { title } => (ExportKind::Forward, or_original(title.as_ref())),
        ShareBody::MiniProgram { title } => (ExportKind::Share, or_original(title.as_ref())),
        ShareBody::Quote => (ExportKind::Reply, msg.content.clone()),
        ShareBody::Pat => (ExportKind::Poke, msg.content.clone()),
        ShareBody::Music { url } => (ExportKind::Share, or_original(url.as_ref())),
        ShareBody::Transfer => (ExportKind::Transfer, msg.content.clone()),
        ShareBody::RedPacket => (
            ExportKind::RedPacket,
            locale.placeholder(Placeholder::RedPacket).to_string(),
        ),
        ShareBody::Other { .. } => (ExportKind::Share, msg.content.clone()),
    }
}

/// Returns the display name to export for a message's sender.
///
/// Own messages without a name get the locale's first-person label.
pub fn display_name(msg: &SourceMessage, locale: Locale) -> &str {
    if msg.is_self && msg.sender_name.is_empty() {
        locale.self_label()
    } else {
        &msg.sender_name
    }
}
