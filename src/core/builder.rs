//! Envelope assembly.
//!
//! [`EnvelopeBuilder`] runs one conversion: it infers the scope once, then
//! for every pushed message resolves the sender's display name, extracts the
//! export kind and content, appends an [`ExportMessage`] and records the
//! sender in a [`Roster`]. [`finish`](EnvelopeBuilder::finish) stamps the
//! header and drains the roster.
//!
//! Messages are never sorted, filtered or deduplicated: the export holds
//! exactly one message per input message, in input order.
//!
//! Each builder owns its roster, so independent conversions can run on
//! separate threads without sharing anything.
//!
//! # Example
//!
//! ```
//! use chatlab::core::builder::build_envelope;
//! use chatlab::message::SourceMessage;
//! use chrono::Utc;
//!
//! let now = Utc::now();
//! let messages = vec![
//!     SourceMessage::text("wxid_a", "Alice", now, "Hi"),
//!     SourceMessage::text("wxid_b", "Bob", now, "Hello"),
//!     SourceMessage::text("wxid_a", "Alice", now, "How are you?"),
//! ];
//!
//! let envelope = build_envelope(&messages, "12345@chatroom", "Team");
//! assert_eq!(envelope.meta.group_id.as_deref(), Some("12345@chatroom"));
//! assert_eq!(envelope.messages.len(), 3);
//! assert_eq!(envelope.members.len(), 2);
//! ```

use chrono::{DateTime, Utc};

use crate::config::{ExportConfig, Locale};
use crate::core::extract::{display_name, extract};
use crate::core::models::{Envelope, ExportMessage, Header, Meta, PLATFORM};
use crate::core::roster::Roster;
use crate::core::scope::Scope;
use crate::message::SourceMessage;

/// Incremental envelope builder for a single conversation.
#[derive(Debug, Clone)]
pub struct EnvelopeBuilder {
    locale: Locale,
    description: Option<String>,
    meta: Meta,
    is_group: bool,
    roster: Roster,
    messages: Vec<ExportMessage>,
}

impl EnvelopeBuilder {
    /// Creates a builder with the default configuration.
    ///
    /// An empty `conversation_name` falls back to `conversation_id`.
    pub fn new(conversation_id: &str, conversation_name: &str) -> Self {
        Self::with_config(conversation_id, conversation_name, ExportConfig::default())
    }

    /// Creates a builder with the given configuration.
    pub fn with_config(
        conversation_id: &str,
        conversation_name: &str,
        config: ExportConfig,
    ) -> Self {
        let scope = Scope::infer(conversation_id);
        let name = if conversation_name.is_empty() {
            conversation_id
        } else {
            conversation_name
        };

        let meta = Meta {
            name: name.to_string(),
            platform: PLATFORM.to_string(),
            chat_type: scope.chat_type(),
            group_id: scope.group_id().map(ToString::to_string),
            group_avatar: if scope.is_group() {
                config.group_avatar
            } else {
                None
            },
        };

        Self {
            locale: config.locale,
            description: config.description,
            meta,
            is_group: scope.is_group(),
            roster: Roster::new(),
            messages: Vec::new(),
        }
    }

    /// Reserves room for at least `additional` more messages.
    pub fn reserve(&mut self, additional: usize) {
        self.messages.reserve(additional);
    }

    /// Converts one message and appends it.
    pub fn push(&mut self, msg: &SourceMessage) {
        let name = display_name(msg, self.locale);
        let (kind, content) = extract(msg, self.locale);

        let mut export = ExportMessage {
            sender: msg.sender.clone(),
            account_name: name.to_string(),
            group_nickname: None,
            timestamp: msg.timestamp(),
            kind,
            content,
        };
        if self.is_group {
            export = export.with_group_nickname(name);
        }
        self.messages.push(export);

        self.roster.observe(&msg.sender, name, self.is_group);
    }

    /// Returns the number of messages converted so far.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if no message has been pushed.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the roster collected so far.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Finishes the envelope, stamped with the current time.
    pub fn finish(self) -> Envelope {
        self.finish_at(Utc::now())
    }

    /// Finishes the envelope with an explicit export instant.
    pub fn finish_at(self, exported_at: DateTime<Utc>) -> Envelope {
        let mut header = Header::new(exported_at.timestamp());
        header.description = self.description;

        let members = self.roster.drain();
        tracing::debug!(
            messages = self.messages.len(),
            members = members.len(),
            chat_type = %self.meta.chat_type,
            "envelope finished"
        );

        Envelope {
            header,
            meta: self.meta,
            members,
            messages: self.messages,
        }
    }
}

impl<'a> Extend<&'a SourceMessage> for EnvelopeBuilder {
    fn extend<I: IntoIterator<Item = &'a SourceMessage>>(&mut self, iter: I) {
        for msg in iter {
            self.push(msg);
        }
    }
}

/// Converts a whole conversation with the default configuration.
pub fn build_envelope(
    messages: &[SourceMessage],
    conversation_id: &str,
    conversation_name: &str,
) -> Envelope {
    build_envelope_with(messages, conversation_id, conversation_name, &ExportConfig::default())
}

/// Converts a whole conversation with the given configuration.
pub fn build_envelope_with(
    messages: &[SourceMessage],
    conversation_id: &str,
    conversation_name: &str,
    config: &ExportConfig,
) -> Envelope {
    let mut builder = EnvelopeBuilder::with_config(conversation_id, conversation_name, config.clone());
    builder.reserve(messages.len());
    builder.extend(messages);
    builder.finish()
}
