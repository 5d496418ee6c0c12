//! Property-based tests for chatlab.
//!
//! These tests generate random conversations to check the conversion
//! invariants hold for any input.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

use chatlab::core::Scope;
use chatlab::prelude::*;

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

/// Generate a random SourceMessage from a small pool of senders and types
fn arb_message() -> impl Strategy<Value = SourceMessage> {
    (
        prop::sample::select(vec![
            ("wxid_alice", "Alice"),
            ("wxid_alice", "Alice 2"),
            ("wxid_bob", "Bob"),
            ("wxid_bob", ""),
            ("wxid_me", ""),
            ("", ""),
        ]),
        prop::sample::select(vec![1i64, 3, 34, 42, 43, 47, 48, 49, 50, 10000, 7, 9999]),
        prop::option::of(prop::sample::select(vec![3i64, 4, 5, 6, 19, 33, 57, 62, 2000, 2001, 77])),
        prop::sample::select(vec![
            String::new(),
            "Hello".to_string(),
            "Привет мир".to_string(),
            "🎉🔥 emoji".to_string(),
            "line\nbreak \"quoted\"".to_string(),
        ]),
        0i64..2_000_000_000,
        any::<bool>(),
    )
        .prop_map(|((sender, name), code, sub, content, secs, with_title)| {
            let mut contents = Contents::new();
            if with_title {
                contents = contents.with("title", "T").with("url", "https://x.test");
            }
            let msg = SourceMessage::new(sender, name, at(secs), MessageBody::classify(code, sub, &contents))
                .with_content(content);
            if sender == "wxid_me" { msg.mark_self() } else { msg }
        })
}

/// Generate a vector of random messages
fn arb_messages(max_len: usize) -> impl Strategy<Value = Vec<SourceMessage>> {
    prop::collection::vec(arb_message(), 0..max_len)
}

fn arb_conversation_id() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "wxid_friend".to_string(),
        "12345@chatroom".to_string(),
        "1@chatroom".to_string(),
        "@chatroom".to_string(),
        "chatroom".to_string(),
        String::new(),
    ])
}

proptest! {
    /// One export message per source message, in the same order
    #[test]
    fn count_and_order_preserved(messages in arb_messages(60), id in arb_conversation_id()) {
        let envelope = build_envelope(&messages, &id, "Chat");

        prop_assert_eq!(envelope.messages.len(), messages.len());
        for (src, out) in messages.iter().zip(&envelope.messages) {
            prop_assert_eq!(&out.sender, &src.sender);
            prop_assert_eq!(out.timestamp, src.time.timestamp());
        }
    }

    /// Exactly one member per distinct sender, named by the first message seen
    #[test]
    fn roster_is_first_seen(messages in arb_messages(60), id in arb_conversation_id()) {
        let envelope = build_envelope(&messages, &id, "Chat");

        let mut first: HashMap<&str, &str> = HashMap::new();
        for msg in &envelope.messages {
            first.entry(msg.sender.as_str()).or_insert(msg.account_name.as_str());
        }

        prop_assert_eq!(envelope.members.len(), first.len());
        for member in &envelope.members {
            prop_assert_eq!(Some(&member.account_name.as_str()), first.get(member.platform_id.as_str()));
        }
    }

    /// Group nicknames appear only in groups
    #[test]
    fn nicknames_only_in_groups(messages in arb_messages(40), id in arb_conversation_id()) {
        let envelope = build_envelope(&messages, &id, "Chat");

        if !envelope.is_group() {
            prop_assert!(envelope.messages.iter().all(|m| m.group_nickname.is_none()));
            prop_assert!(envelope.members.iter().all(|m| m.group_nickname.is_none()));
        }
        for msg in &envelope.messages {
            if let Some(nick) = &msg.group_nickname {
                prop_assert_eq!(nick, &msg.account_name);
            }
        }
    }

    /// Scope inference matches the suffix-and-length rule
    #[test]
    fn scope_rule(prefix in "[a-z0-9]{0,12}", group in any::<bool>()) {
        let id = if group { format!("{prefix}@chatroom") } else { prefix.clone() };
        let scope = Scope::infer(&id);

        prop_assert_eq!(scope.is_group(), group && !prefix.is_empty());
        prop_assert_eq!(scope.group_id().is_some(), scope.is_group());
    }

    /// Converting twice yields the same envelope apart from exportedAt
    #[test]
    fn conversion_is_deterministic(messages in arb_messages(40), id in arb_conversation_id()) {
        let mut a = build_envelope(&messages, &id, "Chat");
        let mut b = build_envelope(&messages, &id, "Chat");
        a.sort_members();
        b.sort_members();
        b.header.exported_at = a.header.exported_at;

        prop_assert_eq!(a, b);
    }

    /// Every unnamed own message gets the first-person label, in groups as a nickname too
    #[test]
    fn self_label_on_every_unnamed_own_message(messages in arb_messages(60), id in arb_conversation_id()) {
        let envelope = build_envelope(&messages, &id, "Chat");

        for (src, out) in messages.iter().zip(&envelope.messages) {
            if src.is_self && src.sender_name.is_empty() {
                prop_assert_eq!(out.account_name.as_str(), "Me");
                if envelope.is_group() {
                    prop_assert_eq!(out.group_nickname.as_deref(), Some("Me"));
                }
                let member = envelope.member(&src.sender).unwrap();
                prop_assert_eq!(member.account_name.as_str(), "Me");
            }
        }
    }

    /// Serialization always succeeds and keeps every message
    #[test]
    fn json_never_fails(messages in arb_messages(30), id in arb_conversation_id()) {
        let envelope = build_envelope(&messages, &id, "Chat");
        let json = to_json(&envelope, false).unwrap();

        let back: Envelope = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.messages.len(), messages.len());
    }
}
