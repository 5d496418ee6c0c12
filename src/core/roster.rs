//! Participant aggregation.
//!
//! [`Roster`] collects one [`Member`] per sender while a conversation is
//! converted. The first message seen from a sender decides that member's
//! names; later messages never touch the entry.

use std::collections::HashMap;

use crate::core::models::Member;

/// Per-conversion member accumulator, keyed by sender identifier.
///
/// # Example
///
/// ```
/// use chatlab::core::roster::Roster;
///
/// let mut roster = Roster::new();
/// assert!(roster.observe("wxid_a", "Alice", false));
/// assert!(!roster.observe("wxid_a", "Alice (new name)", false));
///
/// let members = roster.drain();
/// assert_eq!(members.len(), 1);
/// assert_eq!(members[0].account_name, "Alice");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Roster {
    members: HashMap<String, Member>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a sender if it hasn't been seen yet.
    ///
    /// In groups the display name doubles as the group nickname. Returns
    /// `true` if a new member was added.
    pub fn observe(&mut self, sender: &str, display_name: &str, is_group: bool) -> bool {
        if self.members.contains_key(sender) {
            return false;
        }

        let mut member = Member::new(sender, display_name);
        if is_group {
            member = member.with_group_nickname(display_name);
        }
        tracing::trace!(sender, display_name, "new roster member");
        self.members.insert(sender.to_string(), member);
        true
    }

    /// Returns `true` if the sender has been recorded.
    pub fn contains(&self, sender: &str) -> bool {
        self.members.contains_key(sender)
    }

    /// Returns the member recorded for a sender.
    pub fn get(&self, sender: &str) -> Option<&Member> {
        self.members.get(sender)
    }

    /// Returns the number of distinct senders.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if no sender has been recorded.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Consumes the roster and returns its members in arbitrary order.
    pub fn drain(self) -> Vec<Member> {
        self.members.into_values().collect()
    }
}
