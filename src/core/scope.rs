//! Private/group scope inference from a conversation identifier.

use crate::core::models::ChatType;

/// Suffix carried by every group conversation identifier.
pub const GROUP_SUFFIX: &str = "@chatroom";

/// Whether a conversation is one-to-one or a group.
///
/// ```
/// use chatlab::core::scope::Scope;
///
/// assert!(Scope::infer("12345@chatroom").is_group());
/// assert_eq!(Scope::infer("12345@chatroom").group_id(), Some("12345@chatroom"));
/// assert_eq!(Scope::infer("wxid_abc123"), Scope::Private);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    Private,
    Group { id: String },
}

impl Scope {
    /// Infers the scope from the identifier shape alone.
    ///
    /// An identifier is a group when it ends in [`GROUP_SUFFIX`] and has at
    /// least one byte before it.
    pub fn infer(conversation_id: &str) -> Self {
        if conversation_id.len() > GROUP_SUFFIX.len() && conversation_id.ends_with(GROUP_SUFFIX) {
            Scope::Group {
                id: conversation_id.to_string(),
            }
        } else {
            Scope::Private
        }
    }

    /// Returns `true` for group conversations.
    pub fn is_group(&self) -> bool {
        matches!(self, Scope::Group { .. })
    }

    /// Returns the group identifier, if any.
    pub fn group_id(&self) -> Option<&str> {
        match self {
            Scope::Group { id } => Some(id),
            Scope::Private => None,
        }
    }

    /// Returns the metadata kind for this scope.
    pub fn chat_type(&self) -> ChatType {
        match self {
            Scope::Private => ChatType::Private,
            Scope::Group { .. } => ChatType::Group,
        }
    }
}
