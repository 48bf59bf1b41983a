//! The message board's single entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored message. Immutable once created; the identity key is assigned
/// by the database on insert and strictly increases with insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Message {
    pub id: i64,
    pub content: String,
}

/// Form payload for a submission. The field is optional so that a request
/// without it is a no-op rather than a rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewMessage {
    pub message: Option<String>,
}

impl NewMessage {
    /// The content to insert, if any. An absent or empty field means the
    /// submission is skipped; whitespace-only content is kept as-is.
    pub fn content(&self) -> Option<&str> {
        match self.message.as_deref() {
            Some("") | None => None,
            Some(s) => Some(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_is_noop() {
        assert_eq!(NewMessage::default().content(), None);
    }

    #[test]
    fn empty_field_is_noop() {
        let form = NewMessage {
            message: Some(String::new()),
        };
        assert_eq!(form.content(), None);
    }

    #[test]
    fn whitespace_is_kept_verbatim() {
        let form = NewMessage {
            message: Some("  ".into()),
        };
        assert_eq!(form.content(), Some("  "));
    }

    #[test]
    fn content_passes_through() {
        let form = NewMessage {
            message: Some("hello".into()),
        };
        assert_eq!(form.content(), Some("hello"));
    }
}
