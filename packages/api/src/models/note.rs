use serde::{Deserialize, Serialize};
use store::Note;

use crate::error::ValidationError;

/// Payload for creating a note.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub body: String,
}

impl NewNote {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Apply a keystroke to the title field. Input that would exceed
    /// [`Note::MAX_TITLE_LEN`] characters is rejected and the previous title kept.
    /// Returns whether the input was accepted.
    pub fn set_title(&mut self, value: &str) -> bool {
        if value.chars().count() > Note::MAX_TITLE_LEN {
            return false;
        }
        self.title = value.to_string();
        true
    }

    /// Characters left before the title limit.
    pub fn remaining_title_chars(&self) -> usize {
        Note::MAX_TITLE_LEN.saturating_sub(self.title.chars().count())
    }

    pub fn is_dirty(&self) -> bool {
        !self.title.is_empty() || !self.body.is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if title.chars().count() > Note::MAX_TITLE_LEN {
            return Err(ValidationError::TitleTooLong {
                max: Note::MAX_TITLE_LEN,
            });
        }
        if self.body.trim().is_empty() {
            return Err(ValidationError::EmptyBody);
        }
        Ok(())
    }

    /// The payload as sent: trimmed title, body untouched.
    pub fn normalized(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            body: self.body.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_limit_at_input() {
        let mut draft = NewNote::default();

        let fifty = "a".repeat(50);
        assert!(draft.set_title(&fifty));
        assert_eq!(draft.title, fifty);
        assert_eq!(draft.remaining_title_chars(), 0);

        let fifty_one = "b".repeat(51);
        assert!(!draft.set_title(&fifty_one));
        assert_eq!(draft.title, fifty);
    }

    #[test]
    fn test_title_limit_counts_characters() {
        let mut draft = NewNote::default();
        assert!(draft.set_title(&"é".repeat(50)));
        assert!(!draft.set_title(&"é".repeat(51)));
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            NewNote::new("  ", "<p>body</p>").validate(),
            Err(ValidationError::EmptyTitle)
        );
        assert_eq!(NewNote::new("Title", " ").validate(), Err(ValidationError::EmptyBody));
        assert_eq!(
            NewNote::new("x".repeat(51), "b").validate(),
            Err(ValidationError::TitleTooLong { max: 50 })
        );
        assert!(NewNote::new("x".repeat(50), "b").validate().is_ok());
    }

    #[test]
    fn test_normalized_trims_title_only() {
        let note = NewNote::new("  Hello ", " <b>hi</b> ").normalized();
        assert_eq!(note.title, "Hello");
        assert_eq!(note.body, " <b>hi</b> ");
    }
}
