//! # Domain model for notes
//!
//! [`Note`] is the record the remote store owns and every view renders. It is
//! `Serialize + Deserialize` with camelCase field names so it maps one-to-one onto
//! the notes API payload (`createdAt`, RFC 3339).
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `id` | Opaque identifier assigned by the backend. |
//! | `title` | Plain text, at most [`Note::MAX_TITLE_LEN`] characters. |
//! | `body` | Rich-text HTML fragment. |
//! | `created_at` | Creation instant, used for sorting and date filtering. |
//! | `archived` | `false` for active notes, `true` for archived notes. |
//!
//! The client only ever holds transient copies; deleting removes the note from the
//! backend entirely.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A titled rich-text record with a creation timestamp and an archived flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub archived: bool,
}

impl Note {
    /// Maximum title length in characters.
    pub const MAX_TITLE_LEN: usize = 50;

    pub fn is_active(&self) -> bool {
        !self.archived
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_from_api_json() {
        let json = r#"{
            "id": "notes-jT-jjsyz61J8XKiI",
            "title": "Welcome to Notes, Dimas!",
            "body": "Sebuah catatan <b>penting</b>",
            "createdAt": "2022-07-28T10:03:12.594Z",
            "archived": false,
            "owner": "user-5PqX4vFbNZpEBnCR"
        }"#;

        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.id, "notes-jT-jjsyz61J8XKiI");
        assert!(note.is_active());
        assert_eq!(note.created_at.timestamp_millis(), 1_659_002_592_594);
    }

    #[test]
    fn test_missing_archived_defaults_to_active() {
        let json = r#"{"id":"n1","title":"t","body":"b","createdAt":"2024-01-01T00:00:00Z"}"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert!(!note.archived);
    }
}
