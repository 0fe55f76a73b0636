//! Note mutations behind a confirmation step.
//!
//! Every action asks first, then makes exactly one backend call. Nothing is
//! retried and nothing is applied locally unless the call succeeds.

use api::{ApiError, NewNote, Note, NotesApi, ValidationError};
use store::Language;

use crate::dialog::Dialogs;
use crate::i18n::{tr, Text};

/// Source of yes/no answers. The UI asks through [`Dialogs`]; tests script it.
#[allow(async_fn_in_trait)]
pub trait Prompter {
    async fn confirm(&self, message: &str, title: &str) -> bool;
}

impl Prompter for Dialogs {
    async fn confirm(&self, message: &str, title: &str) -> bool {
        Dialogs::confirm(*self, message, title).await
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteAction {
    Archive,
    Unarchive,
    Delete,
}

impl NoteAction {
    /// Archive or unarchive, whichever flips `note`.
    pub fn toggle_archive(note: &Note) -> Self {
        if note.archived {
            Self::Unarchive
        } else {
            Self::Archive
        }
    }

    pub fn label(self) -> Text {
        match self {
            Self::Archive => Text::Archive,
            Self::Unarchive => Text::Unarchive,
            Self::Delete => Text::Delete,
        }
    }

    pub fn confirm_title(self) -> Text {
        match self {
            Self::Archive => Text::ArchiveNote,
            Self::Unarchive => Text::UnarchiveNote,
            Self::Delete => Text::DeleteNote,
        }
    }

    pub fn confirm_message(self, language: Language) -> String {
        match self {
            Self::Delete => Text::ConfirmDeleteNote.get(language).to_string(),
            Self::Archive | Self::Unarchive => {
                let verb = self.label().get(language).to_lowercase();
                tr(language, Text::ConfirmArchiveNote, &[("action", &verb)])
            }
        }
    }

    pub fn success_text(self) -> Text {
        match self {
            Self::Archive => Text::NoteArchived,
            Self::Unarchive => Text::NoteUnarchived,
            Self::Delete => Text::NoteDeleted,
        }
    }

    pub fn failure_text(self) -> Text {
        match self {
            Self::Archive => Text::FailedToArchiveNote,
            Self::Unarchive => Text::FailedToUnarchiveNote,
            Self::Delete => Text::FailedToDeleteNote,
        }
    }

    async fn call<A: NotesApi>(self, api: &A, id: &str) -> Result<(), ApiError> {
        match self {
            Self::Archive => api.archive_note(id).await,
            Self::Unarchive => api.unarchive_note(id).await,
            Self::Delete => api.delete_note(id).await,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The user declined; nothing was sent.
    Cancelled,
    Completed,
    Failed(ApiError),
}

/// Confirm, then run `action` on note `id`. `busy` is raised around the call
/// and lowered again whatever the result.
pub async fn perform<A, P>(
    action: NoteAction,
    api: &A,
    prompter: &P,
    language: Language,
    id: &str,
    mut busy: impl FnMut(bool),
) -> ActionOutcome
where
    A: NotesApi,
    P: Prompter,
{
    let message = action.confirm_message(language);
    if !prompter.confirm(&message, action.confirm_title().get(language)).await {
        return ActionOutcome::Cancelled;
    }

    busy(true);
    let result = action.call(api, id).await;
    busy(false);

    match result {
        Ok(()) => {
            tracing::info!(note = id, ?action, "note action completed");
            ActionOutcome::Completed
        }
        Err(e) => {
            tracing::warn!(note = id, ?action, error = %e, "note action failed");
            ActionOutcome::Failed(e)
        }
    }
}

/// Message to show for a failed call: the server's own message when it sent
/// one, otherwise `fallback`.
pub fn error_message(error: &ApiError, fallback: &str) -> String {
    match error {
        ApiError::Rejected(message) if !message.trim().is_empty() => message.clone(),
        _ => fallback.to_string(),
    }
}

/// Show the notification for a finished action. Returns true on success.
pub fn report(dialogs: Dialogs, language: Language, action: NoteAction, outcome: &ActionOutcome) -> bool {
    match outcome {
        ActionOutcome::Cancelled => false,
        ActionOutcome::Completed => {
            dialogs.success(action.success_text().get(language), Text::Success.get(language));
            true
        }
        ActionOutcome::Failed(e) => {
            let message = error_message(e, action.failure_text().get(language));
            dialogs.error(&message, Text::Error.get(language));
            false
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    Invalid(ValidationError),
    Api(ApiError),
}

impl From<ValidationError> for SubmitError {
    fn from(e: ValidationError) -> Self {
        Self::Invalid(e)
    }
}

impl From<ApiError> for SubmitError {
    fn from(e: ApiError) -> Self {
        Self::Api(e)
    }
}

/// Validate `draft` and create it. Invalid drafts never reach the backend.
pub async fn submit_note<A: NotesApi>(api: &A, draft: &NewNote) -> Result<Note, SubmitError> {
    draft.validate()?;
    let note = api.create_note(&draft.normalized()).await?;
    tracing::info!(note = %note.id, "note created");
    Ok(note)
}

/// Whether the add-note page may be left. A dirty draft needs confirmation.
pub async fn confirm_discard<P: Prompter>(prompter: &P, language: Language, draft: &NewNote) -> bool {
    if !draft.is_dirty() {
        return true;
    }
    prompter
        .confirm(
            Text::ConfirmCancelAddNote.get(language),
            Text::DiscardChanges.get(language),
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{LocalNotesApi, Registration};
    use chrono::{TimeZone, Utc};
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use store::{MemoryStore, TokenStore};

    #[derive(Default)]
    struct ScriptedPrompter {
        answers: RefCell<VecDeque<bool>>,
        asked: RefCell<Vec<(String, String)>>,
    }

    impl ScriptedPrompter {
        fn answering(answers: &[bool]) -> Self {
            Self {
                answers: RefCell::new(answers.iter().copied().collect()),
                asked: RefCell::default(),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        async fn confirm(&self, message: &str, title: &str) -> bool {
            self.asked
                .borrow_mut()
                .push((message.to_string(), title.to_string()));
            self.answers.borrow_mut().pop_front().unwrap_or(false)
        }
    }

    fn signed_in_api() -> (LocalNotesApi<MemoryStore>, Note) {
        let tokens = TokenStore::new(MemoryStore::new());
        let api = LocalNotesApi::new(tokens.clone());
        let user = api.seed_user(Registration::new("Dimas", "dimas@mail.com", "secret1"));
        tokens.set(&api.issue_token(&user));
        let note = api.seed_note(
            &user,
            "Babel",
            "<p>Transpiler</p>",
            Utc.with_ymd_and_hms(2022, 4, 14, 4, 27, 34).unwrap(),
            false,
        );
        (api, note)
    }

    #[tokio::test]
    async fn test_cancel_sends_nothing() {
        let (api, note) = signed_in_api();
        let mut busy_calls = Vec::new();

        for action in [NoteAction::Archive, NoteAction::Delete] {
            let prompter = ScriptedPrompter::answering(&[false]);
            let outcome = perform(action, &api, &prompter, Language::En, &note.id, |b| {
                busy_calls.push(b)
            })
            .await;
            assert_eq!(outcome, ActionOutcome::Cancelled);
        }

        assert_eq!(api.request_count(), 0);
        assert!(busy_calls.is_empty());
        assert_eq!(api.peek_note(&note.id), Some(note));
    }

    #[tokio::test]
    async fn test_archive_after_confirm() {
        let (api, note) = signed_in_api();
        let prompter = ScriptedPrompter::answering(&[true]);
        let mut busy_calls = Vec::new();

        let outcome = perform(NoteAction::Archive, &api, &prompter, Language::En, &note.id, |b| {
            busy_calls.push(b)
        })
        .await;

        assert_eq!(outcome, ActionOutcome::Completed);
        assert_eq!(busy_calls, vec![true, false]);
        assert_eq!(api.request_count(), 1);
        assert!(api.peek_note(&note.id).unwrap().archived);
        assert_eq!(
            prompter.asked.borrow()[0],
            (
                "Are you sure you want to archive this note?".to_string(),
                "Archive Note".to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_unarchive_then_delete() {
        let (api, note) = signed_in_api();
        let prompter = ScriptedPrompter::answering(&[true, true, true]);

        for action in [NoteAction::Archive, NoteAction::Unarchive] {
            let outcome = perform(action, &api, &prompter, Language::Id, &note.id, |_| {}).await;
            assert_eq!(outcome, ActionOutcome::Completed);
        }
        assert!(!api.peek_note(&note.id).unwrap().archived);

        let outcome = perform(NoteAction::Delete, &api, &prompter, Language::Id, &note.id, |_| {}).await;
        assert_eq!(outcome, ActionOutcome::Completed);
        assert_eq!(api.peek_note(&note.id), None);
    }

    #[tokio::test]
    async fn test_failure_is_reported_once() {
        let (api, _) = signed_in_api();
        let prompter = ScriptedPrompter::answering(&[true]);
        let mut busy_calls = Vec::new();

        let outcome = perform(NoteAction::Delete, &api, &prompter, Language::En, "notes-missing", |b| {
            busy_calls.push(b)
        })
        .await;

        assert!(matches!(outcome, ActionOutcome::Failed(ApiError::Rejected(_))));
        assert_eq!(busy_calls, vec![true, false]);
        assert_eq!(api.request_count(), 1);
    }

    #[test]
    fn test_toggle_archive_follows_flag() {
        let (_, mut note) = signed_in_api();
        assert_eq!(NoteAction::toggle_archive(&note), NoteAction::Archive);
        note.archived = true;
        assert_eq!(NoteAction::toggle_archive(&note), NoteAction::Unarchive);
    }

    #[test]
    fn test_error_message_fallback() {
        let fallback = "Failed to delete note. Please try again.";
        assert_eq!(
            error_message(&ApiError::rejected("Note is not found"), fallback),
            "Note is not found"
        );
        assert_eq!(error_message(&ApiError::rejected(""), fallback), fallback);
        assert_eq!(
            error_message(&ApiError::Network("offline".to_string()), fallback),
            fallback
        );
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_backend() {
        let (api, _) = signed_in_api();
        let empty_title = NewNote::new("  ", "<p>body</p>");
        let empty_body = NewNote::new("Title", "");

        assert_eq!(
            submit_note(&api, &empty_title).await,
            Err(SubmitError::Invalid(ValidationError::EmptyTitle))
        );
        assert_eq!(
            submit_note(&api, &empty_body).await,
            Err(SubmitError::Invalid(ValidationError::EmptyBody))
        );
        assert_eq!(api.request_count(), 0);
    }

    #[tokio::test]
    async fn test_submit_creates_active_note() {
        let (api, _) = signed_in_api();
        let note = submit_note(&api, &NewNote::new(" React ", "<b>hooks</b>"))
            .await
            .unwrap();
        assert_eq!(note.title, "React");
        assert!(!note.archived);
        assert_eq!(api.peek_note(&note.id), Some(note));
    }

    #[tokio::test]
    async fn test_clean_draft_leaves_without_asking() {
        let prompter = ScriptedPrompter::default();
        assert!(confirm_discard(&prompter, Language::En, &NewNote::default()).await);
        assert!(prompter.asked.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_dirty_draft_asks_first() {
        let prompter = ScriptedPrompter::answering(&[false]);
        let draft = NewNote::new("Draft", "");
        assert!(!confirm_discard(&prompter, Language::En, &draft).await);
        assert_eq!(prompter.asked.borrow()[0].1, "Discard Changes");
    }
}
