mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod loading;
pub use loading::LoadingView;

mod notes_list;
pub use notes_list::NotesListView;

mod note_detail;
pub use note_detail::NoteDetailView;

mod add_note;
pub use add_note::AddNoteView;

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod not_found;
pub use not_found::NotFoundView;
