mod shell;
pub use shell::Shell;

mod gate;
pub use gate::{SignedInGate, SignedOutGate};

mod lists;
pub use lists::{Archives, Home};

mod note_detail;
pub use note_detail::NoteDetail;

mod add_note;
pub use add_note::AddNote;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod not_found;
pub use not_found::NotFound;
