//! Request and response models.

mod note;
mod user;

pub use note::NewNote;
pub use user::{Credentials, Registration, UserInfo};
