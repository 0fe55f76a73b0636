//! Authentication session for the notes client.

mod session;

pub use session::{AuthError, AuthService, AuthState};
