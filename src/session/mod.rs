//! Placeholder login gate in front of the directory.

mod session;

pub use session::{Credentials, Session, SessionState};
