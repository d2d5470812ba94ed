//! # Rollcall
//!
//! The application core of an employee-directory app, kept entirely in
//! memory and exposed as reactive stores.
//!
//! ## Directory
//!
//! [`Directory`] owns the roster for the lifetime of the process:
//! - `add` / `remove` / `get` / `search` over [`Employee`] records
//! - ids minted by an injectable [`IdSource`] strategy
//! - subscribers notified synchronously on every mutation
//!
//! ## Session
//!
//! [`Session`] gates access behind one compiled-in credential pair. It is a
//! placeholder for a real identity provider, not a security boundary.
//!
//! ## Store
//!
//! Both are built on [`Store`], a shareable state container with
//! subscription-based change propagation.
//!
//! All state is volatile: nothing survives process exit, and nothing talks
//! to a network.

pub mod directory;
pub mod session;
pub mod store;

// Re-export main types for convenience
pub use directory::{
    sample_employees, AddEmployeeForm, Directory, Employee, EmployeeDraft, EmployeeId, FieldError,
    IdSource, ImageSource, SequentialIds, UuidIds, PLACEHOLDER_IMAGE_URL,
};
pub use session::{Credentials, Session, SessionState};
pub use store::{Store, Subscription};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        // Basic smoke test
        let directory = Directory::with_sample_data();
        assert_eq!(directory.len(), 4);
        assert_eq!(directory.search("sarah").len(), 1);
    }
}
