//! State containers with subscription-based change propagation.
//!
//! Both domain stores (the employee directory and the session) are built on
//! [`Store`], which owns a value and pushes it to subscribers on every
//! mutation.

mod store;

pub use store::{Store, Subscription};
