//! The employee directory: records, id strategies, form validation, and the
//! reactive store that owns the roster.

mod directory;
mod employee;
mod form;
mod ids;
mod seed;

pub use directory::Directory;
pub use employee::{Employee, EmployeeDraft, EmployeeId, ImageSource, PLACEHOLDER_IMAGE_URL};
pub use form::{AddEmployeeForm, FieldError};
pub use ids::{IdSource, SequentialIds, UuidIds};
pub use seed::sample_employees;
