use chrono::NaiveDate;
use thiserror::Error;

use super::employee::{EmployeeDraft, ImageSource};

/// A field the add-employee form rejected, with a user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Valid years of experience required")]
    YearsInvalid,
    #[error("Joining date must be a YYYY-MM-DD calendar date")]
    JoiningDateInvalid,
    #[error("At least one skill is required")]
    SkillsRequired,
}

/// Raw add-employee form input, exactly as a UI would collect it.
///
/// [`validate`](Self::validate) turns it into an [`EmployeeDraft`] the
/// directory will accept, or reports every failing field at once so a
/// screen can show inline errors. Malformed input never reaches the store.
#[derive(Clone, Debug, Default)]
pub struct AddEmployeeForm {
    pub name: String,
    pub years_of_experience: String,
    /// ISO-8601 `YYYY-MM-DD`, as produced by a date picker.
    pub joining_date: String,
    /// Remote URL or `data:` URI; empty means no photo was taken.
    pub image_uri: String,
    pub skills: Vec<String>,
}

impl AddEmployeeForm {
    /// Validate every field and build a draft.
    ///
    /// All failures are collected, not just the first. A photo is optional:
    /// an empty `image_uri` becomes [`ImageSource::Placeholder`] rather than
    /// an error. Blank skill entries are dropped before the
    /// at-least-one-skill check.
    pub fn validate(&self) -> Result<EmployeeDraft, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::NameRequired);
        }

        let years = self.years_of_experience.trim().parse::<u32>();
        if years.is_err() {
            errors.push(FieldError::YearsInvalid);
        }

        let joining_date = NaiveDate::parse_from_str(self.joining_date.trim(), "%Y-%m-%d");
        if joining_date.is_err() {
            errors.push(FieldError::JoiningDateInvalid);
        }

        let skills: Vec<String> = self
            .skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if skills.is_empty() {
            errors.push(FieldError::SkillsRequired);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(EmployeeDraft {
            name: name.to_string(),
            years_of_experience: years.unwrap_or_default(),
            joining_date: joining_date.unwrap_or_default(),
            image: ImageSource::from(self.image_uri.trim().to_string()),
            skills,
        })
    }
}
