use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// URL rendered for employees without a photo of their own.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150/4ECDC4/FFFFFF";

/// Opaque unique identifier for an employee record.
///
/// Ids are assigned by the directory at creation time; callers never supply
/// them. See [`crate::directory::IdSource`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub(crate) fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where an employee's photo comes from.
///
/// Serializes to the raw URI string the original record format used: a plain
/// URL, a `data:` URI for inline payloads, or the placeholder URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum ImageSource {
    /// Remote image URL.
    Url(String),
    /// Inline base64 payload as a full `data:` URI.
    Base64(String),
    /// No photo was provided; render the shared placeholder.
    Placeholder,
}

impl ImageSource {
    /// URI to hand to an image view.
    pub fn uri(&self) -> &str {
        match self {
            ImageSource::Url(url) => url,
            ImageSource::Base64(data_uri) => data_uri,
            ImageSource::Placeholder => PLACEHOLDER_IMAGE_URL,
        }
    }
}

impl From<String> for ImageSource {
    fn from(raw: String) -> Self {
        if raw.is_empty() {
            ImageSource::Placeholder
        } else if raw.starts_with("data:") {
            ImageSource::Base64(raw)
        } else {
            ImageSource::Url(raw)
        }
    }
}

impl From<ImageSource> for String {
    fn from(source: ImageSource) -> Self {
        source.uri().to_string()
    }
}

/// A single employee's stored attributes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub years_of_experience: u32,
    /// Calendar date, no time-of-day; serialized as `YYYY-MM-DD`.
    pub joining_date: NaiveDate,
    #[serde(rename = "imageUri")]
    pub image: ImageSource,
    /// Insertion order preserved; each entry non-empty (enforced by the
    /// add-employee form, not by the store).
    pub skills: Vec<String>,
}

impl Employee {
    pub(crate) fn from_draft(id: EmployeeId, draft: EmployeeDraft) -> Self {
        Self {
            id,
            name: draft.name,
            years_of_experience: draft.years_of_experience,
            joining_date: draft.joining_date,
            image: draft.image,
            skills: draft.skills,
        }
    }
}

/// An employee record without an id, the only input to
/// [`Directory::add`](crate::Directory::add).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub name: String,
    pub years_of_experience: u32,
    pub joining_date: NaiveDate,
    #[serde(rename = "imageUri")]
    pub image: ImageSource,
    pub skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_source_from_raw_uri() {
        assert_eq!(
            ImageSource::from("https://example.com/a.png".to_string()),
            ImageSource::Url("https://example.com/a.png".to_string())
        );
        assert_eq!(
            ImageSource::from("data:image/jpeg;base64,AAAA".to_string()),
            ImageSource::Base64("data:image/jpeg;base64,AAAA".to_string())
        );
        assert_eq!(ImageSource::from(String::new()), ImageSource::Placeholder);
    }

    #[test]
    fn placeholder_renders_shared_url() {
        assert_eq!(ImageSource::Placeholder.uri(), PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn employee_serializes_date_as_iso8601() {
        let employee = Employee {
            id: EmployeeId::new("7"),
            name: "Alice Park".to_string(),
            years_of_experience: 4,
            joining_date: NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(),
            image: ImageSource::Placeholder,
            skills: vec!["Rust".to_string()],
        };

        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["joiningDate"], "2022-06-01");
        assert_eq!(json["yearsOfExperience"], 4);
        assert_eq!(json["imageUri"], PLACEHOLDER_IMAGE_URL);
    }
}
