use super::form::{FormValues, ValidationError};
use super::loose;
use serde::{Deserialize, Serialize};

/// Head counts shown on the school page; a single record on the server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolCount {
    #[serde(default, deserialize_with = "loose::count")]
    pub girls: u32,
    #[serde(default, deserialize_with = "loose::count")]
    pub boys: u32,
    #[serde(default, deserialize_with = "loose::count")]
    pub total_teacher: u32,
    #[serde(default, deserialize_with = "loose::string")]
    pub contact: String,
}

impl SchoolCount {
    pub const PATH: &'static str = "/schoolcount";

    pub const fn total_students(&self) -> u32 {
        self.girls.saturating_add(self.boys)
    }

    pub fn values(&self) -> FormValues {
        FormValues::new()
            .with("girls", self.girls.to_string())
            .with("boys", self.boys.to_string())
            .with("totalTeacher", self.total_teacher.to_string())
            .with("contact", self.contact.clone())
    }

    /// Parse the edit form; blank counts are zero
    pub fn from_values(values: &FormValues) -> Result<Self, ValidationError> {
        let count = |field: &'static str, label: &'static str| {
            let raw = values.trimmed(field);
            if raw.is_empty() {
                return Ok(0);
            }
            raw.parse::<u32>()
                .map_err(|_| ValidationError::NotACount { field, label })
        };

        Ok(Self {
            girls: count("girls", "Girls")?,
            boys: count("boys", "Boys")?,
            total_teacher: count("totalTeacher", "Total Teachers")?,
            contact: values.trimmed("contact").to_string(),
        })
    }
}
