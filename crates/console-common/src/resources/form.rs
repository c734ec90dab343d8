//! Form state, validation and request bodies for resource records

use super::field::FieldKind;
use super::Resource;
use crate::client::{RequestBody, Upload};
use chrono::NaiveDate;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

/// Rejections raised before anything is submitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{label} is required")]
    Missing {
        field: &'static str,
        label: &'static str,
    },

    #[error("{label} must be a number")]
    NotANumber {
        field: &'static str,
        label: &'static str,
    },

    #[error("{label} must be a whole number, zero or more")]
    NotACount {
        field: &'static str,
        label: &'static str,
    },

    #[error("{label} must be a date (YYYY-MM-DD)")]
    InvalidDate {
        field: &'static str,
        label: &'static str,
    },

    #[error("Only one {role} is allowed")]
    DuplicateRole { role: String },

    #[error("A completed inquiry can no longer change status")]
    StatusLocked,
}

/// Text values keyed by field name, plus the picked file if any
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    fields: BTreeMap<String, String>,
    pub upload: Option<Upload>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            fields: pairs
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            upload: None,
        }
    }

    /// Raw value, empty when never set
    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn trimmed(&self, name: &str) -> &str {
        self.get(name).trim()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }
}

/// Check values against the field table and the record's own rule.
///
/// `editing` is the id of the record being edited, so it does not
/// conflict with itself.
pub fn validate<R: Resource>(
    values: &FormValues,
    existing: &[R],
    editing: Option<&str>,
) -> Result<(), ValidationError> {
    for field in R::FIELDS {
        let value = values.trimmed(field.name);
        if value.is_empty() {
            if field.required {
                return Err(ValidationError::Missing {
                    field: field.name,
                    label: field.label,
                });
            }
            continue;
        }
        match field.kind {
            FieldKind::Number if value.parse::<f64>().map_or(true, |n| !n.is_finite()) => {
                return Err(ValidationError::NotANumber {
                    field: field.name,
                    label: field.label,
                });
            }
            FieldKind::Date if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() => {
                return Err(ValidationError::InvalidDate {
                    field: field.name,
                    label: field.label,
                });
            }
            _ => {}
        }
    }
    R::check(values, existing, editing)
}

/// Build the create/update payload.
///
/// Records with a file field go out as multipart with every declared
/// text field (empty ones included) and the file part only when a new
/// file was picked. Everything else is a flat JSON object.
pub fn body_for<R: Resource>(values: &FormValues) -> RequestBody {
    match R::FILE {
        Some(file) => RequestBody::Multipart {
            fields: R::FIELDS
                .iter()
                .map(|field| (field.name.to_string(), values.trimmed(field.name).to_string()))
                .collect(),
            file: values
                .upload
                .clone()
                .map(|upload| (file.name.to_string(), upload)),
        },
        None => RequestBody::Json(Value::Object(
            R::FIELDS
                .iter()
                .map(|field| {
                    (
                        field.name.to_string(),
                        Value::String(values.trimmed(field.name).to_string()),
                    )
                })
                .collect::<Map<_, _>>(),
        )),
    }
}
