use super::form::ValidationError;
use super::loose;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handling state of a citizen inquiry. `Completed` is final.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InquiryStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl InquiryStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == label)
    }

    pub const fn is_final(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message left through the public contact form
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub name: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub phone: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub message: String,
    #[serde(default)]
    pub status: InquiryStatus,
}

impl Inquiry {
    pub const PATH: &'static str = "/contacts";

    pub fn status_path(&self) -> String {
        format!("{}/{}/status", Self::PATH, self.id)
    }

    /// Check a status change before sending it
    pub fn transition(&self, next: InquiryStatus) -> Result<InquiryStatus, ValidationError> {
        if self.status.is_final() {
            return Err(ValidationError::StatusLocked);
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn inquiry(status: InquiryStatus) -> Inquiry {
        Inquiry {
            id: "c1".into(),
            name: "Sunita".into(),
            phone: "9800000000".into(),
            message: "Water supply".into(),
            status,
        }
    }

    #[test]
    fn status_labels_match_the_api() {
        let decoded: Inquiry = serde_json::from_value(json!({
            "_id": "c1",
            "name": "Sunita",
            "phone": 9800000000_u64,
            "message": "Water supply",
            "status": "In Progress",
        }))
        .unwrap();
        assert_eq!(decoded.status, InquiryStatus::InProgress);
        assert_eq!(decoded.phone, "9800000000");
        assert_eq!(
            serde_json::to_value(InquiryStatus::InProgress).unwrap(),
            json!("In Progress")
        );
        assert_eq!(InquiryStatus::parse("Completed"), Some(InquiryStatus::Completed));
        assert_eq!(InquiryStatus::parse("Closed"), None);
    }

    #[test]
    fn missing_status_reads_as_pending() {
        let decoded: Inquiry = serde_json::from_value(json!({"_id": "c2"})).unwrap();
        assert_eq!(decoded.status, InquiryStatus::Pending);
    }

    #[test]
    fn completed_inquiry_is_locked() {
        assert_eq!(
            inquiry(InquiryStatus::Completed).transition(InquiryStatus::Pending),
            Err(ValidationError::StatusLocked)
        );
        assert_eq!(
            inquiry(InquiryStatus::Pending).transition(InquiryStatus::Completed),
            Ok(InquiryStatus::Completed)
        );
    }

    #[test]
    fn status_path_targets_the_record() {
        assert_eq!(inquiry(InquiryStatus::Pending).status_path(), "/contacts/c1/status");
    }
}
