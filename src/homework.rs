//! Homework submissions and the review status catalog.

use serde_json::Value;

use crate::error::{BotError, Result};

/// One homework review record returned by the Practicum API.
///
/// Both fields may be absent or `null` in the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    /// Homework identifier, e.g. `"username__hw05_final.zip"`.
    pub name: Option<String>,
    /// Review status code, e.g. `"approved"`.
    pub status: Option<String>,
}

impl Submission {
    /// Creates a submission with both fields set.
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            status: Some(status.into()),
        }
    }

    /// Reads a submission out of one `homeworks` entry.
    ///
    /// The name comes from `homework_name`, falling back to `name`. Fields of
    /// an unexpected JSON type are kept as their JSON text, so a numeric
    /// status ends up as an unknown code rather than a shape failure.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::Shape`] if `record` is not an object.
    pub fn from_value(record: &Value) -> Result<Self> {
        let Value::Object(map) = record else {
            return Err(BotError::Shape(
                "запись о домашней работе не является словарём".to_string(),
            ));
        };

        let name = map
            .get("homework_name")
            .filter(|v| !v.is_null())
            .or_else(|| map.get("name"));
        Ok(Self {
            name: name.and_then(field_text),
            status: map.get("status").and_then(field_text),
        })
    }
}

fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Known review status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    /// Review finished, no remarks.
    Approved,
    /// A reviewer picked the work up.
    Reviewing,
    /// Review finished with remarks.
    Rejected,
}

impl HomeworkStatus {
    /// All catalog entries.
    pub const ALL: [Self; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    /// Looks up a status code. Returns `None` for codes outside the catalog.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Wire code of this status.
    pub fn code(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable verdict shown to the user.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_catalog_codes_round_trip() {
        for status in HomeworkStatus::ALL {
            assert_eq!(HomeworkStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(HomeworkStatus::from_code(""), None);
        assert_eq!(HomeworkStatus::from_code("Approved"), None);
        assert_eq!(HomeworkStatus::from_code("graded"), None);
    }

    #[test]
    fn test_submission_from_api_record() {
        let record = json!({
            "id": 1,
            "homework_name": "hw05.zip",
            "status": "rejected",
            "reviewer_comment": "fix tests"
        });
        let submission = Submission::from_value(&record).unwrap();
        assert_eq!(submission, Submission::new("hw05.zip", "rejected"));
    }

    #[test]
    fn test_submission_name_fallback() {
        let record = json!({"name": "proj1", "status": "approved"});
        let submission = Submission::from_value(&record).unwrap();
        assert_eq!(submission, Submission::new("proj1", "approved"));
    }

    #[test]
    fn test_submission_tolerates_missing_and_null_fields() {
        let submission = Submission::from_value(&json!({"status": null})).unwrap();
        assert_eq!(submission, Submission::default());
    }

    #[test]
    fn test_submission_keeps_non_string_fields_as_text() {
        let submission = Submission::from_value(&json!({"homework_name": 42, "status": 3})).unwrap();
        assert_eq!(submission, Submission::new("42", "3"));
    }

    #[test]
    fn test_submission_from_non_object() {
        for record in [json!("approved"), json!(null), json!([1, 2])] {
            assert!(matches!(
                Submission::from_value(&record),
                Err(BotError::Shape(_))
            ));
        }
    }
}
