//! Response shape validation.

use serde_json::Value;

use crate::error::{BotError, Result};

/// Key holding the submission list.
pub const HOMEWORKS_KEY: &str = "homeworks";
/// Key holding the server timestamp marker.
pub const CURRENT_DATE_KEY: &str = "current_date";

/// Checks a decoded API response and extracts its submission records.
///
/// The response must be an object with both `current_date` and `homeworks`,
/// and `homeworks` must be a list. An empty list is valid. The records are
/// returned as-is, most recent first; only the poll loop decides which of
/// them to read.
pub fn validate(raw: &Value) -> Result<&[Value]> {
    let Value::Object(map) = raw else {
        return Err(BotError::Shape(format!(
            "ожидался словарь, получено {}",
            kind_of(raw)
        )));
    };

    if !map.contains_key(CURRENT_DATE_KEY) {
        return Err(BotError::MissingField(CURRENT_DATE_KEY));
    }

    let homeworks = map
        .get(HOMEWORKS_KEY)
        .ok_or(BotError::MissingField(HOMEWORKS_KEY))?;

    let Value::Array(items) = homeworks else {
        return Err(BotError::Shape(format!(
            "{} приходит не в виде списка, а как {}",
            HOMEWORKS_KEY,
            kind_of(homeworks)
        )));
    };

    Ok(items.as_slice())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "число",
        Value::String(_) => "строка",
        Value::Array(_) => "список",
        Value::Object(_) => "словарь",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_response() {
        let raw = json!({
            "homeworks": [
                {"homework_name": "hw06.zip", "status": "reviewing"},
                {"homework_name": "hw05.zip", "status": "approved"}
            ],
            "current_date": 1_700_000_000
        });
        let records = validate(&raw).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["homework_name"], "hw06.zip");
    }

    #[test]
    fn test_empty_list_is_valid() {
        let raw = json!({"homeworks": [], "current_date": 0});
        assert!(validate(&raw).unwrap().is_empty());
    }

    #[test]
    fn test_missing_current_date() {
        for homeworks in [json!([]), json!([{"status": "approved"}]), json!("oops")] {
            let raw = json!({ "homeworks": homeworks });
            assert!(matches!(
                validate(&raw),
                Err(BotError::MissingField(CURRENT_DATE_KEY))
            ));
        }
    }

    #[test]
    fn test_missing_homeworks() {
        let raw = json!({"current_date": 0});
        assert!(matches!(
            validate(&raw),
            Err(BotError::MissingField(HOMEWORKS_KEY))
        ));
    }

    #[test]
    fn test_not_a_mapping() {
        for raw in [json!([]), json!(null), json!("homeworks"), json!(7)] {
            assert!(matches!(validate(&raw), Err(BotError::Shape(_))));
        }
    }

    #[test]
    fn test_homeworks_not_a_list() {
        let raw = json!({"homeworks": {"homework_name": "hw"}, "current_date": 0});
        assert!(matches!(validate(&raw), Err(BotError::Shape(_))));
    }

    #[test]
    fn test_records_are_returned_as_is() {
        let raw = json!({
            "homeworks": [
                {"homework_name": "proj1", "status": "approved"},
                {"homework_name": 42, "status": 7},
                "garbage"
            ],
            "current_date": 0
        });
        let records = validate(&raw).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2], "garbage");
    }
}
