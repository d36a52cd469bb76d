//! Response envelope decoding
//!
//! Every wire response is `{"sessionId": .., "status": .., "value": ..}`.

use serde_json::Value;

use crate::error::{Error, ErrorCode, Result, WebDriverError};

/// A decoded response envelope
#[derive(Debug, Clone, PartialEq)]
pub struct WebDriverResult {
    /// Session the response belongs to
    pub session_id: Option<String>,
    /// Wire status; non-zero means the command failed
    pub status: i64,
    /// Payload, possibly holding element references
    pub value: Value,
}

impl WebDriverResult {
    pub fn new(session_id: Option<String>, status: i64, value: Value) -> Self {
        Self {
            session_id,
            status,
            value,
        }
    }

    /// Build an envelope from a parsed response body.
    ///
    /// Missing `status` defaults to 0 and missing `value` to null.
    pub fn from_object(obj: Value) -> Result<Self> {
        let mut map = match obj {
            Value::Object(map) => map,
            other => {
                return Err(Error::Decode(format!(
                    "response body is not a JSON object: {}",
                    other
                )))
            }
        };

        let session_id = match map.remove("sessionId") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s),
            Some(other) => Some(other.to_string()),
        };

        let status = match map.remove("status") {
            None | Some(Value::Null) => 0,
            Some(v) => v
                .as_i64()
                .ok_or_else(|| Error::Decode(format!("status is not an integer: {}", v)))?,
        };

        let value = map.remove("value").unwrap_or(Value::Null);

        Ok(Self::new(session_id, status, value))
    }

    /// Fail with a [`WebDriverError`] when the status is non-zero
    pub fn raise_for_status(&self) -> std::result::Result<(), WebDriverError> {
        if self.status == 0 {
            return Ok(());
        }

        let mut err = WebDriverError {
            status: self.status,
            error: ErrorCode::from_code(self.status),
            message: None,
            screen: None,
            stacktrace: None,
        };

        match &self.value {
            Value::String(s) => err.message = Some(s.clone()),
            Value::Object(map) => {
                err.message = map.get("message").and_then(text);
                err.screen = map.get("screen").and_then(text);
                err.stacktrace = map.get("stacktrace").and_then(stack_lines);
            }
            _ => {}
        }

        Err(err)
    }
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Stack traces arrive either as one string or as a list of frames
fn stack_lines(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.lines().map(str::to_string).collect()),
        Value::Array(items) => Some(items.iter().filter_map(text).collect()),
        other => Some(vec![other.to_string()]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_object_defaults() {
        let res = WebDriverResult::from_object(json!({})).unwrap();
        assert_eq!(res.session_id, None);
        assert_eq!(res.status, 0);
        assert_eq!(res.value, Value::Null);
        assert!(res.raise_for_status().is_ok());
    }

    #[test]
    fn test_from_object_fields() {
        let res = WebDriverResult::from_object(json!({
            "sessionId": "abc",
            "status": 0,
            "value": {"ELEMENT": "1"}
        }))
        .unwrap();
        assert_eq!(res.session_id.as_deref(), Some("abc"));
        assert_eq!(res.value, json!({"ELEMENT": "1"}));
    }

    #[test]
    fn test_numeric_session_id_is_normalized() {
        let res = WebDriverResult::from_object(json!({"sessionId": 42})).unwrap();
        assert_eq!(res.session_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        assert!(matches!(
            WebDriverResult::from_object(json!([1, 2])),
            Err(Error::Decode(_))
        ));
        assert!(matches!(
            WebDriverResult::from_object(json!({"status": "bad"})),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn test_raise_for_status_with_string_value() {
        let res = WebDriverResult::from_object(json!({"status": 7, "value": "no such element"})).unwrap();
        let err = res.raise_for_status().unwrap_err();
        assert_eq!(err.error, Some(ErrorCode::NoSuchElement));
        assert_eq!(err.error.map(|e| e.code()), Some(7));
        assert_eq!(err.message.as_deref(), Some("no such element"));
        assert_eq!(err.screen, None);
        assert_eq!(err.stacktrace, None);
    }

    #[test]
    fn test_raise_for_status_with_object_value() {
        let res = WebDriverResult::from_object(json!({
            "status": 13,
            "value": {
                "message": "boom",
                "screen": "aGVsbG8=",
                "stacktrace": ["at a", "at b"]
            }
        }))
        .unwrap();
        let err = res.raise_for_status().unwrap_err();
        assert_eq!(err.error, Some(ErrorCode::UnknownError));
        assert_eq!(err.message.as_deref(), Some("boom"));
        assert_eq!(err.screen.as_deref(), Some("aGVsbG8="));
        assert_eq!(err.stacktrace, Some(vec!["at a".to_string(), "at b".to_string()]));
    }

    #[test]
    fn test_string_stacktrace_split_into_lines() {
        let res = WebDriverResult::from_object(json!({
            "status": 17,
            "value": {"message": "x", "stacktrace": "line1\nline2"}
        }))
        .unwrap();
        let err = res.raise_for_status().unwrap_err();
        assert_eq!(err.stacktrace, Some(vec!["line1".to_string(), "line2".to_string()]));
    }

    #[test]
    fn test_unknown_status_keeps_raw_code() {
        let res = WebDriverResult::from_object(json!({"status": 99, "value": null})).unwrap();
        let err = res.raise_for_status().unwrap_err();
        assert_eq!(err.error, None);
        assert_eq!(err.status, 99);
        assert_eq!(err.message, None);
    }
}
