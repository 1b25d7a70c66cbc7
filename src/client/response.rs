//! Classification of HTTP outcomes into [`NftGateError`] kinds

use crate::error::{FieldErrors, DEFAULT_VALIDATION_MESSAGE};
use crate::{NftGateError, Result};
use serde_json::Value;

/// Turn a status and raw body into a decoded JSON value or a classified failure
pub(crate) fn classify_response(status: u16, body: &str) -> Result<Value> {
    match status {
        204 => Ok(Value::Null),
        200..=299 => serde_json::from_str(body).map_err(|e| {
            NftGateError::malformed(format!(
                "Expected a JSON body with status {}: {}",
                status, e
            ))
        }),
        422 => {
            let parsed = serde_json::from_str::<Value>(body).ok();
            let message = parsed
                .as_ref()
                .and_then(|v| v.get("message"))
                .and_then(Value::as_str)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(DEFAULT_VALIDATION_MESSAGE);
            let errors = parsed
                .as_ref()
                .and_then(|v| v.get("errors"))
                .map(field_errors)
                .unwrap_or_default();
            Err(NftGateError::validation(message, errors))
        }
        500..=u16::MAX => Err(NftGateError::server(status, error_message(status, body))),
        400..=499 => Err(NftGateError::client(status, error_message(status, body))),
        _ => Err(NftGateError::malformed(format!(
            "Unexpected HTTP status {}",
            status
        ))),
    }
}

fn field_errors(errors: &Value) -> FieldErrors {
    let Value::Object(fields) = errors else {
        return FieldErrors::new();
    };

    fields
        .iter()
        .map(|(field, messages)| {
            let messages = match messages {
                Value::Array(items) => items.iter().map(text).collect(),
                other => vec![text(other)],
            };
            (field.clone(), messages)
        })
        .collect()
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Best-effort message: `message`, then `error`, then the raw body, then the reason phrase
fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        let candidate = value
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| value.get("error").and_then(Value::as_str))
            .or_else(|| {
                value
                    .get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(Value::as_str)
            });
        if let Some(message) = candidate.filter(|m| !m.trim().is_empty()) {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    http::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_parses_json() {
        let value = classify_response(200, r#"{"id": 1}"#).unwrap();
        assert_eq!(value, json!({"id": 1}));
    }

    #[test]
    fn test_success_with_invalid_json_is_malformed() {
        let err = classify_response(200, "<html>ok</html>").unwrap_err();
        assert!(matches!(err, NftGateError::MalformedResponse(_)));

        let err = classify_response(201, "").unwrap_err();
        assert!(matches!(err, NftGateError::MalformedResponse(_)));
    }

    #[test]
    fn test_no_content_is_null() {
        assert_eq!(classify_response(204, "").unwrap(), Value::Null);
    }

    #[test]
    fn test_validation_failure_keeps_field_errors() {
        let body = r#"{"message":"The given data was invalid.","errors":{"field":["The field is required."]}}"#;
        let err = classify_response(422, body).unwrap_err();

        match err {
            NftGateError::Validation { message, errors } => {
                assert_eq!(message, "The given data was invalid.");
                let mut expected = FieldErrors::new();
                expected.insert("field".to_string(), vec!["The field is required.".to_string()]);
                assert_eq!(errors, expected);
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_failure_without_body() {
        let err = classify_response(422, "").unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: The given data was invalid.");
        assert!(err.validation_errors().unwrap().is_empty());
    }

    #[test]
    fn test_validation_string_errors_become_lists() {
        let body = r#"{"message":"Nope","errors":{"name":"taken","tags":[1,"bad"]}}"#;
        let err = classify_response(422, body).unwrap_err();
        let errors = err.validation_errors().unwrap();

        assert_eq!(errors["name"], vec!["taken".to_string()]);
        assert_eq!(errors["tags"], vec!["1".to_string(), "bad".to_string()]);
    }

    #[test]
    fn test_server_failure() {
        let err = classify_response(503, r#"{"message":"maintenance"}"#).unwrap_err();
        assert!(matches!(
            err,
            NftGateError::Server { status: 503, ref message } if message == "maintenance"
        ));
    }

    #[test]
    fn test_client_failure_message_fallbacks() {
        let err = classify_response(401, r#"{"error":"Unauthenticated."}"#).unwrap_err();
        assert!(matches!(
            err,
            NftGateError::Client { status: 401, ref message } if message == "Unauthenticated."
        ));

        let err = classify_response(404, "no such route").unwrap_err();
        assert!(matches!(
            err,
            NftGateError::Client { status: 404, ref message } if message == "no such route"
        ));

        let err = classify_response(403, "").unwrap_err();
        assert!(matches!(
            err,
            NftGateError::Client { status: 403, ref message } if message == "Forbidden"
        ));
    }

    #[test]
    fn test_redirect_status_is_malformed() {
        let err = classify_response(302, "").unwrap_err();
        assert!(matches!(err, NftGateError::MalformedResponse(_)));
    }
}
