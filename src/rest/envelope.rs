//! Response envelope handling.
//!
//! BitcoinTrade wraps every payload in an envelope. The current API uses
//! `{"message": ..., "data": ...}`; older deployments used
//! `{"status_code": ..., "response_data": ..., "error_message": ...}`. The two
//! are separate formats and are never guessed from the body.

use reqwest::StatusCode;
use serde_json::{Map, Value};

use crate::error::{ApiError, BitcoinTradeError};

/// `status_code` value signalling success in the legacy envelope.
pub const LEGACY_SUCCESS_CODE: i64 = 100;

/// The envelope format a server speaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EnvelopeFormat {
    /// `{"message": string|null, "data": payload}`
    #[default]
    MessageData,
    /// `{"status_code": int, "response_data": payload, "error_message": string}`
    StatusCode,
}

impl EnvelopeFormat {
    /// Decode `body` and return the payload, or the error the envelope carries.
    ///
    /// A `null` payload is a valid success value.
    pub fn unwrap_body(self, status: StatusCode, body: &str) -> Result<Value, BitcoinTradeError> {
        let decoded: Value = serde_json::from_str(body).map_err(|e| BitcoinTradeError::Protocol {
            status,
            reason: format!("body is not valid JSON: {}", e),
        })?;
        let Value::Object(fields) = decoded else {
            return Err(invalid_shape(status, "expected a JSON object"));
        };

        match self {
            EnvelopeFormat::MessageData => unwrap_message_data(status, fields),
            EnvelopeFormat::StatusCode => unwrap_status_code(status, fields),
        }
    }
}

fn unwrap_message_data(
    status: StatusCode,
    mut fields: Map<String, Value>,
) -> Result<Value, BitcoinTradeError> {
    let (Some(message), Some(data)) = (fields.remove("message"), fields.remove("data")) else {
        return Err(invalid_shape(status, "expected `message` and `data` keys"));
    };

    // A message means the request failed, whatever the HTTP status says.
    match message {
        Value::Null => Ok(data),
        other => Err(BitcoinTradeError::Api(ApiError::new(message_text(other)))),
    }
}

fn unwrap_status_code(
    status: StatusCode,
    mut fields: Map<String, Value>,
) -> Result<Value, BitcoinTradeError> {
    let Some(code) = fields.get("status_code").and_then(Value::as_i64) else {
        return Err(invalid_shape(status, "expected an integer `status_code`"));
    };

    if code == LEGACY_SUCCESS_CODE {
        return Ok(fields.remove("response_data").unwrap_or(Value::Null));
    }

    let message = fields
        .remove("error_message")
        .map(message_text)
        .unwrap_or_default();
    Err(BitcoinTradeError::Api(ApiError::with_code(message, code)))
}

fn message_text(message: Value) -> String {
    match message {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn invalid_shape(status: StatusCode, detail: &str) -> BitcoinTradeError {
    BitcoinTradeError::Protocol {
        status,
        reason: format!("invalid response shape: {}", detail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn unwrap_current(body: Value) -> Result<Value, BitcoinTradeError> {
        EnvelopeFormat::MessageData.unwrap_body(StatusCode::OK, &body.to_string())
    }

    #[test]
    fn test_data_returned_exactly() {
        let payload = unwrap_current(json!({ "message": null, "data": { "x": 1 } })).unwrap();
        assert_eq!(payload, json!({ "x": 1 }));
    }

    #[test]
    fn test_sequence_payload() {
        let payload = unwrap_current(json!({ "message": null, "data": [1, 2] })).unwrap();
        assert_eq!(payload, json!([1, 2]));
    }

    #[test]
    fn test_null_data_is_success() {
        let payload = unwrap_current(json!({ "message": null, "data": null })).unwrap();
        assert!(payload.is_null());
    }

    #[test]
    fn test_message_is_api_error() {
        let err = unwrap_current(json!({ "message": "bad request", "data": null })).unwrap_err();
        match err {
            BitcoinTradeError::Api(api) => {
                assert_eq!(api.message, "bad request");
                assert_eq!(api.code, None);
            }
            other => panic!("expected Api, got {:?}", other),
        }
    }

    #[test]
    fn test_message_wins_over_http_status() {
        let body = json!({ "message": "Saldo insuficiente", "data": null }).to_string();
        let err = EnvelopeFormat::MessageData
            .unwrap_body(StatusCode::OK, &body)
            .unwrap_err();
        assert!(matches!(err, BitcoinTradeError::Api(_)));

        let err = EnvelopeFormat::MessageData
            .unwrap_body(StatusCode::BAD_REQUEST, &body)
            .unwrap_err();
        assert!(matches!(err, BitcoinTradeError::Api(_)));
    }

    #[test]
    fn test_missing_key_is_protocol_error() {
        for body in [json!({ "data": {} }), json!({ "message": null }), json!([1])] {
            let err = unwrap_current(body).unwrap_err();
            assert!(matches!(err, BitcoinTradeError::Protocol { .. }));
        }
    }

    #[test]
    fn test_non_json_keeps_status() {
        let err = EnvelopeFormat::MessageData
            .unwrap_body(StatusCode::BAD_GATEWAY, "<html>502 Bad Gateway</html>")
            .unwrap_err();
        match err {
            BitcoinTradeError::Protocol { status, .. } => {
                assert_eq!(status, StatusCode::BAD_GATEWAY)
            }
            other => panic!("expected Protocol, got {:?}", other),
        }
    }

    #[test]
    fn test_legacy_success() {
        let body = json!({ "status_code": 100, "response_data": { "bids": [] }, "error_message": null });
        let payload = EnvelopeFormat::StatusCode
            .unwrap_body(StatusCode::OK, &body.to_string())
            .unwrap();
        assert_eq!(payload, json!({ "bids": [] }));
    }

    #[test]
    fn test_legacy_failure_keeps_code() {
        let body = json!({ "status_code": 400, "response_data": null, "error_message": "Moeda inválida" });
        let err = EnvelopeFormat::StatusCode
            .unwrap_body(StatusCode::OK, &body.to_string())
            .unwrap_err();
        assert_eq!(
            err.api_error(),
            Some(&ApiError::with_code("Moeda inválida", 400))
        );
    }

    #[test]
    fn test_legacy_envelope_not_accepted_as_current() {
        let body = json!({ "status_code": 100, "response_data": {} });
        let err = unwrap_current(body).unwrap_err();
        assert!(matches!(err, BitcoinTradeError::Protocol { .. }));
    }
}
