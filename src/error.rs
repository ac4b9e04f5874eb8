//! Error types for the BitcoinTrade client library.

use thiserror::Error;

use crate::validation::{ParamType, ParamValue};

/// The main error type for all BitcoinTrade client operations.
#[derive(Error, Debug)]
pub enum BitcoinTradeError {
    /// One or more required parameters were not supplied
    #[error("missing required parameter(s): {}", .0.join(", "))]
    MissingParameter(Vec<String>),

    /// A parameter was supplied with the wrong primitive type
    #[error("type of parameter `{name}` is invalid: expected {expected}, got {actual}")]
    InvalidType {
        /// Parameter name
        name: String,
        /// Declared type
        expected: ParamType,
        /// The value that was supplied
        actual: ParamValue,
    },

    /// A parameter value is outside its enumerated set
    #[error("value of parameter `{name}` is invalid: {value} is not one of {allowed:?}")]
    InvalidValue {
        /// Parameter name
        name: String,
        /// The value that was supplied
        value: ParamValue,
        /// The legal values
        allowed: Vec<&'static str>,
    },

    /// A float parameter is NaN or infinite
    #[error("value of parameter `{name}` is invalid: {value} is not a finite number")]
    NonFiniteFloat {
        /// Parameter name
        name: String,
        /// The value that was supplied
        value: f64,
    },

    /// Connection, TLS or timeout failure from the HTTP stack
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest_middleware::Error),

    /// The response body does not match the expected envelope
    #[error("invalid response (HTTP {status}): {reason}")]
    Protocol {
        /// HTTP status of the response
        status: reqwest::StatusCode,
        /// What was wrong with the body
        reason: String,
    },

    /// BitcoinTrade returned a business-level error
    #[error("BitcoinTrade API error: {0}")]
    Api(ApiError),

    /// Query string encoding error
    #[error("query encoding error: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API token cannot be sent
    #[error("Authentication error: {0}")]
    Auth(String),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Missing API token
    #[error("Missing credentials: an API token is required for private endpoints")]
    MissingCredentials,
}

impl From<reqwest::Error> for BitcoinTradeError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(reqwest_middleware::Error::Reqwest(err))
    }
}

impl BitcoinTradeError {
    /// True for errors raised locally by argument validation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter(_)
                | Self::InvalidType { .. }
                | Self::InvalidValue { .. }
                | Self::NonFiniteFloat { .. }
        )
    }

    /// True for connection and timeout failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// The API error, if the exchange rejected the request.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// An error reported by BitcoinTrade inside the response envelope.
///
/// The message text is the only diagnostic BitcoinTrade provides, so it is
/// kept exactly as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The message from the envelope
    pub message: String,
    /// Status code from the legacy envelope, if any
    pub code: Option<i64>,
}

impl ApiError {
    /// Create an API error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// Create an API error carrying a legacy status code.
    pub fn with_code(message: impl Into<String>, code: i64) -> Self {
        Self {
            message: message.into(),
            code: Some(code),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} (status {})", self.message, code),
            None => write!(f, "{}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = ApiError::new("Saldo insuficiente");
        assert_eq!(error.to_string(), "Saldo insuficiente");

        let error = ApiError::with_code("Invalid currency", 400);
        assert_eq!(error.to_string(), "Invalid currency (status 400)");
    }

    #[test]
    fn test_missing_parameter_lists_every_key() {
        let err = BitcoinTradeError::MissingParameter(vec!["pair".into(), "amount".into()]);
        assert_eq!(err.to_string(), "missing required parameter(s): pair, amount");
        assert!(err.is_validation());
        assert!(!err.is_transport());
    }

    #[test]
    fn test_invalid_type_display() {
        let err = BitcoinTradeError::InvalidType {
            name: "amount".into(),
            expected: ParamType::Float,
            actual: ParamValue::Int(1),
        };
        assert_eq!(
            err.to_string(),
            "type of parameter `amount` is invalid: expected float, got 1"
        );
    }

    #[test]
    fn test_api_error_accessor() {
        let err = BitcoinTradeError::Api(ApiError::new("bad request"));
        assert_eq!(err.api_error().map(|e| e.message.as_str()), Some("bad request"));
        assert!(BitcoinTradeError::MissingCredentials.api_error().is_none());
    }
}
