//! API token management for BitcoinTrade authentication.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

/// Default environment variable holding the API token.
pub const TOKEN_ENV_VAR: &str = "BITCOINTRADE_API_TOKEN";

/// A BitcoinTrade API token.
///
/// Sent as `Authorization: ApiToken <token>` on every private request.
#[derive(Clone)]
pub struct ApiToken {
    token: SecretString,
}

impl ApiToken {
    /// Wrap a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
        }
    }

    /// Get the raw token.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.token.expose_secret()
    }

    /// Value of the `Authorization` header for this token.
    pub(crate) fn authorization(&self) -> String {
        format!("ApiToken {}", self.expose_secret())
    }
}

impl std::fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiToken")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing the API token.
///
/// Implement this trait to customize how the token is retrieved,
/// for example from a secrets manager.
pub trait TokenProvider: Send + Sync {
    /// Get the token.
    fn get_token(&self) -> &ApiToken;
}

/// Token provider that holds the token directly.
#[derive(Clone)]
pub struct StaticToken {
    token: ApiToken,
}

impl StaticToken {
    /// Create a new static token provider.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: ApiToken::new(token),
        }
    }
}

impl TokenProvider for StaticToken {
    fn get_token(&self) -> &ApiToken {
        &self.token
    }
}

impl TokenProvider for Arc<StaticToken> {
    fn get_token(&self) -> &ApiToken {
        &self.token
    }
}

/// Token provider that reads from an environment variable.
///
/// By default, reads from `BITCOINTRADE_API_TOKEN`.
pub struct EnvToken {
    token: ApiToken,
}

impl EnvToken {
    /// Read the token from `BITCOINTRADE_API_TOKEN`.
    ///
    /// Returns `None` if the variable is not set or empty.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_var(TOKEN_ENV_VAR)
    }

    /// Read the token from a custom environment variable.
    ///
    /// Returns `None` if the variable is not set or empty.
    pub fn try_from_env_var(var: &str) -> Option<Self> {
        let token = std::env::var(var).ok().filter(|t| !t.is_empty())?;
        Some(Self {
            token: ApiToken::new(token),
        })
    }
}

impl TokenProvider for EnvToken {
    fn get_token(&self) -> &ApiToken {
        &self.token
    }
}
