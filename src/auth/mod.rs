//! Authentication for private BitcoinTrade endpoints.
//!
//! Private endpoints use a single static bearer token. The token is held in a
//! [`secrecy::SecretString`] and only exposed when the `Authorization` header
//! is built.

mod credentials;

pub use credentials::{ApiToken, EnvToken, StaticToken, TOKEN_ENV_VAR, TokenProvider};
