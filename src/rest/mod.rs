//! BitcoinTrade REST API clients.
//!
//! - [`PublicClient`] reads market data without a token.
//! - [`PrivateClient`] carries an API token and exposes account operations.
//!
//! Both share one pipeline: the [`Operation`] is looked up in the endpoint
//! table of the configured [`ApiVersion`], the arguments are validated
//! against that endpoint's parameter spec, one HTTP request is sent and the
//! response envelope is unwrapped.

mod client;
mod endpoints;
mod envelope;
pub mod private;
pub mod public;
mod traits;

pub use client::{DEFAULT_TIMEOUT, RestClientBuilder};
pub use endpoints::*;
pub use envelope::{EnvelopeFormat, LEGACY_SUCCESS_CODE};
pub use private::{IntoArguments, PrivateClient};
pub use public::PublicClient;
pub use traits::MarketData;
