//! Public REST API endpoints (no authentication required).

use serde_json::Value;

use crate::error::BitcoinTradeError;
use crate::rest::client::{RestClient, RestClientBuilder};
use crate::rest::endpoints::{ApiVersion, Operation};
use crate::rest::private::IntoArguments;
use crate::types::Coin;
use crate::validation::Arguments;

/// Read-only BitcoinTrade client for market data.
///
/// # Example
///
/// ```rust,no_run
/// use bitcointrade_api_client::rest::PublicClient;
/// use bitcointrade_api_client::types::Coin;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = PublicClient::new()?;
///     let ticker = client.ticker(Coin::Bitcoin).await?;
///     println!("BTC ticker: {}", ticker);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct PublicClient {
    inner: RestClient,
}

impl PublicClient {
    /// Create a client with default settings (`v2`, 30 second timeout).
    pub fn new() -> Result<Self, BitcoinTradeError> {
        Self::builder().build_public()
    }

    /// Create a new client builder.
    pub fn builder() -> RestClientBuilder {
        RestClientBuilder::new()
    }

    pub(crate) fn from_inner(inner: RestClient) -> Self {
        Self { inner }
    }

    #[cfg(test)]
    pub(crate) fn inner(&self) -> &RestClient {
        &self.inner
    }

    /// The API version this client speaks.
    pub fn version(&self) -> ApiVersion {
        self.inner.version()
    }

    /// Run a public operation with raw arguments.
    ///
    /// Private operations fail with [`BitcoinTradeError::MissingCredentials`]
    /// without touching the network.
    pub async fn execute(
        &self,
        operation: Operation,
        arguments: impl IntoArguments,
    ) -> Result<Value, BitcoinTradeError> {
        if operation.is_private() {
            return Err(BitcoinTradeError::MissingCredentials);
        }
        let arguments = arguments.into_arguments(self.inner.version());
        self.inner.execute(operation, &arguments).await
    }

    /// Last 24 hours ticker for a coin's market.
    pub async fn ticker(&self, coin: Coin) -> Result<Value, BitcoinTradeError> {
        self.inner
            .execute(Operation::Ticker(coin), &Arguments::new())
            .await
    }

    /// Public order book (`asks` and `bids`) for a coin's market.
    pub async fn order_book(&self, coin: Coin) -> Result<Value, BitcoinTradeError> {
        self.inner
            .execute(Operation::OrderBook(coin), &Arguments::new())
            .await
    }

    /// Recent public trades for a coin's market.
    pub async fn trades(&self, coin: Coin) -> Result<Value, BitcoinTradeError> {
        self.inner
            .execute(Operation::Trades(coin), &Arguments::new())
            .await
    }
}

impl std::fmt::Debug for PublicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicClient")
            .field("base_url", &self.inner.base_url())
            .field("version", &self.inner.version())
            .finish()
    }
}
