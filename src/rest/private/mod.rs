//! Private REST API endpoints (authentication required).
//!
//! Every request made by [`PrivateClient`] carries the configured API token.

mod types;

pub use types::*;

use std::sync::Arc;

use serde_json::Value;

use crate::auth::StaticToken;
use crate::error::BitcoinTradeError;
use crate::rest::client::{RestClient, RestClientBuilder};
use crate::rest::endpoints::{ApiVersion, Operation};
use crate::types::Coin;
use crate::validation::Arguments;

/// Token-authenticated BitcoinTrade client.
///
/// Exposes the full private operation set plus the public market data
/// endpoints. Each method is one round trip; results are returned as the raw
/// `data` payload of the response, which may be an object, an array or `null`.
///
/// # Example
///
/// ```rust,no_run
/// use bitcointrade_api_client::rest::PrivateClient;
/// use bitcointrade_api_client::rest::private::CreateOrderRequest;
/// use bitcointrade_api_client::types::{Coin, OrderSide};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = PrivateClient::new("my-api-token")?;
///
///     let balance = client.balance().await?;
///     println!("Balance: {}", balance);
///
///     let order = CreateOrderRequest::limited(Coin::Bitcoin, OrderSide::Buy, 0.01, 150_000.0);
///     let created = client.create_order(order).await?;
///     println!("Created: {}", created);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct PrivateClient {
    inner: RestClient,
}

impl PrivateClient {
    /// Create a client with default settings and a fixed token.
    pub fn new(token: impl Into<String>) -> Result<Self, BitcoinTradeError> {
        Self::builder()
            .token(Arc::new(StaticToken::new(token)))
            .build_private()
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

    /// Run any operation with raw arguments.
    pub async fn execute(
        &self,
        operation: Operation,
        arguments: impl IntoArguments,
    ) -> Result<Value, BitcoinTradeError> {
        let arguments = arguments.into_arguments(self.inner.version());
        self.inner.execute(operation, &arguments).await
    }

    // ========== Market ==========

    /// Full order book with buy, sell and executed orders plus user codes.
    ///
    /// Requires the market selector (`currency` in `v1`, `pair` in `v2`).
    pub async fn order_book_full(
        &self,
        request: impl IntoArguments,
    ) -> Result<Value, BitcoinTradeError> {
        self.execute(Operation::OrderBookFull, request).await
    }

    /// Market summary for the last 24 hours.
    pub async fn summary(&self, request: impl IntoArguments) -> Result<Value, BitcoinTradeError> {
        self.execute(Operation::Summary, request).await
    }

    /// Price to buy or sell an amount at market.
    pub async fn estimated_price(
        &self,
        request: impl IntoArguments,
    ) -> Result<Value, BitcoinTradeError> {
        self.execute(Operation::EstimatedPrice, request).await
    }

    /// Place an order.
    pub async fn create_order(
        &self,
        request: impl IntoArguments,
    ) -> Result<Value, BitcoinTradeError> {
        self.execute(Operation::CreateOrder, request).await
    }

    /// List the user's orders.
    pub async fn user_orders(
        &self,
        request: impl IntoArguments,
    ) -> Result<Value, BitcoinTradeError> {
        self.execute(Operation::UserOrders, request).await
    }

    /// Cancel an order by id.
    ///
    /// BitcoinTrade answers a successful cancel with a `null` payload.
    pub async fn cancel_order(
        &self,
        request: impl IntoArguments,
    ) -> Result<Value, BitcoinTradeError> {
        self.execute(Operation::CancelOrder, request).await
    }

    // ========== Wallets ==========

    /// Available and locked balances of every wallet.
    pub async fn balance(&self) -> Result<Value, BitcoinTradeError> {
        self.execute(Operation::Balance, Arguments::new()).await
    }

    /// Fee estimates for each confirmation speed.
    pub async fn withdraw_fee(&self, coin: Coin) -> Result<Value, BitcoinTradeError> {
        self.execute(Operation::WithdrawFee(coin), Arguments::new())
            .await
    }

    /// List withdrawals of a coin.
    pub async fn withdrawals(
        &self,
        coin: Coin,
        request: impl IntoArguments,
    ) -> Result<Value, BitcoinTradeError> {
        self.execute(Operation::Withdrawals(coin), request).await
    }

    /// Withdraw a coin to an external address.
    pub async fn create_withdrawal(
        &self,
        coin: Coin,
        request: impl IntoArguments,
    ) -> Result<Value, BitcoinTradeError> {
        self.execute(Operation::CreateWithdrawal(coin), request)
            .await
    }

    /// List deposits of a coin.
    pub async fn deposits(
        &self,
        coin: Coin,
        request: impl IntoArguments,
    ) -> Result<Value, BitcoinTradeError> {
        self.execute(Operation::Deposits(coin), request).await
    }

    /// Ask BitcoinTrade to credit a deposit it has not noticed yet.
    pub async fn sync_transaction(
        &self,
        coin: Coin,
        request: impl IntoArguments,
    ) -> Result<Value, BitcoinTradeError> {
        self.execute(Operation::SyncTransaction(coin), request)
            .await
    }

    // ========== Public ==========

    /// Last 24 hours ticker for a coin's market.
    pub async fn ticker(&self, coin: Coin) -> Result<Value, BitcoinTradeError> {
        self.execute(Operation::Ticker(coin), Arguments::new()).await
    }

    /// Public order book for a coin's market.
    pub async fn order_book(&self, coin: Coin) -> Result<Value, BitcoinTradeError> {
        self.execute(Operation::OrderBook(coin), Arguments::new())
            .await
    }

    /// Recent public trades for a coin's market.
    pub async fn trades(&self, coin: Coin) -> Result<Value, BitcoinTradeError> {
        self.execute(Operation::Trades(coin), Arguments::new()).await
    }
}

impl std::fmt::Debug for PrivateClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateClient")
            .field("base_url", &self.inner.base_url())
            .field("version", &self.inner.version())
            .field("has_token", &self.inner.has_token())
            .finish()
    }
}
