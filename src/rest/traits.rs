//! Trait over the public market data operations.
//!
//! Both [`PublicClient`] and [`PrivateClient`] implement [`MarketData`], so
//! code that only reads market data can accept either, or a mock.
//!
//! # Example
//!
//! ```rust,ignore
//! use bitcointrade_api_client::rest::MarketData;
//! use bitcointrade_api_client::types::Coin;
//!
//! async fn last_price<C: MarketData>(client: &C) -> Result<(), bitcointrade_api_client::BitcoinTradeError> {
//!     let ticker = client.ticker(Coin::Bitcoin).await?;
//!     println!("Last: {}", ticker["last"]);
//!     Ok(())
//! }
//! ```

use std::future::Future;

use serde_json::Value;

use crate::error::BitcoinTradeError;
use crate::rest::private::PrivateClient;
use crate::rest::public::PublicClient;
use crate::types::Coin;

/// Public market data operations.
pub trait MarketData: Send + Sync {
    /// Last 24 hours ticker for a coin's market.
    fn ticker(&self, coin: Coin) -> impl Future<Output = Result<Value, BitcoinTradeError>> + Send;

    /// Public order book for a coin's market.
    fn order_book(
        &self,
        coin: Coin,
    ) -> impl Future<Output = Result<Value, BitcoinTradeError>> + Send;

    /// Recent public trades for a coin's market.
    fn trades(&self, coin: Coin) -> impl Future<Output = Result<Value, BitcoinTradeError>> + Send;
}

impl MarketData for PublicClient {
    async fn ticker(&self, coin: Coin) -> Result<Value, BitcoinTradeError> {
        PublicClient::ticker(self, coin).await
    }

    async fn order_book(&self, coin: Coin) -> Result<Value, BitcoinTradeError> {
        PublicClient::order_book(self, coin).await
    }

    async fn trades(&self, coin: Coin) -> Result<Value, BitcoinTradeError> {
        PublicClient::trades(self, coin).await
    }
}

impl MarketData for PrivateClient {
    async fn ticker(&self, coin: Coin) -> Result<Value, BitcoinTradeError> {
        PrivateClient::ticker(self, coin).await
    }

    async fn order_book(&self, coin: Coin) -> Result<Value, BitcoinTradeError> {
        PrivateClient::order_book(self, coin).await
    }

    async fn trades(&self, coin: Coin) -> Result<Value, BitcoinTradeError> {
        PrivateClient::trades(self, coin).await
    }
}
