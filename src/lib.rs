//! # BitcoinTrade Client
//!
//! An async Rust client library for the BitcoinTrade exchange REST API.
//!
//! ## Features
//!
//! - Public market data: ticker, order book, trades
//! - Private account operations: balances, orders, deposits, withdrawals
//! - Both historical API versions (`v1`, `v2`) from one endpoint table
//! - Arguments validated against each endpoint's schema before sending
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bitcointrade_api_client::rest::PublicClient;
//! use bitcointrade_api_client::types::Coin;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PublicClient::new()?;
//!     let book = client.order_book(Coin::Bitcoin).await?;
//!     println!("Order book: {}", book);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;
pub mod validation;

// Re-export commonly used types at crate root
pub use error::{ApiError, BitcoinTradeError};
pub use types::common::{Coin, FeeType, OrderSide, OrderStatus, OrderSubtype};
pub use validation::{Arguments, ParamValue};

/// Result type alias using BitcoinTradeError
pub type Result<T> = std::result::Result<T, BitcoinTradeError>;
