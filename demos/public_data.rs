//! Example: Fetching public market data from BitcoinTrade.
//!
//! Run with: RUST_LOG=debug cargo run --example public_data

use bitcointrade_api_client::rest::{ApiVersion, PublicClient};
use bitcointrade_api_client::types::Coin;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Create a client for public endpoints (no token needed)
    let client = PublicClient::builder()
        .version(ApiVersion::V2)
        .user_agent("bitcointrade-api-client-examples/public_data")
        .build_public()?;

    for coin in Coin::ALL {
        println!("=== {} ({}) ===", coin, coin.pair());

        let ticker = client.ticker(coin).await?;
        println!("Last: {}  Buy: {}  Sell: {}", ticker["last"], ticker["buy"], ticker["sell"]);

        let book = client.order_book(coin).await?;
        let depth = |side: &str| book[side].as_array().map_or(0, Vec::len);
        println!("Order book: {} bids, {} asks", depth("bids"), depth("asks"));

        let trades = client.trades(coin).await?;
        if let Some(latest) = trades.as_array().and_then(|t| t.first()) {
            println!("Latest trade: {}", latest);
        }
        println!();
    }

    Ok(())
}
