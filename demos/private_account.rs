//! Example: Private account endpoints.
//!
//! Run with: BITCOINTRADE_API_TOKEN=... cargo run --example private_account

use std::sync::Arc;

use bitcointrade_api_client::auth::EnvToken;
use bitcointrade_api_client::rest::PrivateClient;
use bitcointrade_api_client::rest::private::{
    EstimatedPriceRequest, UserOrdersRequest, WithdrawalListRequest,
};
use bitcointrade_api_client::types::{Coin, OrderSide, OrderStatus, WithdrawalStatus};
use bitcointrade_api_client::BitcoinTradeError;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt::init();

    let token = match EnvToken::try_from_env() {
        Some(token) => Arc::new(token),
        None => {
            println!("Set BITCOINTRADE_API_TOKEN to run this example.");
            return Ok(());
        }
    };

    let client = PrivateClient::builder()
        .token(token)
        .user_agent("bitcointrade-api-client-examples/private_account")
        .build_private()?;

    println!("=== Balance ===");
    println!("{}", client.balance().await?);

    println!("\n=== Estimated price to buy 0.01 BTC ===");
    let estimate = EstimatedPriceRequest::new(Coin::Bitcoin, OrderSide::Buy, 0.01);
    println!("{}", client.estimated_price(estimate).await?);

    println!("\n=== Waiting orders ===");
    let request = UserOrdersRequest::default()
        .coin(Coin::Bitcoin)
        .status(OrderStatus::Waiting)
        .page(1, 20);
    println!("{}", client.user_orders(request).await?);

    println!("\n=== Pending BTC withdrawals ===");
    let request = WithdrawalListRequest::default().status(WithdrawalStatus::Pending);
    println!("{}", client.withdrawals(Coin::Bitcoin, request).await?);

    println!("\n=== Validation happens before sending ===");
    match client.summary(bitcointrade_api_client::Arguments::new()).await {
        Err(err @ BitcoinTradeError::MissingParameter(_)) => println!("Rejected locally: {}", err),
        other => println!("Unexpected: {:?}", other),
    }

    Ok(())
}
