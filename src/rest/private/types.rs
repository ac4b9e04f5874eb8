//! Request types for private REST API endpoints.
//!
//! Every private method accepts anything implementing [`IntoArguments`]: a raw
//! [`Arguments`] map, or one of the typed requests below. Typed requests know
//! how each API version names their fields (`currency=BTC` in `v1`,
//! `pair=BRLBTC` in `v2`), and all of them still go through the same
//! validation as raw arguments.

use crate::rest::endpoints::ApiVersion;
use crate::types::{
    Coin, DepositStatus, FeeType, OrderSide, OrderStatus, OrderSubtype, WithdrawalStatus,
};
use crate::validation::{Arguments, ParamValue};

/// Conversion into call arguments for a given API version.
pub trait IntoArguments {
    /// Produce the arguments as `version` names them.
    fn into_arguments(self, version: ApiVersion) -> Arguments;
}

impl IntoArguments for Arguments {
    fn into_arguments(self, _version: ApiVersion) -> Arguments {
        self
    }
}

/// A coin selects its market: `currency=BTC` in `v1`, `pair=BRLBTC` in `v2`.
impl IntoArguments for Coin {
    fn into_arguments(self, version: ApiVersion) -> Arguments {
        Arguments::new().with(version.market_param(), version.market(self))
    }
}

fn market_selector(version: ApiVersion, coin: Option<Coin>) -> (&'static str, ParamValue) {
    (
        version.market_param(),
        coin.map(|c| version.market(c)).into(),
    )
}

/// Request for a market order price estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatedPriceRequest {
    /// Market.
    pub coin: Coin,
    /// Buy or sell.
    pub side: OrderSide,
    /// Amount of coins.
    pub amount: f64,
}

impl EstimatedPriceRequest {
    /// Create a new estimate request.
    pub fn new(coin: Coin, side: OrderSide, amount: f64) -> Self {
        Self { coin, side, amount }
    }
}

impl IntoArguments for EstimatedPriceRequest {
    fn into_arguments(self, version: ApiVersion) -> Arguments {
        self.coin
            .into_arguments(version)
            .with("type", self.side)
            .with("amount", self.amount)
    }
}

/// Request to place an order.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrderRequest {
    /// Market.
    pub coin: Coin,
    /// Buy or sell.
    pub side: OrderSide,
    /// Execution style.
    pub subtype: OrderSubtype,
    /// Amount of coins.
    pub amount: f64,
    /// Price per coin in BRL.
    pub unit_price: f64,
    /// Total order value in BRL. Required by `v2`.
    pub request_price: Option<f64>,
}

impl CreateOrderRequest {
    /// Create a new order request.
    pub fn new(
        coin: Coin,
        side: OrderSide,
        subtype: OrderSubtype,
        amount: f64,
        unit_price: f64,
    ) -> Self {
        Self {
            coin,
            side,
            subtype,
            amount,
            unit_price,
            request_price: None,
        }
    }

    /// A limited order. BitcoinTrade ignores `request_price` for limited
    /// orders, so it is filled with `amount * unit_price`.
    pub fn limited(coin: Coin, side: OrderSide, amount: f64, unit_price: f64) -> Self {
        Self::new(coin, side, OrderSubtype::Limited, amount, unit_price)
            .request_price(amount * unit_price)
    }

    /// Set the total order value.
    pub fn request_price(mut self, request_price: f64) -> Self {
        self.request_price = Some(request_price);
        self
    }
}

impl IntoArguments for CreateOrderRequest {
    fn into_arguments(self, version: ApiVersion) -> Arguments {
        self.coin
            .into_arguments(version)
            .with("type", self.side)
            .with("subtype", self.subtype)
            .with("amount", self.amount)
            .with("unit_price", self.unit_price)
            .with("request_price", self.request_price)
    }
}

/// Filters for listing the user's orders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserOrdersRequest {
    /// Only this market.
    pub coin: Option<Coin>,
    /// Only orders in this status.
    pub status: Option<OrderStatus>,
    /// Only buys or sells.
    pub side: Option<OrderSide>,
    /// ISO-8601 lower bound.
    pub start_date: Option<String>,
    /// ISO-8601 upper bound.
    pub end_date: Option<String>,
    /// Page size (1-1000).
    pub page_size: Option<u32>,
    /// Page number.
    pub current_page: Option<u32>,
}

impl UserOrdersRequest {
    /// Filter by market.
    pub fn coin(mut self, coin: Coin) -> Self {
        self.coin = Some(coin);
        self
    }

    /// Filter by status.
    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Filter by side.
    pub fn side(mut self, side: OrderSide) -> Self {
        self.side = Some(side);
        self
    }

    /// Restrict to a date range (ISO-8601).
    pub fn between(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self.end_date = Some(end.into());
        self
    }

    /// Select a page.
    pub fn page(mut self, current_page: u32, page_size: u32) -> Self {
        self.current_page = Some(current_page);
        self.page_size = Some(page_size);
        self
    }
}

impl IntoArguments for UserOrdersRequest {
    fn into_arguments(self, version: ApiVersion) -> Arguments {
        let (market_key, market) = market_selector(version, self.coin);
        Arguments::new()
            .with(market_key, market)
            .with("status", self.status)
            .with("type", self.side)
            .with("start_date", self.start_date)
            .with("end_date", self.end_date)
            .with("page_size", self.page_size)
            .with("current_page", self.current_page)
    }
}

/// Request to cancel an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelOrderRequest {
    /// Order id.
    pub id: String,
}

impl CancelOrderRequest {
    /// Cancel the order with this id.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl IntoArguments for CancelOrderRequest {
    fn into_arguments(self, _version: ApiVersion) -> Arguments {
        Arguments::new().with("id", self.id)
    }
}

/// Filters for listing deposits or withdrawals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferListRequest<S> {
    /// Only transfers in this status.
    pub status: Option<S>,
    /// ISO-8601 lower bound.
    pub start_date: Option<String>,
    /// ISO-8601 upper bound.
    pub end_date: Option<String>,
    /// Page size (1-1000).
    pub page_size: Option<u32>,
    /// Page number.
    pub current_page: Option<u32>,
}

/// Filters for [`PrivateClient::withdrawals`](crate::rest::PrivateClient::withdrawals).
pub type WithdrawalListRequest = TransferListRequest<WithdrawalStatus>;

/// Filters for [`PrivateClient::deposits`](crate::rest::PrivateClient::deposits).
pub type DepositListRequest = TransferListRequest<DepositStatus>;

impl<S> Default for TransferListRequest<S> {
    fn default() -> Self {
        Self {
            status: None,
            start_date: None,
            end_date: None,
            page_size: None,
            current_page: None,
        }
    }
}

impl<S> TransferListRequest<S> {
    /// Filter by status.
    pub fn status(mut self, status: S) -> Self {
        self.status = Some(status);
        self
    }

    /// Restrict to a date range (ISO-8601).
    pub fn between(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self.end_date = Some(end.into());
        self
    }

    /// Select a page.
    pub fn page(mut self, current_page: u32, page_size: u32) -> Self {
        self.current_page = Some(current_page);
        self.page_size = Some(page_size);
        self
    }
}

impl<S: Into<ParamValue>> IntoArguments for TransferListRequest<S> {
    fn into_arguments(self, _version: ApiVersion) -> Arguments {
        Arguments::new()
            .with("status", self.status)
            .with("start_date", self.start_date)
            .with("end_date", self.end_date)
            .with("page_size", self.page_size)
            .with("current_page", self.current_page)
    }
}

/// Request to withdraw coins to an external address.
#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawRequest {
    /// Destination wallet address.
    pub destination: String,
    /// Amount of coins to send.
    pub amount: f64,
    /// Confirmation speed.
    pub fee_type: FeeType,
    /// Network fee to pay. Required by `v1`, not sent by `v2`.
    pub fee: Option<f64>,
}

impl WithdrawRequest {
    /// Create a new withdrawal request.
    pub fn new(destination: impl Into<String>, amount: f64, fee_type: FeeType) -> Self {
        Self {
            destination: destination.into(),
            amount,
            fee_type,
            fee: None,
        }
    }

    /// Set the network fee (`v1` only).
    pub fn fee(mut self, fee: f64) -> Self {
        self.fee = Some(fee);
        self
    }
}

impl IntoArguments for WithdrawRequest {
    fn into_arguments(self, version: ApiVersion) -> Arguments {
        let args = Arguments::new()
            .with("destination", self.destination)
            .with("amount", self.amount);
        match version {
            ApiVersion::V1 => args.with("type", self.fee_type).with("fee", self.fee),
            ApiVersion::V2 => args.with("fee_type", self.fee_type),
        }
    }
}

/// Request to sync a deposit transaction BitcoinTrade has not picked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncTransactionRequest {
    /// Transaction hash.
    pub hash: String,
}

impl SyncTransactionRequest {
    /// Sync the transaction with this hash.
    pub fn new(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }
}

impl IntoArguments for SyncTransactionRequest {
    fn into_arguments(self, _version: ApiVersion) -> Arguments {
        Arguments::new().with("hash", self.hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::endpoints::Operation;

    #[test]
    fn test_coin_selects_market_per_version() {
        assert_eq!(
            Coin::Bitcoin.into_arguments(ApiVersion::V1),
            Arguments::new().with("currency", "BTC")
        );
        assert_eq!(
            Coin::Bitcoin.into_arguments(ApiVersion::V2),
            Arguments::new().with("pair", "BRLBTC")
        );
    }

    #[test]
    fn test_limited_order_is_valid_in_both_versions() {
        let request = CreateOrderRequest::limited(Coin::Ethereum, OrderSide::Sell, 0.5, 3000.0);
        for version in [ApiVersion::V1, ApiVersion::V2] {
            let args = request.clone().into_arguments(version);
            let spec = version.endpoint(Operation::CreateOrder).params;
            assert!(spec.validate(&args).is_ok(), "{:?}", version);
        }
        assert_eq!(request.request_price, Some(1500.0));
    }

    #[test]
    fn test_v2_order_needs_request_price() {
        let request = CreateOrderRequest::new(
            Coin::Bitcoin,
            OrderSide::Buy,
            OrderSubtype::Market,
            0.1,
            70000.0,
        );
        let args = request.into_arguments(ApiVersion::V2);
        let spec = ApiVersion::V2.endpoint(Operation::CreateOrder).params;
        assert!(spec.validate(&args).is_err());
    }

    #[test]
    fn test_user_orders_without_filters_sends_nothing() {
        let args = UserOrdersRequest::default().into_arguments(ApiVersion::V2);
        assert_eq!(args.present().count(), 0);
    }

    #[test]
    fn test_transfer_list_filters() {
        let args = WithdrawalListRequest::default()
            .status(WithdrawalStatus::Pending)
            .page(2, 50)
            .into_arguments(ApiVersion::V2);
        assert_eq!(args.get("status"), Some(&ParamValue::from("pending")));
        assert_eq!(args.get("page_size"), Some(&ParamValue::Int(50)));
        assert!(!args.is_present("start_date"));
    }

    #[test]
    fn test_withdraw_keys_per_version() {
        let request = WithdrawRequest::new("1FSzwTdndhtbjGtRTKiu2vQHHrVAPUGSZG", 0.1, FeeType::Fast)
            .fee(0.0001);

        let v1 = request.clone().into_arguments(ApiVersion::V1);
        assert_eq!(v1.get("type"), Some(&ParamValue::from("fast")));
        assert_eq!(v1.get("fee"), Some(&ParamValue::Float(0.0001)));

        let v2 = request.into_arguments(ApiVersion::V2);
        assert_eq!(v2.get("fee_type"), Some(&ParamValue::from("fast")));
        assert!(v2.get("fee").is_none());
    }
}
