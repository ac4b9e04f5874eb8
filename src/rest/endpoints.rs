//! BitcoinTrade REST API endpoint table.
//!
//! Every logical [`Operation`] resolves, per [`ApiVersion`], to an
//! [`Endpoint`]: HTTP method, path category, optional action segment and the
//! [`ParamSpec`] its arguments are validated against.

use std::borrow::Cow;

use reqwest::Method;

use crate::types::Coin;
use crate::validation::{Param, ParamSpec};

/// Default BitcoinTrade API host. Requests go to `https://{DEFAULT_HOST}`.
pub const DEFAULT_HOST: &str = "api.bitcointrade.com.br";

/// Historical API versions. They are not interoperable: paths are shared but
/// parameter names differ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// `v1`: markets addressed by coin symbol (`currency=BTC`)
    V1,
    /// `v2`: markets addressed by BRL pair (`pair=BRLBTC`)
    #[default]
    V2,
}

impl ApiVersion {
    /// Path prefix, e.g. `v2`.
    pub fn as_str(self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
            ApiVersion::V2 => "v2",
        }
    }

    /// Name of the market selector parameter.
    pub fn market_param(self) -> &'static str {
        match self {
            ApiVersion::V1 => "currency",
            ApiVersion::V2 => "pair",
        }
    }

    /// How a coin's market is written in this version.
    pub fn market(self, coin: Coin) -> &'static str {
        match self {
            ApiVersion::V1 => coin.symbol(),
            ApiVersion::V2 => coin.pair(),
        }
    }

    /// Resolve an operation to its endpoint in this version.
    pub fn endpoint(self, operation: Operation) -> Endpoint {
        let specs = match self {
            ApiVersion::V1 => &v1::SPECS,
            ApiVersion::V2 => &v2::SPECS,
        };
        let public = |coin: Coin, action: &str| {
            Endpoint::new(
                Method::GET,
                "public",
                Some(format!("{}/{}", self.market(coin), action).into()),
                &ParamSpec::EMPTY,
            )
        };
        let wallet = |method: Method, coin: Coin, action: &'static str, params: &'static ParamSpec| {
            Endpoint::new(method, coin.wallet(), Some(action.into()), params)
        };

        match operation {
            Operation::Ticker(coin) => public(coin, "ticker"),
            Operation::OrderBook(coin) => public(coin, "orders"),
            Operation::Trades(coin) => public(coin, "trades"),
            Operation::OrderBookFull => {
                Endpoint::new(Method::GET, "market", None, specs.order_book_full)
            }
            Operation::Summary => {
                Endpoint::new(Method::GET, "market", Some("summary".into()), specs.summary)
            }
            Operation::EstimatedPrice => Endpoint::new(
                Method::GET,
                "market",
                Some("estimated_price".into()),
                specs.estimated_price,
            ),
            Operation::CreateOrder => Endpoint::new(
                Method::POST,
                "market",
                Some("create_order".into()),
                specs.create_order,
            ),
            Operation::UserOrders => Endpoint::new(
                Method::GET,
                "market",
                Some("user_orders/list".into()),
                specs.user_orders,
            ),
            Operation::CancelOrder => Endpoint::new(
                Method::DELETE,
                "market",
                Some("user_orders".into()),
                &CANCEL_ORDER,
            ),
            Operation::Balance => Endpoint::new(
                Method::GET,
                "wallets",
                Some("balance".into()),
                &ParamSpec::EMPTY,
            ),
            Operation::WithdrawFee(coin) => {
                wallet(Method::GET, coin, "withdraw/fee", &ParamSpec::EMPTY)
            }
            Operation::Withdrawals(coin) => wallet(Method::GET, coin, "withdraw", &WITHDRAWALS),
            Operation::CreateWithdrawal(coin) => {
                wallet(Method::POST, coin, "withdraw", specs.create_withdrawal)
            }
            Operation::Deposits(coin) => wallet(Method::GET, coin, "deposits", &DEPOSITS),
            Operation::SyncTransaction(coin) => {
                wallet(Method::POST, coin, "sync_transaction", &SYNC_TRANSACTION)
            }
        }
    }
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A logical BitcoinTrade operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Last 24h ticker for a market.
    Ticker(Coin),
    /// Public order book for a market.
    OrderBook(Coin),
    /// Recent public trades for a market.
    Trades(Coin),
    /// Full order book with user codes.
    OrderBookFull,
    /// 24h market summary.
    Summary,
    /// Price estimate for a market order.
    EstimatedPrice,
    /// Place an order.
    CreateOrder,
    /// List the user's orders.
    UserOrders,
    /// Cancel an order by id.
    CancelOrder,
    /// Wallet balances.
    Balance,
    /// Withdrawal fee estimates for a coin.
    WithdrawFee(Coin),
    /// List withdrawals of a coin.
    Withdrawals(Coin),
    /// Withdraw a coin to an address.
    CreateWithdrawal(Coin),
    /// List deposits of a coin.
    Deposits(Coin),
    /// Ask BitcoinTrade to pick up a deposit transaction by hash.
    SyncTransaction(Coin),
}

impl Operation {
    /// Whether this operation needs an API token.
    pub fn is_private(&self) -> bool {
        !matches!(
            self,
            Operation::Ticker(_) | Operation::OrderBook(_) | Operation::Trades(_)
        )
    }
}

/// A resolved endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// HTTP method.
    pub method: Method,
    /// First path segment after the version.
    pub category: Cow<'static, str>,
    /// Remaining path, if any.
    pub action: Option<Cow<'static, str>>,
    /// Accepted arguments.
    pub params: &'static ParamSpec,
}

impl Endpoint {
    fn new(
        method: Method,
        category: impl Into<Cow<'static, str>>,
        action: Option<Cow<'static, str>>,
        params: &'static ParamSpec,
    ) -> Self {
        Self {
            method,
            category: category.into(),
            action,
            params,
        }
    }

    /// Path below the host: `/{version}/{category}[/{action}]`.
    pub fn path(&self, version: ApiVersion) -> String {
        match &self.action {
            Some(action) => format!("/{}/{}/{}", version, self.category, action),
            None => format!("/{}/{}", version, self.category),
        }
    }
}

const CURRENCIES: &[&str] = &["BTC", "LTC", "BCH", "ETH"];
const PAIRS: &[&str] = &["BRLBTC", "BRLLTC", "BRLBCH", "BRLETH"];
const SIDES: &[&str] = &["buy", "sell"];
const SUBTYPES: &[&str] = &["market", "limited", "stopLimit"];
const ORDER_STATUSES: &[&str] = &[
    "executed_completely",
    "executed_partially",
    "waiting",
    "canceled",
];
const FEE_TYPES: &[&str] = &["fast", "regular", "slow"];
const WITHDRAWAL_STATUSES: &[&str] = &["pending", "confirmed", "canceled"];
const DEPOSIT_STATUSES: &[&str] = &["confirmation_pending", "confirmed", "canceled"];

static CANCEL_ORDER: ParamSpec = ParamSpec::new(&[Param::string("id")], &[]);

static WITHDRAWALS: ParamSpec = ParamSpec::new(
    &[],
    &[
        Param::string("start_date"),
        Param::string("end_date"),
        Param::one_of("status", WITHDRAWAL_STATUSES),
        Param::integer("page_size"),
        Param::integer("current_page"),
    ],
);

static DEPOSITS: ParamSpec = ParamSpec::new(
    &[],
    &[
        Param::string("start_date"),
        Param::string("end_date"),
        Param::one_of("status", DEPOSIT_STATUSES),
        Param::integer("page_size"),
        Param::integer("current_page"),
    ],
);

static SYNC_TRANSACTION: ParamSpec = ParamSpec::new(&[Param::string("hash")], &[]);

/// Parameter specs that differ between versions.
struct VersionSpecs {
    order_book_full: &'static ParamSpec,
    summary: &'static ParamSpec,
    estimated_price: &'static ParamSpec,
    create_order: &'static ParamSpec,
    user_orders: &'static ParamSpec,
    create_withdrawal: &'static ParamSpec,
}

mod v1 {
    use super::*;

    static MARKET: ParamSpec = ParamSpec::new(&[Param::one_of("currency", CURRENCIES)], &[]);

    static ESTIMATED_PRICE: ParamSpec = ParamSpec::new(
        &[
            Param::one_of("currency", CURRENCIES),
            Param::float("amount"),
            Param::one_of("type", SIDES),
        ],
        &[],
    );

    static CREATE_ORDER: ParamSpec = ParamSpec::new(
        &[
            Param::one_of("currency", CURRENCIES),
            Param::float("amount"),
            Param::one_of("type", SIDES),
            Param::one_of("subtype", SUBTYPES),
            Param::float("unit_price"),
        ],
        &[Param::float("request_price")],
    );

    static USER_ORDERS: ParamSpec = ParamSpec::new(
        &[],
        &[
            Param::string("start_date"),
            Param::string("end_date"),
            Param::one_of("status", ORDER_STATUSES),
            Param::one_of("type", SIDES),
            Param::integer("page_size"),
            Param::integer("current_page"),
            Param::one_of("currency", CURRENCIES),
        ],
    );

    static CREATE_WITHDRAWAL: ParamSpec = ParamSpec::new(
        &[
            Param::string("destination"),
            Param::float("fee"),
            Param::one_of("type", FEE_TYPES),
            Param::float("amount"),
        ],
        &[],
    );

    pub(super) static SPECS: VersionSpecs = VersionSpecs {
        order_book_full: &MARKET,
        summary: &MARKET,
        estimated_price: &ESTIMATED_PRICE,
        create_order: &CREATE_ORDER,
        user_orders: &USER_ORDERS,
        create_withdrawal: &CREATE_WITHDRAWAL,
    };
}

mod v2 {
    use super::*;

    static MARKET: ParamSpec = ParamSpec::new(&[Param::one_of("pair", PAIRS)], &[]);

    static ESTIMATED_PRICE: ParamSpec = ParamSpec::new(
        &[
            Param::one_of("pair", PAIRS),
            Param::float("amount"),
            Param::one_of("type", SIDES),
        ],
        &[],
    );

    static CREATE_ORDER: ParamSpec = ParamSpec::new(
        &[
            Param::one_of("pair", PAIRS),
            Param::float("amount"),
            Param::one_of("type", SIDES),
            Param::one_of("subtype", SUBTYPES),
            Param::float("unit_price"),
            Param::float("request_price"),
        ],
        &[],
    );

    static USER_ORDERS: ParamSpec = ParamSpec::new(
        &[],
        &[
            Param::string("start_date"),
            Param::string("end_date"),
            Param::one_of("status", ORDER_STATUSES),
            Param::one_of("type", SIDES),
            Param::integer("page_size"),
            Param::integer("current_page"),
            Param::one_of("pair", PAIRS),
        ],
    );

    static CREATE_WITHDRAWAL: ParamSpec = ParamSpec::new(
        &[
            Param::string("destination"),
            Param::one_of("fee_type", FEE_TYPES),
            Param::float("amount"),
        ],
        &[],
    );

    pub(super) static SPECS: VersionSpecs = VersionSpecs {
        order_book_full: &MARKET,
        summary: &MARKET,
        estimated_price: &ESTIMATED_PRICE,
        create_order: &CREATE_ORDER,
        user_orders: &USER_ORDERS,
        create_withdrawal: &CREATE_WITHDRAWAL,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_operations() -> Vec<Operation> {
        let mut ops = vec![
            Operation::OrderBookFull,
            Operation::Summary,
            Operation::EstimatedPrice,
            Operation::CreateOrder,
            Operation::UserOrders,
            Operation::CancelOrder,
            Operation::Balance,
        ];
        for coin in Coin::ALL {
            ops.extend([
                Operation::Ticker(coin),
                Operation::OrderBook(coin),
                Operation::Trades(coin),
                Operation::WithdrawFee(coin),
                Operation::Withdrawals(coin),
                Operation::CreateWithdrawal(coin),
                Operation::Deposits(coin),
                Operation::SyncTransaction(coin),
            ]);
        }
        ops
    }

    #[test]
    fn test_required_and_optional_are_disjoint() {
        for version in [ApiVersion::V1, ApiVersion::V2] {
            for op in all_operations() {
                let params = version.endpoint(op).params;
                for required in params.required {
                    assert!(
                        !params.optional.iter().any(|p| p.name == required.name),
                        "{:?} {:?} declares `{}` twice",
                        version,
                        op,
                        required.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_market_selector_is_declared() {
        for version in [ApiVersion::V1, ApiVersion::V2] {
            let key = version.market_param();
            for op in [
                Operation::OrderBookFull,
                Operation::Summary,
                Operation::EstimatedPrice,
                Operation::CreateOrder,
                Operation::UserOrders,
            ] {
                assert!(version.endpoint(op).params.declares(key));
            }
        }
    }

    #[test]
    fn test_public_paths() {
        let endpoint = ApiVersion::V1.endpoint(Operation::Ticker(Coin::Bitcoin));
        assert_eq!(endpoint.method, Method::GET);
        assert_eq!(endpoint.path(ApiVersion::V1), "/v1/public/BTC/ticker");

        let endpoint = ApiVersion::V2.endpoint(Operation::OrderBook(Coin::Ethereum));
        assert_eq!(endpoint.path(ApiVersion::V2), "/v2/public/BRLETH/orders");
    }

    #[test]
    fn test_market_paths() {
        let v = ApiVersion::V2;
        assert_eq!(v.endpoint(Operation::OrderBookFull).path(v), "/v2/market");
        assert_eq!(v.endpoint(Operation::Summary).path(v), "/v2/market/summary");
        assert_eq!(
            v.endpoint(Operation::UserOrders).path(v),
            "/v2/market/user_orders/list"
        );

        let cancel = v.endpoint(Operation::CancelOrder);
        assert_eq!(cancel.method, Method::DELETE);
        assert_eq!(cancel.path(v), "/v2/market/user_orders");

        let create = v.endpoint(Operation::CreateOrder);
        assert_eq!(create.method, Method::POST);
    }

    #[test]
    fn test_wallet_paths() {
        let v = ApiVersion::V1;
        assert_eq!(
            v.endpoint(Operation::WithdrawFee(Coin::Litecoin)).path(v),
            "/v1/litecoin/withdraw/fee"
        );
        assert_eq!(
            v.endpoint(Operation::Deposits(Coin::BitcoinCash)).path(v),
            "/v1/bitcoincash/deposits"
        );
        assert_eq!(v.endpoint(Operation::Balance).path(v), "/v1/wallets/balance");

        let withdraw = v.endpoint(Operation::CreateWithdrawal(Coin::Bitcoin));
        assert_eq!(withdraw.method, Method::POST);
        assert_eq!(withdraw.path(v), "/v1/bitcoin/withdraw");

        let listing = v.endpoint(Operation::Withdrawals(Coin::Bitcoin));
        assert_eq!(listing.method, Method::GET);
        assert_eq!(listing.path(v), "/v1/bitcoin/withdraw");
        assert!(listing.params.required.is_empty());
    }

    #[test]
    fn test_versions_differ_in_parameter_names() {
        let v1 = ApiVersion::V1.endpoint(Operation::CreateWithdrawal(Coin::Bitcoin));
        let v2 = ApiVersion::V2.endpoint(Operation::CreateWithdrawal(Coin::Bitcoin));
        assert!(v1.params.declares("fee"));
        assert!(!v2.params.declares("fee"));
        assert!(v2.params.declares("fee_type"));
    }

    #[test]
    fn test_private_operations() {
        assert!(!Operation::Trades(Coin::Bitcoin).is_private());
        assert!(Operation::Balance.is_private());
        assert!(Operation::SyncTransaction(Coin::Ethereum).is_private());
    }
}
