//! Common domain types for the BitcoinTrade API.
//!
//! The closed value sets here mirror the enumerated parameters BitcoinTrade
//! accepts. Each converts into a [`ParamValue`] so it can be passed wherever
//! an argument is expected.

use crate::validation::ParamValue;

/// A coin traded on BitcoinTrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coin {
    /// Bitcoin (BTC)
    Bitcoin,
    /// Ethereum (ETH)
    Ethereum,
    /// Litecoin (LTC)
    Litecoin,
    /// Bitcoin Cash (BCH)
    BitcoinCash,
}

impl Coin {
    /// Every supported coin.
    pub const ALL: [Coin; 4] = [
        Coin::Bitcoin,
        Coin::Ethereum,
        Coin::Litecoin,
        Coin::BitcoinCash,
    ];

    /// Ticker symbol, e.g. `BTC`.
    pub fn symbol(self) -> &'static str {
        match self {
            Coin::Bitcoin => "BTC",
            Coin::Ethereum => "ETH",
            Coin::Litecoin => "LTC",
            Coin::BitcoinCash => "BCH",
        }
    }

    /// BRL trading pair, e.g. `BRLBTC`.
    pub fn pair(self) -> &'static str {
        match self {
            Coin::Bitcoin => "BRLBTC",
            Coin::Ethereum => "BRLETH",
            Coin::Litecoin => "BRLLTC",
            Coin::BitcoinCash => "BRLBCH",
        }
    }

    /// Path segment of the coin's wallet endpoints, e.g. `bitcoin`.
    pub fn wallet(self) -> &'static str {
        match self {
            Coin::Bitcoin => "bitcoin",
            Coin::Ethereum => "ethereum",
            Coin::Litecoin => "litecoin",
            Coin::BitcoinCash => "bitcoincash",
        }
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Buy or sell side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl OrderSide {
    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderSide::Buy => "buy",
            OrderSide::Sell => "sell",
        }
    }
}

/// How an order is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderSubtype {
    /// Execute immediately at the best available price
    Market,
    /// Execute at the unit price or better
    Limited,
    /// Place a limit order once the stop price is reached
    StopLimit,
}

impl OrderSubtype {
    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderSubtype::Market => "market",
            OrderSubtype::Limited => "limited",
            OrderSubtype::StopLimit => "stopLimit",
        }
    }
}

/// Status filter for the user's orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// Fully filled
    ExecutedCompletely,
    /// Partially filled
    ExecutedPartially,
    /// Open, nothing filled yet
    Waiting,
    /// Canceled
    Canceled,
}

impl OrderStatus {
    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::ExecutedCompletely => "executed_completely",
            OrderStatus::ExecutedPartially => "executed_partially",
            OrderStatus::Waiting => "waiting",
            OrderStatus::Canceled => "canceled",
        }
    }
}

/// Confirmation speed for a withdrawal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FeeType {
    /// Highest fee, fastest confirmation
    Fast,
    /// Default fee
    #[default]
    Regular,
    /// Lowest fee
    Slow,
}

impl FeeType {
    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            FeeType::Fast => "fast",
            FeeType::Regular => "regular",
            FeeType::Slow => "slow",
        }
    }
}

/// Status filter for withdrawals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WithdrawalStatus {
    /// Not yet sent
    Pending,
    /// Sent and confirmed
    Confirmed,
    /// Canceled
    Canceled,
}

impl WithdrawalStatus {
    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            WithdrawalStatus::Pending => "pending",
            WithdrawalStatus::Confirmed => "confirmed",
            WithdrawalStatus::Canceled => "canceled",
        }
    }
}

/// Status filter for deposits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepositStatus {
    /// Seen on chain, waiting for confirmations
    ConfirmationPending,
    /// Credited
    Confirmed,
    /// Canceled
    Canceled,
}

impl DepositStatus {
    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            DepositStatus::ConfirmationPending => "confirmation_pending",
            DepositStatus::Confirmed => "confirmed",
            DepositStatus::Canceled => "canceled",
        }
    }
}

macro_rules! wire_value {
    ($($ty:ty),*) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.as_str())
                }
            }

            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::Str(value.as_str().to_string())
                }
            }
        )*
    };
}

wire_value!(
    OrderSide,
    OrderSubtype,
    OrderStatus,
    FeeType,
    WithdrawalStatus,
    DepositStatus
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::IntoArguments;

    #[test]
    fn test_coin_names() {
        assert_eq!(Coin::Bitcoin.symbol(), "BTC");
        assert_eq!(Coin::BitcoinCash.pair(), "BRLBCH");
        assert_eq!(Coin::BitcoinCash.wallet(), "bitcoincash");
        assert_eq!(Coin::Litecoin.to_string(), "LTC");
    }

    #[test]
    fn test_wire_values_accepted_by_endpoints() {
        use crate::rest::{ApiVersion, Operation};
        use crate::validation::Arguments;

        let version = ApiVersion::V2;
        let user_orders = version.endpoint(Operation::UserOrders).params;
        for status in [
            OrderStatus::ExecutedCompletely,
            OrderStatus::ExecutedPartially,
            OrderStatus::Waiting,
            OrderStatus::Canceled,
        ] {
            let args = Arguments::new().with("status", status);
            assert!(user_orders.validate(&args).is_ok(), "{}", status);
        }

        let create_order = version.endpoint(Operation::CreateOrder).params;
        for subtype in [OrderSubtype::Market, OrderSubtype::Limited, OrderSubtype::StopLimit] {
            let args = Coin::Bitcoin
                .into_arguments(version)
                .with("amount", 1.0)
                .with("type", OrderSide::Buy)
                .with("subtype", subtype)
                .with("unit_price", 1.0)
                .with("request_price", 1.0);
            assert!(create_order.validate(&args).is_ok(), "{}", subtype);
        }

        let deposits = version.endpoint(Operation::Deposits(Coin::Ethereum)).params;
        for status in [
            DepositStatus::ConfirmationPending,
            DepositStatus::Confirmed,
            DepositStatus::Canceled,
        ] {
            let args = Arguments::new().with("status", status);
            assert!(deposits.validate(&args).is_ok(), "{}", status);
        }

        let withdrawals = version.endpoint(Operation::Withdrawals(Coin::Ethereum)).params;
        for status in [
            WithdrawalStatus::Pending,
            WithdrawalStatus::Confirmed,
            WithdrawalStatus::Canceled,
        ] {
            let args = Arguments::new().with("status", status);
            assert!(withdrawals.validate(&args).is_ok(), "{}", status);
        }
    }

    #[test]
    fn test_into_param_value() {
        assert_eq!(ParamValue::from(OrderSide::Sell), ParamValue::from("sell"));
        assert_eq!(ParamValue::from(FeeType::default()), ParamValue::from("regular"));
    }
}
