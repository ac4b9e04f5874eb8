//! Common types used across the BitcoinTrade client library.

pub mod common;

pub use common::*;
