// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Monetary value object for wallet user interfaces.
//!
//! An [`Amount`] pairs an integer subunit quantity (wei, satoshis, cents) with
//! a [`Currency`] descriptor and an optional fiat valuation. All arithmetic
//! runs on [`bigdecimal::BigDecimal`], so 18-decimal token balances are
//! handled without floating-point error, and every rendered number uses plain
//! notation with en-US grouping.
//!
//! # Quick start
//!
//! ```rust
//! use bigdecimal::BigDecimal;
//! use std::str::FromStr;
//! use wallet_amount::{Amount, Currency, FiatRateTable, StaticSettings};
//!
//! // 0.361888087406829731 ETH, worth $1,130.42
//! let amount = Amount::with_fiat("361888087406829731", Currency::eth(), "1130.42")?;
//! assert_eq!(amount.to_string(), "0.3618 ETH");
//! assert_eq!(amount.as_value(), "0.361888087406829731");
//!
//! // Fiat rendering goes through injected settings and rates
//! let settings = StaticSettings::default().with_preferred_fiat("GBP");
//! let rates = FiatRateTable::new().with_rate("GBP", BigDecimal::from_str("0.5")?);
//! assert_eq!(amount.as_fiat(&settings, &rates, false), "£565.21");
//!
//! // Fees are computed in decimal space and floored to the currency precision
//! let fee = amount.take_fee(&BigDecimal::from_str("0.01")?, false);
//! assert_eq!(fee.as_value(), "0.003618880874068297");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! - [`Amount`]: the value object
//! - [`Currency`] / [`FiatCurrency`]: currency descriptors and the fiat table
//! - [`AmountConfig`]: display preferences fixed at construction
//! - [`UserSettings`] / [`FiatRates`]: capabilities for fiat formatting
//! - [`AmountError`] / [`CurrencyError`]: error types

mod amount;
pub mod config;
pub mod errors;
mod format;
mod providers;
mod spans;
pub mod types;

pub use amount::Amount;
pub use config::constants::{
    DEFAULT_DISPLAY_DECIMALS, DEFAULT_FIAT, FIAT_FRACTION_DIGITS, HIDDEN_BALANCE_PLACEHOLDER,
    LOCALE, MAX_DECIMAL_EXPONENT, NO_FIAT_VALUE,
};
pub use config::{AmountConfig, AmountConfigBuilder};
pub use errors::{AmountError, CurrencyError};
pub use format::{format_currency, parse_decimal, strip_zero_cents};
pub use providers::{FiatRateTable, FiatRates, StaticSettings, UserSettings};
pub use types::currency::Currency;
pub use types::fiat::FiatCurrency;

pub use bigdecimal::RoundingMode;
