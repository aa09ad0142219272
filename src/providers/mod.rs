// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Read-only capabilities consumed by the fiat formatting paths
//!
//! Wallet state lives outside this crate. Instead of reading process-wide
//! singletons, [`Amount`](crate::Amount) takes the two capabilities it needs
//! as arguments:
//!
//! - [`UserSettings`]: preferred fiat code and whether balances are visible
//! - [`FiatRates`]: conversion rates relative to USD
//!
//! Both traits are object-safe so hosts can pass `&dyn UserSettings`.
//! [`StaticSettings`] and [`FiatRateTable`] are in-memory implementations for
//! hosts that already hold the values, and for tests.
//!
//! # Example
//!
//! ```rust
//! use bigdecimal::BigDecimal;
//! use wallet_amount::{Amount, Currency, FiatRateTable, StaticSettings};
//!
//! let settings = StaticSettings::default().with_preferred_fiat("EUR");
//! let rates = FiatRateTable::new().with_rate("EUR", BigDecimal::from(2));
//!
//! let amount = Amount::with_fiat("1000000000000000000", Currency::eth(), "10").unwrap();
//! assert_eq!(amount.as_fiat(&settings, &rates, false), "€20.00");
//! ```

mod rates;
mod settings;

pub use rates::{FiatRateTable, FiatRates};
pub use settings::{StaticSettings, UserSettings};
