// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the wallet-amount library.
//!
//! Two families of errors exist:
//!
//! - [`CurrencyError`] - a currency descriptor is malformed, or two amounts in
//!   different currencies were combined
//! - [`AmountError`] - numeric input could not be parsed, or an arithmetic
//!   operation is undefined (division by zero)
//!
//! [`CurrencyError`] converts into [`AmountError`] via `From`, so `?` works
//! across both.
//!
//! # Examples
//!
//! ```rust
//! use wallet_amount::{Amount, AmountError, Currency};
//!
//! match Amount::new("12abc", Currency::eth()) {
//!     Ok(_) => unreachable!(),
//!     Err(AmountError::InvalidNumber { input, .. }) => assert_eq!(input, "12abc"),
//!     Err(e) => panic!("unexpected error: {e}"),
//! }
//! ```

mod amount;
mod currency;

pub use amount::AmountError;
pub use currency::CurrencyError;
