// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Currency descriptor types.
//!
//! - [`currency::Currency`]: symbol, decimals and fiat-conversion flag
//! - [`fiat::FiatCurrency`]: ISO fiat codes known to the en-US formatter

pub mod currency;
pub mod fiat;

// Note: Public types are re-exported from lib.rs, not here
