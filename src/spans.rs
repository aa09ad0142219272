// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for amount operations.
//!
//! Telemetry is kept out of the business logic: each instrumented operation
//! has a helper here and enters the returned span.
//!
//! ```rust,ignore
//! let span = spans::convert_to_fiat(symbol, target);
//! let _guard = span.enter();
//! ```

use tracing::Span;

/// Span for converting an amount's fiat value into the user's fiat currency.
///
/// Parent: caller's span
/// Children: none
#[inline]
pub(crate) fn convert_to_fiat(symbol: &str, target: &str) -> Span {
    tracing::debug_span!(
        "wallet_amount.convert_to_fiat",
        symbol = %symbol,
        target = %target,
    )
}

/// Span for summing two amounts.
#[inline]
pub(crate) fn merge_amount(symbol: &str, other_symbol: &str) -> Span {
    tracing::trace_span!(
        "wallet_amount.merge_amount",
        symbol = %symbol,
        other_symbol = %other_symbol,
    )
}
