// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Fiat conversion rates

use std::collections::HashMap;

use bigdecimal::BigDecimal;

use crate::config::constants::DEFAULT_FIAT;

/// Source of fiat conversion rates relative to USD
///
/// A rate of `0.79` for `"GBP"` means one USD is worth 0.79 GBP.
pub trait FiatRates: Send + Sync {
    /// Rate for the ISO `code`, or `None` if unknown
    fn rate(&self, code: &str) -> Option<BigDecimal>;
}

/// In-memory rate table keyed by upper-cased ISO code
///
/// `USD` always resolves to `1` unless overridden.
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use wallet_amount::{FiatRateTable, FiatRates};
///
/// let rates = FiatRateTable::new().with_rate("eur", BigDecimal::from(2));
/// assert_eq!(rates.rate("EUR"), Some(BigDecimal::from(2)));
/// assert_eq!(rates.rate("USD"), Some(BigDecimal::from(1)));
/// assert_eq!(rates.rate("JPY"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FiatRateTable {
    rates: HashMap<String, BigDecimal>,
}

impl FiatRateTable {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rate, builder style
    pub fn with_rate(mut self, code: &str, rate: BigDecimal) -> Self {
        self.insert(code, rate);
        self
    }

    /// Add or replace a rate, returning the previous one
    pub fn insert(&mut self, code: &str, rate: BigDecimal) -> Option<BigDecimal> {
        self.rates.insert(code.to_ascii_uppercase(), rate)
    }

    /// Number of explicit rates
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Whether no explicit rates are stored
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl FiatRates for FiatRateTable {
    fn rate(&self, code: &str) -> Option<BigDecimal> {
        let key = code.to_ascii_uppercase();
        match self.rates.get(&key) {
            Some(rate) => Some(rate.clone()),
            None if key == DEFAULT_FIAT => Some(BigDecimal::from(1)),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let rates = FiatRateTable::new().with_rate("gbp", BigDecimal::from_str("0.79").unwrap());
        assert_eq!(rates.rate("GBP"), BigDecimal::from_str("0.79").ok());
        assert_eq!(rates.rate("gbp"), BigDecimal::from_str("0.79").ok());
    }

    #[test]
    fn test_usd_is_implicit() {
        let rates = FiatRateTable::new();
        assert!(rates.is_empty());
        assert_eq!(rates.rate("usd"), Some(BigDecimal::from(1)));
    }

    #[test]
    fn test_insert_replaces() {
        let mut rates = FiatRateTable::new();
        assert_eq!(rates.insert("EUR", BigDecimal::from(1)), None);
        assert_eq!(
            rates.insert("EUR", BigDecimal::from(2)),
            Some(BigDecimal::from(1))
        );
        assert_eq!(rates.len(), 1);
        assert_eq!(rates.rate("EUR"), Some(BigDecimal::from(2)));
    }
}
