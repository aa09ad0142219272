// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for Amount
//!
//! These tests use proptest to check invariants of construction, equality
//! and arithmetic across a wide range of subunit values and currencies.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use proptest::prelude::*;
use wallet_amount::{Amount, Currency};

// Helper to generate currencies with realistic decimal counts
fn arb_currency() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::eth()),
        Just(Currency::btc()),
        Just(Currency::usdc()),
        Just(Currency::new("CENTS", 2)),
        Just(Currency::new("UNIT", 0)),
    ]
}

// Helper to generate subunit strings up to 30 digits, optionally negative
fn arb_subunit() -> impl Strategy<Value = String> {
    (any::<bool>(), "[1-9][0-9]{0,29}|0").prop_map(|(negative, digits)| {
        if negative && digits != "0" {
            format!("-{digits}")
        } else {
            digits
        }
    })
}

proptest! {
    /// Property: the subunit string survives construction unchanged
    #[test]
    fn prop_subunit_round_trip(subunit in arb_subunit(), currency in arb_currency()) {
        let amount = Amount::new(&subunit, currency).unwrap();
        prop_assert_eq!(amount.as_subunit(), subunit);
    }

    /// Property: from_decimal(as_value()) rebuilds the same amount
    #[test]
    fn prop_as_value_round_trip(subunit in arb_subunit(), currency in arb_currency()) {
        let amount = Amount::new(&subunit, currency.clone()).unwrap();
        let rebuilt = Amount::from_decimal(&amount.as_value(), currency).unwrap();
        prop_assert_eq!(rebuilt, amount);
    }

    /// Property: from_decimal never rounds user input up
    #[test]
    fn prop_from_decimal_floors(
        whole in 0u64..1_000_000,
        fraction in "[0-9]{1,24}",
        currency in arb_currency(),
    ) {
        let input = format!("{whole}.{fraction}");
        let amount = Amount::from_decimal(&input, currency).unwrap();
        let typed = BigDecimal::from_str(&input).unwrap();
        prop_assert!(amount.down() <= typed);
    }

    /// Property: equality is reflexive, symmetric and currency-sensitive
    #[test]
    fn prop_equality(subunit in arb_subunit()) {
        let a = Amount::new(&subunit, Currency::eth()).unwrap();
        let b = Amount::new(&subunit, Currency::eth()).unwrap();
        let other = Amount::new(&subunit, Currency::new("WETH", 18)).unwrap();

        prop_assert_eq!(&a, &a);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&b, &a);
        prop_assert_ne!(&a, &other);
        prop_assert_ne!(&other, &a);
    }

    /// Property: multiplying then dividing by k recovers the subunit amount
    #[test]
    fn prop_multiply_divide_inverse(
        subunit in arb_subunit(),
        k in prop_oneof![1i64..1_000_000, -1_000_000i64..-1],
    ) {
        let amount = Amount::with_fiat(&subunit, Currency::eth(), "12.5").unwrap();
        let factor = BigDecimal::from(k);
        let back = amount.multiplied_by(&factor).divided_by(&factor).unwrap();

        prop_assert_eq!(back.as_big_decimal(), amount.as_big_decimal());
        prop_assert_eq!(back.fiat_value(), amount.fiat_value());
    }

    /// Property: Display always shows exactly display_decimals digits
    #[test]
    fn prop_display_decimals(subunit in arb_subunit(), decimals in 0u32..10) {
        let amount = Amount::new(&subunit, Currency::eth())
            .unwrap()
            .with_display_decimals(decimals);
        let rendered = amount.to_string();
        let number = rendered.strip_suffix(" ETH").unwrap();

        match number.split_once('.') {
            Some((_, fraction)) => prop_assert_eq!(fraction.len() as u32, decimals),
            None => prop_assert_eq!(decimals, 0),
        }
    }

    /// Property: merging an amount with itself doubles it
    #[test]
    fn prop_merge_self_doubles(subunit in arb_subunit(), currency in arb_currency()) {
        let amount = Amount::new(&subunit, currency).unwrap();
        let merged = amount.merge_amount(&amount).unwrap();
        prop_assert_eq!(merged, amount.multiplied_by(&BigDecimal::from(2)));
    }
}
