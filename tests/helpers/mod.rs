// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for wallet-amount integration tests
//!
//! Provides mock implementations of the settings and rate capabilities so
//! tests can observe how the formatting paths consult them.

#![allow(dead_code)]

use std::io;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use bigdecimal::BigDecimal;
use wallet_amount::{FiatRates, UserSettings};

/// Parse a decimal literal, panicking on bad test input
pub fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

/// Shared in-memory sink for formatted log lines
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// Everything written so far
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` under a thread-local subscriber and return its result with the logs
///
/// Captures every level so tests can assert on warnings and errors.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}

/// Mock UserSettings with fixed answers
pub struct MockSettings {
    fiat: String,
    show: bool,
}

impl MockSettings {
    /// Balances visible, fiat shown in `fiat`
    pub fn new(fiat: &str) -> Self {
        Self {
            fiat: fiat.to_string(),
            show: true,
        }
    }

    /// Balances hidden
    pub fn hidden(mut self) -> Self {
        self.show = false;
        self
    }
}

impl UserSettings for MockSettings {
    fn preferred_fiat(&self) -> &str {
        &self.fiat
    }

    fn show_balances(&self) -> bool {
        self.show
    }
}

/// Mock FiatRates that records every code it is asked for
///
/// # Example
///
/// ```rust,ignore
/// let rates = RecordingRates::new().with_rate("EUR", dec("0.9"));
/// amount.as_fiat(&settings, &rates, false);
/// assert_eq!(rates.lookups(), vec!["EUR"]);
/// ```
pub struct RecordingRates {
    rates: Vec<(String, BigDecimal)>,
    lookups: Mutex<Vec<String>>,
}

impl RecordingRates {
    /// No rates known
    pub fn new() -> Self {
        Self {
            rates: Vec::new(),
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// Add a rate
    pub fn with_rate(mut self, code: &str, rate: BigDecimal) -> Self {
        self.rates.push((code.to_string(), rate));
        self
    }

    /// Codes requested so far, in order
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

impl FiatRates for RecordingRates {
    fn rate(&self, code: &str) -> Option<BigDecimal> {
        self.lookups.lock().unwrap().push(code.to_string());
        self.rates
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, rate)| rate.clone())
    }
}
