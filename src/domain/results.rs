// SPDX-License-Identifier: MPL-2.0
//! Display-ready summary of a pricing run.
//!
//! The pricing backend returns an ordered list of items, each either priced
//! or left unpriced, plus the time the run took. [`summarize`] reduces that
//! into the figures shown on the results dashboard.

use std::time::Duration;

/// One line of a pricing result.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedItem {
    pub name: String,
    /// `None` when no price could be determined.
    pub price: Option<f64>,
}

impl PricedItem {
    pub fn new(name: impl Into<String>, price: Option<f64>) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Aggregated figures for a pricing run.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsSummary {
    pub total: usize,
    pub priced: usize,
    pub unpriced: usize,
    pub total_value: f64,
    pub average_price: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub processing: Duration,
}

impl ResultsSummary {
    /// Share of items that received a price, in percent (0 when empty).
    #[must_use]
    pub fn success_rate_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let rate = self.priced as f64 / self.total as f64 * 100.0;
        rate
    }

    /// Processing time formatted for display: milliseconds below one second,
    /// seconds with one decimal up to a minute, then minutes and seconds.
    #[must_use]
    pub fn processing_label(&self) -> String {
        let millis = self.processing.as_millis();
        if millis < 1000 {
            format!("{millis} ms")
        } else if millis < 60_000 {
            format!("{:.1} s", self.processing.as_secs_f64())
        } else {
            let secs = self.processing.as_secs();
            format!("{}m {:02}s", secs / 60, secs % 60)
        }
    }
}

/// Reduces an ordered list of priced items into a summary.
///
/// Non-finite prices are treated as unpriced.
#[must_use]
pub fn summarize(items: &[PricedItem], processing: Duration) -> ResultsSummary {
    let prices: Vec<f64> = items
        .iter()
        .filter_map(|item| item.price)
        .filter(|price| price.is_finite())
        .collect();

    let total_value: f64 = prices.iter().sum();
    #[allow(clippy::cast_precision_loss)]
    let average_price = (!prices.is_empty()).then(|| total_value / prices.len() as f64);
    let min_price = prices.iter().copied().reduce(f64::min);
    let max_price = prices.iter().copied().reduce(f64::max);

    ResultsSummary {
        total: items.len(),
        priced: prices.len(),
        unpriced: items.len() - prices.len(),
        total_value,
        average_price,
        min_price,
        max_price,
        processing,
    }
}
