//! Derived portfolio computations.
//!
//! Pure functions over already-fetched data — no I/O, no API calls.
//! `profit_loss` itself comes from the backend and is never recomputed
//! here; only aggregates and percentages are derived from it.

use crate::models::portfolio::Position;

/// Aggregate figures over the whole position list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PortfolioTotals {
    pub total_invested: f64,
    pub total_current: f64,
    pub total_profit_loss: f64,
    pub positions: usize,
}

/// Sum invested, current value, and profit/loss across all positions.
/// An empty list totals to exactly zero, not NaN.
#[must_use]
pub fn portfolio_totals(positions: &[Position]) -> PortfolioTotals {
    PortfolioTotals {
        total_invested: positions.iter().map(|p| p.amount_invested).sum(),
        total_current: positions.iter().map(|p| p.current_value).sum(),
        total_profit_loss: positions.iter().map(|p| p.profit_loss).sum(),
        positions: positions.len(),
    }
}

/// P/L as a percentage of the invested amount.
/// Zero invested yields 0 — never a division error.
#[must_use]
pub fn profit_loss_pct(profit_loss: f64, amount_invested: f64) -> f64 {
    if amount_invested > 0.0 {
        (profit_loss / amount_invested) * 100.0
    } else {
        0.0
    }
}

/// One slice of the allocation chart.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationSlice {
    /// Symbol when present, otherwise the asset name.
    pub label: String,
    /// The position's current value — its share of the chart.
    pub value: f64,
    /// Deterministic, distinct color keyed by position index.
    pub color: String,
}

/// Map each position to a chart slice. Colors are evenly spaced hues so
/// adjacent positions stay visually distinct and stable across renders.
#[must_use]
pub fn allocation(positions: &[Position]) -> Vec<AllocationSlice> {
    positions
        .iter()
        .enumerate()
        .map(|(i, p)| AllocationSlice {
            label: p
                .crypto_symbol
                .clone()
                .unwrap_or_else(|| p.crypto_name.clone()),
            value: p.current_value,
            color: format!("hsl({} 70% 45%)", (i * 47) % 360),
        })
        .collect()
}

/// Case-insensitive holdings search over name, symbol, and id.
/// An empty query matches everything.
#[must_use]
pub fn filter_positions<'a>(positions: &'a [Position], query: &str) -> Vec<&'a Position> {
    if query.is_empty() {
        return positions.iter().collect();
    }
    let q = query.to_lowercase();
    positions
        .iter()
        .filter(|p| {
            p.crypto_name.to_lowercase().contains(&q)
                || p.crypto_id.to_lowercase().contains(&q)
                || p.crypto_symbol
                    .as_deref()
                    .is_some_and(|s| s.to_lowercase().contains(&q))
        })
        .collect()
}

/// Converter arithmetic: amount at a unit rate.
/// An unknown rate converts to nothing rather than zero.
#[must_use]
pub fn convert_amount(amount: f64, rate: Option<f64>) -> Option<f64> {
    rate.map(|r| amount * r)
}
