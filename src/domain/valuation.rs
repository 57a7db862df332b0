//! Valuation engine: growth, projected value and the year-by-year series.

use super::catalog::{Catalog, InvestmentSubItem, REFERENCE_YEAR};
use super::error::HindsightError;
use super::selection::Selection;

#[derive(Debug, Clone, PartialEq)]
pub struct ValuationResult {
    /// Percentage price change from the start year to the reference year.
    pub growth_percent: f64,
    /// What the invested amount would be worth at the reference year.
    pub projected_value: f64,
    /// Per-year value of the investment, start year through reference year.
    /// Years without a recorded price are skipped; no interpolation.
    pub series: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesPoint {
    pub year: u16,
    /// Rounded to the nearest won.
    pub value: i64,
}

/// Display branch for the result: which way the price moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn from_growth(growth_percent: f64) -> Self {
        if growth_percent > 0.0 {
            Trend::Up
        } else if growth_percent < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }
}

/// Pure valuation of one item. Requires a recorded price for `start_year`
/// and for the reference year.
pub fn compute(
    item: &InvestmentSubItem,
    amount: f64,
    start_year: u16,
) -> Result<ValuationResult, HindsightError> {
    let initial_price =
        item.price_at(start_year)
            .ok_or_else(|| HindsightError::MissingYearData {
                item: item.label.clone(),
                year: start_year,
            })?;
    let current_price =
        item.price_at(REFERENCE_YEAR)
            .ok_or_else(|| HindsightError::MissingYearData {
                item: item.label.clone(),
                year: REFERENCE_YEAR,
            })?;

    let growth_percent = (current_price - initial_price) / initial_price * 100.0;
    let projected_value = current_price / initial_price * amount;

    let series = (start_year..=REFERENCE_YEAR)
        .filter_map(|year| {
            item.price_at(year).map(|price| SeriesPoint {
                year,
                value: (price / initial_price * amount).round() as i64,
            })
        })
        .collect();

    Ok(ValuationResult {
        growth_percent,
        projected_value,
        series,
    })
}

/// Gate, lookup and compute for one selection. Shared by the CLI and the
/// web handler; returns the item label for display alongside the result.
pub fn valuate<'a>(
    catalog: &'a Catalog,
    selection: &Selection,
) -> Result<(&'a InvestmentSubItem, ValuationResult), HindsightError> {
    selection.validate()?;
    let item = catalog.find_item(&selection.category, &selection.item)?;
    let result = compute(item, selection.amount, selection.start_year)?;
    Ok((item, result))
}
