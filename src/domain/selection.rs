//! User selection and the validation gate in front of the valuation engine.

use super::catalog::{MIN_YEAR, REFERENCE_YEAR};
use super::error::HindsightError;

/// One form submission. Rebuilt from scratch on every request; nothing here
/// outlives a single valuation.
#[derive(Debug, Clone)]
pub struct Selection {
    pub category: String,
    pub item: String,
    pub amount: f64,
    pub start_year: u16,
}

impl Selection {
    /// Gate before the engine runs: reject incomplete or out-of-range input.
    pub fn validate(&self) -> Result<(), HindsightError> {
        if self.category.is_empty() {
            return Err(HindsightError::MissingSelection {
                field: "category".into(),
            });
        }
        if self.item.is_empty() {
            return Err(HindsightError::MissingSelection {
                field: "item".into(),
            });
        }
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(HindsightError::InvalidAmount {
                amount: self.amount,
            });
        }
        if self.start_year < MIN_YEAR || self.start_year > REFERENCE_YEAR {
            return Err(HindsightError::YearOutOfRange {
                year: self.start_year,
                min: MIN_YEAR,
                max: REFERENCE_YEAR,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_selection() -> Selection {
        Selection {
            category: "gold".into(),
            item: "krx-gold".into(),
            amount: 1_000_000.0,
            start_year: 2018,
        }
    }

    #[test]
    fn valid_selection_passes() {
        assert!(valid_selection().validate().is_ok());
    }

    #[test]
    fn empty_category_rejected() {
        let mut s = valid_selection();
        s.category = String::new();
        assert!(matches!(
            s.validate().unwrap_err(),
            HindsightError::MissingSelection { field } if field == "category"
        ));
    }

    #[test]
    fn empty_item_rejected() {
        let mut s = valid_selection();
        s.item = String::new();
        assert!(matches!(
            s.validate().unwrap_err(),
            HindsightError::MissingSelection { field } if field == "item"
        ));
    }

    #[test]
    fn zero_amount_rejected() {
        let mut s = valid_selection();
        s.amount = 0.0;
        assert!(matches!(
            s.validate().unwrap_err(),
            HindsightError::InvalidAmount { .. }
        ));
    }

    #[test]
    fn negative_amount_rejected() {
        let mut s = valid_selection();
        s.amount = -5.0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn nan_amount_rejected() {
        let mut s = valid_selection();
        s.amount = f64::NAN;
        assert!(matches!(
            s.validate().unwrap_err(),
            HindsightError::InvalidAmount { .. }
        ));
    }

    #[test]
    fn year_before_range_rejected() {
        let mut s = valid_selection();
        s.start_year = 2009;
        assert!(matches!(
            s.validate().unwrap_err(),
            HindsightError::YearOutOfRange { year: 2009, .. }
        ));
    }

    #[test]
    fn year_after_range_rejected() {
        let mut s = valid_selection();
        s.start_year = 2025;
        assert!(s.validate().is_err());
    }

    #[test]
    fn boundary_years_accepted() {
        let mut s = valid_selection();
        s.start_year = 2010;
        assert!(s.validate().is_ok());
        s.start_year = 2024;
        assert!(s.validate().is_ok());
    }
}
