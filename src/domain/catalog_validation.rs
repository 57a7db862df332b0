//! Structural checks for a loaded catalog.

use std::collections::HashSet;

use super::catalog::{Catalog, MIN_YEAR, REFERENCE_YEAR};
use super::error::HindsightError;

/// Validate catalog invariants: non-empty, unique ids, every item priced at
/// the reference year, prices positive, years inside [MIN_YEAR, REFERENCE_YEAR].
pub fn validate_catalog(catalog: &Catalog) -> Result<(), HindsightError> {
    if catalog.investments.is_empty() {
        return Err(invalid("catalog has no investment categories"));
    }

    let mut category_ids = HashSet::new();
    for category in &catalog.investments {
        if category.id.trim().is_empty() {
            return Err(invalid("category with empty id"));
        }
        if !category_ids.insert(category.id.as_str()) {
            return Err(invalid(format!("duplicate category id {}", category.id)));
        }

        let mut item_ids = HashSet::new();
        for item in &category.items {
            if item.id.trim().is_empty() {
                return Err(invalid(format!(
                    "item with empty id in category {}",
                    category.id
                )));
            }
            if !item_ids.insert(item.id.as_str()) {
                return Err(invalid(format!(
                    "duplicate item id {} in category {}",
                    item.id, category.id
                )));
            }

            if item.price_at(REFERENCE_YEAR).is_none() {
                return Err(invalid(format!(
                    "item {} has no price for the reference year {}",
                    item.id, REFERENCE_YEAR
                )));
            }

            for (&year, &price) in &item.prices {
                if year < MIN_YEAR || year > REFERENCE_YEAR {
                    return Err(invalid(format!(
                        "item {} has a price for {} outside {}..={}",
                        item.id, year, MIN_YEAR, REFERENCE_YEAR
                    )));
                }
                if !(price > 0.0) || !price.is_finite() {
                    return Err(invalid(format!(
                        "item {} has a non-positive price for {}",
                        item.id, year
                    )));
                }
            }
        }
    }

    Ok(())
}

fn invalid(reason: impl Into<String>) -> HindsightError {
    HindsightError::CatalogInvalid {
        reason: reason.into(),
    }
}
