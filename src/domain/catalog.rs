//! Investment catalog: categories, sub-items and their year-indexed price series.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

use super::error::HindsightError;

/// Earliest year the catalog may carry a price for.
pub const MIN_YEAR: u16 = 2010;
/// Fixed reference year all valuations are projected to.
pub const REFERENCE_YEAR: u16 = 2024;

#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub investments: Vec<InvestmentCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvestmentCategory {
    #[serde(rename = "type")]
    pub id: String,
    pub label: String,
    #[serde(rename = "subItems", default)]
    pub items: Vec<InvestmentSubItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvestmentSubItem {
    #[serde(rename = "type")]
    pub id: String,
    pub label: String,
    /// Prices keyed by year. The source document keys years as JSON strings;
    /// they are normalized to integers here so lookups and iteration agree.
    #[serde(rename = "data", deserialize_with = "deserialize_year_prices")]
    pub prices: BTreeMap<u16, f64>,
}

fn deserialize_year_prices<'de, D>(deserializer: D) -> Result<BTreeMap<u16, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, f64>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(key, price)| {
            key.parse::<u16>()
                .map(|year| (year, price))
                .map_err(|_| serde::de::Error::custom(format!("invalid year key: {key}")))
        })
        .collect()
}

impl Catalog {
    pub fn find_category(&self, category: &str) -> Result<&InvestmentCategory, HindsightError> {
        self.investments
            .iter()
            .find(|c| c.id == category)
            .ok_or_else(|| HindsightError::UnknownCategory {
                category: category.to_string(),
            })
    }

    pub fn find_item(
        &self,
        category: &str,
        item: &str,
    ) -> Result<&InvestmentSubItem, HindsightError> {
        self.find_category(category)?
            .items
            .iter()
            .find(|i| i.id == item)
            .ok_or_else(|| HindsightError::UnknownItem {
                category: category.to_string(),
                item: item.to_string(),
            })
    }
}

impl InvestmentSubItem {
    pub fn price_at(&self, year: u16) -> Option<f64> {
        self.prices.get(&year).copied()
    }

    /// First year, last year and entry count, or `None` for an empty series.
    pub fn year_range(&self) -> Option<(u16, u16, usize)> {
        let first = *self.prices.keys().next()?;
        let last = *self.prices.keys().next_back()?;
        Some((first, last, self.prices.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JSON: &str = r#"{
        "investments": [
            {
                "type": "gold",
                "label": "Gold",
                "subItems": [
                    {
                        "type": "krx-gold",
                        "label": "KRX Gold",
                        "data": { "2020": 1000, "2022": 1500, "2024": 2000 }
                    }
                ]
            },
            {
                "type": "crypto",
                "label": "Crypto",
                "subItems": []
            }
        ]
    }"#;

    fn sample_catalog() -> Catalog {
        serde_json::from_str(SAMPLE_JSON).unwrap()
    }

    #[test]
    fn parses_string_year_keys_to_integers() {
        let catalog = sample_catalog();
        let item = catalog.find_item("gold", "krx-gold").unwrap();
        assert_eq!(item.price_at(2020), Some(1000.0));
        assert_eq!(item.price_at(2024), Some(2000.0));
        assert_eq!(item.price_at(2021), None);
    }

    #[test]
    fn rejects_non_year_keys() {
        let json = r#"{
            "investments": [{
                "type": "gold", "label": "Gold",
                "subItems": [{ "type": "a", "label": "A", "data": { "then": 1 } }]
            }]
        }"#;
        let result: Result<Catalog, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn find_category_unknown() {
        let catalog = sample_catalog();
        let err = catalog.find_category("tulips").unwrap_err();
        assert!(matches!(err, HindsightError::UnknownCategory { .. }));
    }

    #[test]
    fn find_item_unknown_in_known_category() {
        let catalog = sample_catalog();
        let err = catalog.find_item("gold", "silver-bar").unwrap_err();
        assert!(matches!(err, HindsightError::UnknownItem { .. }));
    }

    #[test]
    fn year_range_spans_series() {
        let catalog = sample_catalog();
        let item = catalog.find_item("gold", "krx-gold").unwrap();
        assert_eq!(item.year_range(), Some((2020, 2024, 3)));
    }

    #[test]
    fn missing_sub_items_defaults_to_empty() {
        let json = r#"{ "investments": [{ "type": "cash", "label": "Cash" }] }"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert!(catalog.find_category("cash").unwrap().items.is_empty());
    }
}
