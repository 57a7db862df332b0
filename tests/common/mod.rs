#![allow(dead_code)]

use hindsight::domain::catalog::{Catalog, InvestmentCategory, InvestmentSubItem};
use hindsight::domain::error::HindsightError;
use hindsight::ports::catalog_port::CatalogPort;
use std::collections::BTreeMap;
use std::sync::Arc;

pub struct MockCatalogPort {
    catalog: Arc<Catalog>,
    error: Option<String>,
}

impl MockCatalogPort {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            error: None,
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            catalog: Arc::new(Catalog {
                investments: vec![],
            }),
            error: Some(reason.to_string()),
        }
    }
}

impl CatalogPort for MockCatalogPort {
    fn catalog(&self) -> Result<Arc<Catalog>, HindsightError> {
        if let Some(reason) = &self.error {
            return Err(HindsightError::CatalogParse {
                file: "<mock>".into(),
                reason: reason.clone(),
            });
        }
        Ok(Arc::clone(&self.catalog))
    }
}

pub fn make_item(id: &str, label: &str, prices: &[(u16, f64)]) -> InvestmentSubItem {
    InvestmentSubItem {
        id: id.to_string(),
        label: label.to_string(),
        prices: BTreeMap::from_iter(prices.iter().copied()),
    }
}

pub fn make_category(id: &str, label: &str, items: Vec<InvestmentSubItem>) -> InvestmentCategory {
    InvestmentCategory {
        id: id.to_string(),
        label: label.to_string(),
        items,
    }
}

/// Gold with a sparse series (no 2021, 2023) and crypto starting mid-range.
pub fn sample_catalog() -> Catalog {
    Catalog {
        investments: vec![
            make_category(
                "gold",
                "Gold",
                vec![make_item(
                    "krx-gold",
                    "KRX Gold",
                    &[(2020, 1000.0), (2022, 1500.0), (2024, 2000.0)],
                )],
            ),
            make_category(
                "crypto",
                "Crypto",
                vec![make_item(
                    "bitcoin",
                    "Bitcoin",
                    &[(2017, 15_000_000.0), (2020, 31_000_000.0), (2024, 140_000_000.0)],
                )],
            ),
            make_category("cash", "Cash", vec![]),
        ],
    }
}

pub const SAMPLE_CATALOG_JSON: &str = r#"{
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
        }
    ]
}"#;
