//! JSON file catalog adapter.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::domain::catalog::Catalog;
use crate::domain::error::HindsightError;
use crate::ports::catalog_port::CatalogPort;

/// Loads the catalog document once at construction and serves the parsed
/// snapshot for the rest of the session. Submissions never re-read the file.
#[derive(Debug)]
pub struct JsonCatalogAdapter {
    catalog: Arc<Catalog>,
}

impl JsonCatalogAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, HindsightError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| HindsightError::CatalogParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    pub fn from_str(content: &str) -> Result<Self, HindsightError> {
        Self::parse(content, "<string>")
    }

    fn parse(content: &str, file: &str) -> Result<Self, HindsightError> {
        let catalog: Catalog =
            serde_json::from_str(content).map_err(|e| HindsightError::CatalogParse {
                file: file.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            catalog: Arc::new(catalog),
        })
    }
}

impl CatalogPort for JsonCatalogAdapter {
    fn catalog(&self) -> Result<Arc<Catalog>, HindsightError> {
        Ok(Arc::clone(&self.catalog))
    }
}
