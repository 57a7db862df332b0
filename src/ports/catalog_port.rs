//! Catalog access port trait.

use crate::domain::catalog::Catalog;
use crate::domain::error::HindsightError;
use std::sync::Arc;

/// Hands out the investment catalog. Implementations load the backing
/// document once and serve the same immutable snapshot for the session.
pub trait CatalogPort {
    fn catalog(&self) -> Result<Arc<Catalog>, HindsightError>;
}
