//! Core domain types and logic.

pub mod catalog;
pub mod selection;
pub mod valuation;
pub mod format;
pub mod catalog_validation;
pub mod error;
