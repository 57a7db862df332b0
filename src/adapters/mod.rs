//! Concrete adapter implementations for ports.

pub mod json_catalog_adapter;
pub mod file_config_adapter;
pub mod chart_svg;
pub mod csv_export;
#[cfg(feature = "web")]
pub mod web;
