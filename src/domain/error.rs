//! Domain error types.

/// Top-level error type for hindsight.
#[derive(Debug, thiserror::Error)]
pub enum HindsightError {
    #[error("catalog parse error in {file}: {reason}")]
    CatalogParse { file: String, reason: String },

    #[error("invalid catalog: {reason}")]
    CatalogInvalid { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("no {field} selected")]
    MissingSelection { field: String },

    #[error("invalid investment amount {amount}: must be a positive number")]
    InvalidAmount { amount: f64 },

    #[error("investment year {year} is out of range ({min}..={max})")]
    YearOutOfRange { year: u16, min: u16, max: u16 },

    #[error("unknown investment category {category}")]
    UnknownCategory { category: String },

    #[error("unknown item {item} in category {category}")]
    UnknownItem { category: String, item: String },

    #[error("no recorded price for {item} in {year}")]
    MissingYearData { item: String, year: u16 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&HindsightError> for std::process::ExitCode {
    fn from(err: &HindsightError) -> Self {
        let code: u8 = match err {
            HindsightError::Io(_) => 1,
            HindsightError::ConfigParse { .. }
            | HindsightError::ConfigMissing { .. }
            | HindsightError::ConfigInvalid { .. } => 2,
            HindsightError::CatalogParse { .. } | HindsightError::CatalogInvalid { .. } => 3,
            HindsightError::MissingSelection { .. }
            | HindsightError::InvalidAmount { .. }
            | HindsightError::YearOutOfRange { .. } => 4,
            HindsightError::UnknownCategory { .. }
            | HindsightError::UnknownItem { .. }
            | HindsightError::MissingYearData { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
