//! Engine error types

use thiserror::Error;

/// Boxed error returned by record store implementations
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ReadinessError {
    /// The requested range selector is not one of `month`, `90d`, `180d`, `365d`
    #[error("invalid range '{0}': expected one of month, 90d, 180d, 365d")]
    InvalidRange(String),

    /// A truck or load read against the record store failed
    #[error("fleet data unavailable: {0}")]
    DataUnavailable(String),
}

impl ReadinessError {
    /// Stable machine-readable kind, used in API bodies and metric labels
    pub fn kind(&self) -> &'static str {
        match self {
            ReadinessError::InvalidRange(_) => "invalid_range",
            ReadinessError::DataUnavailable(_) => "data_unavailable",
        }
    }
}
