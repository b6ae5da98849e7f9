//! Fleet utilization scoring and expansion readiness for trucking fleets.

pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod readiness;
pub mod services;

pub use error::{ReadinessError, StoreError};
pub use readiness::{ReadinessEngine, TimeRange};
