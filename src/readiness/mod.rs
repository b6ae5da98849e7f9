//! Fleet-utilization scoring engine.

pub mod distribution;
pub mod engine;
pub mod fleet_band;
pub mod period;
pub mod revenue_days;
pub mod scoring;
pub mod statistics;

pub use engine::ReadinessEngine;
pub use fleet_band::LowUtilization;
pub use period::TimeRange;
pub use revenue_days::{clip_to_period, RevenueDays};
pub use scoring::score_utilization;
pub use statistics::FleetStatistics;
