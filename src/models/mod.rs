//! Shared data models spanning the engine layers.

pub mod fleet;
pub mod readiness;

pub use fleet::{Load, Truck, TruckStatus};
pub use readiness::{
    FleetBand, FleetUtilization, FleetUtilizationMetrics, FleetUtilizationScore, Period,
    ReadinessResult, ScoreFlag, ScoreTier, UtilizationDistribution,
};
