//! Readiness output models, serialized as the API response body

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Inclusive calendar window used for all aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub day_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FleetBand {
    Small,
    Mid,
    Large,
}

/// Truck counts per revenue-day bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilizationDistribution {
    #[serde(rename = "20Plus")]
    pub days_20_plus: usize,
    #[serde(rename = "18To19")]
    pub days_18_to_19: usize,
    #[serde(rename = "15To17")]
    pub days_15_to_17: usize,
    #[serde(rename = "under15")]
    pub under_15: usize,
}

impl UtilizationDistribution {
    pub fn total(&self) -> usize {
        self.days_20_plus + self.days_18_to_19 + self.days_15_to_17 + self.under_15
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetUtilizationMetrics {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub period_days: u32,
    pub active_truck_count: usize,
    pub fleet_band: FleetBand,
    pub avg_revenue_days_per_truck: f64,
    pub utilization_rate: f64,
    pub low_util_threshold_days: u32,
    pub low_util_truck_count: usize,
    pub low_util_pct: f64,
    pub distribution: UtilizationDistribution,
    pub coefficient_of_variation: f64,
    /// Period-over-period change. Always 0.0 until trend comparison is wired in.
    pub trend_delta: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreTier {
    NeedsWork,
    Caution,
    Healthy,
    Strong,
}

impl ScoreTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreTier::NeedsWork => "NEEDS_WORK",
            ScoreTier::Caution => "CAUTION",
            ScoreTier::Healthy => "HEALTHY",
            ScoreTier::Strong => "STRONG",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreFlag {
    /// Average utilization high enough to suggest over-scheduling
    VeryHighUtilization,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetUtilizationScore {
    pub total_points: u32,
    pub tier: ScoreTier,
    pub flags: BTreeSet<ScoreFlag>,
}

impl FleetUtilizationScore {
    pub fn has_flag(&self, flag: ScoreFlag) -> bool {
        self.flags.contains(&flag)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetUtilization {
    pub metrics: FleetUtilizationMetrics,
    pub score: FleetUtilizationScore,
}

/// Composite verdict returned by the readiness engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessResult {
    pub fleet_utilization: FleetUtilization,
    pub overall_score: u32,
    pub ready_to_expand: bool,
}
