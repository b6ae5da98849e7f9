//! Fleet size bands and the low-utilization thresholds they imply

use crate::models::readiness::FleetBand;

pub const SMALL_FLEET_MAX: usize = 9;
pub const MID_FLEET_MAX: usize = 50;

impl FleetBand {
    /// Classify by active truck count. 10 and 50 both fall in `Mid`.
    pub fn classify(active_trucks: usize) -> Self {
        match active_trucks {
            n if n <= SMALL_FLEET_MAX => FleetBand::Small,
            n if n <= MID_FLEET_MAX => FleetBand::Mid,
            _ => FleetBand::Large,
        }
    }

    /// Revenue days per period below which a truck counts as under-utilized
    pub fn low_util_threshold(&self) -> u32 {
        match self {
            FleetBand::Small => 18,
            FleetBand::Mid => 16,
            FleetBand::Large => 15,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FleetBand::Small => "SMALL",
            FleetBand::Mid => "MID",
            FleetBand::Large => "LARGE",
        }
    }
}

/// Trucks strictly below the band's threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowUtilization {
    pub band: FleetBand,
    pub threshold_days: u32,
    pub truck_count: usize,
    pub pct: f64,
}

impl LowUtilization {
    pub fn from_counts(counts: &[u32]) -> Self {
        let band = FleetBand::classify(counts.len());
        let threshold_days = band.low_util_threshold();
        let truck_count = counts.iter().filter(|&&c| c < threshold_days).count();
        let pct = if counts.is_empty() {
            0.0
        } else {
            truck_count as f64 / counts.len() as f64
        };
        Self {
            band,
            threshold_days,
            truck_count,
            pct,
        }
    }
}
