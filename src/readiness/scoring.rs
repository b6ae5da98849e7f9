//! Utilization score and tier

use std::collections::BTreeSet;

use crate::models::readiness::{FleetUtilizationScore, ScoreFlag, ScoreTier};

/// Average revenue days at or above which over-scheduling is flagged
pub const VERY_HIGH_UTILIZATION_DAYS: f64 = 23.0;

/// Maps average revenue days per truck to points and tier.
///
/// | mean        | points | tier       |
/// |-------------|--------|------------|
/// | >= 20       | 25     | STRONG     |
/// | >= 18       | 20     | HEALTHY    |
/// | >= 15       | 12     | CAUTION    |
/// | < 15        | 5      | NEEDS_WORK |
pub fn score_utilization(mean: f64) -> FleetUtilizationScore {
    let (total_points, tier) = match mean {
        m if m >= 20.0 => (25, ScoreTier::Strong),
        m if m >= 18.0 => (20, ScoreTier::Healthy),
        m if m >= 15.0 => (12, ScoreTier::Caution),
        _ => (5, ScoreTier::NeedsWork),
    };

    let mut flags = BTreeSet::new();
    if mean >= VERY_HIGH_UTILIZATION_DAYS {
        flags.insert(ScoreFlag::VeryHighUtilization);
    }

    FleetUtilizationScore {
        total_points,
        tier,
        flags,
    }
}
