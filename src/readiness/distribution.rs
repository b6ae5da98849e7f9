//! Revenue-day distribution buckets

use crate::models::readiness::UtilizationDistribution;

impl UtilizationDistribution {
    /// Place each count in exactly one of `>=20`, `18-19`, `15-17`, `<15`
    pub fn from_counts(counts: &[u32]) -> Self {
        let mut dist = Self::default();
        for &days in counts {
            match days {
                20.. => dist.days_20_plus += 1,
                18..=19 => dist.days_18_to_19 += 1,
                15..=17 => dist.days_15_to_17 += 1,
                _ => dist.under_15 += 1,
            }
        }
        dist
    }
}
