//! Descriptive statistics over per-truck revenue-day counts

/// Arithmetic mean; 0.0 for an empty slice
pub fn mean(values: &[u32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: u64 = values.iter().map(|&v| u64::from(v)).sum();
    sum as f64 / values.len() as f64
}

/// Population standard deviation (divides by N); 0.0 for an empty slice
pub fn std_dev(values: &[u32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let avg = mean(values);
    let variance = values
        .iter()
        .map(|&v| {
            let diff = f64::from(v) - avg;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// Standard deviation relative to the mean; 0.0 when the mean is not positive
pub fn coefficient_of_variation(std_dev: f64, mean: f64) -> f64 {
    if mean > 0.0 {
        std_dev / mean
    } else {
        0.0
    }
}

/// Share of the period's calendar days worked by the average truck
pub fn utilization_rate(mean: f64, day_count: u32) -> f64 {
    if day_count == 0 {
        return 0.0;
    }
    mean / f64::from(day_count)
}

/// Summary statistics for one fleet and period
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FleetStatistics {
    pub mean: f64,
    pub std_dev: f64,
    pub coefficient_of_variation: f64,
    pub utilization_rate: f64,
}

impl FleetStatistics {
    pub fn from_counts(counts: &[u32], day_count: u32) -> Self {
        let mean = mean(counts);
        let std_dev = std_dev(counts);
        Self {
            mean,
            std_dev,
            coefficient_of_variation: coefficient_of_variation(std_dev, mean),
            utilization_rate: utilization_rate(mean, day_count),
        }
    }
}
