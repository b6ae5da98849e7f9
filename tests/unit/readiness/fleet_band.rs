//! Unit tests for fleet banding and low-utilization counts

use fleet_readiness::models::readiness::FleetBand;
use fleet_readiness::readiness::fleet_band::LowUtilization;

#[test]
fn test_band_boundaries() {
    assert_eq!(FleetBand::classify(0), FleetBand::Small);
    assert_eq!(FleetBand::classify(9), FleetBand::Small);
    assert_eq!(FleetBand::classify(10), FleetBand::Mid);
    assert_eq!(FleetBand::classify(50), FleetBand::Mid);
    assert_eq!(FleetBand::classify(51), FleetBand::Large);
}

#[test]
fn test_band_thresholds() {
    assert_eq!(FleetBand::classify(5).low_util_threshold(), 18);
    assert_eq!(FleetBand::classify(10).low_util_threshold(), 16);
    assert_eq!(FleetBand::classify(50).low_util_threshold(), 16);
    assert_eq!(FleetBand::classify(51).low_util_threshold(), 15);
}

#[test]
fn test_low_util_is_strictly_below_threshold() {
    // Small fleet, threshold 18
    let low = LowUtilization::from_counts(&[17, 18, 19, 0]);
    assert_eq!(low.band, FleetBand::Small);
    assert_eq!(low.threshold_days, 18);
    assert_eq!(low.truck_count, 2);
    assert!((low.pct - 0.5).abs() < 1e-9);
}

#[test]
fn test_low_util_uses_large_threshold() {
    let mut counts = vec![15u32; 51];
    counts[0] = 14;
    let low = LowUtilization::from_counts(&counts);
    assert_eq!(low.band, FleetBand::Large);
    assert_eq!(low.truck_count, 1);
}

#[test]
fn test_empty_fleet_has_zero_pct() {
    let low = LowUtilization::from_counts(&[]);
    assert_eq!(low.truck_count, 0);
    assert_eq!(low.pct, 0.0);
}
