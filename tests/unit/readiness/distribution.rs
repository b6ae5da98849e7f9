//! Unit tests for the revenue-day distribution

use fleet_readiness::models::readiness::UtilizationDistribution;

#[test]
fn test_bucket_edges() {
    let dist = UtilizationDistribution::from_counts(&[0, 14, 15, 17, 18, 19, 20, 31]);
    assert_eq!(dist.under_15, 2);
    assert_eq!(dist.days_15_to_17, 2);
    assert_eq!(dist.days_18_to_19, 2);
    assert_eq!(dist.days_20_plus, 2);
}

#[test]
fn test_buckets_sum_to_fleet_size() {
    let counts: Vec<u32> = (0..=40).collect();
    let dist = UtilizationDistribution::from_counts(&counts);
    assert_eq!(dist.total(), counts.len());
}

#[test]
fn test_empty_fleet() {
    assert_eq!(UtilizationDistribution::from_counts(&[]), UtilizationDistribution::default());
}

#[test]
fn test_bucket_keys_in_json() {
    let dist = UtilizationDistribution::from_counts(&[21, 18, 16, 3]);
    let json = serde_json::to_value(dist).unwrap();
    assert_eq!(json["20Plus"], 1);
    assert_eq!(json["18To19"], 1);
    assert_eq!(json["15To17"], 1);
    assert_eq!(json["under15"], 1);
}
