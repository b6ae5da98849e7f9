//! Unit tests for truck and load records

use chrono::NaiveDate;
use fleet_readiness::models::fleet::{Load, Truck, TruckStatus};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_status_parsing() {
    assert_eq!(TruckStatus::from_db("ACTIVE"), TruckStatus::Active);
    assert_eq!(TruckStatus::from_db("active "), TruckStatus::Active);
    assert_eq!(TruckStatus::from_db("MAINTENANCE"), TruckStatus::Maintenance);
    assert_eq!(TruckStatus::from_db("SOLD"), TruckStatus::Inactive);
}

#[test]
fn test_only_active_trucks_are_active() {
    assert!(Truck::active("t1").is_active());
    assert!(!Truck::new("t2", TruckStatus::Maintenance).is_active());
    assert!(!Truck::new("t3", TruckStatus::Inactive).is_active());
}

#[test]
fn test_closed_load_overlap() {
    let load = Load::assigned("l1", "t1", d(2024, 3, 5)).with_delivery_date(d(2024, 3, 10));
    assert!(load.overlaps(d(2024, 3, 1), d(2024, 3, 5)));
    assert!(load.overlaps(d(2024, 3, 10), d(2024, 3, 31)));
    assert!(load.overlaps(d(2024, 3, 6), d(2024, 3, 7)));
    assert!(!load.overlaps(d(2024, 3, 11), d(2024, 3, 31)));
    assert!(!load.overlaps(d(2024, 2, 1), d(2024, 3, 4)));
}

#[test]
fn test_open_ended_load_overlap() {
    let load = Load::assigned("l1", "t1", d(2024, 3, 5));
    assert!(load.overlaps(d(2024, 6, 1), d(2024, 6, 30)));
    assert!(load.overlaps(d(2024, 3, 1), d(2024, 3, 5)));
    assert!(!load.overlaps(d(2024, 2, 1), d(2024, 3, 4)));
}

#[test]
fn test_status_serializes_uppercase() {
    let json = serde_json::to_value(Truck::active("t1")).unwrap();
    assert_eq!(json["status"], "ACTIVE");
}
