//! Unit tests for revenue-day aggregation

use chrono::NaiveDate;
use fleet_readiness::models::fleet::{Load, Truck, TruckStatus};
use fleet_readiness::models::readiness::Period;
use fleet_readiness::readiness::revenue_days::{clip_to_period, RevenueDays};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn march_2024() -> Period {
    Period {
        start: d(2024, 3, 1),
        end: d(2024, 3, 31),
        day_count: 31,
    }
}

fn closed(id: &str, truck: &str, from: NaiveDate, to: NaiveDate) -> Load {
    Load::assigned(id, truck, from).with_delivery_date(to)
}

#[test]
fn test_truck_without_loads_counts_zero() {
    let trucks = vec![Truck::active("t1"), Truck::active("t2")];
    let loads = vec![closed("l1", "t1", d(2024, 3, 2), d(2024, 3, 4))];
    let days = RevenueDays::aggregate(&march_2024(), &trucks, &loads);

    assert_eq!(days.truck_count(), 2);
    assert_eq!(days.count_for("t1"), Some(3));
    assert_eq!(days.count_for("t2"), Some(0));
    assert_eq!(days.counts(), vec![3, 0]);
}

#[test]
fn test_overlapping_loads_are_not_double_counted() {
    let trucks = vec![Truck::active("t1")];
    let loads = vec![
        closed("a", "t1", d(2024, 3, 1), d(2024, 3, 5)),
        closed("b", "t1", d(2024, 3, 3), d(2024, 3, 8)),
    ];
    let days = RevenueDays::aggregate(&march_2024(), &trucks, &loads);
    assert_eq!(days.count_for("t1"), Some(8));
}

#[test]
fn test_same_day_loads_count_once() {
    let trucks = vec![Truck::active("t1")];
    let loads = vec![
        closed("a", "t1", d(2024, 3, 10), d(2024, 3, 10)),
        closed("b", "t1", d(2024, 3, 10), d(2024, 3, 10)),
        Load::assigned("c", "t1", d(2024, 3, 10)).with_delivery_date(d(2024, 3, 10)),
    ];
    let days = RevenueDays::aggregate(&march_2024(), &trucks, &loads);
    assert_eq!(days.count_for("t1"), Some(1));
}

#[test]
fn test_full_cover_caps_at_day_count() {
    let period = march_2024();
    let trucks = vec![Truck::active("t1")];
    let loads = vec![
        closed("a", "t1", d(2024, 2, 1), d(2024, 4, 30)),
        closed("b", "t1", d(2024, 2, 20), d(2024, 4, 2)),
        Load::assigned("c", "t1", d(2024, 1, 1)),
    ];
    let days = RevenueDays::aggregate(&period, &trucks, &loads);
    assert_eq!(days.count_for("t1"), Some(period.day_count));
}

#[test]
fn test_open_ended_load_runs_to_period_end() {
    let trucks = vec![Truck::active("t1")];
    let loads = vec![Load::assigned("a", "t1", d(2024, 3, 25))];
    let days = RevenueDays::aggregate(&march_2024(), &trucks, &loads);
    assert_eq!(days.count_for("t1"), Some(7));
    let set = days.days_for("t1").unwrap();
    assert_eq!(set.iter().next(), Some(&d(2024, 3, 25)));
    assert_eq!(set.iter().last(), Some(&d(2024, 3, 31)));
}

#[test]
fn test_loads_outside_period_contribute_nothing() {
    let trucks = vec![Truck::active("t1")];
    let loads = vec![
        closed("before", "t1", d(2024, 2, 1), d(2024, 2, 29)),
        closed("after", "t1", d(2024, 4, 1), d(2024, 4, 3)),
        Load::assigned("future-open", "t1", d(2024, 4, 2)),
    ];
    let days = RevenueDays::aggregate(&march_2024(), &trucks, &loads);
    assert_eq!(days.count_for("t1"), Some(0));
}

#[test]
fn test_unassigned_and_inactive_truck_loads_are_ignored() {
    let trucks = vec![
        Truck::active("t1"),
        Truck::new("t2", TruckStatus::Maintenance),
    ];
    let loads = vec![
        Load::new("unassigned", None, d(2024, 3, 1)).with_delivery_date(d(2024, 3, 31)),
        closed("inactive", "t2", d(2024, 3, 1), d(2024, 3, 31)),
        closed("unknown", "t9", d(2024, 3, 1), d(2024, 3, 31)),
    ];
    let days = RevenueDays::aggregate(&march_2024(), &trucks, &loads);
    assert_eq!(days.truck_count(), 1);
    assert_eq!(days.count_for("t1"), Some(0));
    assert_eq!(days.count_for("t2"), None);
}

#[test]
fn test_delivery_before_pickup_is_skipped() {
    let period = march_2024();
    let load = closed("bad", "t1", d(2024, 3, 10), d(2024, 3, 5));
    assert_eq!(clip_to_period(&period, &load), None);

    let days = RevenueDays::aggregate(&period, &[Truck::active("t1")], &[load]);
    assert_eq!(days.count_for("t1"), Some(0));
}

#[test]
fn test_clip_to_period_bounds() {
    let period = march_2024();
    let load = closed("a", "t1", d(2024, 2, 20), d(2024, 3, 4));
    assert_eq!(clip_to_period(&period, &load), Some((d(2024, 3, 1), d(2024, 3, 4))));

    let open = Load::assigned("b", "t1", d(2024, 3, 30));
    assert_eq!(clip_to_period(&period, &open), Some((d(2024, 3, 30), d(2024, 3, 31))));
}

#[test]
fn test_per_truck_preserves_input_order() {
    let trucks = vec![Truck::active("b"), Truck::active("a"), Truck::active("b")];
    let loads = vec![closed("l", "a", d(2024, 3, 1), d(2024, 3, 2))];
    let days = RevenueDays::aggregate(&march_2024(), &trucks, &loads);
    assert_eq!(days.per_truck(), vec![("b", 0), ("a", 2)]);
}
