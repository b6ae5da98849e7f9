//! Per-truck revenue-day aggregation
//!
//! A revenue day is a calendar day inside the period on which a truck had at
//! least one load assignment. Days are collected into a set per truck, so
//! concurrent or overlapping loads on the same day count once.

use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};

use crate::models::fleet::{Load, Truck};
use crate::models::readiness::Period;

/// Distinct revenue days for every active truck in a period
#[derive(Debug, Clone)]
pub struct RevenueDays {
    order: Vec<String>,
    days: HashMap<String, BTreeSet<NaiveDate>>,
}

impl RevenueDays {
    /// Build day-sets for the active trucks in `trucks` from `loads`.
    ///
    /// Inactive trucks are ignored, as are loads that are unassigned, assigned
    /// to a truck outside the active set, or entirely outside the period.
    /// Active trucks without qualifying loads keep an empty set.
    pub fn aggregate(period: &Period, trucks: &[Truck], loads: &[Load]) -> Self {
        let mut order = Vec::new();
        let mut days: HashMap<String, BTreeSet<NaiveDate>> = HashMap::new();

        for truck in trucks.iter().filter(|t| t.is_active()) {
            if days.insert(truck.id.clone(), BTreeSet::new()).is_none() {
                order.push(truck.id.clone());
            }
        }

        for load in loads {
            let Some(truck_id) = load.truck_id.as_deref() else {
                continue;
            };
            let Some(set) = days.get_mut(truck_id) else {
                continue;
            };
            let Some((start, end)) = clip_to_period(period, load) else {
                continue;
            };
            set.extend(start.iter_days().take_while(|d| *d <= end));
        }

        Self { order, days }
    }

    /// Number of active trucks tracked
    pub fn truck_count(&self) -> usize {
        self.order.len()
    }

    /// Revenue-day count for a truck, `None` if it is not an active truck
    pub fn count_for(&self, truck_id: &str) -> Option<u32> {
        self.days.get(truck_id).map(|set| set.len() as u32)
    }

    pub fn days_for(&self, truck_id: &str) -> Option<&BTreeSet<NaiveDate>> {
        self.days.get(truck_id)
    }

    /// Revenue-day counts in the order the active trucks were supplied
    pub fn counts(&self) -> Vec<u32> {
        self.order
            .iter()
            .map(|id| self.days.get(id).map_or(0, |set| set.len() as u32))
            .collect()
    }

    /// `(truck_id, count)` pairs in the order the active trucks were supplied
    pub fn per_truck(&self) -> Vec<(&str, u32)> {
        self.order
            .iter()
            .map(|id| {
                let count = self.days.get(id).map_or(0, |set| set.len() as u32);
                (id.as_str(), count)
            })
            .collect()
    }
}

/// Intersect a load's assignment window with the period.
///
/// Open-ended loads run to the end of the period. Returns `None` when the
/// clipped window is empty.
pub fn clip_to_period(period: &Period, load: &Load) -> Option<(NaiveDate, NaiveDate)> {
    if !load.overlaps(period.start, period.end) {
        return None;
    }
    let start = period.start.max(load.pickup_date);
    let end = period.end.min(load.delivery_date.unwrap_or(period.end));
    if start > end {
        return None;
    }
    Some((start, end))
}
