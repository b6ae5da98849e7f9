//! Truck and load records as read from the fleet record store

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TruckStatus {
    Active,
    Inactive,
    Maintenance,
}

impl TruckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TruckStatus::Active => "ACTIVE",
            TruckStatus::Inactive => "INACTIVE",
            TruckStatus::Maintenance => "MAINTENANCE",
        }
    }

    /// Parse a stored status column. Unknown values never count as active.
    pub fn from_db(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "ACTIVE" => TruckStatus::Active,
            "MAINTENANCE" => TruckStatus::Maintenance,
            _ => TruckStatus::Inactive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Truck {
    pub id: String,
    pub status: TruckStatus,
}

impl Truck {
    pub fn new(id: impl Into<String>, status: TruckStatus) -> Self {
        Self {
            id: id.into(),
            status,
        }
    }

    pub fn active(id: impl Into<String>) -> Self {
        Self::new(id, TruckStatus::Active)
    }

    pub fn is_active(&self) -> bool {
        self.status == TruckStatus::Active
    }
}

/// A load assignment. `delivery_date` is `None` while the load is still in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Load {
    pub id: String,
    pub truck_id: Option<String>,
    pub pickup_date: NaiveDate,
    pub delivery_date: Option<NaiveDate>,
}

impl Load {
    pub fn new(id: impl Into<String>, truck_id: Option<String>, pickup_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            truck_id,
            pickup_date,
            delivery_date: None,
        }
    }

    pub fn assigned(id: impl Into<String>, truck_id: impl Into<String>, pickup_date: NaiveDate) -> Self {
        Self::new(id, Some(truck_id.into()), pickup_date)
    }

    pub fn with_delivery_date(mut self, delivery_date: NaiveDate) -> Self {
        self.delivery_date = Some(delivery_date);
        self
    }

    /// Whether any part of `[pickup_date, delivery_date]` falls inside `[start, end]`.
    /// An open-ended load overlaps every window ending on or after its pickup.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.pickup_date <= end && self.delivery_date.map_or(true, |d| d >= start)
    }
}
