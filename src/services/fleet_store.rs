//! Read contract the readiness engine needs from the fleet record store

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::models::fleet::{Load, Truck};

/// Read-only access to a company's trucks and loads.
///
/// Implementations must not return soft-deleted loads or loads without a
/// truck reference from `list_loads_overlapping`.
#[async_trait]
pub trait FleetStore: Send + Sync {
    /// Trucks whose status is ACTIVE
    async fn list_active_trucks(&self, company_id: &str) -> Result<Vec<Truck>, StoreError>;

    /// Assigned loads whose `[pickup, delivery]` window overlaps `[start, end]`
    async fn list_loads_overlapping(
        &self,
        company_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Load>, StoreError>;
}

#[derive(Debug, Default)]
struct CompanyRecords {
    trucks: Vec<Truck>,
    loads: Vec<Load>,
    deleted_loads: HashSet<String>,
}

/// In-process store for tests and database-less runs
#[derive(Clone, Default)]
pub struct InMemoryFleetStore {
    companies: Arc<RwLock<HashMap<String, CompanyRecords>>>,
}

impl InMemoryFleetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_truck(&self, company_id: &str, truck: Truck) {
        let mut companies = self.companies.write().await;
        companies
            .entry(company_id.to_string())
            .or_default()
            .trucks
            .push(truck);
    }

    pub async fn add_load(&self, company_id: &str, load: Load) {
        let mut companies = self.companies.write().await;
        companies
            .entry(company_id.to_string())
            .or_default()
            .loads
            .push(load);
    }

    /// Mark a load as soft-deleted; it stays stored but is no longer listed
    pub async fn soft_delete_load(&self, company_id: &str, load_id: &str) -> bool {
        let mut companies = self.companies.write().await;
        match companies.get_mut(company_id) {
            Some(records) if records.loads.iter().any(|l| l.id == load_id) => {
                records.deleted_loads.insert(load_id.to_string())
            }
            _ => false,
        }
    }
}

#[async_trait]
impl FleetStore for InMemoryFleetStore {
    async fn list_active_trucks(&self, company_id: &str) -> Result<Vec<Truck>, StoreError> {
        let companies = self.companies.read().await;
        Ok(companies
            .get(company_id)
            .map(|records| {
                records
                    .trucks
                    .iter()
                    .filter(|t| t.is_active())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn list_loads_overlapping(
        &self,
        company_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Load>, StoreError> {
        let companies = self.companies.read().await;
        Ok(companies
            .get(company_id)
            .map(|records| {
                records
                    .loads
                    .iter()
                    .filter(|l| l.truck_id.is_some())
                    .filter(|l| !records.deleted_loads.contains(&l.id))
                    .filter(|l| l.overlaps(start, end))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
