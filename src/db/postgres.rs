//! PostgreSQL-backed fleet record store (read-only)

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use chrono::NaiveDate;
use std::time::Duration;
use tokio_postgres::{Client, NoTls, Row};
use tracing::{info, warn};

use crate::config;
use crate::error::StoreError;
use crate::models::fleet::{Load, Truck, TruckStatus};
use crate::services::fleet_store::FleetStore;

const ACTIVE_TRUCKS_SQL: &str = "SELECT id::text, status::text
     FROM trucks
     WHERE company_id::text = $1 AND status::text = 'ACTIVE'
     ORDER BY id";

const OVERLAPPING_LOADS_SQL: &str = "SELECT id::text, truck_id::text, pickup_date::date, delivery_date::date
     FROM loads
     WHERE company_id::text = $1
       AND truck_id IS NOT NULL
       AND deleted_at IS NULL
       AND pickup_date::date <= $3
       AND (delivery_date IS NULL OR delivery_date::date >= $2)";

pub struct PostgresFleetStore {
    client: Client,
}

impl PostgresFleetStore {
    /// Connect using `DATABASE_URL` and `DATABASE_CONNECT_RETRIES`
    pub async fn from_env() -> Result<Self, StoreError> {
        Self::connect(&config::get_database_url(), config::get_connect_retries()).await
    }

    /// Connect with exponential backoff, giving up after `retries` failed attempts
    pub async fn connect(database_url: &str, retries: usize) -> Result<Self, StoreError> {
        let (client, connection) = (|| async { tokio_postgres::connect(database_url, NoTls).await })
            .retry(
                ExponentialBuilder::default()
                    .with_min_delay(Duration::from_millis(200))
                    .with_max_times(retries),
            )
            .notify(|e: &tokio_postgres::Error, delay: Duration| {
                warn!(error = %e, delay_ms = delay.as_millis() as u64, "Fleet store connection failed, retrying");
            })
            .await
            .map_err(|e| {
                Box::new(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    format!("Failed to connect to fleet store: {}", e),
                )) as StoreError
            })?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!(error = %e, "Fleet store connection error");
            }
        });

        info!("Fleet store connected");
        Ok(Self { client })
    }
}

#[async_trait]
impl FleetStore for PostgresFleetStore {
    async fn list_active_trucks(&self, company_id: &str) -> Result<Vec<Truck>, StoreError> {
        let rows = self
            .client
            .query(ACTIVE_TRUCKS_SQL, &[&company_id])
            .await
            .map_err(|e| {
                Box::new(std::io::Error::other(format!("Failed to query trucks: {}", e)))
                    as StoreError
            })?;

        rows.iter().map(truck_from_row).collect()
    }

    async fn list_loads_overlapping(
        &self,
        company_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Load>, StoreError> {
        let rows = self
            .client
            .query(OVERLAPPING_LOADS_SQL, &[&company_id, &start, &end])
            .await
            .map_err(|e| {
                Box::new(std::io::Error::other(format!("Failed to query loads: {}", e)))
                    as StoreError
            })?;

        rows.iter().map(load_from_row).collect()
    }
}

fn truck_from_row(row: &Row) -> Result<Truck, StoreError> {
    let id: String = row.try_get(0)?;
    let status: String = row.try_get(1)?;
    Ok(Truck::new(id, TruckStatus::from_db(&status)))
}

fn load_from_row(row: &Row) -> Result<Load, StoreError> {
    Ok(Load {
        id: row.try_get(0)?,
        truck_id: row.try_get(1)?,
        pickup_date: row.try_get(2)?,
        delivery_date: row.try_get(3)?,
    })
}
