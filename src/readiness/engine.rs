//! Expansion readiness evaluation: the entry point that ties the
//! aggregation, statistics, banding and scoring steps together.

use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

use crate::error::ReadinessError;
use crate::models::fleet::{Load, Truck};
use crate::models::readiness::{
    FleetUtilization, FleetUtilizationMetrics, FleetUtilizationScore, Period, ReadinessResult,
    ScoreTier, UtilizationDistribution,
};
use crate::readiness::fleet_band::LowUtilization;
use crate::readiness::period::TimeRange;
use crate::readiness::revenue_days::RevenueDays;
use crate::readiness::scoring::score_utilization;
use crate::readiness::statistics::FleetStatistics;
use crate::services::fleet_store::FleetStore;

pub struct ReadinessEngine;

impl ReadinessEngine {
    /// Fetch a company's fleet snapshot and evaluate it for `range`.
    ///
    /// The range is validated before any store read. Store failures surface as
    /// `DataUnavailable`; no partial result is produced.
    pub async fn calculate_expansion_readiness(
        store: &dyn FleetStore,
        company_id: &str,
        range: &str,
        now: DateTime<Utc>,
    ) -> Result<ReadinessResult, ReadinessError> {
        let range: TimeRange = range.parse()?;
        let period = range.resolve(now);
        debug!(
            company_id = %company_id,
            range = %range,
            start = %period.start,
            end = %period.end,
            days = period.day_count,
            "Resolved readiness period"
        );

        let trucks = store.list_active_trucks(company_id).await.map_err(|e| {
            error!(company_id = %company_id, error = %e, "Failed to list active trucks");
            ReadinessError::DataUnavailable(format!("active trucks: {}", e))
        })?;

        let loads = store
            .list_loads_overlapping(company_id, period.start, period.end)
            .await
            .map_err(|e| {
                error!(company_id = %company_id, error = %e, "Failed to list loads");
                ReadinessError::DataUnavailable(format!("loads: {}", e))
            })?;

        let result = Self::evaluate(&period, &trucks, &loads);
        info!(
            company_id = %company_id,
            range = %range,
            trucks = result.fleet_utilization.metrics.active_truck_count,
            loads = loads.len(),
            tier = result.fleet_utilization.score.tier.as_str(),
            ready_to_expand = result.ready_to_expand,
            "Expansion readiness evaluated"
        );
        Ok(result)
    }

    /// Evaluate an already-fetched snapshot for a resolved period
    pub fn evaluate(period: &Period, trucks: &[Truck], loads: &[Load]) -> ReadinessResult {
        let metrics = Self::compute_metrics(period, trucks, loads);
        let score = score_utilization(metrics.avg_revenue_days_per_truck);
        compose(metrics, score)
    }

    pub fn compute_metrics(
        period: &Period,
        trucks: &[Truck],
        loads: &[Load],
    ) -> FleetUtilizationMetrics {
        let revenue_days = RevenueDays::aggregate(period, trucks, loads);
        let counts = revenue_days.counts();

        let stats = FleetStatistics::from_counts(&counts, period.day_count);
        let low_util = LowUtilization::from_counts(&counts);
        let distribution = UtilizationDistribution::from_counts(&counts);

        FleetUtilizationMetrics {
            period_start: period.start,
            period_end: period.end,
            period_days: period.day_count,
            active_truck_count: counts.len(),
            fleet_band: low_util.band,
            avg_revenue_days_per_truck: stats.mean,
            utilization_rate: stats.utilization_rate,
            low_util_threshold_days: low_util.threshold_days,
            low_util_truck_count: low_util.truck_count,
            low_util_pct: low_util.pct,
            distribution,
            coefficient_of_variation: stats.coefficient_of_variation,
            // TODO: compare against the preceding period of equal length once
            // historical snapshots are available.
            trend_delta: 0.0,
        }
    }
}

fn compose(metrics: FleetUtilizationMetrics, score: FleetUtilizationScore) -> ReadinessResult {
    let overall_score = score.total_points;
    let ready_to_expand = score.tier == ScoreTier::Strong;
    ReadinessResult {
        fleet_utilization: FleetUtilization { metrics, score },
        overall_score,
        ready_to_expand,
    }
}
