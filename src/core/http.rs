//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

use crate::db::PostgresFleetStore;
use crate::error::ReadinessError;
use crate::metrics::Metrics;
use crate::models::readiness::ReadinessResult;
use crate::readiness::engine::ReadinessEngine;
use crate::services::fleet_store::FleetStore;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub store: Option<Arc<dyn FleetStore>>,
}

impl AppState {
    pub fn new(metrics: Arc<Metrics>, store: Option<Arc<dyn FleetStore>>) -> Self {
        Self {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics,
            start_time: Arc::new(Instant::now()),
            store,
        }
    }
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// Error body returned by the API
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    kind: &'static str,
    message: String,
}

impl ApiError {
    fn store_not_configured() -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            kind: "store_unavailable",
            message: "Fleet record store is not configured".to_string(),
        }
    }
}

impl From<ReadinessError> for ApiError {
    fn from(err: ReadinessError) -> Self {
        let status = match err {
            ReadinessError::InvalidRange(_) => StatusCode::BAD_REQUEST,
            ReadinessError::DataUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        Self {
            status,
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.kind,
            "message": self.message,
        }));
        (self.status, body).into_response()
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "fleet-readiness"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
struct ReadinessQuery {
    range: Option<String>,
}

/// Expansion readiness for one company; `range` defaults to `month`
async fn expansion_readiness(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
    Query(params): Query<ReadinessQuery>,
) -> Result<Json<ReadinessResult>, ApiError> {
    let store = state
        .store
        .as_ref()
        .ok_or_else(ApiError::store_not_configured)?;
    let range = params.range.as_deref().unwrap_or("month");

    match ReadinessEngine::calculate_expansion_readiness(store.as_ref(), &company_id, range, Utc::now())
        .await
    {
        Ok(result) => {
            state
                .metrics
                .readiness_evaluations_total
                .with_label_values(&[range, result.fleet_utilization.score.tier.as_str()])
                .inc();
            Ok(Json(result))
        }
        Err(e) => {
            warn!(company_id = %company_id, range = %range, error = %e, "Readiness evaluation failed");
            state
                .metrics
                .readiness_evaluation_failures_total
                .with_label_values(&[e.kind()])
                .inc();
            Err(e.into())
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route(
            "/api/companies/{company_id}/expansion-readiness",
            get(expansion_readiness),
        )
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);

    // The API stays up without a store; readiness requests then return 503
    let store: Option<Arc<dyn FleetStore>> = match PostgresFleetStore::from_env().await {
        Ok(store) => Some(Arc::new(store)),
        Err(e) => {
            warn!(error = %e, "Fleet store unreachable - readiness endpoint will be unavailable");
            None
        }
    };

    let app = create_router(AppState::new(metrics, store));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
