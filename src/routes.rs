use crate::charts::ChartData;
use crate::error::AppError;
use crate::export::{export_file_name, near_low_csv};
use crate::overview::UniverseOverview;
use crate::scanner::MarketScanner;
use crate::types::{Listing, ScanParams, ScanResult, Sector};
use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub const MAX_THRESHOLD_PCT: f64 = 15.0;

pub struct AppState {
    scanner: MarketScanner,
    seed: u64,
    scans_served: RwLock<u64>,
}

impl AppState {
    /// Generates the universe once; it is never mutated afterwards.
    pub fn new(seed: u64) -> Self {
        let mut scanner = MarketScanner::default();
        scanner.initialize(seed);
        Self { scanner, seed, scans_served: RwLock::new(0) }
    }

    pub fn scanner(&self) -> &MarketScanner {
        &self.scanner
    }

    async fn run_scan(&self, params: &ScanParams) -> ScanResult {
        let result = self.scanner.scan(params);
        *self.scans_served.write().await += 1;
        info!(
            "Scan complete: {} scanned, {} within {}% of 52-week low",
            result.aggregates.scanned_count, result.aggregates.near_low_count, params.threshold_pct
        );
        result
    }
}

/// Query form of the scan controls. Missing fields take the dashboard defaults;
/// `sectors` is comma separated and an empty value selects no sectors.
#[derive(Debug, Default, Deserialize)]
pub struct ScanQuery {
    pub threshold: Option<f64>,
    pub sectors: Option<String>,
    pub min_cap: Option<f64>,
    pub max_cap: Option<f64>,
    pub min_volume: Option<f64>,
}

impl TryFrom<ScanQuery> for ScanParams {
    type Error = AppError;

    fn try_from(query: ScanQuery) -> Result<Self, Self::Error> {
        let defaults = ScanParams::default();

        let threshold_pct = query.threshold.unwrap_or(defaults.threshold_pct);
        if !(0.0..=MAX_THRESHOLD_PCT).contains(&threshold_pct) {
            return Err(AppError::Validation(format!(
                "threshold must be between 0 and {}, got {}",
                MAX_THRESHOLD_PCT, threshold_pct
            )));
        }

        let min_volume = query.min_volume.unwrap_or(defaults.min_volume);
        if min_volume.is_nan() || min_volume < 0.0 {
            return Err(AppError::Validation(format!(
                "min_volume must be >= 0, got {}",
                min_volume
            )));
        }

        let selected_sectors = match query.sectors {
            None => defaults.selected_sectors,
            Some(list) => list
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.parse::<Sector>().map_err(AppError::Validation))
                .collect::<Result<Vec<_>, _>>()?,
        };

        Ok(ScanParams {
            threshold_pct,
            selected_sectors,
            min_cap: query.min_cap.unwrap_or(defaults.min_cap),
            max_cap: query.max_cap.unwrap_or(defaults.max_cap),
            min_volume,
        })
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/status", get(status))
        .route("/api/universe", get(universe))
        .route("/api/scan", get(scan))
        .route("/api/scan/charts", get(charts))
        .route("/api/scan/csv", get(csv_export))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "lowscan",
        "timestamp": Utc::now().to_rfc3339()
    }))
}

async fn status(State(s): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let scans = *s.scans_served.read().await;
    Json(serde_json::json!({
        "seed": s.seed,
        "scansServed": scans,
        "overview": UniverseOverview::from_universe(s.scanner.universe()),
    }))
}

async fn universe(State(s): State<Arc<AppState>>) -> Json<Vec<Listing>> {
    Json(s.scanner.universe().to_vec())
}

async fn scan(
    State(s): State<Arc<AppState>>,
    Query(query): Query<ScanQuery>,
) -> Result<Json<ScanResult>, AppError> {
    let params = ScanParams::try_from(query)?;
    Ok(Json(s.run_scan(&params).await))
}

async fn charts(
    State(s): State<Arc<AppState>>,
    Query(query): Query<ScanQuery>,
) -> Result<Json<ChartData>, AppError> {
    let params = ScanParams::try_from(query)?;
    let result = s.run_scan(&params).await;
    Ok(Json(ChartData::build(&result, params.threshold_pct)))
}

async fn csv_export(
    State(s): State<Arc<AppState>>,
    Query(query): Query<ScanQuery>,
) -> Result<impl IntoResponse, AppError> {
    let params = ScanParams::try_from(query)?;
    let result = s.run_scan(&params).await;
    let body = near_low_csv(&result.near_low)?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_file_name(Utc::now().date_naive())
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}
