//! HTTP endpoint server using Axum

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
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

use crate::error::AnalysisError;
use crate::metrics::Metrics;
use crate::models::{PriceSeries, TrendAnalysis};
use crate::signals::TrendAnalyzer;

const DEFAULT_SHORT_WINDOW: usize = 10;
const DEFAULT_LONG_WINDOW: usize = 30;
const DEFAULT_PRECISION: u32 = 2;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
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

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Stock Trend Analysis API" }))
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "trendkit-api"
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
    state.metrics.http_requests_in_flight.dec();

    let status = response.status();
    let duration = start.elapsed();

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

/// Body of `POST /analyze_stock_trends`.
///
/// Window sizes and precision are optional and default to a 10/30 day
/// crossover rounded to 2 digits.
#[derive(Debug, Deserialize)]
struct AnalyzeTrendsRequest {
    company_name: String,
    dates: Vec<NaiveDate>,
    prices: Vec<f64>,
    #[serde(default = "default_short_window")]
    short_window: usize,
    #[serde(default = "default_long_window")]
    long_window: usize,
    #[serde(default = "default_precision")]
    precision: u32,
}

fn default_short_window() -> usize {
    DEFAULT_SHORT_WINDOW
}

fn default_long_window() -> usize {
    DEFAULT_LONG_WINDOW
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

/// An analysis failure is a deterministic input problem: always a 400.
struct ApiError(AnalysisError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "detail": format!("Analysis failed: {}", self.0) }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

/// Run the trend analysis for one request body.
async fn analyze_stock_trends(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTrendsRequest>,
) -> Result<Json<TrendAnalysis>, ApiError> {
    let AnalyzeTrendsRequest {
        company_name,
        dates,
        prices,
        short_window,
        long_window,
        precision,
    } = request;

    let result = PriceSeries::new(dates, prices).and_then(|series| {
        TrendAnalyzer::analyze(&company_name, &series, short_window, long_window, precision)
    });

    match result {
        Ok(analysis) => {
            state.metrics.analyses_total.inc();
            info!(
                company = %analysis.company_name,
                signals = analysis.signals.len(),
                "Trend analysis completed"
            );
            Ok(Json(analysis))
        }
        Err(err) => {
            state.metrics.analysis_failures_total.inc();
            warn!(error = %err, company = %company_name, "Rejected trend analysis request");
            Err(ApiError(err))
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/analyze_stock_trends", post(analyze_stock_trends))
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
    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics,
        start_time: Arc::new(Instant::now()),
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
