use crate::core::banding::BandThresholds;
use crate::core::engine::{self, SummaryError};
use crate::core::types::Config;
use crate::ports::weather_feed::WeatherFeed;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

pub const WEATHER_V1_PATH: &str = "/v1/weather";

// ── Application State ──

#[derive(Clone)]
pub struct AppState {
    pub feed: Arc<dyn WeatherFeed>,
    pub bands: BandThresholds,
    /// Whole-request limit; must outlast both upstream calls.
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(feed: Arc<dyn WeatherFeed>, bands: BandThresholds) -> Self {
        Self {
            feed,
            bands,
            request_timeout: Config::default().request_budget(),
        }
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}

pub fn create_router(state: AppState) -> Router {
    let request_timeout = state.request_timeout;
    Router::new()
        .route("/", get(api_home))
        .route(WEATHER_V1_PATH, get(simplified_weather))
        // Middleware (applied in reverse order)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ── Handlers ──

async fn api_home() -> impl IntoResponse {
    Json(serde_json::json!({
        "paths": {
            "weather_v1": WEATHER_V1_PATH
        }
    }))
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ForecastResult {
    pub forecast: String,
}

async fn simplified_weather(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ForecastResult>, ApiError> {
    let lat = parse_coordinate(first_param(&params, "lat"), 90.0).ok_or(ApiError::InvalidLatitude)?;
    let lon = parse_coordinate(first_param(&params, "lon"), 180.0).ok_or(ApiError::InvalidLongitude)?;

    let forecast = engine::summarize(state.feed.as_ref(), state.bands, lat, lon).await?;
    Ok(Json(ForecastResult { forecast }))
}

/// Query pairs are taken raw so repeated or odd keys never trip the extractor;
/// the first occurrence of a key wins.
fn first_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn parse_coordinate(raw: Option<&str>, limit: f64) -> Option<f64> {
    let value: f64 = raw?.trim().parse().ok()?;
    if value.is_finite() && value.abs() <= limit {
        Some(value)
    } else {
        None
    }
}

// ── Error Handling ──

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid latitude")]
    InvalidLatitude,
    #[error("Invalid longitude")]
    InvalidLongitude,
    #[error(transparent)]
    Summary(#[from] SummaryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            ApiError::InvalidLatitude | ApiError::InvalidLongitude => StatusCode::BAD_REQUEST,
            ApiError::Summary(e) => {
                tracing::error!("{}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(serde_json::json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
