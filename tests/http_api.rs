use anyhow::Result;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt; // for oneshot
use weathersum::adapters::http::{create_router, AppState};
use weathersum::core::banding::BandThresholds;
use weathersum::core::types::{Gridpoint, RawPeriod};
use weathersum::ports::weather_feed::WeatherFeed;

enum Upstream {
    Periods(Vec<RawPeriod>),
    GridpointDown,
    ForecastDown,
    Stalled,
}

struct StubFeed(Upstream);

#[async_trait]
impl WeatherFeed for StubFeed {
    async fn gridpoint(&self, _lat: f64, _lon: f64) -> Result<Gridpoint> {
        match self.0 {
            Upstream::GridpointDown => anyhow::bail!("points -> 503 Service Unavailable"),
            Upstream::Stalled => tokio::time::sleep(Duration::from_secs(5)).await,
            _ => {}
        }
        Ok(Gridpoint {
            grid_id: "OKX".into(),
            grid_x: 33,
            grid_y: 37,
        })
    }

    async fn forecast(&self, _gridpoint: &Gridpoint) -> Result<Vec<RawPeriod>> {
        match &self.0 {
            Upstream::Periods(periods) => Ok(periods.clone()),
            _ => anyhow::bail!("no forecast data available"),
        }
    }
}

fn app(upstream: Upstream) -> Router {
    create_router(AppState::new(
        Arc::new(StubFeed(upstream)),
        BandThresholds::default(),
    ))
}

fn partly_cloudy() -> Upstream {
    Upstream::Periods(vec![RawPeriod::new("Today", 65, "Partly Cloudy")])
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    (status, serde_json::from_slice(&body).expect("Failed to parse JSON"))
}

#[tokio::test]
async fn home_lists_paths() {
    let (status, body) = get(app(partly_cloudy()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["paths"]["weather_v1"], "/v1/weather");
}

#[tokio::test]
async fn valid_coordinates_return_forecast() {
    let (status, body) = get(app(partly_cloudy()), "/v1/weather?lat=40.7128&lon=-74.0060").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["forecast"],
        "For Today expecting moderate temperature and Partly Cloudy"
    );
}

#[tokio::test]
async fn multi_period_forecast_is_truncated_at_unknown_period() {
    let upstream = Upstream::Periods(vec![
        RawPeriod::new("Today", 45, "Clear"),
        RawPeriod::new("Tonight", 30, "Frost"),
        RawPeriod::new("Saturday", 52, "Sunny"),
        RawPeriod::new("Saturday Night", 35, "Clear"),
    ]);
    let (status, body) = get(app(upstream), "/v1/weather?lat=40.7128&lon=-74.0060").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["forecast"],
        "For Today expecting cold temperature and Clear, For Tonight expecting colder temperatures with Frost"
    );
}

#[tokio::test]
async fn unrecognized_periods_only_give_empty_forecast() {
    let upstream = Upstream::Periods(vec![RawPeriod::new("Washington's Birthday", 40, "Snow")]);
    let (status, body) = get(app(upstream), "/v1/weather?lat=40&lon=-74").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["forecast"], "");
}

#[tokio::test]
async fn missing_latitude_is_bad_request() {
    let (status, body) = get(app(partly_cloudy()), "/v1/weather?lon=-74.0060").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid latitude");
}

#[tokio::test]
async fn missing_longitude_is_bad_request() {
    let (status, body) = get(app(partly_cloudy()), "/v1/weather?lat=40.7128").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid longitude");
}

#[tokio::test]
async fn invalid_latitude_is_bad_request() {
    let (status, body) = get(app(partly_cloudy()), "/v1/weather?lat=invalid&lon=-74.0060").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid latitude");
}

#[tokio::test]
async fn repeated_latitude_uses_first_value() {
    let (status, body) = get(app(partly_cloudy()), "/v1/weather?lat=40&lat=41&lon=-74").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["forecast"],
        "For Today expecting moderate temperature and Partly Cloudy"
    );
}

#[tokio::test]
async fn repeated_latitude_is_judged_on_first_value() {
    let (status, body) = get(app(partly_cloudy()), "/v1/weather?lat=abc&lat=40&lon=-74").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid latitude");
}

#[tokio::test]
async fn out_of_range_longitude_is_bad_request() {
    let (status, body) = get(app(partly_cloudy()), "/v1/weather?lat=40&lon=200").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid longitude");
}

#[tokio::test]
async fn gridpoint_failure_is_server_error() {
    let (status, body) = get(app(Upstream::GridpointDown), "/v1/weather?lat=40&lon=-74").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "Error getting gridpoint: points -> 503 Service Unavailable"
    );
}

#[tokio::test]
async fn forecast_failure_is_server_error() {
    let (status, body) = get(app(Upstream::ForecastDown), "/v1/weather?lat=40&lon=-74").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error getting forecast: no forecast data available");
}

#[tokio::test]
async fn post_is_not_allowed() {
    let response = app(partly_cloudy())
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/v1/weather?lat=40&lon=-74")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn request_timeout_comes_from_state() {
    let state = AppState::new(Arc::new(StubFeed(Upstream::Stalled)), BandThresholds::default())
        .with_request_timeout(Duration::from_millis(20));
    let response = create_router(state)
        .oneshot(
            Request::builder()
                .uri("/v1/weather?lat=40&lon=-74")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
}
