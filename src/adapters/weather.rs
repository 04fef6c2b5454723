use crate::core::types::{Config, Gridpoint, RawPeriod};
use crate::ports::weather_feed::WeatherFeed;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("{url} -> {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("no forecast data available")]
    NoPeriods,
}

/// api.weather.gov client: coordinate -> gridpoint -> forecast periods.
pub struct WeatherGovClient {
    client: reqwest::Client,
    base_url: String,
    user_agent: String,
}

impl WeatherGovClient {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
                .build()?,
            base_url: config.nws_base_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
        })
    }

    /// `{base}/points/{lat},{lon}` with coordinates in shortest form (`40.7128,-74.006`).
    pub fn points_url(&self, lat: f64, lon: f64) -> String {
        format!("{}/points/{},{}", self.base_url, lat, lon)
    }

    pub fn forecast_url(&self, gridpoint: &Gridpoint) -> String {
        format!("{}/gridpoints/{}/forecast", self.base_url, gridpoint.forecast_path())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let resp = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/geo+json")
            .send()
            .await
            .with_context(|| format!("GET {}", url))?;

        if !resp.status().is_success() {
            tracing::warn!("NWS {} -> {}", url, resp.status());
            return Err(FeedError::Status {
                url: url.to_string(),
                status: resp.status(),
            }
            .into());
        }

        resp.json::<T>()
            .await
            .with_context(|| format!("decoding {}", url))
    }
}

// ── Wire Shapes ──

#[derive(Debug, Deserialize)]
struct PointsResponse {
    properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PointsProperties {
    grid_id: String,
    grid_x: i32,
    grid_y: i32,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
struct ForecastProperties {
    #[serde(default)]
    periods: Vec<RawPeriod>,
}

#[async_trait]
impl WeatherFeed for WeatherGovClient {
    async fn gridpoint(&self, lat: f64, lon: f64) -> Result<Gridpoint> {
        let url = self.points_url(lat, lon);
        let points: PointsResponse = self.get_json(&url).await?;
        Ok(Gridpoint {
            grid_id: points.properties.grid_id,
            grid_x: points.properties.grid_x,
            grid_y: points.properties.grid_y,
        })
    }

    async fn forecast(&self, gridpoint: &Gridpoint) -> Result<Vec<RawPeriod>> {
        let url = self.forecast_url(gridpoint);
        let forecast: ForecastResponse = self.get_json(&url).await?;
        let periods = forecast.properties.periods;
        if periods.is_empty() {
            tracing::warn!("NWS forecast for {} has no periods", gridpoint.forecast_path());
            return Err(FeedError::NoPeriods.into());
        }
        Ok(periods)
    }
}
