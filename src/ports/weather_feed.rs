use crate::core::types::{Gridpoint, RawPeriod};
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait WeatherFeed: Send + Sync {
    /// Resolves the forecast grid cell covering a coordinate.
    async fn gridpoint(&self, lat: f64, lon: f64) -> Result<Gridpoint>;

    /// Forecast periods for a grid cell, in upstream (chronological) order.
    async fn forecast(&self, gridpoint: &Gridpoint) -> Result<Vec<RawPeriod>>;
}
