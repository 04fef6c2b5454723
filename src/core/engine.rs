use crate::core::banding::BandThresholds;
use crate::core::classifier;
use crate::core::composer::ForecastSummary;
use crate::ports::weather_feed::WeatherFeed;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Error getting gridpoint: {0:#}")]
    Gridpoint(anyhow::Error),
    #[error("Error getting forecast: {0:#}")]
    Forecast(anyhow::Error),
}

/// Fetches the forecast covering `lat`/`lon` and renders it as one sentence.
pub async fn summarize(
    feed: &dyn WeatherFeed,
    bands: BandThresholds,
    lat: f64,
    lon: f64,
) -> Result<String, SummaryError> {
    // 1. GRIDPOINT
    let gridpoint = feed
        .gridpoint(lat, lon)
        .await
        .map_err(SummaryError::Gridpoint)?;
    tracing::debug!("Resolved {},{} to gridpoint {}", lat, lon, gridpoint.forecast_path());

    // 2. FORECAST
    let raw = feed
        .forecast(&gridpoint)
        .await
        .map_err(SummaryError::Forecast)?;

    // 3. CLASSIFY: stops at the first period that is not today/afternoon/tonight
    let mut summary = ForecastSummary::new(bands);
    for period in classifier::classify_periods(&raw) {
        summary.add_period(period);
    }
    tracing::debug!(
        "Kept {} of {} periods for {}",
        summary.len(),
        raw.len(),
        gridpoint.forecast_path()
    );

    // 4. COMPOSE
    Ok(summary.render())
}
