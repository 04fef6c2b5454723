//! Turns multi-period api.weather.gov forecasts into a single plain-language
//! sentence covering today, this afternoon and tonight.
//!
//! * [`core`]: period classification, temperature banding and sentence composition.
//! * [`ports`]: the `WeatherFeed` boundary the core fetches through.
//! * [`adapters`]: the api.weather.gov client and the HTTP API.

pub mod adapters;
pub mod core;
pub mod ports;
pub mod safety;
