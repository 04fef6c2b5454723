use crate::core::banding::BandThresholds;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

// ── Upstream Data ──

/// One forecast period as the upstream provider names it.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawPeriod {
    pub name: String,
    pub temperature: i32,
    #[serde(rename = "shortForecast")]
    pub short_description: String,
}

impl RawPeriod {
    pub fn new(name: impl Into<String>, temperature: i32, short_description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            temperature,
            short_description: short_description.into(),
        }
    }
}

/// NWS forecast office and grid cell covering a coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gridpoint {
    pub grid_id: String,
    pub grid_x: i32,
    pub grid_y: i32,
}

impl Gridpoint {
    /// Path segment used by the gridpoint forecast endpoint, e.g. `NYK/33,37`.
    pub fn forecast_path(&self) -> String {
        format!("{}/{},{}", self.grid_id, self.grid_x, self.grid_y)
    }
}

// ── Classified Data ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodKind {
    Today,
    Afternoon,
    Tonight,
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PeriodKind::Today => "Today",
            PeriodKind::Afternoon => "Afternoon",
            PeriodKind::Tonight => "Tonight",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedPeriod {
    pub kind: PeriodKind,
    pub temperature: i32,
    pub short_description: String,
}

impl ClassifiedPeriod {
    pub fn new(kind: PeriodKind, temperature: i32, short_description: impl Into<String>) -> Self {
        Self {
            kind,
            temperature,
            short_description: short_description.into(),
        }
    }
}

// ── Config ──

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_USER_AGENT: &str = "weathersum";
pub const DEFAULT_NWS_BASE_URL: &str = "https://api.weather.gov";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Slack on top of the two sequential upstream calls for classify/compose/serialize.
const REQUEST_HEADROOM: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub user_agent: String,
    pub nws_base_url: String,
    pub request_timeout_secs: u64,
    pub bands: BandThresholds,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            user_agent: DEFAULT_USER_AGENT.into(),
            nws_base_url: DEFAULT_NWS_BASE_URL.into(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            bands: BandThresholds::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `--port` wins over `PORT` when given.
    pub fn with_port_override(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// Whole-request limit for the HTTP layer. A request makes two upstream calls
    /// (points, then forecast), each bounded by `request_timeout_secs`.
    pub fn request_budget(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.saturating_mul(2)) + REQUEST_HEADROOM
    }

    /// Builds the config from an arbitrary key lookup. Unparsable numbers fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            port: parse_var(&lookup, "PORT").unwrap_or(defaults.port),
            user_agent: lookup("WEATHERSUM_USER_AGENT").unwrap_or(defaults.user_agent),
            nws_base_url: lookup("NWS_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.nws_base_url),
            request_timeout_secs: parse_var(&lookup, "NWS_TIMEOUT_SECS").unwrap_or(defaults.request_timeout_secs),
            bands: BandThresholds {
                moderate_from: parse_var(&lookup, "WEATHERSUM_MODERATE_FROM")
                    .unwrap_or(defaults.bands.moderate_from),
                hot_from: parse_var(&lookup, "WEATHERSUM_HOT_FROM").unwrap_or(defaults.bands.hot_from),
            },
        }
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|v| v.trim().parse().ok())
}
