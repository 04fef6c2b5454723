use crate::core::types::Config;

/// Rejects configurations that would only fail once requests start arriving.
pub fn validate_startup(config: &Config) -> anyhow::Result<()> {
    if config.user_agent.trim().is_empty() {
        anyhow::bail!("WEATHERSUM_USER_AGENT is empty; api.weather.gov rejects anonymous clients");
    }

    if !(config.nws_base_url.starts_with("http://") || config.nws_base_url.starts_with("https://")) {
        anyhow::bail!("NWS_BASE_URL must start with http:// or https:// (got '{}')", config.nws_base_url);
    }

    if config.request_timeout_secs == 0 {
        anyhow::bail!("NWS_TIMEOUT_SECS must be at least 1");
    }

    config.bands.validate()?;

    if config.nws_base_url.starts_with("http://") {
        tracing::warn!("Upstream is plain HTTP: {}", config.nws_base_url);
    }

    Ok(())
}
