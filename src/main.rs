use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weathersum::adapters::http::{create_router, AppState};
use weathersum::adapters::weather::WeatherGovClient;
use weathersum::core::types::Config;
use weathersum::safety;

#[derive(Parser)]
#[command(name = "weathersum")]
#[command(about = "Serves one-sentence summaries of api.weather.gov forecasts.")]
struct CommandLine {
    /// Start server on port (overrides PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CommandLine::parse();

    if let Err(e) = dotenv::dotenv() {
        eprintln!("WARNING: .env load failed: {}", e);
    }
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weathersum=info,tower_http=debug,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().with_port_override(args.port);
    tracing::info!(
        "port={} upstream={} timeout={}s budget={}s bands=[moderate>={} hot>={}]",
        config.port,
        config.nws_base_url,
        config.request_timeout_secs,
        config.request_budget().as_secs(),
        config.bands.moderate_from,
        config.bands.hot_from
    );

    safety::validate_startup(&config)?;

    let feed = WeatherGovClient::new(&config)?;
    let state = AppState::new(Arc::new(feed), config.bands)
        .with_request_timeout(config.request_budget());
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Starting HTTP Weather Server on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("weather http service shutting down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
