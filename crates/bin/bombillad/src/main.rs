//! # bombillad — bombilla daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize tracing
//! - Construct the Tapo connector and run the one-time registry
//!   initialization (best-effort: unreachable bulbs are skipped)
//! - Construct the light service, injecting the registry
//! - Build the axum router, injecting the service via `AppState`
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

use bombilla_adapter_http_axum::router;
use bombilla_adapter_http_axum::state::AppState;
use bombilla_adapter_tapo::TapoConnector;
use bombilla_app::registry::LightRegistry;
use bombilla_app::service::LightService;
use tracing_subscriber::EnvFilter;

mod config;

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // One-time registration: every command endpoint broadcasts over exactly
    // the bulbs that answered here.
    let connector = TapoConnector::new(config.tapo.username.clone(), config.tapo.password.clone());
    let registry = LightRegistry::connect(&connector, &config.lights).await;
    tracing::info!(
        configured = config.lights.len(),
        registered = registry.len(),
        "light registry initialised"
    );

    let state = AppState::new(LightService::new(registry));
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!("bombillad listening on http://{bind_addr}");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
