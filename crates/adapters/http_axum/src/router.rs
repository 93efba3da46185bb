//! Axum router assembly.

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use bombilla_app::ports::LightHandle;

use crate::api;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// The four command routes match the published control surface (`/on`,
/// `/off`, `/cambiar_color`, `/brightness`); `/health` and `GET /lights`
/// are served alongside. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<H>(state: AppState<H>) -> Router
where
    H: LightHandle + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/on", post(api::commands::turn_on::<H>))
        .route("/off", post(api::commands::turn_off::<H>))
        .route("/cambiar_color", post(api::commands::set_color::<H>))
        .route("/brightness", post(api::commands::set_brightness::<H>))
        .route("/lights", get(api::lights::list::<H>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
