//! JSON handler for inspecting the light registry.

use axum::Json;
use axum::extract::State;

use bombilla_app::ports::LightHandle;
use bombilla_domain::address::LightAddress;

use crate::state::AppState;

/// `GET /lights` — the addresses registered at startup.
pub async fn list<H>(State(state): State<AppState<H>>) -> Json<Vec<LightAddress>>
where
    H: LightHandle + Send + Sync + 'static,
{
    Json(state.light_service.registry().addresses())
}
