//! Shared application state for axum handlers.

use std::sync::Arc;

use bombilla_app::ports::LightHandle;
use bombilla_app::service::LightService;

/// Application state shared across all axum handlers.
///
/// Generic over the handle type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the handle type itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<H> {
    /// Broadcast service over the read-only light registry.
    pub light_service: Arc<LightService<H>>,
}

impl<H> Clone for AppState<H> {
    fn clone(&self) -> Self {
        Self {
            light_service: Arc::clone(&self.light_service),
        }
    }
}

impl<H> AppState<H>
where
    H: LightHandle + Send + Sync + 'static,
{
    /// Create a new application state from the light service.
    pub fn new(light_service: LightService<H>) -> Self {
        Self {
            light_service: Arc::new(light_service),
        }
    }
}
