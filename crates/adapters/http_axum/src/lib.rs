//! # bombilla-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON command endpoints** (`POST /on`, `POST /off`,
//!   `POST /cambiar_color`, `POST /brightness`) plus `/health` and
//!   `GET /lights`
//! - Map HTTP requests into broadcast calls on the light service (driving
//!   adapter)
//! - Map broadcast outcomes into JSON status responses, reporting partial
//!   failure with per-address detail
//!
//! ## Dependency rule
//! Depends on `bombilla-app` (for port traits and the light service) and
//! `bombilla-domain` (for commands used in request mapping). Never leaks
//! axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
