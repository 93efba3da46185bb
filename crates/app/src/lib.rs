//! # bombilla-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound
//!   ports):
//!   - `LightHandle` — apply one command to a connected bulb
//!   - `LightConnector` — establish handles from configured addresses
//! - Provide the **light registry**: one-time, best-effort registration of
//!   every configured bulb at startup; read-only afterwards
//! - Provide the **light service**: concurrent fan-out of one command to
//!   every registered bulb, collecting per-device results
//!
//! ## Dependency rule
//! Depends on `bombilla-domain` only (plus `futures` for joining the
//! fan-out). Never imports adapter crates. Adapters depend on *this* crate,
//! not the reverse.

pub mod ports;
pub mod registry;
pub mod service;
