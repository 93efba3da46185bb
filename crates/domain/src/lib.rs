//! # bombilla-domain
//!
//! Pure domain model for the bombilla light control surface.
//!
//! ## Responsibilities
//! - Define **light addresses** (the network identifier a bulb is registered
//!   under)
//! - Define **commands** (`turn_on`, `turn_off`, color, brightness) and the
//!   parameter ranges the bulbs accept
//! - Define the error conventions shared across the workspace
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod address;
pub mod command;
pub mod error;
