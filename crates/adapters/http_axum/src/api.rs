//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod commands;
pub mod lights;
