//! Process startup: configuration, tracing and dependency wiring.

pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_config};
pub use wiring::{wire_app, ResolvedSettings};
