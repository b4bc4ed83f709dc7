//! Campaign OS - LLM admission gate
//!
//! This is the main binary crate that wires the core and orchestrator crates together

mod app;

pub use app::{AppHandle, create_app};
pub use campaign_core::{Config, init_tracing};

// Re-export for convenience
pub use campaign_core;
pub use campaign_orchestrator;
