// src/web/mod.rs

// Declare child modules
pub mod handlers;
pub mod payloads;
pub mod routes;

// Re-export routing configuration so main.rs and the integration tests can
// assemble the same app.
pub use routes::{configure_app_routes, json_config};
