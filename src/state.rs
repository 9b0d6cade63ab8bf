// src/state.rs

use crate::config::AppConfig;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Shared handles injected into every handler via `web::Data`, scoped to
/// process startup/shutdown rather than living as module-level singletons.
#[derive(Clone)]
pub struct AppState {
  pub db_pool: SqlitePool,
  pub config: Arc<AppConfig>, // Share loaded config
}
