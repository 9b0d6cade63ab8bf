// src/main.rs

use std::sync::Arc;

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

use ecommerce_api::config::AppConfig;
use ecommerce_api::db;
use ecommerce_api::state::AppState;
use ecommerce_api::web::{configure_app_routes, json_config};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting e-commerce API server...");

  // Load application configuration
  let app_config = Arc::new(AppConfig::from_env().context("Failed to load application configuration")?);

  // Initialize Database Pool
  let db_pool = db::connect(&app_config.database_url, app_config.database_max_connections)
    .await
    .context("Failed to connect to the database")?;
  tracing::info!("Successfully connected to the database.");

  // Idempotent schema creation
  db::init_schema(&db_pool).await.context("Failed to create database schema")?;

  // Create AppState
  let app_state = AppState {
    db_pool,
    config: app_config.clone(),
  };

  // Configure and Start Actix Web Server
  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .app_data(json_config())
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
  .context("Server terminated with an error")
}
