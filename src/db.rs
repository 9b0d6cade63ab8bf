// src/db.rs

//! Pool construction and idempotent schema creation.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::errors::Result;

/// Opens the connection pool, creating the database file if missing.
/// SQLite leaves foreign-key enforcement off unless asked per connection.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
  let options = SqliteConnectOptions::from_str(database_url)?
    .create_if_missing(true)
    .foreign_keys(true);

  let pool = SqlitePoolOptions::new()
    .max_connections(max_connections)
    .connect_with(options)
    .await?;

  Ok(pool)
}

/// Creates the four tables if absent. Safe to run on every startup.
///
/// Length limits on the text columns are enforced in payload validation;
/// the association table's composite primary key is what rejects duplicate
/// (order_id, product_id) rows.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
  sqlx::query(
    "CREATE TABLE IF NOT EXISTS users (
       id INTEGER PRIMARY KEY AUTOINCREMENT,
       name TEXT NOT NULL,
       address TEXT NOT NULL,
       email TEXT NOT NULL UNIQUE
     )",
  )
  .execute(pool)
  .await?;

  sqlx::query(
    "CREATE TABLE IF NOT EXISTS products (
       id INTEGER PRIMARY KEY AUTOINCREMENT,
       product_name TEXT NOT NULL,
       price REAL NOT NULL
     )",
  )
  .execute(pool)
  .await?;

  sqlx::query(
    "CREATE TABLE IF NOT EXISTS orders (
       id INTEGER PRIMARY KEY AUTOINCREMENT,
       order_date TEXT NOT NULL,
       user_id INTEGER NOT NULL REFERENCES users(id)
     )",
  )
  .execute(pool)
  .await?;

  sqlx::query(
    "CREATE TABLE IF NOT EXISTS order_products (
       order_id INTEGER NOT NULL REFERENCES orders(id),
       product_id INTEGER NOT NULL REFERENCES products(id),
       PRIMARY KEY (order_id, product_id)
     )",
  )
  .execute(pool)
  .await?;

  tracing::info!("Database schema is in place.");
  Ok(())
}
