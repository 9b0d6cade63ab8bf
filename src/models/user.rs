// src/models/user.rs

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
  pub id: i64,
  pub name: String,
  pub address: String,
  pub email: String, // Unique across all users
}
