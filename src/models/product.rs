// src/models/product.rs

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
  pub id: i64,
  pub product_name: String,
  pub price: f64,
}
