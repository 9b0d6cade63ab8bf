// src/models/order.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use super::Product;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
  pub id: i64,
  pub order_date: DateTime<Utc>,
  pub user_id: i64,
}

/// Wire shape for the endpoints that return an order together with its
/// current product list (add_product / remove_product).
#[derive(Debug, Serialize)]
pub struct OrderWithProducts {
  #[serde(flatten)]
  pub order: Order,
  pub products: Vec<Product>,
}
