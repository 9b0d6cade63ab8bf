// src/models/order_product.rs

use serde::Serialize;
use sqlx::FromRow;

/// Association row linking an order to a product. The composite primary
/// key (order_id, product_id) makes the association a set, not a multiset.
#[derive(Debug, Clone, Copy, Serialize, FromRow)]
pub struct OrderProduct {
  pub order_id: i64,
  pub product_id: i64,
}
