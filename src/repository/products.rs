// src/repository/products.rs

use sqlx::SqlitePool;

use crate::errors::{AppError, Result};
use crate::models::Product;
use crate::web::payloads::NewProduct;

pub async fn list(pool: &SqlitePool) -> Result<Vec<Product>> {
  let products = sqlx::query_as("SELECT id, product_name, price FROM products ORDER BY id ASC")
    .fetch_all(pool)
    .await?;
  Ok(products)
}

pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Product>> {
  let product = sqlx::query_as("SELECT id, product_name, price FROM products WHERE id = ?")
    .bind(id)
    .fetch_optional(pool)
    .await?;
  Ok(product)
}

pub async fn insert(pool: &SqlitePool, new_product: &NewProduct) -> Result<Product> {
  let product = sqlx::query_as(
    "INSERT INTO products (product_name, price) VALUES (?, ?) RETURNING id, product_name, price",
  )
  .bind(&new_product.product_name)
  .bind(new_product.price)
  .fetch_one(pool)
  .await?;
  Ok(product)
}

/// Full-record replace. Returns `NotFound` when the id has no record.
pub async fn update(pool: &SqlitePool, id: i64, new_product: &NewProduct) -> Result<Product> {
  let updated: Option<Product> = sqlx::query_as(
    "UPDATE products SET product_name = ?, price = ? WHERE id = ? RETURNING id, product_name, price",
  )
  .bind(&new_product.product_name)
  .bind(new_product.price)
  .bind(id)
  .fetch_optional(pool)
  .await?;

  updated.ok_or_else(|| AppError::NotFound("Invalid product id".to_string()))
}

/// Restrict policy: a product still referenced by an order cannot be
/// deleted.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
  let mut tx = pool.begin().await?;

  let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM products WHERE id = ?")
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;
  if existing.is_none() {
    return Err(AppError::NotFound("Invalid product id".to_string()));
  }

  let (reference_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM order_products WHERE product_id = ?")
    .bind(id)
    .fetch_one(&mut *tx)
    .await?;
  if reference_count > 0 {
    return Err(AppError::Constraint(format!(
      "Product {} is referenced by existing orders and cannot be deleted.",
      id
    )));
  }

  sqlx::query("DELETE FROM products WHERE id = ?")
    .bind(id)
    .execute(&mut *tx)
    .await?;
  tx.commit().await?;
  Ok(())
}
