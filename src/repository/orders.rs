// src/repository/orders.rs

use sqlx::{Sqlite, SqlitePool};

use crate::errors::{AppError, FieldErrors, Result};
use crate::models::{Order, OrderProduct, OrderWithProducts, Product};
use crate::web::payloads::NewOrder;

pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Order>> {
  let order = sqlx::query_as("SELECT id, order_date, user_id FROM orders WHERE id = ?")
    .bind(id)
    .fetch_optional(pool)
    .await?;
  Ok(order)
}

pub async fn insert(pool: &SqlitePool, new_order: &NewOrder) -> Result<Order> {
  // Referential integrity is confirmed synchronously so the caller gets a
  // field-level message rather than a raw foreign-key failure.
  let user_exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE id = ?")
    .bind(new_order.user_id)
    .fetch_optional(pool)
    .await?;
  if user_exists.is_none() {
    return Err(AppError::Validation(FieldErrors::single(
      "user_id",
      format!("User {} does not exist.", new_order.user_id),
    )));
  }

  let order = sqlx::query_as("INSERT INTO orders (order_date, user_id) VALUES (?, ?) RETURNING id, order_date, user_id")
    .bind(new_order.order_date)
    .bind(new_order.user_id)
    .fetch_one(pool)
    .await?;
  Ok(order)
}

/// All orders placed by the given user, oldest first. An unknown user yields
/// an empty list, not an error.
pub async fn list_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Order>> {
  let orders = sqlx::query_as("SELECT id, order_date, user_id FROM orders WHERE user_id = ? ORDER BY id ASC")
    .bind(user_id)
    .fetch_all(pool)
    .await?;
  Ok(orders)
}

/// Products currently associated with the order. Fails with `NotFound` when
/// the order itself does not exist.
pub async fn products_for_order(pool: &SqlitePool, order_id: i64) -> Result<Vec<Product>> {
  let order_exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM orders WHERE id = ?")
    .bind(order_id)
    .fetch_optional(pool)
    .await?;
  if order_exists.is_none() {
    return Err(AppError::NotFound("Invalid order id".to_string()));
  }

  associated_products(pool, order_id).await
}

/// Inserts the association inside one transaction. The composite primary key
/// on (order_id, product_id) rejects duplicates at the engine level, which
/// closes the check-then-insert race under concurrent requests.
pub async fn add_product(pool: &SqlitePool, order_id: i64, product_id: i64) -> Result<OrderWithProducts> {
  let mut tx = pool.begin().await?;

  let order = fetch_order(&mut tx, order_id).await?;
  ensure_product_exists(&mut tx, product_id).await?;

  sqlx::query("INSERT INTO order_products (order_id, product_id) VALUES (?, ?)")
    .bind(order_id)
    .bind(product_id)
    .execute(&mut *tx)
    .await
    .map_err(|e| {
      if super::is_unique_violation(&e) {
        AppError::Constraint(format!("Product {} is already in order {}.", product_id, order_id))
      } else {
        AppError::Sqlx(e)
      }
    })?;

  let products = associated_products(&mut *tx, order_id).await?;
  tx.commit().await?;

  Ok(OrderWithProducts { order, products })
}

/// Removes the association inside one transaction. Removing a pair that was
/// never associated is an error, not a no-op.
pub async fn remove_product(pool: &SqlitePool, order_id: i64, product_id: i64) -> Result<OrderWithProducts> {
  let mut tx = pool.begin().await?;

  let order = fetch_order(&mut tx, order_id).await?;
  ensure_product_exists(&mut tx, product_id).await?;

  let association: Option<OrderProduct> =
    sqlx::query_as("SELECT order_id, product_id FROM order_products WHERE order_id = ? AND product_id = ?")
      .bind(order_id)
      .bind(product_id)
      .fetch_optional(&mut *tx)
      .await?;
  if association.is_none() {
    return Err(AppError::Constraint(format!(
      "Product {} is not associated with order {}.",
      product_id, order_id
    )));
  }

  sqlx::query("DELETE FROM order_products WHERE order_id = ? AND product_id = ?")
    .bind(order_id)
    .bind(product_id)
    .execute(&mut *tx)
    .await?;

  let products = associated_products(&mut *tx, order_id).await?;
  tx.commit().await?;

  Ok(OrderWithProducts { order, products })
}

async fn fetch_order(tx: &mut sqlx::Transaction<'_, Sqlite>, order_id: i64) -> Result<Order> {
  let order: Option<Order> = sqlx::query_as("SELECT id, order_date, user_id FROM orders WHERE id = ?")
    .bind(order_id)
    .fetch_optional(&mut **tx)
    .await?;
  order.ok_or_else(|| AppError::NotFound("Invalid order id".to_string()))
}

async fn ensure_product_exists(tx: &mut sqlx::Transaction<'_, Sqlite>, product_id: i64) -> Result<()> {
  let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM products WHERE id = ?")
    .bind(product_id)
    .fetch_optional(&mut **tx)
    .await?;
  if existing.is_none() {
    return Err(AppError::NotFound("Invalid product id".to_string()));
  }
  Ok(())
}

async fn associated_products<'e, E>(executor: E, order_id: i64) -> Result<Vec<Product>>
where
  E: sqlx::Executor<'e, Database = Sqlite>,
{
  let products = sqlx::query_as(
    "SELECT p.id, p.product_name, p.price
     FROM products p
     JOIN order_products op ON op.product_id = p.id
     WHERE op.order_id = ?
     ORDER BY p.id ASC",
  )
  .bind(order_id)
  .fetch_all(executor)
  .await?;
  Ok(products)
}
