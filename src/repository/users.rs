// src/repository/users.rs

use sqlx::SqlitePool;

use crate::errors::{AppError, FieldErrors, Result};
use crate::models::User;
use crate::web::payloads::NewUser;

pub async fn list(pool: &SqlitePool) -> Result<Vec<User>> {
  let users = sqlx::query_as("SELECT id, name, address, email FROM users ORDER BY id ASC")
    .fetch_all(pool)
    .await?;
  Ok(users)
}

pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<User>> {
  let user = sqlx::query_as("SELECT id, name, address, email FROM users WHERE id = ?")
    .bind(id)
    .fetch_optional(pool)
    .await?;
  Ok(user)
}

pub async fn insert(pool: &SqlitePool, new_user: &NewUser) -> Result<User> {
  let user = sqlx::query_as("INSERT INTO users (name, address, email) VALUES (?, ?, ?) RETURNING id, name, address, email")
    .bind(&new_user.name)
    .bind(&new_user.address)
    .bind(&new_user.email)
    .fetch_one(pool)
    .await
    .map_err(|e| map_email_collision(e, &new_user.email))?;
  Ok(user)
}

/// Full-record replace. Returns `NotFound` when the id has no record.
pub async fn update(pool: &SqlitePool, id: i64, new_user: &NewUser) -> Result<User> {
  let updated: Option<User> = sqlx::query_as(
    "UPDATE users SET name = ?, address = ?, email = ? WHERE id = ? RETURNING id, name, address, email",
  )
  .bind(&new_user.name)
  .bind(&new_user.address)
  .bind(&new_user.email)
  .bind(id)
  .fetch_optional(pool)
  .await
  .map_err(|e| map_email_collision(e, &new_user.email))?;

  updated.ok_or_else(|| AppError::NotFound("Invalid user id".to_string()))
}

/// Restrict policy: a user that still owns orders cannot be deleted.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
  let mut tx = pool.begin().await?;

  let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE id = ?")
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;
  if existing.is_none() {
    return Err(AppError::NotFound("Invalid user id".to_string()));
  }

  let (order_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders WHERE user_id = ?")
    .bind(id)
    .fetch_one(&mut *tx)
    .await?;
  if order_count > 0 {
    return Err(AppError::Constraint(format!(
      "User {} has existing orders and cannot be deleted.",
      id
    )));
  }

  sqlx::query("DELETE FROM users WHERE id = ?")
    .bind(id)
    .execute(&mut *tx)
    .await?;
  tx.commit().await?;
  Ok(())
}

// The unique index on users.email turns a duplicate into a field-level
// validation message, same as the create contract expects.
fn map_email_collision(err: sqlx::Error, email: &str) -> AppError {
  if super::is_unique_violation(&err) {
    AppError::Validation(FieldErrors::single(
      "email",
      format!("Email '{}' is already registered.", email),
    ))
  } else {
    AppError::Sqlx(err)
  }
}
