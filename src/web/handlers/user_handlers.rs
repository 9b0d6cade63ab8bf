// src/web/handlers/user_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::repository::users;
use crate::state::AppState;
use crate::web::payloads::UserPayload;

#[instrument(name = "handler::list_users", skip(app_state))]
pub async fn list_users_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let users = users::list(&app_state.db_pool).await?;
  info!("Successfully fetched {} users.", users.len());
  Ok(HttpResponse::Ok().json(users))
}

#[instrument(name = "handler::get_user", skip(app_state, path), fields(user_id = %path.as_ref()))]
pub async fn get_user_handler(app_state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
  let user_id = path.into_inner();

  let user = users::find(&app_state.db_pool, user_id)
    .await?
    .ok_or_else(|| AppError::NotFound("Invalid user id".to_string()))?;

  Ok(HttpResponse::Ok().json(user))
}

#[instrument(name = "handler::create_user", skip(app_state, payload))]
pub async fn create_user_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<UserPayload>,
) -> Result<HttpResponse, AppError> {
  let new_user = payload.into_inner().validate()?;

  let user = users::insert(&app_state.db_pool, &new_user).await?;
  info!("Created user {} ({}).", user.id, user.email);

  Ok(HttpResponse::Created().json(user))
}

#[instrument(name = "handler::update_user", skip(app_state, path, payload), fields(user_id = %path.as_ref()))]
pub async fn update_user_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  payload: web::Json<UserPayload>,
) -> Result<HttpResponse, AppError> {
  let user_id = path.into_inner();
  let new_user = payload.into_inner().validate()?;

  let user = users::update(&app_state.db_pool, user_id, &new_user).await?;
  info!("Updated user {}.", user.id);

  Ok(HttpResponse::Ok().json(user))
}

#[instrument(name = "handler::delete_user", skip(app_state, path), fields(user_id = %path.as_ref()))]
pub async fn delete_user_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let user_id = path.into_inner();

  users::delete(&app_state.db_pool, user_id).await?;
  info!("Deleted user {}.", user_id);

  Ok(HttpResponse::Ok().json(json!({"message": format!("Successfully deleted user {}", user_id)})))
}
