// src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::repository::orders;
use crate::state::AppState;
use crate::web::payloads::OrderPayload;

#[instrument(name = "handler::create_order", skip(app_state, payload))]
pub async fn create_order_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<OrderPayload>,
) -> Result<HttpResponse, AppError> {
  let new_order = payload.into_inner().validate()?;

  let order = orders::insert(&app_state.db_pool, &new_order).await?;
  info!("Created order {} for user {}.", order.id, order.user_id);

  Ok(HttpResponse::Created().json(order))
}

#[instrument(
  name = "handler::add_product_to_order",
  skip(app_state, path),
  fields(order_id = %path.as_ref().0, product_id = %path.as_ref().1)
)]
pub async fn add_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
  let (order_id, product_id) = path.into_inner();

  let order = orders::add_product(&app_state.db_pool, order_id, product_id).await?;
  info!("Added product {} to order {}.", product_id, order_id);

  Ok(HttpResponse::Ok().json(order))
}

#[instrument(
  name = "handler::remove_product_from_order",
  skip(app_state, path),
  fields(order_id = %path.as_ref().0, product_id = %path.as_ref().1)
)]
pub async fn remove_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
  let (order_id, product_id) = path.into_inner();

  let order = orders::remove_product(&app_state.db_pool, order_id, product_id).await?;
  info!("Removed product {} from order {}.", product_id, order_id);

  Ok(HttpResponse::Ok().json(order))
}

#[instrument(name = "handler::orders_for_user", skip(app_state, path), fields(user_id = %path.as_ref()))]
pub async fn orders_for_user_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let user_id = path.into_inner();

  // An unknown user yields an empty list, not an error.
  let orders = orders::list_for_user(&app_state.db_pool, user_id).await?;
  info!("Fetched {} orders for user {}.", orders.len(), user_id);

  Ok(HttpResponse::Ok().json(orders))
}

#[instrument(name = "handler::products_for_order", skip(app_state, path), fields(order_id = %path.as_ref()))]
pub async fn products_for_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let order_id = path.into_inner();

  let products = orders::products_for_order(&app_state.db_pool, order_id).await?;
  info!("Fetched {} products for order {}.", products.len(), order_id);

  Ok(HttpResponse::Ok().json(products))
}
