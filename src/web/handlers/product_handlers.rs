// src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::repository::products;
use crate::state::AppState;
use crate::web::payloads::ProductPayload;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = products::list(&app_state.db_pool).await?;
  info!("Successfully fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  let product = products::find(&app_state.db_pool, product_id)
    .await?
    .ok_or_else(|| AppError::NotFound("Invalid product id".to_string()))?;

  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::create_product", skip(app_state, payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<ProductPayload>,
) -> Result<HttpResponse, AppError> {
  let new_product = payload.into_inner().validate()?;

  let product = products::insert(&app_state.db_pool, &new_product).await?;
  info!("Created product {} ({}).", product.id, product.product_name);

  Ok(HttpResponse::Created().json(product))
}

#[instrument(name = "handler::update_product", skip(app_state, path, payload), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  payload: web::Json<ProductPayload>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let new_product = payload.into_inner().validate()?;

  let product = products::update(&app_state.db_pool, product_id, &new_product).await?;
  info!("Updated product {}.", product.id);

  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  products::delete(&app_state.db_pool, product_id).await?;
  info!("Deleted product {}.", product_id);

  Ok(HttpResponse::Ok().json(json!({"message": format!("Successfully deleted product {}", product_id)})))
}
