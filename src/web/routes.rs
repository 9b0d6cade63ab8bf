// src/web/routes.rs

use actix_web::web;

use crate::errors::{AppError, FieldErrors};
use crate::web::handlers::{order_handlers, product_handlers, user_handlers};

// In a real deployment this might check DB connectivity as well.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Malformed or mistyped JSON bodies get the same per-field error shape as
/// payload validation, under a `body` key.
pub fn json_config() -> web::JsonConfig {
  web::JsonConfig::default()
    .error_handler(|err, _req| AppError::Validation(FieldErrors::single("body", err.to_string())).into())
}

// This function is called in `main.rs` (and by the integration tests) to
// configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    // Health Check Route
    .route("/health", web::get().to(health_check_handler))
    // User Routes
    .service(
      web::scope("/users")
        .route("", web::get().to(user_handlers::list_users_handler))
        .route("", web::post().to(user_handlers::create_user_handler))
        .route("/{id}", web::get().to(user_handlers::get_user_handler))
        .route("/{id}", web::put().to(user_handlers::update_user_handler))
        .route("/{id}", web::delete().to(user_handlers::delete_user_handler)),
    )
    // Product Routes
    .service(
      web::scope("/products")
        .route("", web::get().to(product_handlers::list_products_handler))
        .route("", web::post().to(product_handlers::create_product_handler))
        .route("/{id}", web::get().to(product_handlers::get_product_handler))
        .route("/{id}", web::put().to(product_handlers::update_product_handler))
        .route("/{id}", web::delete().to(product_handlers::delete_product_handler)),
    )
    // Order Routes
    .service(
      web::scope("/orders")
        .route("", web::post().to(order_handlers::create_order_handler))
        .route("/user/{user_id}", web::get().to(order_handlers::orders_for_user_handler))
        .route(
          "/{order_id}/products",
          web::get().to(order_handlers::products_for_order_handler),
        )
        .route(
          "/{order_id}/add_product/{product_id}",
          web::put().to(order_handlers::add_product_handler),
        )
        .route(
          "/{order_id}/remove_product/{product_id}",
          web::delete().to(order_handlers::remove_product_handler),
        ),
    );
}
