// src/models/mod.rs

//! Contains data structures representing database entities.

// Declare child modules for each model
pub mod order;
pub mod order_product;
pub mod product;
pub mod user;

// Re-export the model structs for convenient access
pub use order::{Order, OrderWithProducts};
pub use order_product::OrderProduct;
pub use product::Product;
pub use user::User;
