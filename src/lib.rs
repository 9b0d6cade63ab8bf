// src/lib.rs

//! E-commerce data API: CRUD over users, products, and orders, plus the
//! many-to-many order/product association, backed by a relational store.
//!
//! The binary in `main.rs` wires these modules into an Actix Web server;
//! integration tests drive the same router against an in-memory database.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod repository;
pub mod state;
pub mod web;
