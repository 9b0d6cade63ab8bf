// src/errors.rs

use std::collections::BTreeMap;
use std::fmt;

use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// Per-field validation messages, keyed by payload field name.
///
/// Serializes to the `{"field": ["message", ...]}` wire shape used for all
/// 400 validation responses.
#[derive(Debug, Default, Clone, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn single(field: &str, message: impl Into<String>) -> Self {
    let mut errors = Self::new();
    errors.push(field, message);
    errors
  }

  pub fn push(&mut self, field: &str, message: impl Into<String>) {
    self.0.entry(field.to_string()).or_default().push(message.into());
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn messages_for(&self, field: &str) -> Option<&[String]> {
    self.0.get(field).map(Vec::as_slice)
  }
}

impl fmt::Display for FieldErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut first = true;
    for (field, messages) in &self.0 {
      for message in messages {
        if !first {
          write!(f, "; ")?;
        }
        write!(f, "{}: {}", field, message)?;
        first = false;
      }
    }
    Ok(())
  }
}

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(FieldErrors),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  // Duplicate association rows, removal of an absent association, and
  // deletes blocked by the restrict policy all land here.
  #[error("Constraint Violation: {0}")]
  Constraint(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(errors) => HttpResponse::BadRequest().json(errors),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"message": m})),
      AppError::Constraint(m) => HttpResponse::BadRequest().json(json!({"message": m})),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Sqlx(_) => HttpResponse::InternalServerError().json(json!({"error": "Database operation failed"})),
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
