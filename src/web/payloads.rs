// src/web/payloads.rs

//! Hand-written request payloads and their validation.
//!
//! Every exposed field is a deliberate mapping between the wire format and
//! the domain records. Fields arrive as `Option`s so that a missing field
//! produces a field-level message instead of a bare deserialization failure.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::errors::{AppError, FieldErrors, Result};

pub const USER_NAME_MAX: usize = 70;
pub const USER_ADDRESS_MAX: usize = 200;
pub const USER_EMAIL_MAX: usize = 100;
pub const PRODUCT_NAME_MAX: usize = 200;

#[derive(Debug, Deserialize)]
pub struct UserPayload {
  pub name: Option<String>,
  pub address: Option<String>,
  pub email: Option<String>,
}

/// A user payload that passed validation.
#[derive(Debug, Clone)]
pub struct NewUser {
  pub name: String,
  pub address: String,
  pub email: String,
}

impl UserPayload {
  pub fn validate(self) -> Result<NewUser> {
    let mut errors = FieldErrors::new();

    let name = require_string("name", self.name, USER_NAME_MAX, &mut errors);
    let address = require_string("address", self.address, USER_ADDRESS_MAX, &mut errors);
    let email = require_string("email", self.email, USER_EMAIL_MAX, &mut errors);

    if let Some(email) = email.as_deref() {
      if !email.contains('@') {
        errors.push("email", "Not a valid email address.");
      }
    }

    match (name, address, email) {
      (Some(name), Some(address), Some(email)) if errors.is_empty() => Ok(NewUser { name, address, email }),
      _ => Err(AppError::Validation(errors)),
    }
  }
}

#[derive(Debug, Deserialize)]
pub struct ProductPayload {
  pub product_name: Option<String>,
  pub price: Option<f64>,
}

/// A product payload that passed validation. The price is expected to be
/// non-negative but is deliberately not validated.
#[derive(Debug, Clone)]
pub struct NewProduct {
  pub product_name: String,
  pub price: f64,
}

impl ProductPayload {
  pub fn validate(self) -> Result<NewProduct> {
    let mut errors = FieldErrors::new();

    let product_name = require_string("product_name", self.product_name, PRODUCT_NAME_MAX, &mut errors);
    if self.price.is_none() {
      errors.push("price", "Missing data for required field.");
    }

    match (product_name, self.price) {
      (Some(product_name), Some(price)) if errors.is_empty() => Ok(NewProduct { product_name, price }),
      _ => Err(AppError::Validation(errors)),
    }
  }
}

#[derive(Debug, Deserialize)]
pub struct OrderPayload {
  pub order_date: Option<DateTime<Utc>>,
  pub user_id: Option<i64>,
}

/// An order payload that passed validation. `order_date` is filled with the
/// current time when the field was omitted. Whether `user_id` references an
/// existing user is the repository's concern, not the payload's.
#[derive(Debug, Clone)]
pub struct NewOrder {
  pub order_date: DateTime<Utc>,
  pub user_id: i64,
}

impl OrderPayload {
  pub fn validate(self) -> Result<NewOrder> {
    match self.user_id {
      Some(user_id) => Ok(NewOrder {
        order_date: self.order_date.unwrap_or_else(Utc::now),
        user_id,
      }),
      None => Err(AppError::Validation(FieldErrors::single(
        "user_id",
        "Missing data for required field.",
      ))),
    }
  }
}

fn require_string(
  field: &'static str,
  value: Option<String>,
  max_len: usize,
  errors: &mut FieldErrors,
) -> Option<String> {
  match value {
    None => {
      errors.push(field, "Missing data for required field.");
      None
    }
    Some(v) if v.chars().count() > max_len => {
      errors.push(field, format!("Longer than maximum length {}.", max_len));
      None
    }
    Some(v) => Some(v),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn user_payload_reports_every_missing_field() {
    let payload = UserPayload {
      name: None,
      address: None,
      email: None,
    };

    let err = payload.validate().unwrap_err();
    match err {
      AppError::Validation(errors) => {
        for field in ["name", "address", "email"] {
          assert_eq!(
            errors.messages_for(field),
            Some(&["Missing data for required field.".to_string()][..])
          );
        }
      }
      other => panic!("expected validation error, got {other:?}"),
    }
  }

  #[test]
  fn user_payload_enforces_length_limits_and_email_shape() {
    let payload = UserPayload {
      name: Some("x".repeat(USER_NAME_MAX + 1)),
      address: Some("1 Main St".to_string()),
      email: Some("not-an-email".to_string()),
    };

    let err = payload.validate().unwrap_err();
    match err {
      AppError::Validation(errors) => {
        assert!(errors.messages_for("name").unwrap()[0].contains("maximum length 70"));
        assert!(errors.messages_for("email").unwrap()[0].contains("valid email"));
        assert!(errors.messages_for("address").is_none());
      }
      other => panic!("expected validation error, got {other:?}"),
    }
  }

  #[test]
  fn valid_user_payload_passes_through() {
    let payload = UserPayload {
      name: Some("Ann".to_string()),
      address: Some("1 Main St".to_string()),
      email: Some("ann@x.com".to_string()),
    };

    let new_user = payload.validate().unwrap();
    assert_eq!(new_user.name, "Ann");
    assert_eq!(new_user.email, "ann@x.com");
  }

  #[test]
  fn product_payload_requires_name_and_price() {
    let payload = ProductPayload {
      product_name: None,
      price: None,
    };

    let err = payload.validate().unwrap_err();
    match err {
      AppError::Validation(errors) => {
        assert!(errors.messages_for("product_name").is_some());
        assert!(errors.messages_for("price").is_some());
      }
      other => panic!("expected validation error, got {other:?}"),
    }
  }

  #[test]
  fn order_payload_defaults_order_date_to_now() {
    let before = Utc::now();
    let new_order = OrderPayload {
      order_date: None,
      user_id: Some(1),
    }
    .validate()
    .unwrap();

    assert_eq!(new_order.user_id, 1);
    assert!(new_order.order_date >= before);
    assert!(new_order.order_date <= Utc::now());
  }

  #[test]
  fn order_payload_keeps_explicit_order_date() {
    let date: DateTime<Utc> = "2026-01-02T03:04:05Z".parse().unwrap();
    let new_order = OrderPayload {
      order_date: Some(date),
      user_id: Some(7),
    }
    .validate()
    .unwrap();

    assert_eq!(new_order.order_date, date);
  }
}
