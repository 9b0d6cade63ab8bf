// src/repository/mod.rs

//! Explicit data-access functions per entity.
//!
//! Relationship traversal (user→orders, order→products) is an explicit join
//! query here, never live object-graph navigation. Functions take the pool
//! (or a transaction) as an argument; there is no shared session handle.

pub mod orders;
pub mod products;
pub mod users;

/// Unique-constraint failures get mapped to domain errors at the call site;
/// everything else stays a database error.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
  matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}
