//! Shared types and models for the garden records system.
//!
//! This crate contains the record models, the value types used by the
//! derived computations, and the validation rules applied before a
//! collection is persisted. It performs no I/O.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
