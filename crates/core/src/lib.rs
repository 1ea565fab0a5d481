//! `prodreg-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod validation;

pub use error::{DomainError, DomainResult};
pub use validation::{FieldViolation, FieldViolations};
