//! Products domain module.
//!
//! This crate contains the business rules of the product registry,
//! implemented purely as deterministic domain logic (no IO, no HTTP):
//! the CPF checksum validator, schema validation of incoming records,
//! and the in-memory product store.

pub mod cpf;
pub mod product;
pub mod schema;
pub mod store;

pub use product::{Product, ProductChanges, ProductStatus};
pub use store::ProductStore;
