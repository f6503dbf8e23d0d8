//! `stockroom-core`: domain building blocks shared by every record crate.
//!
//! This crate contains **pure domain** primitives (no storage, no console).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{OrderId, Sku, SupplierId};
pub use value_object::ValueObject;
