//! Products domain module.
//!
//! Business rules for stocked products: entry validation, partial updates and
//! the stock arithmetic used by order fulfillment. Pure domain logic (no IO,
//! no console, no storage).

pub mod product;

pub use product::{NewProduct, Product, ProductUpdate, ensure_order_quantity};
