//! Parties domain module.
//!
//! Suppliers that products are bought from. Customers of sell orders are
//! recorded by name on the order itself and have no record of their own.

pub mod supplier;

pub use supplier::Supplier;
