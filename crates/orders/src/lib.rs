//! Orders domain module (restock and sell orders).
//!
//! An order is a dated list of stock movements. Its kind decides the direction
//! of the movement and who the counterparty is: a supplier for restock orders,
//! a named customer for sell orders.

pub mod order;

pub use order::{Counterparty, Order, OrderItem, OrderKind};
