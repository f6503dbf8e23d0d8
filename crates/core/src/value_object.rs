//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object has no key of its own. It only exists embedded in an
/// entity (an order line inside an order, for instance) and two instances with
/// the same fields are interchangeable.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Line { sku: Sku, quantity: i32 }
///
/// impl ValueObject for Line {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
