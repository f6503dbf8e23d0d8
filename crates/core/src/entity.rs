//! Entity trait: identity that survives field changes.

/// Entity marker + minimal interface.
///
/// Records that live in a keyed collection (products, suppliers, orders)
/// implement this; the key is what the backing store uses as `_id`.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + Ord + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
