//! Strongly-typed identifiers used across the domain.
//!
//! Every key in the system is operator-supplied text (SKUs, supplier codes,
//! order numbers), so the newtypes wrap `String` and are stored verbatim as the
//! document `_id`.

use serde::{Deserialize, Serialize};

/// Stock keeping unit: the unique key of a product.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

/// Identifier of a supplier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(String);

/// Identifier of a restock or sell order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

macro_rules! impl_string_newtype {
    ($t:ty) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl core::borrow::Borrow<str> for $t {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_string_newtype!(Sku);
impl_string_newtype!(SupplierId);
impl_string_newtype!(OrderId);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn ids_display_as_their_raw_text() {
        assert_eq!(Sku::new("A1").to_string(), "A1");
        assert_eq!(SupplierId::from("S-01").as_str(), "S-01");
        assert_eq!(OrderId::from("PO-7".to_string()).into_inner(), "PO-7");
    }

    #[test]
    fn borrowed_lookup_by_str_works_on_maps() {
        let mut map = BTreeMap::new();
        map.insert(Sku::new("A1"), 1);
        assert_eq!(map.get("A1"), Some(&1));
    }
}
