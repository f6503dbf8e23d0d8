use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, SupplierId};

/// A supplier. There is no update operation; a supplier is fixed once added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    id: SupplierId,
    name: String,
    contact: String,
}

impl Supplier {
    pub fn new(id: SupplierId, name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            contact: contact.into(),
        }
    }

    pub fn id_typed(&self) -> &SupplierId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form contact string (phone, email, address, whatever the operator typed).
    pub fn contact(&self) -> &str {
        &self.contact
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Supplier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Supplier{{id='{}', name='{}', contact='{}'}}",
            self.id, self.name, self.contact
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_supplier_exposes_fields() {
        let supplier = Supplier::new(SupplierId::new("S1"), "Acme", "acme@example.com");
        assert_eq!(supplier.id().as_str(), "S1");
        assert_eq!(supplier.id_typed(), supplier.id());
        assert_eq!(supplier.name(), "Acme");
        assert_eq!(supplier.contact(), "acme@example.com");
    }

    #[test]
    fn empty_fields_are_accepted() {
        let supplier = Supplier::new(SupplierId::new(""), "", "");
        assert_eq!(
            supplier.to_string(),
            "Supplier{id='', name='', contact=''}"
        );
    }
}
