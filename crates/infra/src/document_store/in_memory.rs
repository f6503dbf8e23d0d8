use std::collections::HashMap;
use std::sync::RwLock;

use mongodb::bson::{self, Bson, Document};
use serde::Serialize;
use serde::de::DeserializeOwned;

use stockroom_core::Sku;
use stockroom_orders::Order;
use stockroom_parties::Supplier;
use stockroom_products::Product;

use super::documents::{
    ORDERS, OrderDocument, PRODUCTS, ProductDocument, SUPPLIERS, SupplierDocument,
};
use super::r#trait::{DocumentStore, StoreError};

/// In-memory document store.
///
/// Intended for tests/dev. Records go through the same serde/BSON mapping as
/// the Mongo adapter and the `_id` unique constraint is enforced, so the
/// behavior seen by callers matches a real server. Collections keep insertion
/// order, like a fresh Mongo collection's natural order.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<&'static str, Vec<Document>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw document, bypassing the record mapping (for seeding fixtures).
    pub fn insert_raw(&self, collection: &'static str, document: Document) -> Result<(), StoreError> {
        let mut collections = self.write()?;
        let docs = collections.entry(collection).or_default();
        let key = id_of(&document);
        if docs.iter().any(|d| d.get("_id") == document.get("_id")) {
            return Err(StoreError::DuplicateKey { collection, key });
        }
        docs.push(document);
        Ok(())
    }

    /// Fetch the stored document with this `_id`, if any.
    pub fn document(&self, collection: &'static str, id: &str) -> Option<Document> {
        let collections = self.collections.read().ok()?;
        collections
            .get(collection)?
            .iter()
            .find(|d| d.get_str("_id").ok() == Some(id))
            .cloned()
    }

    pub fn count(&self, collection: &'static str) -> usize {
        self.collections
            .read()
            .map(|c| c.get(collection).map(Vec::len).unwrap_or(0))
            .unwrap_or(0)
    }

    fn write(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<&'static str, Vec<Document>>>, StoreError>
    {
        self.collections
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))
    }

    fn insert<T: Serialize>(&self, collection: &'static str, value: &T) -> Result<(), StoreError> {
        let document = bson::to_document(value)
            .map_err(|e| StoreError::Backend(format!("failed to encode document: {e}")))?;
        self.insert_raw(collection, document)
    }

    fn find_all<T: DeserializeOwned>(&self, collection: &'static str) -> Result<Vec<T>, StoreError> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        collections
            .get(collection)
            .map(|docs| docs.as_slice())
            .unwrap_or_default()
            .iter()
            .map(|d| {
                bson::from_document::<T>(d.clone()).map_err(|e| {
                    StoreError::decode(collection, format!("document {}: {e}", id_of(d)))
                })
            })
            .collect()
    }
}

fn id_of(document: &Document) -> String {
    match document.get("_id") {
        Some(Bson::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "<missing _id>".to_string(),
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn insert_product(&self, product: &Product) -> Result<(), StoreError> {
        self.insert(PRODUCTS, &ProductDocument::from(product))
    }

    fn update_product_stock(&self, product: &Product) -> Result<bool, StoreError> {
        let mut collections = self.write()?;
        let Some(docs) = collections.get_mut(PRODUCTS) else {
            return Ok(false);
        };

        let sku = product.sku().as_str();
        match docs.iter_mut().find(|d| d.get_str("_id").ok() == Some(sku)) {
            Some(document) => {
                document.insert("quantity", product.quantity());
                document.insert("price", product.price());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_product(&self, sku: &Sku) -> Result<bool, StoreError> {
        let mut collections = self.write()?;
        let Some(docs) = collections.get_mut(PRODUCTS) else {
            return Ok(false);
        };

        let before = docs.len();
        docs.retain(|d| d.get_str("_id").ok() != Some(sku.as_str()));
        Ok(docs.len() != before)
    }

    fn find_products(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self
            .find_all::<ProductDocument>(PRODUCTS)?
            .into_iter()
            .map(Product::from)
            .collect())
    }

    fn insert_supplier(&self, supplier: &Supplier) -> Result<(), StoreError> {
        self.insert(SUPPLIERS, &SupplierDocument::from(supplier))
    }

    fn find_suppliers(&self) -> Result<Vec<Supplier>, StoreError> {
        Ok(self
            .find_all::<SupplierDocument>(SUPPLIERS)?
            .into_iter()
            .map(Supplier::from)
            .collect())
    }

    fn insert_order(&self, order: &Order) -> Result<(), StoreError> {
        self.insert(ORDERS, &OrderDocument::from(order))
    }

    fn find_orders(&self) -> Result<Vec<Order>, StoreError> {
        self.find_all::<OrderDocument>(ORDERS)?
            .into_iter()
            .map(Order::try_from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mongodb::bson::doc;
    use stockroom_core::{OrderId, SupplierId};
    use stockroom_orders::{OrderItem, OrderKind};
    use stockroom_products::NewProduct;

    fn product(sku: &str, quantity: i32, price: f64) -> Product {
        Product::create(NewProduct {
            sku: Sku::new(sku),
            name: format!("Product {sku}"),
            description: "desc".to_string(),
            quantity,
            price,
            supplier_id: SupplierId::new("S1"),
            date_received: "2024-01-01".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn insert_then_find_returns_identical_product() {
        let store = InMemoryDocumentStore::new();
        let original = product("A1", 10, 2.5);
        store.insert_product(&original).unwrap();

        let found = store.find_products().unwrap();
        assert_eq!(found, vec![original]);
    }

    #[test]
    fn duplicate_product_insert_is_reported() {
        let store = InMemoryDocumentStore::new();
        store.insert_product(&product("A1", 10, 2.5)).unwrap();

        let err = store.insert_product(&product("A1", 99, 9.9)).unwrap_err();
        match err {
            StoreError::DuplicateKey { collection, key } => {
                assert_eq!(collection, PRODUCTS);
                assert_eq!(key, "A1");
            }
            other => panic!("expected DuplicateKey, got {other:?}"),
        }
        // First write wins.
        assert_eq!(store.find_products().unwrap()[0].quantity(), 10);
    }

    #[test]
    fn update_sets_only_quantity_and_price() {
        let store = InMemoryDocumentStore::new();
        store.insert_product(&product("A1", 10, 2.5)).unwrap();

        let mut changed = Product::restore(NewProduct {
            sku: Sku::new("A1"),
            name: "renamed".to_string(),
            description: "changed".to_string(),
            quantity: 3,
            price: 7.0,
            supplier_id: SupplierId::new("S9"),
            date_received: "never".to_string(),
        });
        assert!(store.update_product_stock(&changed).unwrap());

        let stored = store.document(PRODUCTS, "A1").unwrap();
        assert_eq!(stored.get_i32("quantity").unwrap(), 3);
        assert_eq!(stored.get_f64("price").unwrap(), 7.0);
        assert_eq!(stored.get_str("name").unwrap(), "Product A1");
        assert_eq!(stored.get_str("supplierId").unwrap(), "S1");

        changed = product("ZZ", 1, 1.0);
        assert!(!store.update_product_stock(&changed).unwrap());
    }

    #[test]
    fn delete_reports_whether_a_document_went_away() {
        let store = InMemoryDocumentStore::new();
        store.insert_product(&product("A1", 10, 2.5)).unwrap();

        assert!(!store.delete_product(&Sku::new("B2")).unwrap());
        assert!(store.delete_product(&Sku::new("A1")).unwrap());
        assert_eq!(store.count(PRODUCTS), 0);
    }

    #[test]
    fn orders_come_back_in_insertion_order() {
        let store = InMemoryDocumentStore::new();
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        for id in ["PO-2", "PO-1", "SO-9"] {
            let kind = if id.starts_with("SO") {
                OrderKind::sell("Jane")
            } else {
                OrderKind::restock("S1")
            };
            let order = Order::with_items(
                OrderId::new(id),
                kind,
                vec![OrderItem::new(Sku::new("A1"), 1).unwrap()],
                date,
            );
            store.insert_order(&order).unwrap();
        }

        let ids: Vec<String> = store
            .find_orders()
            .unwrap()
            .iter()
            .map(|o| o.id_typed().to_string())
            .collect();
        assert_eq!(ids, vec!["PO-2", "PO-1", "SO-9"]);
    }

    #[test]
    fn malformed_document_fails_the_whole_find() {
        let store = InMemoryDocumentStore::new();
        store.insert_product(&product("A1", 10, 2.5)).unwrap();
        store
            .insert_raw(PRODUCTS, doc! { "_id": "B2", "name": "no other fields" })
            .unwrap();

        let err = store.find_products().unwrap_err();
        assert!(matches!(err, StoreError::Decode { collection: PRODUCTS, .. }));
        assert!(err.to_string().contains("B2"));
    }

    #[test]
    fn suppliers_round_trip() {
        let store = InMemoryDocumentStore::new();
        let supplier = Supplier::new(SupplierId::new("S1"), "Acme", "555");
        store.insert_supplier(&supplier).unwrap();
        assert!(store.insert_supplier(&supplier).unwrap_err().is_duplicate_key());
        assert_eq!(store.find_suppliers().unwrap(), vec![supplier]);
    }
}
