//! In-process view of products, suppliers and orders.

use std::collections::BTreeMap;

use stockroom_core::{Entity, Sku, SupplierId};
use stockroom_orders::Order;
use stockroom_parties::Supplier;
use stockroom_products::Product;

use crate::document_store::{DocumentStore, StoreError};

/// Authoritative in-memory copy of every record.
///
/// Filled once from the document store at startup and kept in step by
/// [`crate::InventoryService`] on every mutation. Products and suppliers are
/// keyed (and listed) by their IDs; orders keep their load/append order.
///
/// The catalog itself does not enforce key uniqueness beyond map semantics:
/// inserting an existing key replaces the record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: BTreeMap<Sku, Product>,
    suppliers: BTreeMap<SupplierId, Supplier>,
    orders: Vec<Order>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every collection in full. Any malformed document aborts the load.
    pub fn load<S>(store: &S) -> Result<Self, StoreError>
    where
        S: DocumentStore + ?Sized,
    {
        let mut catalog = Self::new();
        for product in store.find_products()? {
            catalog.upsert_product(product);
        }
        for supplier in store.find_suppliers()? {
            catalog.upsert_supplier(supplier);
        }
        for order in store.find_orders()? {
            catalog.push_order(order);
        }

        tracing::info!(
            products = catalog.products.len(),
            suppliers = catalog.suppliers.len(),
            orders = catalog.orders.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Insert or replace by SKU. Returns the replaced product, if any.
    pub fn upsert_product(&mut self, product: Product) -> Option<Product> {
        self.products.insert(product.id().clone(), product)
    }

    pub fn product(&self, sku: &str) -> Option<&Product> {
        self.products.get(sku)
    }

    pub fn product_mut(&mut self, sku: &str) -> Option<&mut Product> {
        self.products.get_mut(sku)
    }

    pub fn remove_product(&mut self, sku: &str) -> Option<Product> {
        self.products.remove(sku)
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Insert or replace by supplier ID. Returns the replaced supplier, if any.
    pub fn upsert_supplier(&mut self, supplier: Supplier) -> Option<Supplier> {
        self.suppliers.insert(supplier.id().clone(), supplier)
    }

    pub fn supplier(&self, id: &str) -> Option<&Supplier> {
        self.suppliers.get(id)
    }

    pub fn suppliers(&self) -> impl Iterator<Item = &Supplier> {
        self.suppliers.values()
    }

    pub fn supplier_count(&self) -> usize {
        self.suppliers.len()
    }

    pub fn push_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}
