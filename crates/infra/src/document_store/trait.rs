use std::sync::Arc;

use thiserror::Error;

use stockroom_core::Sku;
use stockroom_orders::Order;
use stockroom_parties::Supplier;
use stockroom_products::Product;

/// Document store operation error.
///
/// - **DuplicateKey**: the `_id` is already taken (unique key constraint)
/// - **Decode**: a stored document is missing a field or has the wrong shape
/// - **Backend**: anything else the backend reports (network, auth, server)
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate key '{key}' in collection '{collection}'")]
    DuplicateKey { collection: &'static str, key: String },

    #[error("malformed document in collection '{collection}': {message}")]
    Decode {
        collection: &'static str,
        message: String,
    },

    #[error("{0}")]
    Backend(String),
}

impl StoreError {
    pub fn decode(collection: &'static str, message: impl Into<String>) -> Self {
        Self::Decode {
            collection,
            message: message.into(),
        }
    }

    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }
}

/// Persistence adapter for products, suppliers and orders.
///
/// Every mutating call is a single round-trip against one collection. There is
/// no batching and no transaction spanning collections: a restock line that
/// updates a product and the order that later records it are two separate
/// writes.
///
/// Inserts fail with [`StoreError::DuplicateKey`] when the key exists; callers
/// report that and move on.
pub trait DocumentStore: Send + Sync {
    fn insert_product(&self, product: &Product) -> Result<(), StoreError>;

    /// Partial update: only `quantity` and `price` are written.
    ///
    /// Returns `false` when no stored document has this SKU.
    fn update_product_stock(&self, product: &Product) -> Result<bool, StoreError>;

    /// Returns `false` when no stored document has this SKU.
    fn delete_product(&self, sku: &Sku) -> Result<bool, StoreError>;

    fn find_products(&self) -> Result<Vec<Product>, StoreError>;

    fn insert_supplier(&self, supplier: &Supplier) -> Result<(), StoreError>;

    fn find_suppliers(&self) -> Result<Vec<Supplier>, StoreError>;

    fn insert_order(&self, order: &Order) -> Result<(), StoreError>;

    /// Orders in stored (natural) order.
    fn find_orders(&self) -> Result<Vec<Order>, StoreError>;
}

impl<S> DocumentStore for Arc<S>
where
    S: DocumentStore + ?Sized,
{
    fn insert_product(&self, product: &Product) -> Result<(), StoreError> {
        (**self).insert_product(product)
    }

    fn update_product_stock(&self, product: &Product) -> Result<bool, StoreError> {
        (**self).update_product_stock(product)
    }

    fn delete_product(&self, sku: &Sku) -> Result<bool, StoreError> {
        (**self).delete_product(sku)
    }

    fn find_products(&self) -> Result<Vec<Product>, StoreError> {
        (**self).find_products()
    }

    fn insert_supplier(&self, supplier: &Supplier) -> Result<(), StoreError> {
        (**self).insert_supplier(supplier)
    }

    fn find_suppliers(&self) -> Result<Vec<Supplier>, StoreError> {
        (**self).find_suppliers()
    }

    fn insert_order(&self, order: &Order) -> Result<(), StoreError> {
        (**self).insert_order(order)
    }

    fn find_orders(&self) -> Result<Vec<Order>, StoreError> {
        (**self).find_orders()
    }
}

impl<S> DocumentStore for Box<S>
where
    S: DocumentStore + ?Sized,
{
    fn insert_product(&self, product: &Product) -> Result<(), StoreError> {
        (**self).insert_product(product)
    }

    fn update_product_stock(&self, product: &Product) -> Result<bool, StoreError> {
        (**self).update_product_stock(product)
    }

    fn delete_product(&self, sku: &Sku) -> Result<bool, StoreError> {
        (**self).delete_product(sku)
    }

    fn find_products(&self) -> Result<Vec<Product>, StoreError> {
        (**self).find_products()
    }

    fn insert_supplier(&self, supplier: &Supplier) -> Result<(), StoreError> {
        (**self).insert_supplier(supplier)
    }

    fn find_suppliers(&self) -> Result<Vec<Supplier>, StoreError> {
        (**self).find_suppliers()
    }

    fn insert_order(&self, order: &Order) -> Result<(), StoreError> {
        (**self).insert_order(order)
    }

    fn find_orders(&self) -> Result<Vec<Order>, StoreError> {
        (**self).find_orders()
    }
}
