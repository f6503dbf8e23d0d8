//! MongoDB-backed document store.
//!
//! Uses the driver's blocking API: the whole application is a synchronous,
//! single-threaded menu loop, so every call simply waits for its round-trip.
//!
//! ## Error Mapping
//!
//! | Driver error | StoreError |
//! |--------------|------------|
//! | write error, code `11000` | `DuplicateKey` |
//! | BSON deserialization while reading a cursor | `Decode` |
//! | anything else (I/O, server selection, auth, ...) | `Backend` |

use mongodb::bson::{Document, doc};
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::sync::{Client, Collection};
use serde::de::DeserializeOwned;
use tracing::instrument;

use stockroom_core::Sku;
use stockroom_orders::Order;
use stockroom_parties::Supplier;
use stockroom_products::Product;

use super::documents::{
    ORDERS, OrderDocument, PRODUCTS, ProductDocument, SUPPLIERS, SupplierDocument,
};
use super::r#trait::{DocumentStore, StoreError};
use crate::config::StoreConfig;

const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB document store: one typed collection per record type.
#[derive(Debug, Clone)]
pub struct MongoDocumentStore {
    client: Client,
    products: Collection<ProductDocument>,
    suppliers: Collection<SupplierDocument>,
    orders: Collection<OrderDocument>,
}

impl MongoDocumentStore {
    /// Connect and ping the server so an unreachable database fails at startup
    /// rather than on the first menu action.
    #[instrument(skip(config), fields(database = %config.database), err)]
    pub fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(&config.mongo_uri)
            .map_err(|e| map_mongo_error("connect", None, e))?;
        let database = client.database(&config.database);

        database
            .run_command(doc! { "ping": 1 })
            .run()
            .map_err(|e| map_mongo_error("ping", None, e))?;

        tracing::info!(database = %config.database, "connected to document store");

        Ok(Self {
            products: database.collection(PRODUCTS),
            suppliers: database.collection(SUPPLIERS),
            orders: database.collection(ORDERS),
            client,
        })
    }

    /// Close the connection pool. Called once when the session ends.
    pub fn shutdown(self) {
        tracing::info!("closing document store connection");
        self.client.shutdown().run();
    }
}

fn map_mongo_error(operation: &str, insert_key: Option<(&'static str, &str)>, err: MongoError) -> StoreError {
    match (err.kind.as_ref(), insert_key) {
        (ErrorKind::Write(WriteFailure::WriteError(write_error)), Some((collection, key)))
            if write_error.code == DUPLICATE_KEY_CODE =>
        {
            StoreError::DuplicateKey {
                collection,
                key: key.to_string(),
            }
        }
        _ => StoreError::Backend(format!("{operation} failed: {err}")),
    }
}

fn find_all<T>(collection: &Collection<T>, name: &'static str) -> Result<Vec<T>, StoreError>
where
    T: DeserializeOwned + Unpin + Send + Sync,
{
    let cursor = collection
        .find(Document::new())
        .run()
        .map_err(|e| map_mongo_error("find", None, e))?;

    cursor
        .map(|next| {
            next.map_err(|e| match e.kind.as_ref() {
                ErrorKind::BsonDeserialization(inner) => StoreError::decode(name, inner.to_string()),
                _ => map_mongo_error("find", None, e),
            })
        })
        .collect()
}

impl DocumentStore for MongoDocumentStore {
    #[instrument(skip(self, product), fields(sku = %product.sku()), err)]
    fn insert_product(&self, product: &Product) -> Result<(), StoreError> {
        self.products
            .insert_one(ProductDocument::from(product))
            .run()
            .map_err(|e| map_mongo_error("insert product", Some((PRODUCTS, product.sku().as_str())), e))?;
        Ok(())
    }

    #[instrument(skip(self, product), fields(sku = %product.sku()), err)]
    fn update_product_stock(&self, product: &Product) -> Result<bool, StoreError> {
        let result = self
            .products
            .update_one(
                doc! { "_id": product.sku().as_str() },
                doc! { "$set": { "quantity": product.quantity(), "price": product.price() } },
            )
            .run()
            .map_err(|e| map_mongo_error("update product", None, e))?;
        Ok(result.matched_count > 0)
    }

    #[instrument(skip(self), fields(sku = %sku), err)]
    fn delete_product(&self, sku: &Sku) -> Result<bool, StoreError> {
        let result = self
            .products
            .delete_one(doc! { "_id": sku.as_str() })
            .run()
            .map_err(|e| map_mongo_error("delete product", None, e))?;
        Ok(result.deleted_count > 0)
    }

    #[instrument(skip(self), err)]
    fn find_products(&self) -> Result<Vec<Product>, StoreError> {
        Ok(find_all(&self.products, PRODUCTS)?
            .into_iter()
            .map(Product::from)
            .collect())
    }

    #[instrument(skip(self, supplier), fields(supplier_id = %supplier.id_typed()), err)]
    fn insert_supplier(&self, supplier: &Supplier) -> Result<(), StoreError> {
        self.suppliers
            .insert_one(SupplierDocument::from(supplier))
            .run()
            .map_err(|e| {
                map_mongo_error("insert supplier", Some((SUPPLIERS, supplier.id_typed().as_str())), e)
            })?;
        Ok(())
    }

    #[instrument(skip(self), err)]
    fn find_suppliers(&self) -> Result<Vec<Supplier>, StoreError> {
        Ok(find_all(&self.suppliers, SUPPLIERS)?
            .into_iter()
            .map(Supplier::from)
            .collect())
    }

    #[instrument(skip(self, order), fields(order_id = %order.id_typed(), lines = order.items().len()), err)]
    fn insert_order(&self, order: &Order) -> Result<(), StoreError> {
        self.orders
            .insert_one(OrderDocument::from(order))
            .run()
            .map_err(|e| map_mongo_error("insert order", Some((ORDERS, order.id_typed().as_str())), e))?;
        Ok(())
    }

    #[instrument(skip(self), err)]
    fn find_orders(&self) -> Result<Vec<Order>, StoreError> {
        find_all(&self.orders, ORDERS)?
            .into_iter()
            .map(Order::try_from)
            .collect()
    }
}
