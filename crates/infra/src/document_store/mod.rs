//! Document store boundary.
//!
//! One collection per record type, one document per record, the record key
//! stored as `_id`. The mapping between records and documents lives in
//! [`documents`] and is shared by every adapter.

pub mod documents;
pub mod in_memory;
pub mod mongo;
pub mod r#trait;

pub use documents::{
    ORDERS, OrderDocument, OrderItemDocument, PRODUCTS, ProductDocument, SUPPLIERS,
    SupplierDocument,
};
pub use in_memory::InMemoryDocumentStore;
pub use mongo::MongoDocumentStore;
pub use r#trait::{DocumentStore, StoreError};
