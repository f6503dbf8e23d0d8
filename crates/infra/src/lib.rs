//! Infrastructure layer: document store adapters, the in-memory catalog and
//! the service that keeps the two in step.

pub mod catalog;
pub mod config;
pub mod document_store;
pub mod service;


pub use catalog::Catalog;
pub use config::StoreConfig;
pub use document_store::{DocumentStore, InMemoryDocumentStore, MongoDocumentStore, StoreError};
pub use service::{
    InventoryReport, InventoryService, OrderDraft, OrderLineSummary, OrderOutcome, OrderSummary,
    ServiceError,
};
