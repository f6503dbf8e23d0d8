//! Service errors -> console messages.

use stockroom_core::DomainError;
use stockroom_infra::document_store::{ORDERS, PRODUCTS, SUPPLIERS};
use stockroom_infra::{ServiceError, StoreError};

pub const INVALID_NUMBER: &str = "Invalid input. Please enter a valid number.";
pub const PRODUCT_NOT_FOUND: &str = "Product not found in the inventory.";
pub const ORDER_LINE_NOT_FOUND: &str = "Product not found. Try again.";

/// Message for a failed operation. `record` names what was being saved
/// ("product", "supplier", "order", "sell order").
pub fn service_error_message(err: &ServiceError, record: &str) -> String {
    match err {
        ServiceError::Domain(DomainError::Validation(msg)) => format!("Error: {msg}"),
        ServiceError::Domain(DomainError::NotFound {
            entity: "product", ..
        }) => PRODUCT_NOT_FOUND.to_string(),
        ServiceError::Domain(e @ DomainError::NotFound { .. }) => format!("Error: {e}"),
        ServiceError::Domain(DomainError::InsufficientStock { available, .. }) => {
            format!("Insufficient stock. Available: {available}")
        }
        ServiceError::Store(e) => store_error_message(e, record),
    }
}

pub fn store_error_message(err: &StoreError, record: &str) -> String {
    match err {
        StoreError::DuplicateKey { collection, key } => {
            let subject = match *collection {
                PRODUCTS => "Product with SKU",
                SUPPLIERS => "Supplier with ID",
                ORDERS if record.starts_with("sell") => "Sell order with ID",
                ORDERS => "Order with ID",
                _ => "Record with ID",
            };
            format!("Error: {subject} {key} already exists in the database.")
        }
        other => format!("Error saving {record} to database: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_keys_name_the_record() {
        let err = ServiceError::Store(StoreError::DuplicateKey {
            collection: PRODUCTS,
            key: "A1".to_string(),
        });
        assert_eq!(
            service_error_message(&err, "product"),
            "Error: Product with SKU A1 already exists in the database."
        );

        let err = StoreError::DuplicateKey {
            collection: ORDERS,
            key: "SO-1".to_string(),
        };
        assert_eq!(
            store_error_message(&err, "sell order"),
            "Error: Sell order with ID SO-1 already exists in the database."
        );
    }

    #[test]
    fn backend_failures_are_prefixed() {
        let err = StoreError::Backend("connection reset".to_string());
        assert_eq!(
            store_error_message(&err, "supplier"),
            "Error saving supplier to database: connection reset"
        );
    }

    #[test]
    fn domain_errors() {
        let err = ServiceError::Domain(DomainError::not_found("product", "B2"));
        assert_eq!(service_error_message(&err, "product"), PRODUCT_NOT_FOUND);

        let err = ServiceError::Domain(DomainError::InsufficientStock {
            available: 15,
            requested: 20,
        });
        assert_eq!(
            service_error_message(&err, "sell order"),
            "Insufficient stock. Available: 15"
        );

        let err = ServiceError::Domain(DomainError::validation("Price cannot be negative."));
        assert_eq!(
            service_error_message(&err, "product"),
            "Error: Price cannot be negative."
        );
    }
}
