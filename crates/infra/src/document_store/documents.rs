//! Record <-> document mapping.
//!
//! Field names are fixed by the stored data and must not change:
//!
//! | collection  | shape |
//! |-------------|-------|
//! | `products`  | `{_id, name, description, quantity: int32, price: double, supplierId, dateReceived}` |
//! | `suppliers` | `{_id, name, contact}` |
//! | `orders`    | `{_id, supplierId \| customerName, items: [{sku, quantity}], orderDate: "YYYY-MM-DD"}` |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::{OrderId, Sku, SupplierId};
use stockroom_orders::{Order, OrderItem, OrderKind};
use stockroom_parties::Supplier;
use stockroom_products::{NewProduct, Product};

use super::r#trait::StoreError;

pub const PRODUCTS: &str = "products";
pub const SUPPLIERS: &str = "suppliers";
pub const ORDERS: &str = "orders";

const ORDER_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDocument {
    #[serde(rename = "_id")]
    pub sku: String,
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub price: f64,
    pub supplier_id: String,
    pub date_received: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemDocument {
    pub sku: String,
    pub quantity: i32,
}

/// Restock orders carry `supplierId`, sell orders carry `customerName`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDocument {
    #[serde(rename = "_id")]
    pub order_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    pub items: Vec<OrderItemDocument>,
    pub order_date: String,
}

impl From<&Product> for ProductDocument {
    fn from(product: &Product) -> Self {
        Self {
            sku: product.sku().to_string(),
            name: product.name().to_string(),
            description: product.description().to_string(),
            quantity: product.quantity(),
            price: product.price(),
            supplier_id: product.supplier_id().to_string(),
            date_received: product.date_received().to_string(),
        }
    }
}

impl From<ProductDocument> for Product {
    fn from(doc: ProductDocument) -> Self {
        Product::restore(NewProduct {
            sku: Sku::new(doc.sku),
            name: doc.name,
            description: doc.description,
            quantity: doc.quantity,
            price: doc.price,
            supplier_id: SupplierId::new(doc.supplier_id),
            date_received: doc.date_received,
        })
    }
}

impl From<&Supplier> for SupplierDocument {
    fn from(supplier: &Supplier) -> Self {
        Self {
            id: supplier.id_typed().to_string(),
            name: supplier.name().to_string(),
            contact: supplier.contact().to_string(),
        }
    }
}

impl From<SupplierDocument> for Supplier {
    fn from(doc: SupplierDocument) -> Self {
        Supplier::new(SupplierId::new(doc.id), doc.name, doc.contact)
    }
}

impl From<&Order> for OrderDocument {
    fn from(order: &Order) -> Self {
        let (supplier_id, customer_name) = match order.kind() {
            OrderKind::Restock { supplier_id } => (Some(supplier_id.to_string()), None),
            OrderKind::Sell { customer_name } => (None, Some(customer_name.clone())),
        };

        Self {
            order_id: order.id_typed().to_string(),
            supplier_id,
            customer_name,
            items: order
                .items()
                .iter()
                .map(|item| OrderItemDocument {
                    sku: item.sku.to_string(),
                    quantity: item.quantity,
                })
                .collect(),
            order_date: order.order_date().format(ORDER_DATE_FORMAT).to_string(),
        }
    }
}

impl TryFrom<OrderDocument> for Order {
    type Error = StoreError;

    fn try_from(doc: OrderDocument) -> Result<Self, Self::Error> {
        let kind = match (doc.supplier_id, doc.customer_name) {
            (Some(supplier_id), None) => OrderKind::restock(supplier_id),
            (None, Some(customer_name)) => OrderKind::sell(customer_name),
            (Some(_), Some(_)) => {
                return Err(StoreError::decode(
                    ORDERS,
                    format!(
                        "order '{}' has both supplierId and customerName",
                        doc.order_id
                    ),
                ));
            }
            (None, None) => {
                return Err(StoreError::decode(
                    ORDERS,
                    format!(
                        "order '{}' has neither supplierId nor customerName",
                        doc.order_id
                    ),
                ));
            }
        };

        let order_date = NaiveDate::parse_from_str(&doc.order_date, ORDER_DATE_FORMAT)
            .map_err(|e| {
                StoreError::decode(
                    ORDERS,
                    format!(
                        "order '{}' has invalid orderDate '{}': {e}",
                        doc.order_id, doc.order_date
                    ),
                )
            })?;

        // Stored lines are taken as-is; positivity is checked when a line is entered.
        let items = doc
            .items
            .into_iter()
            .map(|item| OrderItem {
                sku: Sku::new(item.sku),
                quantity: item.quantity,
            })
            .collect();

        Ok(Order::with_items(
            OrderId::new(doc.order_id),
            kind,
            items,
            order_date,
        ))
    }
}
