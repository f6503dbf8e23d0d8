use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainResult, Entity, OrderId, Sku, SupplierId, ValueObject};
use stockroom_products::ensure_order_quantity;

/// One line of an order: which product and how many units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub sku: Sku,
    pub quantity: i32,
}

impl OrderItem {
    /// Build a line for a new order. The quantity must be positive.
    pub fn new(sku: Sku, quantity: i32) -> DomainResult<Self> {
        ensure_order_quantity(quantity)?;
        Ok(Self { sku, quantity })
    }
}

impl ValueObject for OrderItem {}

/// What an order does to stock, and with whom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    /// Purchase from a supplier; every line adds stock.
    Restock { supplier_id: SupplierId },
    /// Sale to a customer; every line removes stock.
    Sell { customer_name: String },
}

/// Borrowed view of an order's counterparty, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counterparty<'a> {
    Supplier(&'a SupplierId),
    Customer(&'a str),
}

impl OrderKind {
    pub fn restock(supplier_id: impl Into<SupplierId>) -> Self {
        Self::Restock {
            supplier_id: supplier_id.into(),
        }
    }

    pub fn sell(customer_name: impl Into<String>) -> Self {
        Self::Sell {
            customer_name: customer_name.into(),
        }
    }

    pub fn is_sell(&self) -> bool {
        matches!(self, Self::Sell { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Restock { .. } => "Order",
            Self::Sell { .. } => "Sell order",
        }
    }

    pub fn counterparty(&self) -> Counterparty<'_> {
        match self {
            Self::Restock { supplier_id } => Counterparty::Supplier(supplier_id),
            Self::Sell { customer_name } => Counterparty::Customer(customer_name),
        }
    }
}

/// A restock or sell order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    kind: OrderKind,
    items: Vec<OrderItem>,
    order_date: NaiveDate,
}

impl Order {
    /// Start an order with no lines yet.
    pub fn new(id: OrderId, kind: OrderKind, order_date: NaiveDate) -> Self {
        Self::with_items(id, kind, Vec::new(), order_date)
    }

    pub fn with_items(
        id: OrderId,
        kind: OrderKind,
        items: Vec<OrderItem>,
        order_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            kind,
            items,
            order_date,
        }
    }

    pub fn id_typed(&self) -> &OrderId {
        &self.id
    }

    pub fn kind(&self) -> &OrderKind {
        &self.kind
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn order_date(&self) -> NaiveDate {
        self.order_date
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a line. Lines keep their entry order; repeated SKUs stay separate.
    pub fn push_item(&mut self, item: OrderItem) {
        self.items.push(item);
    }

    /// Total units across all lines.
    pub fn total_units(&self) -> i64 {
        self.items.iter().map(|i| i64::from(i.quantity)).sum()
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn order_item_rejects_non_positive_quantity() {
        assert!(OrderItem::new(Sku::new("A1"), 0).is_err());
        assert!(OrderItem::new(Sku::new("A1"), -4).is_err());
        assert_eq!(OrderItem::new(Sku::new("A1"), 4).unwrap().quantity, 4);
    }

    #[test]
    fn restock_order_exposes_supplier() {
        let order = Order::new(OrderId::new("PO-1"), OrderKind::restock("S1"), date());
        assert_eq!(
            order.kind().counterparty(),
            Counterparty::Supplier(&SupplierId::new("S1"))
        );
        assert!(!order.kind().is_sell());
        assert!(order.is_empty());
    }

    #[test]
    fn sell_order_exposes_customer() {
        let order = Order::new(OrderId::new("SO-1"), OrderKind::sell("Jane"), date());
        assert_eq!(order.kind().counterparty(), Counterparty::Customer("Jane"));
        assert_eq!(order.kind().label(), "Sell order");
    }

    #[test]
    fn items_keep_entry_order() {
        let mut order = Order::new(OrderId::new("PO-1"), OrderKind::restock("S1"), date());
        order.push_item(OrderItem::new(Sku::new("B2"), 1).unwrap());
        order.push_item(OrderItem::new(Sku::new("A1"), 2).unwrap());
        order.push_item(OrderItem::new(Sku::new("B2"), 3).unwrap());

        let skus: Vec<&str> = order.items().iter().map(|i| i.sku.as_str()).collect();
        assert_eq!(skus, vec!["B2", "A1", "B2"]);
        assert_eq!(order.total_units(), 6);
        assert_eq!(order.id().as_str(), "PO-1");
        assert_eq!(order.order_date(), date());
    }
}
