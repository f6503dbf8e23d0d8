//! Inventory service: validate, mutate memory, persist.
//!
//! Every operation follows the same order:
//!
//! 1. validate the input (no state touched on failure)
//! 2. apply the change to the [`Catalog`]
//! 3. write it to the [`DocumentStore`]
//!
//! Step 3 can fail after step 2 succeeded (duplicate key, network). The
//! in-memory change is kept and the error is returned, so the catalog and the
//! store can diverge until the next restart reloads from the store.

use chrono::{Local, NaiveDate};
use thiserror::Error;

use stockroom_core::{DomainError, OrderId};
use stockroom_orders::{Order, OrderItem, OrderKind};
use stockroom_parties::Supplier;
use stockroom_products::{NewProduct, Product, ProductUpdate, ensure_order_quantity};

use crate::catalog::Catalog;
use crate::document_store::{DocumentStore, StoreError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_not_found())
    }
}

/// Aggregate view of the inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryReport<'a> {
    pub products: Vec<&'a Product>,
    /// Sum of on-hand quantities.
    pub total_items: i64,
    /// Sum of quantity x price.
    pub total_value: f64,
}

/// An order being entered line by line.
///
/// Stock moves as each line is accepted, not when the draft is finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    order: Order,
}

impl OrderDraft {
    pub fn kind(&self) -> &OrderKind {
        self.order.kind()
    }

    pub fn lines(&self) -> &[OrderItem] {
        self.order.items()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// What happened to a finished draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    /// The order had lines and was recorded.
    Stored(OrderId),
    /// No line was accepted; nothing was recorded.
    Discarded,
}

/// One order line valued at the product's current price.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineSummary<'a> {
    pub item: &'a OrderItem,
    /// `None` once the product has been removed from the inventory.
    pub product: Option<&'a Product>,
    pub unit_price: f64,
    pub line_total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary<'a> {
    pub order: &'a Order,
    pub lines: Vec<OrderLineSummary<'a>>,
    pub total: f64,
}

/// Owns the catalog and the store; the only way records change.
#[derive(Debug)]
pub struct InventoryService<S> {
    store: S,
    catalog: Catalog,
}

impl<S> InventoryService<S>
where
    S: DocumentStore,
{
    /// Load the full catalog from `store`.
    pub fn load(store: S) -> Result<Self, StoreError> {
        let catalog = Catalog::load(&store)?;
        Ok(Self { store, catalog })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Give the store back, e.g. to close its connection at exit.
    pub fn into_store(self) -> S {
        self.store
    }

    // --- products -------------------------------------------------------

    /// Add a product. A duplicate SKU still replaces the in-memory record
    /// before the store rejects the insert.
    pub fn add_product(&mut self, input: NewProduct) -> Result<&Product, ServiceError> {
        let product = Product::create(input)?;
        let sku = product.sku().clone();

        if self.catalog.upsert_product(product).is_some() {
            tracing::debug!(%sku, "replaced product in memory");
        }
        let product = self
            .catalog
            .product(sku.as_str())
            .ok_or_else(|| DomainError::not_found("product", sku.as_str()))?;

        if let Err(err) = self.store.insert_product(product) {
            tracing::warn!(%sku, error = %err, "product kept in memory but not persisted");
            return Err(err.into());
        }

        tracing::info!(%sku, "product added");
        Ok(product)
    }

    pub fn find_product(&self, sku: &str) -> Option<&Product> {
        self.catalog.product(sku)
    }

    /// Overwrite quantity and/or price. Only those two fields are written back.
    pub fn update_product(
        &mut self,
        sku: &str,
        update: ProductUpdate,
    ) -> Result<&Product, ServiceError> {
        let product = self
            .catalog
            .product_mut(sku)
            .ok_or_else(|| DomainError::not_found("product", sku))?;

        product.apply_update(&update)?;
        if update.is_empty() {
            tracing::debug!(sku, "empty update; nothing to write");
            return Ok(product);
        }

        if !self.store.update_product_stock(product)? {
            tracing::warn!(sku, "updated product has no stored document");
        }

        tracing::info!(sku, quantity = product.quantity(), price = product.price(), "product updated");
        Ok(product)
    }

    pub fn remove_product(&mut self, sku: &str) -> Result<Product, ServiceError> {
        let removed = self
            .catalog
            .remove_product(sku)
            .ok_or_else(|| DomainError::not_found("product", sku))?;

        if !self.store.delete_product(removed.sku())? {
            tracing::warn!(sku, "removed product had no stored document");
        }

        tracing::info!(sku, "product removed");
        Ok(removed)
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.catalog.products()
    }

    pub fn inventory_report(&self) -> InventoryReport<'_> {
        let products: Vec<&Product> = self.catalog.products().collect();
        let total_items = products.iter().map(|p| i64::from(p.quantity())).sum();
        let total_value = products
            .iter()
            .fold(0.0, |acc, p| acc + p.stock_value());

        InventoryReport {
            products,
            total_items,
            total_value,
        }
    }

    // --- suppliers ------------------------------------------------------

    pub fn add_supplier(&mut self, supplier: Supplier) -> Result<(), ServiceError> {
        let id = supplier.id_typed().clone();
        self.catalog.upsert_supplier(supplier);

        let Some(stored) = self.catalog.supplier(id.as_str()) else {
            return Err(DomainError::not_found("supplier", id.as_str()).into());
        };
        if let Err(err) = self.store.insert_supplier(stored) {
            tracing::warn!(supplier_id = %id, error = %err, "supplier kept in memory but not persisted");
            return Err(err.into());
        }

        tracing::info!(supplier_id = %id, "supplier added");
        Ok(())
    }

    pub fn suppliers(&self) -> impl Iterator<Item = &Supplier> {
        self.catalog.suppliers()
    }

    // --- orders ---------------------------------------------------------

    /// Start an order dated today (local calendar).
    pub fn begin_order(&self, order_id: OrderId, kind: OrderKind) -> OrderDraft {
        self.begin_order_on(order_id, kind, Local::now().date_naive())
    }

    pub fn begin_order_on(&self, order_id: OrderId, kind: OrderKind, date: NaiveDate) -> OrderDraft {
        OrderDraft {
            order: Order::new(order_id, kind, date),
        }
    }

    /// Accept one line: move stock now and persist the product.
    ///
    /// Restock lines add units; sell lines remove them and are rejected with
    /// [`DomainError::InsufficientStock`] when fewer units are on hand. A
    /// rejected line changes nothing. If only the persistence step fails, the
    /// line stays on the draft (memory already moved) and the store error is
    /// returned.
    ///
    /// Returns the product's new on-hand quantity.
    pub fn add_order_line(
        &mut self,
        draft: &mut OrderDraft,
        sku: &str,
        quantity: i32,
    ) -> Result<i32, ServiceError> {
        let product = self
            .catalog
            .product_mut(sku)
            .ok_or_else(|| DomainError::not_found("product", sku))?;
        ensure_order_quantity(quantity)?;

        let on_hand = match draft.kind() {
            OrderKind::Restock { .. } => product.restock(quantity)?,
            OrderKind::Sell { .. } => product.withdraw(quantity)?,
        };
        draft
            .order
            .push_item(OrderItem::new(product.sku().clone(), quantity)?);

        tracing::info!(
            order_id = %draft.order.id_typed(),
            sku,
            quantity,
            on_hand,
            "order line accepted"
        );

        if !self.store.update_product_stock(product)? {
            tracing::warn!(sku, "stock moved for a product with no stored document");
        }
        Ok(on_hand)
    }

    /// Record the order, unless no line was accepted.
    ///
    /// Empty drafts are discarded for both kinds; an order with no lines
    /// carries no stock movement worth keeping.
    pub fn finish_order(&mut self, draft: OrderDraft) -> Result<OrderOutcome, ServiceError> {
        let order = draft.order;
        let id = order.id_typed().clone();

        if order.is_empty() {
            tracing::info!(order_id = %id, "empty order discarded");
            return Ok(OrderOutcome::Discarded);
        }

        self.catalog.push_order(order);
        let stored = self
            .catalog
            .orders()
            .last()
            .ok_or_else(|| DomainError::not_found("order", id.as_str()))?;

        if let Err(err) = self.store.insert_order(stored) {
            tracing::warn!(order_id = %id, error = %err, "order kept in memory but not persisted");
            return Err(err.into());
        }

        tracing::info!(order_id = %id, lines = stored.items().len(), "order stored");
        Ok(OrderOutcome::Stored(id))
    }

    /// Every order with line and order totals at *current* product prices.
    ///
    /// Orders do not record the price at entry time, so changing a product's
    /// price changes the value shown for past orders.
    pub fn order_summaries(&self) -> Vec<OrderSummary<'_>> {
        self.catalog
            .orders()
            .iter()
            .map(|order| {
                let lines: Vec<OrderLineSummary<'_>> = order
                    .items()
                    .iter()
                    .map(|item| {
                        let product = self.catalog.product(item.sku.as_str());
                        let unit_price = product.map(Product::price).unwrap_or(0.0);
                        OrderLineSummary {
                            item,
                            product,
                            unit_price,
                            line_total: f64::from(item.quantity) * unit_price,
                        }
                    })
                    .collect();
                let total = lines.iter().fold(0.0, |acc, l| acc + l.line_total);
                OrderSummary {
                    order,
                    lines,
                    total,
                }
            })
            .collect()
    }
}
