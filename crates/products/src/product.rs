use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, Sku, SupplierId};

/// Input for creating a product (what the operator types in).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub sku: Sku,
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub price: f64,
    pub supplier_id: SupplierId,
    /// Free-form text; the operator is asked for `YYYY-MM-DD` but nothing enforces it.
    pub date_received: String,
}

/// Partial update of the mutable product fields. `None` leaves a field untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProductUpdate {
    pub quantity: Option<i32>,
    pub price: Option<f64>,
}

impl ProductUpdate {
    pub fn is_empty(&self) -> bool {
        self.quantity.is_none() && self.price.is_none()
    }

    /// Check every provided field before anything is applied.
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(quantity) = self.quantity {
            ensure_quantity(quantity)?;
        }
        if let Some(price) = self.price {
            ensure_price(price)?;
        }
        Ok(())
    }
}

/// A stocked product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    sku: Sku,
    name: String,
    description: String,
    quantity: i32,
    price: f64,
    supplier_id: SupplierId,
    date_received: String,
}

impl Product {
    /// Validate operator input and build the product.
    pub fn create(input: NewProduct) -> DomainResult<Self> {
        ensure_quantity(input.quantity)?;
        ensure_price(input.price)?;
        Ok(Self::restore(input))
    }

    /// Rebuild a product from stored fields without re-validating them.
    pub fn restore(input: NewProduct) -> Self {
        Self {
            sku: input.sku,
            name: input.name,
            description: input.description,
            quantity: input.quantity,
            price: input.price,
            supplier_id: input.supplier_id,
            date_received: input.date_received,
        }
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn supplier_id(&self) -> &SupplierId {
        &self.supplier_id
    }

    pub fn date_received(&self) -> &str {
        &self.date_received
    }

    /// Value of the units on hand at the current price.
    pub fn stock_value(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }

    /// Apply a partial update. Nothing changes unless every provided field is valid.
    pub fn apply_update(&mut self, update: &ProductUpdate) -> DomainResult<()> {
        update.validate()?;
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        Ok(())
    }

    /// Receive `quantity` units. Returns the new on-hand quantity.
    pub fn restock(&mut self, quantity: i32) -> DomainResult<i32> {
        ensure_order_quantity(quantity)?;
        self.quantity = self
            .quantity
            .checked_add(quantity)
            .ok_or_else(|| DomainError::validation("Quantity is too large."))?;
        Ok(self.quantity)
    }

    /// Ship `quantity` units. Rejected without any change if fewer are on hand.
    pub fn withdraw(&mut self, quantity: i32) -> DomainResult<i32> {
        ensure_order_quantity(quantity)?;
        if self.quantity < quantity {
            return Err(DomainError::InsufficientStock {
                available: self.quantity,
                requested: quantity,
            });
        }
        self.quantity -= quantity;
        Ok(self.quantity)
    }
}

impl Entity for Product {
    type Id = Sku;

    fn id(&self) -> &Self::Id {
        &self.sku
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Product{{SKU='{}', name='{}', description='{}', quantity={}, price={:.2}, supplierId='{}', dateReceived='{}'}}",
            self.sku,
            self.name,
            self.description,
            self.quantity,
            self.price,
            self.supplier_id,
            self.date_received
        )
    }
}

fn ensure_quantity(quantity: i32) -> DomainResult<()> {
    if quantity < 0 {
        return Err(DomainError::validation("Quantity cannot be negative."));
    }
    Ok(())
}

fn ensure_price(price: f64) -> DomainResult<()> {
    if !price.is_finite() {
        return Err(DomainError::validation("Price must be a finite number."));
    }
    if price < 0.0 {
        return Err(DomainError::validation("Price cannot be negative."));
    }
    Ok(())
}

/// Order lines move at least one unit.
pub fn ensure_order_quantity(quantity: i32) -> DomainResult<()> {
    if quantity <= 0 {
        return Err(DomainError::validation("Quantity must be positive."));
    }
    Ok(())
}
