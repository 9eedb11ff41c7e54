use crate::error::{check_price, PricingError};
use bulkdisc_core::DiscountSettings;

/// A child product inside a container, with the quantity the buyer chose and
/// the minimum the container requires of it.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainedItem {
    pub id: String,
    price: f64,
    pub quantity: u32,
    pub min_quantity: u32,
}

impl ContainedItem {
    pub fn new(id: impl Into<String>, price: f64) -> Result<Self, PricingError> {
        Ok(Self {
            id: id.into(),
            price: check_price(price)?,
            quantity: 0,
            min_quantity: 0,
        })
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_min_quantity(mut self, min_quantity: u32) -> Self {
        self.min_quantity = min_quantity;
        self
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub id: String,
    base_price: f64,
    pub settings: DiscountSettings,
    pub items: Vec<ContainedItem>,
}

impl Container {
    pub fn new(
        id: impl Into<String>,
        base_price: f64,
        settings: DiscountSettings,
    ) -> Result<Self, PricingError> {
        Ok(Self {
            id: id.into(),
            base_price: check_price(base_price)?,
            settings,
            items: Vec::new(),
        })
    }

    pub fn with_item(mut self, item: ContainedItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    pub fn item(&self, id: &str) -> Result<&ContainedItem, PricingError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| PricingError::UnknownItem(id.to_string()))
    }

    /// Total quantity the buyer put in the container; drives cart discounts.
    pub fn chosen_quantity(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |total, item| total.saturating_add(item.quantity))
    }

    /// Sum of every item's required minimum; drives the catalog "from" price.
    pub fn minimum_quantity(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |total, item| total.saturating_add(item.min_quantity))
    }
}
