use crate::container::{ContainedItem, Container};
use crate::error::PricingError;
use bulkdisc_core::discounted_price;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub id: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub line_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartPricing {
    pub quantity: u32,
    pub discount_percent: f64,
    pub lines: Vec<CartLine>,
    pub base_price: f64,
    pub subtotal: f64,
    pub total: f64,
}

/// Unit price of a child item once the container's discount for the
/// buyer's total quantity is taken off. Free items stay free.
pub fn child_unit_price(container: &Container, item: &ContainedItem) -> f64 {
    let price = item.price();
    if price == 0.0 || !container.settings.has_discount_data() {
        return price;
    }
    let percent = container.settings.percent_for(container.chosen_quantity());
    discounted_price(price, percent)
}

pub fn child_item_price(container: &Container, item_id: &str) -> Result<f64, PricingError> {
    let item = container.item(item_id)?;
    Ok(child_unit_price(container, item))
}

/// The container's own price, discounted only when the settings extend the
/// discount to the base price.
pub fn container_base_price(container: &Container) -> f64 {
    let price = container.base_price();
    if price == 0.0
        || !container.settings.apply_to_base_price
        || !container.settings.has_discount_data()
    {
        return price;
    }
    let percent = container.settings.percent_for(container.chosen_quantity());
    discounted_price(price, percent)
}

pub fn price_cart(container: &Container) -> CartPricing {
    let quantity = container.chosen_quantity();
    let discount_percent = container.settings.percent_for(quantity);

    let lines: Vec<CartLine> = container
        .items
        .iter()
        .filter(|item| item.quantity > 0)
        .map(|item| {
            let unit_price = child_unit_price(container, item);
            CartLine {
                id: item.id.clone(),
                quantity: item.quantity,
                unit_price,
                line_total: unit_price * f64::from(item.quantity),
            }
        })
        .collect();

    let regular_items: f64 = container
        .items
        .iter()
        .map(|item| item.price() * f64::from(item.quantity))
        .sum();
    let base_price = container_base_price(container);
    let subtotal = container.base_price() + regular_items;
    let total = base_price + lines.iter().map(|line| line.line_total).sum::<f64>();

    debug!(
        container = %container.id,
        quantity,
        discount_percent,
        subtotal,
        total,
        "priced container cart"
    );

    CartPricing {
        quantity,
        discount_percent,
        lines,
        base_price,
        subtotal,
        total,
    }
}
