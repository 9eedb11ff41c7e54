use crate::container::Container;
use bulkdisc_core::{discounted_price, encode_tiers, DiscountMode, DiscountSettings, TierSet};
use bulkdisc_data::PricingConfig;
use serde::Serialize;
use tracing::debug;

/// Display price for a container at its minimum configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogPrice {
    pub quantity: u32,
    pub regular: f64,
    /// `None` when no tier is reachable at the minimum quantity.
    pub discounted: Option<f64>,
}

impl CatalogPrice {
    pub fn shown(&self) -> f64 {
        self.discounted.unwrap_or(self.regular)
    }
}

pub fn catalog_price(container: &Container) -> CatalogPrice {
    let quantity = container.minimum_quantity();
    let base = container.base_price();
    let regular = base
        + container
            .items
            .iter()
            .map(|item| item.price() * f64::from(item.min_quantity))
            .sum::<f64>();

    let settings = &container.settings;
    if !settings.applies_at(quantity) {
        return CatalogPrice {
            quantity,
            regular,
            discounted: None,
        };
    }

    let percent = settings.percent_for(quantity);
    let items: f64 = container
        .items
        .iter()
        .map(|item| discounted_price(item.price(), percent) * f64::from(item.min_quantity))
        .sum();
    let base = if settings.apply_to_base_price {
        discounted_price(base, percent)
    } else {
        base
    };
    debug!(container = %container.id, quantity, percent, "catalog price discounted");

    CatalogPrice {
        quantity,
        regular,
        discounted: Some(base + items),
    }
}

/// Marks a child item's rendered price as pre-discount when its container discounts.
pub fn price_suffix(price_html: &str, settings: &DiscountSettings, config: &PricingConfig) -> String {
    if !settings.has_discount_data() {
        return price_html.to_string();
    }
    format!("{} <small>{}</small>", price_html, config.suffix_label)
}

/// Tier data handed to the storefront script.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorefrontPriceData {
    pub discount_array: TierSet,
    pub discount_base: &'static str,
}

pub fn storefront_price_data(settings: &DiscountSettings) -> Option<StorefrontPriceData> {
    if settings.mode != DiscountMode::Scaling || settings.tiers.is_empty() {
        return None;
    }
    Some(StorefrontPriceData {
        discount_array: settings.tiers.clone(),
        discount_base: if settings.apply_to_base_price {
            "yes"
        } else {
            "no"
        },
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorefrontParams {
    pub i18n_bulk_discount_subtotal: String,
    pub i18n_bulk_discount: String,
    pub i18n_bulk_discount_value: String,
    pub i18n_bulk_discount_format: String,
}

pub fn storefront_params(config: &PricingConfig) -> StorefrontParams {
    StorefrontParams {
        i18n_bulk_discount_subtotal: config.i18n_subtotal.clone(),
        i18n_bulk_discount: config.i18n_discount.clone(),
        i18n_bulk_discount_value: config.i18n_discount_value.clone(),
        i18n_bulk_discount_format: config.i18n_discount_format.clone(),
    }
}

/// Cache key fragment so price caches split on discount data.
pub fn prices_hash_key(settings: &DiscountSettings) -> String {
    encode_tiers(&settings.tiers)
}
