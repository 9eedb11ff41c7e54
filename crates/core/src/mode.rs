use crate::resolve::{discount_applies, resolve_discount};
use crate::tier::TierSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountMode {
    #[default]
    None,
    Flat,
    Scaling,
}

/// Discount configuration for one container product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscountSettings {
    pub mode: DiscountMode,
    #[serde(default)]
    pub flat_percent: f64,
    #[serde(default)]
    pub tiers: TierSet,
    #[serde(default)]
    pub apply_to_base_price: bool,
}

impl DiscountSettings {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn flat(percent: f64) -> Self {
        Self {
            mode: DiscountMode::Flat,
            flat_percent: percent,
            ..Self::default()
        }
    }

    pub fn scaling(tiers: TierSet) -> Self {
        Self {
            mode: DiscountMode::Scaling,
            tiers,
            ..Self::default()
        }
    }

    pub fn with_base_price(mut self, apply: bool) -> Self {
        self.apply_to_base_price = apply;
        self
    }

    pub fn percent_for(&self, quantity: u32) -> f64 {
        match self.mode {
            DiscountMode::None => 0.0,
            DiscountMode::Flat => self.flat_percent,
            DiscountMode::Scaling => resolve_discount(quantity, &self.tiers),
        }
    }

    /// Whether there is anything configured that could take money off.
    pub fn has_discount_data(&self) -> bool {
        match self.mode {
            DiscountMode::None => false,
            DiscountMode::Flat => self.flat_percent > 0.0,
            DiscountMode::Scaling => !self.tiers.is_empty(),
        }
    }

    pub fn applies_at(&self, quantity: u32) -> bool {
        match self.mode {
            DiscountMode::None => false,
            DiscountMode::Flat => self.flat_percent > 0.0,
            DiscountMode::Scaling => discount_applies(quantity, &self.tiers),
        }
    }
}
