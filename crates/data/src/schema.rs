use crate::config::PricingConfig;
use bulkdisc_core::{DiscountMode, DiscountSettings, TierSet};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Stored value of `discount_mode` that selects scaling tiers.
pub const BULK_MODE: &str = "bulk";

/// Discount metadata the host keeps alongside a container product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flat_discount: Option<f64>,
    #[serde(default, skip_serializing_if = "TierSet::is_empty")]
    pub bulk_discount_data: TierSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_to_base_price: Option<bool>,
}

impl ProductMeta {
    pub fn is_bulk(&self) -> bool {
        self.discount_mode.as_deref() == Some(BULK_MODE)
    }

    pub fn mode(&self) -> DiscountMode {
        if self.is_bulk() {
            DiscountMode::Scaling
        } else if self.flat_discount.is_some_and(|percent| percent > 0.0) {
            DiscountMode::Flat
        } else {
            DiscountMode::None
        }
    }

    pub fn to_settings(&self, config: &PricingConfig) -> DiscountSettings {
        let mode = self.mode();
        if mode == DiscountMode::Scaling {
            if let Some((earlier, later)) = self.bulk_discount_data.overlapping_pair() {
                warn!(earlier, later, "stored discount tiers overlap; first match wins");
            }
        }
        DiscountSettings {
            mode,
            flat_percent: self.flat_discount.unwrap_or(0.0),
            tiers: self.bulk_discount_data.clone(),
            apply_to_base_price: self
                .apply_to_base_price
                .unwrap_or(config.apply_to_base_price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulkdisc_core::DiscountTier;

    #[test]
    fn bulk_mode_selects_scaling() {
        let meta = ProductMeta {
            discount_mode: Some(BULK_MODE.to_string()),
            bulk_discount_data: TierSet::from_tiers(vec![DiscountTier::open(4, 10.0)]),
            ..ProductMeta::default()
        };
        let settings = meta.to_settings(&PricingConfig::default());
        assert_eq!(settings.mode, DiscountMode::Scaling);
        assert_eq!(settings.percent_for(4), 10.0);
        assert!(!settings.apply_to_base_price);
    }

    #[test]
    fn product_override_beats_config_for_base_price() {
        let config = PricingConfig {
            apply_to_base_price: true,
            ..PricingConfig::default()
        };
        let meta = ProductMeta {
            apply_to_base_price: Some(false),
            ..ProductMeta::default()
        };
        assert!(!meta.to_settings(&config).apply_to_base_price);
        assert!(ProductMeta::default().to_settings(&config).apply_to_base_price);
    }

    #[test]
    fn unknown_mode_falls_back_to_flat_or_none() {
        let meta = ProductMeta {
            discount_mode: Some("tiered".to_string()),
            flat_discount: Some(5.0),
            ..ProductMeta::default()
        };
        assert_eq!(meta.mode(), DiscountMode::Flat);
        assert_eq!(ProductMeta::default().mode(), DiscountMode::None);
    }

    #[test]
    fn empty_meta_serializes_to_empty_object() {
        let json = serde_json::to_string(&ProductMeta::default()).expect("serialize");
        assert_eq!(json, "{}");
    }
}
