use serde::{Deserialize, Serialize};

/// Host-wide pricing options. Every field falls back to its default when
/// missing from the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Also discount the container's own base price, unless a product overrides it.
    pub apply_to_base_price: bool,
    pub suffix_label: String,
    pub i18n_subtotal: String,
    pub i18n_discount: String,
    pub i18n_discount_value: String,
    pub i18n_discount_format: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            apply_to_base_price: false,
            suffix_label: "(before discount)".to_string(),
            i18n_subtotal: "Subtotal: ".to_string(),
            i18n_discount: "Discount: ".to_string(),
            i18n_discount_value: "%v%".to_string(),
            i18n_discount_format: "%s%v".to_string(),
        }
    }
}
