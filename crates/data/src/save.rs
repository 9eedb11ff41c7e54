use crate::schema::{ProductMeta, BULK_MODE};
use bulkdisc_core::{parse_rules, LineError, TierSet};
use serde::Deserialize;
use tracing::{debug, warn};

/// Fields posted by the product editor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveForm {
    #[serde(default)]
    pub discount_mode: Option<String>,
    #[serde(default)]
    pub flat_discount: Option<f64>,
    #[serde(default)]
    pub bulk_discount_data: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    pub meta: ProductMeta,
    pub errors: Vec<LineError>,
}

impl SaveOutcome {
    pub fn notices(&self) -> Vec<String> {
        self.errors.iter().map(LineError::notice).collect()
    }
}

/// Applies a posted form to existing metadata. Rejected rule lines are
/// dropped and returned for display; the accepted ones replace the stored tiers.
pub fn save_product_meta(form: &SaveForm, meta: ProductMeta) -> SaveOutcome {
    let mut meta = meta;
    meta.discount_mode = form
        .discount_mode
        .as_deref()
        .map(str::trim)
        .filter(|mode| *mode == BULK_MODE)
        .map(str::to_string);

    meta.flat_discount = match form.flat_discount {
        Some(percent) if percent.is_finite() && (0.0..=100.0).contains(&percent) => Some(percent),
        Some(percent) => {
            warn!(percent, "ignoring out of range flat discount");
            meta.flat_discount
        }
        None => None,
    };

    let rules = form.bulk_discount_data.trim();
    if rules.is_empty() {
        meta.bulk_discount_data = TierSet::new();
        return SaveOutcome {
            meta,
            errors: Vec::new(),
        };
    }

    let report = parse_rules(rules);
    debug!(
        accepted = report.tiers.len(),
        rejected = report.errors.len(),
        "parsed bulk discount rules"
    );
    meta.bulk_discount_data = report.tiers;
    SaveOutcome {
        meta,
        errors: report.errors,
    }
}
