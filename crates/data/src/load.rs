use crate::config::PricingConfig;
use crate::schema::ProductMeta;
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const PRICING_CONFIG_FILE: &str = "pricing.json";

pub fn load_pricing_config(path: &Path) -> anyhow::Result<PricingConfig> {
    load_json(path)
}

/// Reads `pricing.json` from `dir`, or the defaults when the file is absent.
pub fn load_pricing_config_in(dir: &Path) -> anyhow::Result<PricingConfig> {
    let path = dir.join(PRICING_CONFIG_FILE);
    if !path.exists() {
        debug!(path = %path.display(), "no pricing config, using defaults");
        return Ok(PricingConfig::default());
    }
    load_pricing_config(&path)
}

pub fn load_product_meta(path: &Path) -> anyhow::Result<ProductMeta> {
    load_json(path)
}

pub fn write_product_meta(path: &Path, meta: &ProductMeta) -> anyhow::Result<()> {
    write_json(path, meta)
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let body = serde_json::to_string_pretty(value)
        .with_context(|| format!("serialize {}", path.display()))?;
    fs::write(path, body).with_context(|| format!("write {}", path.display()))
}
