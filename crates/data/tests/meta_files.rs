use bulkdisc_data::{
    load_pricing_config, load_pricing_config_in, load_product_meta, save_product_meta,
    write_product_meta, DiscountMode, DiscountTier, PricingConfig, ProductMeta, RuleRow, RuleTable,
    SaveForm, TierSet, PRICING_CONFIG_FILE,
};
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn missing_config_uses_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = load_pricing_config_in(dir.path()).expect("load config");
    assert_eq!(config, PricingConfig::default());
}

#[test]
fn partial_config_keeps_other_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(PRICING_CONFIG_FILE);
    fs::write(
        &path,
        r#"{ "apply_to_base_price": true, "suffix_label": "(list price)" }"#,
    )
    .expect("write config");
    let config = load_pricing_config(&path).expect("load config");
    assert!(config.apply_to_base_price);
    assert_eq!(config.suffix_label, "(list price)");
    assert_eq!(config.i18n_subtotal, "Subtotal: ");
}

#[test]
fn broken_config_names_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(PRICING_CONFIG_FILE);
    fs::write(&path, "{ not json").expect("write config");
    let err = load_pricing_config(&path).expect_err("broken config must fail");
    assert!(format!("{:#}", err).contains("parse"));
    assert!(format!("{:#}", err).contains(PRICING_CONFIG_FILE));
}

#[test]
fn stored_meta_survives_a_write_and_read() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("product-42.json");
    let meta = ProductMeta {
        discount_mode: Some("bulk".to_string()),
        bulk_discount_data: TierSet::from_tiers(vec![
            DiscountTier::range(2, 4, 5.0),
            DiscountTier::open(5, 10.0),
        ]),
        ..ProductMeta::default()
    };
    write_product_meta(&path, &meta).expect("write meta");
    let raw = fs::read_to_string(&path).expect("read meta");
    assert!(raw.contains(r#""quantity_max": """#));
    assert_eq!(load_product_meta(&path).expect("load meta"), meta);
}

#[test]
fn reads_meta_written_by_the_host() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("product-7.json");
    fs::write(
        &path,
        indoc! {r#"
            {
              "discount_mode": "bulk",
              "bulk_discount_data": [
                { "quantity_min": 3, "quantity_max": 5, "discount": 10 },
                { "quantity_min": 6, "quantity_max": "", "discount": 20.5 }
              ]
            }
        "#},
    )
    .expect("write meta");
    let meta = load_product_meta(&path).expect("load meta");
    let settings = meta.to_settings(&PricingConfig::default());
    assert_eq!(settings.mode, DiscountMode::Scaling);
    assert_eq!(settings.percent_for(4), 10.0);
    assert_eq!(settings.percent_for(600), 20.5);
}

#[test]
fn editor_rows_save_through_the_parser() {
    let mut table = RuleTable::default();
    if let Some(row) = table.row_mut(0) {
        *row = RuleRow::new("1", "5", "10");
    }
    let at = table.add_row_after(0);
    if let Some(row) = table.row_mut(at) {
        *row = RuleRow::new("4", "", "20");
    }
    let form = SaveForm {
        discount_mode: Some("bulk".to_string()),
        flat_discount: None,
        bulk_discount_data: table.to_rule_text(),
    };
    let outcome = save_product_meta(&form, ProductMeta::default());
    assert_eq!(
        outcome.meta.bulk_discount_data.as_slice(),
        &[DiscountTier::range(1, 5, 10.0)]
    );
    assert_eq!(
        outcome.notices(),
        vec!["Line 4+ | 20 not saved. Overlapping data.".to_string()]
    );
}
