use bulkdisc_core::TierSet;
use serde::{Deserialize, Serialize};

/// One row of the admin rule table, kept as the raw strings the merchant typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRow {
    #[serde(default)]
    pub min: String,
    #[serde(default)]
    pub max: String,
    #[serde(default)]
    pub amount: String,
}

impl RuleRow {
    pub fn new(min: impl Into<String>, max: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
            amount: amount.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.min.trim().is_empty() && self.max.trim().is_empty() && self.amount.trim().is_empty()
    }

    /// The row as a line of rule text. A blank max means "or more".
    pub fn to_rule_line(&self) -> Option<String> {
        if self.is_blank() {
            return None;
        }
        let min = self.min.trim();
        let max = self.max.trim();
        let amount = self.amount.trim();
        let line = if max.is_empty() {
            format!("{}+ | {}", min, amount)
        } else if max == min {
            format!("{} | {}", min, amount)
        } else {
            format!("{} - {} | {}", min, max, amount)
        };
        Some(line)
    }
}

/// Rows shown in the product editor. Never empty: there is always at least one row to type into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<RuleRow>", into = "Vec<RuleRow>")]
pub struct RuleTable {
    rows: Vec<RuleRow>,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self {
            rows: vec![RuleRow::default()],
        }
    }
}

impl From<Vec<RuleRow>> for RuleTable {
    fn from(rows: Vec<RuleRow>) -> Self {
        Self::from_rows(rows)
    }
}

impl From<RuleTable> for Vec<RuleRow> {
    fn from(table: RuleTable) -> Self {
        table.rows
    }
}

impl RuleTable {
    pub fn from_rows(rows: Vec<RuleRow>) -> Self {
        if rows.is_empty() {
            return Self::default();
        }
        Self { rows }
    }

    pub fn from_tiers(tiers: &TierSet) -> Self {
        let rows = tiers
            .iter()
            .map(|tier| {
                let max = tier
                    .quantity_max
                    .bounded()
                    .map(|max| max.to_string())
                    .unwrap_or_default();
                RuleRow::new(
                    tier.quantity_min.to_string(),
                    max,
                    tier.discount_percent.to_string(),
                )
            })
            .collect();
        Self::from_rows(rows)
    }

    pub fn rows(&self) -> &[RuleRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(RuleRow::is_blank)
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut RuleRow> {
        self.rows.get_mut(index)
    }

    /// Inserts a blank row below `index`, or at the end when `index` is past it.
    /// Returns the new row's position.
    pub fn add_row_after(&mut self, index: usize) -> usize {
        let at = index.saturating_add(1).min(self.rows.len());
        self.rows.insert(at, RuleRow::default());
        at
    }

    /// Removes the row at `index`. The last remaining row is cleared instead.
    pub fn remove_row(&mut self, index: usize) -> bool {
        if index >= self.rows.len() {
            return false;
        }
        if self.rows.len() == 1 {
            self.rows[0] = RuleRow::default();
        } else {
            self.rows.remove(index);
        }
        true
    }

    pub fn to_rule_text(&self) -> String {
        self.rows
            .iter()
            .filter_map(RuleRow::to_rule_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulkdisc_core::{parse_rules, DiscountTier};

    #[test]
    fn starts_with_one_blank_row() {
        let table = RuleTable::default();
        assert_eq!(table.row_count(), 1);
        assert!(table.is_blank());
        assert_eq!(table.to_rule_text(), "");
    }

    #[test]
    fn rows_render_as_rule_lines() {
        let table = RuleTable::from_rows(vec![
            RuleRow::new("1", "4", "5"),
            RuleRow::new("5", "5", "7.5"),
            RuleRow::default(),
            RuleRow::new("6", "", "10"),
        ]);
        assert_eq!(table.to_rule_text(), "1 - 4 | 5\n5 | 7.5\n6+ | 10");
    }

    #[test]
    fn last_row_is_cleared_not_removed() {
        let mut table = RuleTable::from_rows(vec![RuleRow::new("1", "2", "3")]);
        assert!(table.remove_row(0));
        assert_eq!(table.rows(), &[RuleRow::default()]);
        assert!(!table.remove_row(3));
    }

    #[test]
    fn adds_rows_below_the_clicked_one() {
        let mut table = RuleTable::from_rows(vec![
            RuleRow::new("1", "2", "3"),
            RuleRow::new("4", "5", "6"),
        ]);
        assert_eq!(table.add_row_after(0), 1);
        assert_eq!(table.rows()[1], RuleRow::default());
        assert_eq!(table.add_row_after(99), 3);
        assert_eq!(table.row_count(), 4);
    }

    #[test]
    fn huge_index_appends_instead_of_overflowing() {
        let mut table = RuleTable::default();
        assert_eq!(table.add_row_after(usize::MAX), 1);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn table_text_parses_back_to_the_same_tiers() {
        let tiers = TierSet::from_tiers(vec![
            DiscountTier::exact(2, 5.0),
            DiscountTier::range(3, 9, 10.0),
            DiscountTier::open(10, 12.5),
        ]);
        let table = RuleTable::from_tiers(&tiers);
        let report = parse_rules(&table.to_rule_text());
        assert!(report.is_clean());
        assert_eq!(report.tiers, tiers);
    }

    #[test]
    fn serializes_as_a_plain_row_list() {
        let table = RuleTable::from_rows(vec![RuleRow::new("1", "", "5")]);
        let json = serde_json::to_string(&table).expect("serialize");
        assert_eq!(json, r#"[{"min":"1","max":"","amount":"5"}]"#);
        let empty: RuleTable = serde_json::from_str("[]").expect("deserialize");
        assert_eq!(empty, RuleTable::default());
    }
}
