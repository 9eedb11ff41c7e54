//! Line grammar for rule text:
//!
//! ```text
//! line    := range "|" percent
//! range   := qty | qty "-" qty | qty "+"
//! qty     := digit+
//! ```
//!
//! Every non-empty line yields either a tier or one [`RuleError`]. Bad lines
//! are skipped and reported; the rest of the input is still accepted.

use crate::tier::{DiscountTier, QuantityMax, TierSet};
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleError {
    #[error("expected exactly one '|' separator, found {0}")]
    Format(usize),
    #[error("malformed range: {0}")]
    RangeFormat(String),
    #[error("quantity '{0}' is not a whole number in range")]
    NonNumeric(String),
    #[error("range overlaps existing rule '{0}'")]
    Overlap(DiscountTier),
    #[error("discount '{0}' must be a number between 0 and 100")]
    InvalidDiscount(String),
}

impl RuleError {
    /// Short reason shown to merchants next to the rejected line.
    pub fn notice_reason(&self) -> &'static str {
        match self {
            RuleError::Format(_) | RuleError::RangeFormat(_) | RuleError::NonNumeric(_) => {
                "Invalid format."
            }
            RuleError::Overlap(_) => "Overlapping data.",
            RuleError::InvalidDiscount(_) => "Invalid discount.",
        }
    }
}

/// A rejected line. `line` counts non-empty lines from 1.
#[derive(Debug, Clone, PartialEq)]
pub struct LineError {
    pub line: usize,
    pub text: String,
    pub kind: RuleError,
}

impl LineError {
    pub fn notice(&self) -> String {
        format!("Line {} not saved. {}", self.text, self.kind.notice_reason())
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} '{}': {}", self.line, self.text, self.kind)
    }
}

impl std::error::Error for LineError {}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    pub tiers: TierSet,
    pub errors: Vec<LineError>,
}

impl ParseReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn notices(&self) -> Vec<String> {
        self.errors.iter().map(LineError::notice).collect()
    }
}

pub fn parse_rules(input: &str) -> ParseReport {
    let mut report = ParseReport::default();
    let lines = input.lines().map(str::trim).filter(|line| !line.is_empty());

    for (index, line) in lines.enumerate() {
        match parse_rule_line(line, &report.tiers) {
            Ok(tier) => {
                report.tiers.push(tier);
                debug!(line = index + 1, %tier, "accepted discount rule");
            }
            Err(kind) => {
                warn!(line = index + 1, text = line, error = %kind, "rejected discount rule");
                report.errors.push(LineError {
                    line: index + 1,
                    text: line.to_string(),
                    kind,
                });
            }
        }
    }

    report
}

/// Parses one trimmed line against the tiers already accepted from the same input.
/// Checks run in order: separator, range shape, numbers, overlap, discount.
pub fn parse_rule_line(line: &str, accepted: &TierSet) -> Result<DiscountTier, RuleError> {
    let (range, percent) = split_separator(line)?;
    let (quantity_min, quantity_max) = parse_range(range)?;
    if let Some(existing) = accepted.first_overlap(quantity_min, quantity_max) {
        return Err(RuleError::Overlap(*existing));
    }
    let discount_percent = parse_percent(percent)?;
    Ok(DiscountTier {
        quantity_min,
        quantity_max,
        discount_percent,
    })
}

fn split_separator(line: &str) -> Result<(&str, &str), RuleError> {
    let separators = line.matches('|').count();
    if separators != 1 {
        return Err(RuleError::Format(separators));
    }
    match line.split_once('|') {
        Some((range, percent)) => Ok((range.trim(), percent.trim())),
        None => Err(RuleError::Format(0)),
    }
}

fn parse_range(input: &str) -> Result<(u32, QuantityMax), RuleError> {
    let pieces: Vec<&str> = input.split('-').map(str::trim).collect();
    match pieces.as_slice() {
        [single] => {
            if let Some(open) = single.strip_suffix('+') {
                let min = parse_quantity(open.trim_end())?;
                return Ok((min, QuantityMax::Unbounded));
            }
            let quantity = parse_quantity(single)?;
            Ok((quantity, QuantityMax::Bounded(quantity)))
        }
        [min, max] => {
            let min = parse_quantity(min)?;
            let max = parse_quantity(max)?;
            if min > max {
                return Err(RuleError::RangeFormat(format!(
                    "start {} is greater than end {}",
                    min, max
                )));
            }
            Ok((min, QuantityMax::Bounded(max)))
        }
        _ => Err(RuleError::RangeFormat(format!(
            "'{}' has more than one '-'",
            input
        ))),
    }
}

fn parse_quantity(input: &str) -> Result<u32, RuleError> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RuleError::NonNumeric(input.to_string()));
    }
    input
        .parse::<u32>()
        .map_err(|_| RuleError::NonNumeric(input.to_string()))
}

fn parse_percent(input: &str) -> Result<f64, RuleError> {
    let value: f64 = input
        .parse()
        .map_err(|_| RuleError::InvalidDiscount(input.to_string()))?;
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(RuleError::InvalidDiscount(input.to_string()));
    }
    Ok(value)
}
