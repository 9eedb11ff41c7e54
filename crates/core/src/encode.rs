use crate::tier::TierSet;
use std::fmt::Write;

/// Renders tiers back into rule text, one newline-terminated line per tier.
pub fn encode_tiers(tiers: &TierSet) -> String {
    let mut out = String::new();
    for tier in tiers {
        let _ = writeln!(out, "{}", tier);
    }
    out
}
