use crate::tier::{DiscountTier, TierSet};
use tracing::debug;

/// First tier whose range contains `quantity`, scanning in authored order.
pub fn matching_tier(quantity: u32, tiers: &TierSet) -> Option<&DiscountTier> {
    tiers.iter().find(|tier| tier.contains(quantity))
}

/// Discount percent for `quantity`; 0 when nothing matches.
pub fn resolve_discount(quantity: u32, tiers: &TierSet) -> f64 {
    match matching_tier(quantity, tiers) {
        Some(tier) => {
            debug!(quantity, %tier, "resolved discount tier");
            tier.discount_percent
        }
        None => 0.0,
    }
}

/// Whether some tier starts at or below `quantity` and takes something off.
/// Used for "from" prices, where buyers can still add items to reach a tier.
pub fn discount_applies(quantity: u32, tiers: &TierSet) -> bool {
    tiers
        .iter()
        .any(|tier| tier.quantity_min <= quantity && tier.discount_percent > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiers() -> TierSet {
        TierSet::from_tiers(vec![
            DiscountTier::range(2, 4, 5.0),
            DiscountTier::range(5, 9, 10.0),
            DiscountTier::open(10, 20.0),
        ])
    }

    #[test]
    fn picks_the_containing_tier() {
        let tiers = tiers();
        assert_eq!(resolve_discount(1, &tiers), 0.0);
        assert_eq!(resolve_discount(2, &tiers), 5.0);
        assert_eq!(resolve_discount(9, &tiers), 10.0);
        assert_eq!(resolve_discount(u32::MAX, &tiers), 20.0);
    }

    #[test]
    fn empty_set_never_discounts() {
        assert_eq!(resolve_discount(7, &TierSet::new()), 0.0);
        assert!(!discount_applies(7, &TierSet::new()));
    }

    #[test]
    fn first_match_wins_on_unverified_sets() {
        let tiers = TierSet::from_tiers(vec![
            DiscountTier::range(1, 10, 5.0),
            DiscountTier::range(3, 4, 50.0),
        ]);
        assert_eq!(resolve_discount(3, &tiers), 5.0);
    }

    #[test]
    fn applies_once_any_tier_is_reachable() {
        let tiers = tiers();
        assert!(!discount_applies(1, &tiers));
        assert!(discount_applies(3, &tiers));
        let zero = TierSet::from_tiers(vec![DiscountTier::open(1, 0.0)]);
        assert!(!discount_applies(5, &zero));
    }
}
