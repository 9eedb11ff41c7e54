use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Upper end of a tier's quantity range. `Unbounded` sorts above every bounded value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuantityMax {
    Bounded(u32),
    #[default]
    Unbounded,
}

impl QuantityMax {
    pub fn admits(self, quantity: u32) -> bool {
        match self {
            QuantityMax::Bounded(max) => quantity <= max,
            QuantityMax::Unbounded => true,
        }
    }

    pub fn bounded(self) -> Option<u32> {
        match self {
            QuantityMax::Bounded(max) => Some(max),
            QuantityMax::Unbounded => None,
        }
    }
}

// Stored metadata cannot carry infinity, so the unbounded max is written as "".
impl Serialize for QuantityMax {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            QuantityMax::Bounded(max) => serializer.serialize_u32(*max),
            QuantityMax::Unbounded => serializer.serialize_str(""),
        }
    }
}

impl<'de> Deserialize<'de> for QuantityMax {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u32),
            Text(String),
        }

        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(QuantityMax::Unbounded),
            Some(Raw::Number(max)) => Ok(QuantityMax::Bounded(max)),
            Some(Raw::Text(text)) => {
                let trimmed = text.trim();
                if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("inf") {
                    return Ok(QuantityMax::Unbounded);
                }
                trimmed
                    .parse::<u32>()
                    .map(QuantityMax::Bounded)
                    .map_err(|_| D::Error::custom(format!("invalid quantity_max '{}'", text)))
            }
        }
    }
}

/// One inclusive quantity range and the percentage taken off when a quantity falls in it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountTier {
    pub quantity_min: u32,
    #[serde(default)]
    pub quantity_max: QuantityMax,
    #[serde(rename = "discount")]
    pub discount_percent: f64,
}

impl DiscountTier {
    pub fn exact(quantity: u32, discount_percent: f64) -> Self {
        Self {
            quantity_min: quantity,
            quantity_max: QuantityMax::Bounded(quantity),
            discount_percent,
        }
    }

    pub fn range(quantity_min: u32, quantity_max: u32, discount_percent: f64) -> Self {
        Self {
            quantity_min,
            quantity_max: QuantityMax::Bounded(quantity_max),
            discount_percent,
        }
    }

    pub fn open(quantity_min: u32, discount_percent: f64) -> Self {
        Self {
            quantity_min,
            quantity_max: QuantityMax::Unbounded,
            discount_percent,
        }
    }

    pub fn contains(&self, quantity: u32) -> bool {
        self.quantity_min <= quantity && self.quantity_max.admits(quantity)
    }

    /// Whether a candidate range `[min, max]` collides with this tier: either
    /// candidate endpoint lies inside this tier, or this tier lies inside the candidate.
    pub fn overlaps_range(&self, min: u32, max: QuantityMax) -> bool {
        let min_inside = self.contains(min);
        let max_inside =
            QuantityMax::Bounded(self.quantity_min) <= max && max <= self.quantity_max;
        let swallowed = min <= self.quantity_min && self.quantity_max <= max;
        min_inside || max_inside || swallowed
    }

    pub fn overlaps(&self, other: &DiscountTier) -> bool {
        self.overlaps_range(other.quantity_min, other.quantity_max)
    }
}

/// Renders the tier as one line of rule text.
impl fmt::Display for DiscountTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quantity_max {
            QuantityMax::Unbounded => {
                write!(f, "{}+ | {}", self.quantity_min, self.discount_percent)
            }
            QuantityMax::Bounded(max) if max == self.quantity_min => {
                write!(f, "{} | {}", self.quantity_min, self.discount_percent)
            }
            QuantityMax::Bounded(max) => {
                write!(
                    f,
                    "{} - {} | {}",
                    self.quantity_min, max, self.discount_percent
                )
            }
        }
    }
}

/// Tiers in authored order. Parsing guarantees no two ranges overlap; sets
/// built from stored data can be checked with [`TierSet::overlapping_pair`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierSet(Vec<DiscountTier>);

impl TierSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tiers(tiers: Vec<DiscountTier>) -> Self {
        Self(tiers)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiscountTier> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[DiscountTier] {
        &self.0
    }

    pub fn first_overlap(&self, min: u32, max: QuantityMax) -> Option<&DiscountTier> {
        self.0.iter().find(|tier| tier.overlaps_range(min, max))
    }

    /// Appends without checking overlap; callers screen with [`TierSet::first_overlap`].
    pub(crate) fn push(&mut self, tier: DiscountTier) {
        self.0.push(tier);
    }

    pub fn overlapping_pair(&self) -> Option<(usize, usize)> {
        for (later, tier) in self.0.iter().enumerate() {
            if let Some(earlier) = self.0[..later]
                .iter()
                .position(|existing| existing.overlaps(tier))
            {
                return Some((earlier, later));
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a TierSet {
    type Item = &'a DiscountTier;
    type IntoIter = std::slice::Iter<'a, DiscountTier>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
