//! Stored product metadata, pricing configuration and the admin rule editor.

pub mod config;
pub mod editor;
pub mod load;
pub mod save;
pub mod schema;

pub use config::*;
pub use editor::*;
pub use load::*;
pub use save::*;
pub use schema::*;

pub use bulkdisc_core::{
    DiscountMode, DiscountSettings, DiscountTier, LineError, QuantityMax, RuleError, TierSet,
};
