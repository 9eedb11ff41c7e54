//! Bulk discount rules for mix-and-match containers. Keep this crate free of IO and host concerns.

pub mod encode;
pub mod mode;
pub mod parse;
pub mod price;
pub mod resolve;
pub mod tier;

pub use encode::*;
pub use mode::*;
pub use parse::*;
pub use price::*;
pub use resolve::*;
pub use tier::*;
