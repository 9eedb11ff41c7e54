//! Cart and catalog pricing for mix-and-match containers. Every function takes
//! the container it prices; nothing is carried between calls.

mod cart;
mod catalog;
mod container;
mod error;

pub use cart::*;
pub use catalog::*;
pub use container::*;
pub use error::*;
