//! Domain types for secret recovery
//!
//! This module contains validated types consumed by the recovery engine:
//! - [`Share`] - One `(x, y)` point, genuine or decoy
//! - [`ShareSet`] - Shares sorted by `x`, with unique positive `x` values
//! - [`Threshold`] - Number of genuine shares defining the polynomial (1..)

mod share;
mod share_set;
mod threshold;

pub use share::Share;
pub use share_set::ShareSet;
pub use threshold::Threshold;

