//! Promo Code Module
//!
//! Promo evaluation against an injected lookup strategy.

mod evaluator;
mod lookup;

pub use evaluator::*;
pub use lookup::*;
