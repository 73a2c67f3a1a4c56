//! Pricing Module
//!
//! Breakdown calculation, zone aggregation and the quote engine.

pub mod aggregator;
pub mod breakdown;
mod engine;

pub use aggregator::*;
pub use breakdown::*;
pub use engine::*;
