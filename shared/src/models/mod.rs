//! Data models
//!
//! Shared between the pricing engine and its hosts (serialized as camelCase
//! JSON for the presentation layer).

pub mod breakdown;
pub mod campaign;
pub mod catalog;
pub mod promo;

// Re-exports
pub use breakdown::*;
pub use campaign::*;
pub use catalog::*;
pub use promo::*;
