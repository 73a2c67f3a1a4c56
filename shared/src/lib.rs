//! Shared types for the FileSure pricing core
//!
//! Catalog records, pricing outputs and the error type used by
//! `pricing-engine` and by the hosts that feed it catalog data.

pub mod error;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ErrorCode, PricingError, PricingResult};
pub use models::{
    BillingDuration, CampaignStatus, CatalogPlan, DiscountType, PriceBreakdown, PromoDefinition,
    PromoResult, ServiceCatalog, ZonePricing,
};
