//! FileSure Pricing Engine
//!
//! Pure pricing functions for subscription and unlock purchases.
//!
//! # Modules
//!
//! ```text
//! pricing-engine/src/
//! ├── money/       # Decimal conversion and 2-dp rounding
//! ├── pricing/     # Tax breakdown, zone aggregation, quote engine
//! ├── promo/       # Promo code evaluation (injected lookup)
//! ├── campaign/    # Global discount window resolution
//! ├── core/        # Configuration
//! └── utils/       # Logging, date parsing
//! ```
//!
//! # Example
//!
//! ```
//! use pricing_engine::compute_breakdown;
//!
//! let b = compute_breakdown(151200.0, 1.0, 0.0, 0.18);
//! assert_eq!(b.subtotal_price, 128135.59);
//! assert_eq!(b.gst_amount, 23064.41);
//! assert_eq!(b.total_price, 151200.0);
//! ```

pub mod campaign;
pub mod core;
pub mod money;
pub mod pricing;
pub mod promo;
pub mod utils;

// Re-export 公共类型
pub use campaign::{CampaignResolver, resolve_campaign_status};
pub use crate::core::PricingConfig;
pub use money::round2;
pub use pricing::{
    BreakdownInput, PricingEngine, SubscriptionQuote, SubscriptionQuoteResult, aggregate,
    aggregate_company_count, aggregate_trial, calculate_breakdown, compute_breakdown,
    scale_by_duration,
};
pub use promo::{PromoLookup, StaticPromoLookup, apply_promo_code, evaluate_promo};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub use shared::error::{ErrorCode, PricingError, PricingResult};
pub use shared::models::{
    BillingDuration, CampaignStatus, CatalogPlan, DiscountType, PriceBreakdown, PromoDefinition,
    PromoResult, ServiceCatalog, ZonePricing,
};
