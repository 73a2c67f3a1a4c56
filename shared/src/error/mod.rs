//! Error system for the pricing core
//!
//! - [`ErrorCode`]: numeric codes the presentation layer maps to messages
//! - [`PricingError`]: the error enum returned by fallible operations
//!
//! # Example
//!
//! ```
//! use shared::error::{ErrorCode, PricingError};
//!
//! let err = PricingError::promo_not_found("WELCOME");
//! assert_eq!(err.code(), ErrorCode::PromoCodeInvalid);
//! assert!(err.is_user_facing());
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{PricingError, PricingResult};
