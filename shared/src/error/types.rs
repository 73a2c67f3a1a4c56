//! Pricing error type

use super::codes::ErrorCode;
use thiserror::Error;

/// Errors raised by the pricing core
///
/// Every variant is recoverable; callers render the message and reset the
/// related UI state (e.g. clear an applied promo).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// Promo code lookup missed, failed, or returned an unusable definition
    #[error("Invalid promo code '{code}': {reason}")]
    InvalidPromoCode {
        code: String,
        reason: String,
        error_code: ErrorCode,
    },

    /// Service catalog entry carries no usable price
    #[error("No price available for {0}")]
    MissingPrice(String),

    /// Configuration rejected by validation
    #[error("Invalid pricing configuration: {0}")]
    InvalidConfig(String),
}

impl PricingError {
    /// Promo code did not resolve to a definition
    pub fn promo_not_found(code: impl Into<String>) -> Self {
        Self::InvalidPromoCode {
            code: code.into(),
            reason: "no matching promo".to_string(),
            error_code: ErrorCode::PromoCodeInvalid,
        }
    }

    /// Promo code resolved to a definition that cannot be applied
    pub fn promo_unusable(code: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPromoCode {
            code: code.into(),
            reason: reason.into(),
            error_code: ErrorCode::PromoCodeInvalid,
        }
    }

    /// Promo code was blank
    pub fn promo_empty() -> Self {
        Self::InvalidPromoCode {
            code: String::new(),
            reason: "code is empty".to_string(),
            error_code: ErrorCode::PromoCodeEmpty,
        }
    }

    /// Promo lookup backend rejected
    pub fn promo_lookup_failed(code: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPromoCode {
            code: code.into(),
            reason: reason.into(),
            error_code: ErrorCode::PromoLookupFailed,
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidPromoCode { error_code, .. } => *error_code,
            Self::MissingPrice(_) => ErrorCode::ServicePriceMissing,
            Self::InvalidConfig(_) => ErrorCode::ConfigError,
        }
    }

    /// Whether the message belongs inline next to the user's input
    pub fn is_user_facing(&self) -> bool {
        self.code().is_user_facing()
    }
}

/// Result alias for pricing operations
pub type PricingResult<T> = Result<T, PricingError>;
