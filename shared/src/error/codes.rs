//! Error codes for the pricing core
//!
//! Codes are grouped by range:
//! - 61xx: Promo code errors
//! - 62xx: Catalog errors
//! - 9xxx: Configuration / system errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pricing error code
///
/// Represented as `u16` on the wire so the presentation layer can map codes
/// to localized messages without parsing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 61xx: Promo ====================
    /// Promo code did not resolve to a usable definition
    PromoCodeInvalid = 6101,
    /// Promo code was empty after normalization
    PromoCodeEmpty = 6102,
    /// Promo lookup backend failed
    PromoLookupFailed = 6103,

    // ==================== 62xx: Catalog ====================
    /// Service price missing from the catalog
    ServicePriceMissing = 6201,

    // ==================== 9xxx: System ====================
    /// Configuration rejected at validation
    ConfigError = 9005,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::PromoCodeInvalid => "Promo code is invalid or expired",
            ErrorCode::PromoCodeEmpty => "Promo code is empty",
            ErrorCode::PromoLookupFailed => "Promo code could not be verified",
            ErrorCode::ServicePriceMissing => "Service price is not available",
            ErrorCode::ConfigError => "Invalid pricing configuration",
        }
    }

    /// Whether the UI should show the message inline next to the input
    /// instead of a generic failure toast.
    pub const fn is_user_facing(&self) -> bool {
        matches!(
            self,
            ErrorCode::PromoCodeInvalid
                | ErrorCode::PromoCodeEmpty
                | ErrorCode::PromoLookupFailed
                | ErrorCode::ServicePriceMissing
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Returned when a `u16` does not name a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            6101 => Ok(ErrorCode::PromoCodeInvalid),
            6102 => Ok(ErrorCode::PromoCodeEmpty),
            6103 => Ok(ErrorCode::PromoLookupFailed),
            6201 => Ok(ErrorCode::ServicePriceMissing),
            9005 => Ok(ErrorCode::ConfigError),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}
