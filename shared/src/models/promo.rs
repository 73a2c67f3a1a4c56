//! Promo Code Model

use serde::{Deserialize, Serialize};

/// Promo discount type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// Percentage of the base amount (10 = 10%)
    Percentage,
    /// Flat amount off the base
    Flat,
}

/// Promo definition as returned by the promo lookup backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoDefinition {
    #[serde(rename = "type")]
    pub discount_type: DiscountType,
    pub value: f64,
}

impl PromoDefinition {
    pub fn percentage(value: f64) -> Self {
        Self {
            discount_type: DiscountType::Percentage,
            value,
        }
    }

    pub fn flat(value: f64) -> Self {
        Self {
            discount_type: DiscountType::Flat,
            value,
        }
    }
}

/// Evaluated promo, ready to feed into a price breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoResult {
    /// Normalized code (trimmed, upper-cased)
    pub code: String,
    #[serde(rename = "type")]
    pub discount_type: DiscountType,
    pub value: f64,
    /// Deduction against the base amount the promo was evaluated for
    pub discount: f64,
}
