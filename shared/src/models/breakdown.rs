//! Price Breakdown Model

use serde::{Deserialize, Serialize};

/// Tax breakdown of a quoted price
///
/// All fields are money values rounded to 2 decimal places.
/// `total_price == subtotal_price + gst_amount` and
/// `subtotal_price == original_price - promo_discount`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// Tax-exclusive price before any promo deduction
    pub original_price: f64,
    /// Promo deduction actually applied (after clamping)
    pub promo_discount: f64,
    /// Tax-exclusive price after promo
    pub subtotal_price: f64,
    /// GST charged on the subtotal
    pub gst_amount: f64,
    /// Amount payable
    pub total_price: f64,
}

impl PriceBreakdown {
    pub fn has_promo(&self) -> bool {
        self.promo_discount > 0.0
    }
}
