//! Tax Breakdown Calculator
//!
//! Splits a tax-inclusive catalog price into subtotal and GST, with an
//! optional discount multiplier (campaign) and a flat promo deduction.
//!
//! Calculation order:
//! 1. `item = base * multiplier`
//! 2. back out embedded tax: `subtotal = item - item / (1 + rate) * rate`
//! 3. deduct promo from the tax-exclusive subtotal
//! 4. charge tax forward on the discounted subtotal
//!
//! Intermediates stay unrounded; each output is rounded to 2 decimal places
//! only at the end. Without a promo the total therefore returns to the
//! inclusive price, and `total == subtotal + gst` holds within one cent.

use rust_decimal::prelude::*;
use shared::models::PriceBreakdown;

use crate::core::DEFAULT_TAX_RATE;
use crate::money::{add, mul, sub, to_decimal, to_f64};

/// Breakdown calculation input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakdownInput {
    /// Tax-inclusive base price
    pub base_inclusive: f64,
    /// Multiplier applied to the inclusive price (0.7 = 30% off)
    pub discount_multiplier: f64,
    /// Flat promo deduction against the tax-exclusive subtotal
    pub promo_discount: f64,
    /// Tax rate as a fraction
    pub tax_rate: f64,
}

impl Default for BreakdownInput {
    fn default() -> Self {
        Self {
            base_inclusive: 0.0,
            discount_multiplier: 1.0,
            promo_discount: 0.0,
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

impl BreakdownInput {
    pub fn new(base_inclusive: f64) -> Self {
        Self {
            base_inclusive,
            ..Default::default()
        }
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.discount_multiplier = multiplier;
        self
    }

    pub fn with_promo(mut self, promo_discount: f64) -> Self {
        self.promo_discount = promo_discount;
        self
    }

    pub fn with_tax_rate(mut self, tax_rate: f64) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    pub fn calculate(&self) -> PriceBreakdown {
        calculate_breakdown(self)
    }
}

/// Compute a price breakdown from positional arguments
///
/// See [`calculate_breakdown`].
pub fn compute_breakdown(
    base_inclusive: f64,
    discount_multiplier: f64,
    promo_flat_discount: f64,
    tax_rate: f64,
) -> PriceBreakdown {
    calculate_breakdown(&BreakdownInput {
        base_inclusive,
        discount_multiplier,
        promo_discount: promo_flat_discount,
        tax_rate,
    })
}

/// Compute a price breakdown
///
/// Pure and total. The promo deduction is capped at the tax-exclusive
/// subtotal so the subtotal never goes below zero; a subtotal that is already
/// negative (negative base price) is passed through unclamped.
pub fn calculate_breakdown(input: &BreakdownInput) -> PriceBreakdown {
    let rate = to_decimal(input.tax_rate);

    // Step 1: apply the discount multiplier to the inclusive price
    let item_inc_tax = mul(
        to_decimal(input.base_inclusive),
        to_decimal(input.discount_multiplier),
    );

    // Step 2: back out the embedded tax
    let (subtotal_exc_tax, _) = split_inclusive(item_inc_tax, rate);

    // Step 3: flat promo against the tax-exclusive subtotal
    let promo = to_decimal(input.promo_discount);
    let applied_promo = if subtotal_exc_tax >= Decimal::ZERO {
        promo.min(subtotal_exc_tax)
    } else {
        promo
    };
    let discounted = sub(subtotal_exc_tax, applied_promo);

    // Step 4: charge tax forward on the discounted subtotal
    let gst = mul(discounted, rate);
    let total = add(discounted, gst);

    PriceBreakdown {
        original_price: to_f64(subtotal_exc_tax),
        promo_discount: to_f64(applied_promo),
        subtotal_price: to_f64(discounted),
        gst_amount: to_f64(gst),
        total_price: to_f64(total),
    }
}

/// Split a tax-inclusive amount into `(net, tax)` (unrounded)
pub fn split_inclusive(amount_inc_tax: Decimal, rate: Decimal) -> (Decimal, Decimal) {
    let divisor = add(Decimal::ONE, rate);
    let tax = match amount_inc_tax.checked_div(divisor) {
        Some(net) => mul(net, rate),
        None => Decimal::ZERO,
    };
    (sub(amount_inc_tax, tax), tax)
}

/// Tax embedded in an inclusive price, rounded
pub fn tax_portion_of_inclusive(amount_inc_tax: f64, tax_rate: f64) -> f64 {
    let (_, tax) = split_inclusive(to_decimal(amount_inc_tax), to_decimal(tax_rate));
    to_f64(tax)
}

/// Gross up a tax-exclusive amount, rounded
pub fn tax_exclusive_to_inclusive(amount_exc_tax: f64, tax_rate: f64) -> f64 {
    let amount = to_decimal(amount_exc_tax);
    to_f64(add(amount, mul(amount, to_decimal(tax_rate))))
}
