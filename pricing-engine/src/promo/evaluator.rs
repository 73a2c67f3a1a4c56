//! Promo Code Evaluator
//!
//! Maps a user-entered code to a discount via the injected lookup and
//! computes the deduction against a base amount.
//! - Percentage: `discount = round2(base * value / 100)`
//! - Flat: `discount = min(value, base)`
//!
//! Discounts never exceed the base amount. Storing or clearing the applied
//! promo is the caller's job.

use rust_decimal::prelude::*;
use shared::error::{PricingError, PricingResult};
use shared::models::{DiscountType, PromoDefinition, PromoResult};

use super::lookup::{PromoLookup, normalize_code};
use crate::money::{mul, round_money, to_decimal, to_f64};

/// Look up `code` and evaluate it against `base_amount`
///
/// Fails with [`PricingError::InvalidPromoCode`] when the code is blank, the
/// lookup finds nothing, the lookup errors, or the definition is unusable.
pub async fn apply_promo_code<L>(
    code: &str,
    base_amount: f64,
    lookup: &L,
) -> PricingResult<PromoResult>
where
    L: PromoLookup + ?Sized,
{
    let code = normalize_code(code);
    if code.is_empty() {
        return Err(PricingError::promo_empty());
    }

    let definition = match lookup.lookup(&code).await {
        Ok(Some(definition)) => definition,
        Ok(None) => {
            tracing::debug!("Promo code {} not found", code);
            return Err(PricingError::promo_not_found(code));
        }
        Err(e) => {
            tracing::warn!("Promo lookup failed for {}: {:#}", code, e);
            return Err(PricingError::promo_lookup_failed(code, e.to_string()));
        }
    };

    evaluate_promo(&code, &definition, base_amount)
}

/// Compute the deduction of a resolved promo definition
pub fn evaluate_promo(
    code: &str,
    definition: &PromoDefinition,
    base_amount: f64,
) -> PricingResult<PromoResult> {
    if !definition.value.is_finite() || definition.value < 0.0 {
        return Err(PricingError::promo_unusable(
            code,
            format!("promo value must be a non-negative number, got {}", definition.value),
        ));
    }

    let base = to_decimal(base_amount).max(Decimal::ZERO);
    let value = to_decimal(definition.value);

    let raw = match definition.discount_type {
        DiscountType::Percentage => mul(base, value) / Decimal::ONE_HUNDRED,
        DiscountType::Flat => value,
    };
    let discount = round_money(raw.min(base));

    tracing::debug!(
        code = %code,
        kind = ?definition.discount_type,
        value = definition.value,
        discount = %discount,
        "Promo evaluated"
    );

    Ok(PromoResult {
        code: code.to_string(),
        discount_type: definition.discount_type,
        value: definition.value,
        discount: to_f64(discount),
    })
}
