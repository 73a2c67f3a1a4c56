//! Duration & Zone Aggregator
//!
//! Sums catalog prices over a zone/state selection.
//!
//! Subscription prices are always read from the catalog field for the
//! requested duration (`quarterly`, `annually`), never derived from the
//! monthly rate, because catalog quarterly/annual prices carry their own
//! built-in discounts. [`scale_by_duration`] is only for amounts that exist
//! solely as a monthly rate.

use rust_decimal::prelude::*;
use shared::models::{BillingDuration, ZonePricing};
use std::collections::HashSet;

use crate::money::{add, mul, to_decimal, to_f64};

/// Catalog entries whose zone is in the selection
///
/// Selection keys match case-insensitively. Keys with no catalog entry are
/// skipped; duplicate keys do not select an entry twice.
pub fn selected_entries<'a, S>(
    selected_keys: &[S],
    catalog: &'a [ZonePricing],
) -> impl Iterator<Item = &'a ZonePricing>
where
    S: AsRef<str>,
{
    let keys: HashSet<String> = selected_keys
        .iter()
        .map(|k| k.as_ref().trim().to_lowercase())
        .collect();
    catalog
        .iter()
        .filter(move |entry| keys.contains(&entry.zone.to_lowercase()))
}

/// Total tax-inclusive price of the selection for `duration`
pub fn aggregate<S: AsRef<str>>(
    selected_keys: &[S],
    catalog: &[ZonePricing],
    duration: BillingDuration,
) -> f64 {
    let total: Decimal = selected_entries(selected_keys, catalog)
        .map(|entry| to_decimal(entry.price_for(duration)))
        .fold(Decimal::ZERO, add);
    to_f64(total)
}

/// Approximate number of companies covered by the selection
pub fn aggregate_company_count<S: AsRef<str>>(selected_keys: &[S], catalog: &[ZonePricing]) -> u64 {
    selected_entries(selected_keys, catalog)
        .map(|entry| entry.approx_company_count)
        .fold(0u64, u64::saturating_add)
}

/// Total trial price of the selection
///
/// `None` when no selected zone offers a trial; zones without a trial price
/// contribute nothing.
pub fn aggregate_trial<S: AsRef<str>>(selected_keys: &[S], catalog: &[ZonePricing]) -> Option<f64> {
    let trials: Vec<Decimal> = selected_entries(selected_keys, catalog)
        .filter_map(|entry| entry.trial_price)
        .map(to_decimal)
        .collect();

    if trials.is_empty() {
        None
    } else {
        Some(to_f64(trials.into_iter().fold(Decimal::ZERO, add)))
    }
}

/// Scale a monthly amount to `duration` (×1, ×3, ×12)
pub fn scale_by_duration(monthly_amount: f64, duration: BillingDuration) -> f64 {
    to_f64(mul(to_decimal(monthly_amount), Decimal::from(duration.months())))
}
