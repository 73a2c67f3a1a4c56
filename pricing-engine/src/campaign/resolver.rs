//! Campaign Window Resolver
//!
//! Determines whether a catalog-configured global discount is running.
//!
//! Plans are consulted in priority order (higher first). From each plan only
//! the default zone entry ("All") is read. Each of start, end and discount is
//! taken from the first entry that defines it, so a secondary plan can fill
//! in a bound the preferred plan leaves out.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use shared::error::PricingResult;
use shared::models::{CampaignStatus, CatalogPlan, ZonePricing};

use crate::core::PricingConfig;
use crate::utils::time::{ceil_days, end_of_day, parse_instant};

/// Resolves campaign windows for one business timezone and default zone
#[derive(Debug, Clone)]
pub struct CampaignResolver {
    default_zone: String,
    tz: Tz,
}

impl CampaignResolver {
    pub fn new(default_zone: impl Into<String>, tz: Tz) -> Self {
        Self {
            default_zone: default_zone.into(),
            tz,
        }
    }

    pub fn from_config(config: &PricingConfig) -> PricingResult<Self> {
        Ok(Self::new(config.default_zone.clone(), config.tz()?))
    }

    /// Campaign status at `now` across candidate plans
    pub fn resolve(&self, now: DateTime<Utc>, plans: &[CatalogPlan]) -> CampaignStatus {
        let mut ordered: Vec<&CatalogPlan> = plans.iter().collect();
        sort_plans_by_priority(&mut ordered);

        let entries: Vec<&ZonePricing> = ordered
            .iter()
            .filter_map(|plan| plan.zone(&self.default_zone))
            .collect();

        self.resolve_ordered(now, &entries)
    }

    /// Campaign status at `now` for the entries of a single plan
    pub fn resolve_entries(&self, now: DateTime<Utc>, entries: &[ZonePricing]) -> CampaignStatus {
        let entries: Vec<&ZonePricing> = entries
            .iter()
            .filter(|entry| entry.zone.eq_ignore_ascii_case(&self.default_zone))
            .collect();

        self.resolve_ordered(now, &entries)
    }

    fn resolve_ordered(&self, now: DateTime<Utc>, entries: &[&ZonePricing]) -> CampaignStatus {
        let start = entries.iter().find_map(|entry| {
            entry
                .global_discount_start_date
                .as_deref()
                .and_then(|raw| parse_instant(raw, self.tz))
        });
        let end = entries
            .iter()
            .find_map(|entry| {
                entry
                    .global_discount_end_date
                    .as_deref()
                    .and_then(|raw| parse_instant(raw, self.tz))
            })
            .map(|end| end_of_day(end, self.tz));
        let discount = entries
            .iter()
            .find_map(|entry| entry.global_discount.filter(|d| d.is_finite() && *d >= 0.0))
            .unwrap_or(0.0);

        let (is_active, duration_days) = match (start, end) {
            (Some(start), Some(end)) => (start <= now && now <= end, Some(ceil_days(start, end))),
            _ => (false, None),
        };

        tracing::debug!(
            is_active,
            discount,
            start = ?start,
            end = ?end,
            "Campaign window resolved"
        );

        CampaignStatus {
            is_active,
            start,
            end,
            duration_days,
            discount,
        }
    }
}

/// Sort plans by priority (higher priority first, stable)
pub fn sort_plans_by_priority(plans: &mut [&CatalogPlan]) {
    plans.sort_by(|a, b| b.priority.cmp(&a.priority));
}

/// Resolve the campaign status with the configured zone and timezone
///
/// Never fails: an unparseable timezone falls back to UTC.
pub fn resolve_campaign_status(
    now: DateTime<Utc>,
    plans: &[CatalogPlan],
    config: &PricingConfig,
) -> CampaignStatus {
    let tz = config.tz().unwrap_or_else(|e| {
        tracing::warn!("{}, resolving campaign in UTC", e);
        Tz::UTC
    });
    CampaignResolver::new(config.default_zone.clone(), tz).resolve(now, plans)
}
