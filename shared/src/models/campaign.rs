//! Campaign Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Global discount campaign status (全场折扣活动)
///
/// `is_active` holds only when both bounds are known and `start <= now <= end`.
/// `end` is already normalized to the last instant of its calendar day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignStatus {
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<i64>,
    /// Discount percentage (30 = 30%), 0 when the catalog has none
    pub discount: f64,
}

impl CampaignStatus {
    /// Multiplier to apply to tax-inclusive prices while the campaign runs
    pub fn discount_multiplier(&self) -> f64 {
        if self.is_active && self.discount > 0.0 {
            (1.0 - self.discount / 100.0).max(0.0)
        } else {
            1.0
        }
    }

    /// Whole days left until the campaign ends, rounded up
    pub fn days_remaining(&self, now: DateTime<Utc>) -> Option<i64> {
        if !self.is_active {
            return None;
        }
        let end = self.end?;
        let millis = (end - now).num_milliseconds().max(0);
        Some((millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY)
    }
}

/// Milliseconds in one day
pub const MILLIS_PER_DAY: i64 = 86_400_000;
