//! Catalog Model
//!
//! Zone/state pricing records and service catalog entries as delivered by the
//! backend. The backend shape is loose (numbers as strings, missing fields,
//! alias keys), so zone records are parsed leniently: a malformed field
//! degrades to `0` / `None` and is logged, the rest of the record survives.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Billing duration for subscriptions (订阅周期)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum BillingDuration {
    #[default]
    Monthly,
    Quarterly,
    Annually,
}

impl BillingDuration {
    /// Number of months covered by one billing period
    pub const fn months(&self) -> u32 {
        match self {
            BillingDuration::Monthly => 1,
            BillingDuration::Quarterly => 3,
            BillingDuration::Annually => 12,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            BillingDuration::Monthly => "monthly",
            BillingDuration::Quarterly => "quarterly",
            BillingDuration::Annually => "annually",
        }
    }

    /// Parse a duration label. Unknown labels fall back to monthly.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "quarterly" | "quarter" => BillingDuration::Quarterly,
            "annually" | "annual" | "yearly" | "year" => BillingDuration::Annually,
            _ => BillingDuration::Monthly,
        }
    }
}

impl From<String> for BillingDuration {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<&str> for BillingDuration {
    fn from(value: &str) -> Self {
        Self::from_label(value)
    }
}

impl std::fmt::Display for BillingDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Zone pricing entry (区域定价)
///
/// One geographic tier of a subscription plan. Read-only input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZonePricing {
    /// Zone or state identifier ("All" for the nationwide tier)
    pub zone: String,
    /// Tax-inclusive price per duration
    pub monthly: f64,
    pub quarterly: f64,
    pub annually: f64,
    /// Approximate number of companies covered by this zone
    pub approx_company_count: u64,
    pub trial_price: Option<f64>,
    /// Global discount percentage (30 = 30%)
    pub global_discount: Option<f64>,
    /// Raw campaign bounds, parsed by the campaign resolver
    pub global_discount_start_date: Option<String>,
    pub global_discount_end_date: Option<String>,
}

impl ZonePricing {
    pub fn new(zone: impl Into<String>, monthly: f64, quarterly: f64, annually: f64) -> Self {
        Self {
            zone: zone.into(),
            monthly,
            quarterly,
            annually,
            ..Default::default()
        }
    }

    /// Listed price for the given duration
    pub fn price_for(&self, duration: BillingDuration) -> f64 {
        match duration {
            BillingDuration::Monthly => self.monthly,
            BillingDuration::Quarterly => self.quarterly,
            BillingDuration::Annually => self.annually,
        }
    }

    /// Whether any campaign field is present on this entry
    pub fn has_campaign(&self) -> bool {
        self.global_discount.is_some()
            || self.global_discount_start_date.is_some()
            || self.global_discount_end_date.is_some()
    }

    /// Build an entry from a loosely shaped JSON record.
    ///
    /// Never fails: non-object input yields an empty entry, malformed fields
    /// degrade to `0` / `None`.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            tracing::warn!("Catalog entry is not an object, ignoring: {}", value);
            return Self::default();
        };

        let zone = first_string(obj, &["zone", "state", "zoneName"]).unwrap_or_default();

        let price = |key: &str| number_field(obj, key, &zone).unwrap_or(0.0);
        let approx_company_count = ["approxCompanyCount", "approxCompanies"]
            .iter()
            .find_map(|key| number_field(obj, key, &zone))
            .filter(|n| *n >= 0.0)
            .map(|n| n.round() as u64)
            .unwrap_or(0);

        Self {
            monthly: price("monthly"),
            quarterly: price("quarterly"),
            annually: price("annually"),
            approx_company_count,
            trial_price: number_field(obj, "trialPrice", &zone),
            global_discount: number_field(obj, "globalDiscount", &zone),
            global_discount_start_date: date_field(obj, "globalDiscountStartDate"),
            global_discount_end_date: date_field(obj, "globalDiscountEndDate"),
            zone,
        }
    }
}

impl<'de> Deserialize<'de> for ZonePricing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

fn first_string(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match obj.get(*key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Read a numeric field that may arrive as a number or a numeric string
fn number_field(obj: &Map<String, Value>, key: &str, zone: &str) -> Option<f64> {
    let parsed = match obj.get(key)? {
        Value::Null => return None,
        Value::Number(n) => n.as_f64(),
        Value::String(s) if s.trim().is_empty() => return None,
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(n) if n.is_finite() => Some(n),
        _ => {
            tracing::warn!(
                "Malformed catalog field '{}' on zone '{}': {:?}, treating as missing",
                key,
                zone,
                obj.get(key)
            );
            None
        }
    }
}

/// Read a date field; epoch millis arrive as numbers and are kept as strings
fn date_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A subscription plan: a named, prioritized set of zone entries
///
/// When several plans carry campaign data the one with the higher
/// `priority` is consulted first (e.g. the combined plan before a
/// single-channel plan).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPlan {
    pub name: String,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub zones: Vec<ZonePricing>,
}

impl CatalogPlan {
    pub fn new(name: impl Into<String>, priority: i32, zones: Vec<ZonePricing>) -> Self {
        Self {
            name: name.into(),
            priority,
            zones,
        }
    }

    /// Find a zone entry by identifier (case-insensitive)
    pub fn zone(&self, key: &str) -> Option<&ZonePricing> {
        self.zones.iter().find(|z| z.zone.eq_ignore_ascii_case(key))
    }
}

/// Service catalog entry, tagged by service type
///
/// Built at the collaborator boundary so the pricing core never sees an
/// untyped record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "serviceType",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum ServiceCatalog {
    /// Zone-priced subscription
    Subscription { plans: Vec<CatalogPlan> },
    /// One-off report or service at a fixed tax-inclusive price
    OneTime { price: f64 },
    /// Director contact unlock, priced per director
    DirectorUnlock { unit_price: f64 },
    /// Company contact unlock, priced per company
    CompanyUnlock { unit_price: f64 },
    /// VPD (verified phone data) unlock, priced per record
    VpdUnlock { unit_price: f64 },
}

impl ServiceCatalog {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceCatalog::Subscription { .. } => "subscription",
            ServiceCatalog::OneTime { .. } => "oneTime",
            ServiceCatalog::DirectorUnlock { .. } => "directorUnlock",
            ServiceCatalog::CompanyUnlock { .. } => "companyUnlock",
            ServiceCatalog::VpdUnlock { .. } => "vpdUnlock",
        }
    }

    /// Tax-inclusive price of one unit; `None` for subscriptions, which are
    /// priced per zone selection.
    pub fn unit_price(&self) -> Option<f64> {
        match self {
            ServiceCatalog::Subscription { .. } => None,
            ServiceCatalog::OneTime { price } => Some(*price),
            ServiceCatalog::DirectorUnlock { unit_price }
            | ServiceCatalog::CompanyUnlock { unit_price }
            | ServiceCatalog::VpdUnlock { unit_price } => Some(*unit_price),
        }
    }
}
