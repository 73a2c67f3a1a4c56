use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use shared::error::{PricingError, PricingResult};

/// Default GST rate (18%)
pub const DEFAULT_TAX_RATE: f64 = 0.18;
/// Zone key of the nationwide tier carrying campaign data
pub const DEFAULT_ZONE: &str = "All";
/// Business timezone used to interpret campaign dates
pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";

/// 定价配置 - pricing engine configuration
///
/// | Field | Default | Meaning |
/// |-------|---------|---------|
/// | `tax_rate` | 0.18 | GST rate embedded in catalog prices |
/// | `default_zone` | All | Zone entry consulted for campaign windows |
/// | `timezone` | Asia/Kolkata | Timezone for date-only campaign bounds |
///
/// The core reads no environment variables; hosts deserialize this from
/// their own settings or build it with the `with_*` overrides.
///
/// # Example
///
/// ```
/// use pricing_engine::PricingConfig;
///
/// let config = PricingConfig::default().with_tax_rate(0.12);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingConfig {
    /// Tax rate as a fraction (0.18 = 18%)
    pub tax_rate: f64,
    /// Default zone identifier
    pub default_zone: String,
    /// IANA timezone name
    pub timezone: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            default_zone: DEFAULT_ZONE.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

impl PricingConfig {
    pub fn with_tax_rate(mut self, tax_rate: f64) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    pub fn with_default_zone(mut self, zone: impl Into<String>) -> Self {
        self.default_zone = zone.into();
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Parsed business timezone
    pub fn tz(&self) -> PricingResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| PricingError::config(format!("unknown timezone '{}'", self.timezone)))
    }

    /// Check the configuration before handing it to the engine
    pub fn validate(&self) -> PricingResult<()> {
        if !self.tax_rate.is_finite() || !(0.0..=1.0).contains(&self.tax_rate) {
            return Err(PricingError::config(format!(
                "tax_rate must be within [0, 1], got {}",
                self.tax_rate
            )));
        }
        if self.default_zone.trim().is_empty() {
            return Err(PricingError::config("default_zone must not be empty"));
        }
        self.tz()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PricingConfig::default();
        assert_eq!(config.tax_rate, 0.18);
        assert_eq!(config.default_zone, "All");
        assert_eq!(config.tz().unwrap(), chrono_tz::Asia::Kolkata);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_tax_rate() {
        assert!(PricingConfig::default().with_tax_rate(-0.1).validate().is_err());
        assert!(PricingConfig::default().with_tax_rate(1.5).validate().is_err());
        assert!(PricingConfig::default().with_tax_rate(f64::NAN).validate().is_err());
        assert!(PricingConfig::default().with_tax_rate(0.0).validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_timezone_and_zone() {
        let err = PricingConfig::default()
            .with_timezone("Mars/Olympus")
            .validate()
            .unwrap_err();
        assert!(matches!(err, PricingError::InvalidConfig(_)));

        assert!(PricingConfig::default().with_default_zone("  ").validate().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: PricingConfig = serde_json::from_str(r#"{"taxRate":0.05}"#).unwrap();
        assert_eq!(config.tax_rate, 0.05);
        assert_eq!(config.default_zone, "All");
        assert_eq!(config.timezone, "Asia/Kolkata");
    }
}
