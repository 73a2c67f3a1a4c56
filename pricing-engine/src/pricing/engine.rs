//! Pricing Engine
//!
//! Chains the aggregator, campaign resolver, promo evaluator and breakdown
//! calculator into one call per quote.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::error::{PricingError, PricingResult};
use shared::models::{
    BillingDuration, CampaignStatus, CatalogPlan, PriceBreakdown, PromoResult, ServiceCatalog,
};

use super::aggregator::{aggregate, aggregate_company_count, aggregate_trial, scale_by_duration};
use super::breakdown::BreakdownInput;
use crate::campaign::{CampaignResolver, sort_plans_by_priority};
use crate::core::PricingConfig;
use crate::money::{mul, to_decimal, to_f64};
use crate::promo::{PromoLookup, apply_promo_code};

/// Subscription quote request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionQuote {
    /// Plan to price; the highest-priority plan when absent
    #[serde(default)]
    pub plan: Option<String>,
    /// Selected zone/state keys
    pub zones: Vec<String>,
    #[serde(default)]
    pub duration: BillingDuration,
    /// Price the selection at its trial price
    #[serde(default)]
    pub trial: bool,
}

impl SubscriptionQuote {
    pub fn new<S: Into<String>>(zones: impl IntoIterator<Item = S>, duration: BillingDuration) -> Self {
        Self {
            plan: None,
            zones: zones.into_iter().map(Into::into).collect(),
            duration,
            trial: false,
        }
    }

    pub fn with_plan(mut self, plan: impl Into<String>) -> Self {
        self.plan = Some(plan.into());
        self
    }

    pub fn trial(mut self) -> Self {
        self.trial = true;
        self
    }
}

/// Subscription quote result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionQuoteResult {
    /// Plan the selection was priced from
    pub plan: String,
    /// Tax-inclusive catalog price of the selection
    pub base_price: f64,
    /// Approximate companies covered
    pub company_count: u64,
    pub campaign: CampaignStatus,
    pub breakdown: PriceBreakdown,
}

/// Pricing Engine - quotes subscriptions and one-off services
#[derive(Debug, Clone)]
pub struct PricingEngine {
    config: PricingConfig,
    campaigns: CampaignResolver,
}

impl PricingEngine {
    /// Create an engine from a configuration, validating it first
    pub fn new(config: PricingConfig) -> PricingResult<Self> {
        config.validate()?;
        let campaigns = CampaignResolver::from_config(&config)?;
        Ok(Self { config, campaigns })
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Current campaign status across plans
    pub fn campaign_status(&self, now: DateTime<Utc>, plans: &[CatalogPlan]) -> CampaignStatus {
        self.campaigns.resolve(now, plans)
    }

    /// Quote a zone subscription
    ///
    /// `promo` must have been evaluated against the pre-promo subtotal
    /// (`breakdown.original_price` of a quote without promo);
    /// [`Self::quote_subscription_with_code`] does both steps.
    pub fn quote_subscription(
        &self,
        request: &SubscriptionQuote,
        plans: &[CatalogPlan],
        now: DateTime<Utc>,
        promo: Option<&PromoResult>,
    ) -> PricingResult<SubscriptionQuoteResult> {
        let plan = select_plan(plans, request.plan.as_deref())?;
        let campaign = self.campaigns.resolve(now, plans);

        let (base_price, multiplier) = if request.trial {
            let trial = aggregate_trial(&request.zones, &plan.zones).ok_or_else(|| {
                PricingError::MissingPrice(format!("trial of plan '{}'", plan.name))
            })?;
            // Trials are a flat token price, campaigns do not apply
            (trial, 1.0)
        } else {
            (
                aggregate(&request.zones, &plan.zones, request.duration),
                campaign.discount_multiplier(),
            )
        };
        let company_count = aggregate_company_count(&request.zones, &plan.zones);

        let breakdown = BreakdownInput::new(base_price)
            .with_multiplier(multiplier)
            .with_promo(promo.map(|p| p.discount).unwrap_or(0.0))
            .with_tax_rate(self.config.tax_rate)
            .calculate();

        tracing::debug!(
            plan = %plan.name,
            zones = request.zones.len(),
            duration = %request.duration,
            trial = request.trial,
            campaign_active = campaign.is_active,
            total = breakdown.total_price,
            "Subscription quoted"
        );

        Ok(SubscriptionQuoteResult {
            plan: plan.name.clone(),
            base_price,
            company_count,
            campaign,
            breakdown,
        })
    }

    /// Quote a subscription, evaluating a user-entered promo code
    ///
    /// A blank code quotes without promo. An invalid code is an error so the
    /// caller can surface it and clear its applied-promo state.
    pub async fn quote_subscription_with_code<L>(
        &self,
        request: &SubscriptionQuote,
        plans: &[CatalogPlan],
        now: DateTime<Utc>,
        code: &str,
        lookup: &L,
    ) -> PricingResult<(SubscriptionQuoteResult, Option<PromoResult>)>
    where
        L: PromoLookup + ?Sized,
    {
        let quote = self.quote_subscription(request, plans, now, None)?;
        if code.trim().is_empty() {
            return Ok((quote, None));
        }

        let promo = apply_promo_code(code, quote.breakdown.original_price, lookup).await?;
        let quote = self.quote_subscription(request, plans, now, Some(&promo))?;
        Ok((quote, Some(promo)))
    }

    /// Quote a one-time or unlock service for `quantity` units
    pub fn quote_service(
        &self,
        service: &ServiceCatalog,
        quantity: u32,
        promo: Option<&PromoResult>,
    ) -> PricingResult<PriceBreakdown> {
        let unit_price = service.unit_price().ok_or_else(|| {
            PricingError::MissingPrice(format!("{} without a zone selection", service.label()))
        })?;
        let base = to_f64(mul(to_decimal(unit_price), Decimal::from(quantity)));

        let breakdown = BreakdownInput::new(base)
            .with_promo(promo.map(|p| p.discount).unwrap_or(0.0))
            .with_tax_rate(self.config.tax_rate)
            .calculate();

        tracing::debug!(
            service = service.label(),
            quantity,
            total = breakdown.total_price,
            "Service quoted"
        );

        Ok(breakdown)
    }

    /// Quote an amount that is only listed as a monthly rate
    pub fn quote_monthly_rate(
        &self,
        monthly_amount: f64,
        duration: BillingDuration,
        promo: Option<&PromoResult>,
    ) -> PriceBreakdown {
        BreakdownInput::new(scale_by_duration(monthly_amount, duration))
            .with_promo(promo.map(|p| p.discount).unwrap_or(0.0))
            .with_tax_rate(self.config.tax_rate)
            .calculate()
    }
}

/// Pick the named plan, or the highest-priority one
fn select_plan<'a>(plans: &'a [CatalogPlan], name: Option<&str>) -> PricingResult<&'a CatalogPlan> {
    match name {
        Some(name) => plans
            .iter()
            .find(|plan| plan.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| PricingError::MissingPrice(format!("plan '{}'", name))),
        None => {
            let mut ordered: Vec<&CatalogPlan> = plans.iter().collect();
            sort_plans_by_priority(&mut ordered);
            ordered
                .first()
                .copied()
                .ok_or_else(|| PricingError::MissingPrice("subscription without plans".to_string()))
        }
    }
}

#[cfg(test)]
mod tests;
