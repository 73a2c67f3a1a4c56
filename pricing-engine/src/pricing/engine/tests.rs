use super::*;
use crate::promo::StaticPromoLookup;
use chrono::TimeZone;
use shared::error::ErrorCode;
use shared::models::{PromoDefinition, ZonePricing};

fn zone(name: &str, monthly: f64, quarterly: f64, annually: f64, companies: u64) -> ZonePricing {
    let mut entry = ZonePricing::new(name, monthly, quarterly, annually);
    entry.approx_company_count = companies;
    entry
}

fn plans() -> Vec<CatalogPlan> {
    let mut all = zone("All", 1180.0, 3186.0, 11800.0, 2_500_000);
    all.global_discount = Some(30.0);
    all.global_discount_start_date = Some("2025-01-01".to_string());
    all.global_discount_end_date = Some("2025-01-31".to_string());

    let mut north = zone("North", 590.0, 1593.0, 5900.0, 900_000);
    north.trial_price = Some(1.18);
    let south = zone("South", 472.0, 1274.4, 4720.0, 700_000);

    vec![
        CatalogPlan::new("email", 1, vec![zone("All", 236.0, 637.2, 2360.0, 2_500_000)]),
        CatalogPlan::new("combined", 2, vec![all, north, south]),
    ]
}

fn engine() -> PricingEngine {
    PricingEngine::new(PricingConfig::default().with_timezone("UTC")).unwrap()
}

fn outside_campaign() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap()
}

fn during_campaign() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap()
}

fn promos() -> StaticPromoLookup {
    StaticPromoLookup::new()
        .with("SAVE10", PromoDefinition::percentage(10.0))
        .with("HUGE", PromoDefinition::flat(100_000.0))
}

#[test]
fn test_engine_rejects_invalid_config() {
    let err = PricingEngine::new(PricingConfig::default().with_tax_rate(2.0)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConfigError);
}

#[test]
fn test_quote_without_campaign() {
    let request = SubscriptionQuote::new(["All"], BillingDuration::Monthly);
    let quote = engine()
        .quote_subscription(&request, &plans(), outside_campaign(), None)
        .unwrap();

    assert_eq!(quote.plan, "combined");
    assert_eq!(quote.base_price, 1180.0);
    assert_eq!(quote.company_count, 2_500_000);
    assert!(!quote.campaign.is_active);
    assert_eq!(quote.breakdown.original_price, 1000.0);
    assert_eq!(quote.breakdown.gst_amount, 180.0);
    assert_eq!(quote.breakdown.total_price, 1180.0);
}

#[test]
fn test_quote_quarterly_uses_catalog_field() {
    let request = SubscriptionQuote::new(["All"], BillingDuration::Quarterly);
    let quote = engine()
        .quote_subscription(&request, &plans(), outside_campaign(), None)
        .unwrap();

    assert_eq!(quote.base_price, 3186.0);
    assert_eq!(quote.breakdown.original_price, 2700.0);
    assert_eq!(quote.breakdown.total_price, 3186.0);
}

#[test]
fn test_quote_applies_active_campaign() {
    let request = SubscriptionQuote::new(["All"], BillingDuration::Monthly);
    let quote = engine()
        .quote_subscription(&request, &plans(), during_campaign(), None)
        .unwrap();

    assert!(quote.campaign.is_active);
    assert_eq!(quote.campaign.discount, 30.0);
    assert_eq!(quote.base_price, 1180.0);
    assert_eq!(quote.breakdown.original_price, 700.0);
    assert_eq!(quote.breakdown.gst_amount, 126.0);
    assert_eq!(quote.breakdown.total_price, 826.0);
}

#[test]
fn test_quote_multiple_zones() {
    let request = SubscriptionQuote::new(["North", "South", "Atlantis"], BillingDuration::Annually);
    let quote = engine()
        .quote_subscription(&request, &plans(), outside_campaign(), None)
        .unwrap();

    assert_eq!(quote.base_price, 10620.0);
    assert_eq!(quote.company_count, 1_600_000);
    assert_eq!(quote.breakdown.original_price, 9000.0);
    assert_eq!(quote.breakdown.total_price, 10620.0);
}

#[test]
fn test_quote_named_plan() {
    let request = SubscriptionQuote::new(["All"], BillingDuration::Monthly).with_plan("Email");
    let quote = engine()
        .quote_subscription(&request, &plans(), outside_campaign(), None)
        .unwrap();

    assert_eq!(quote.plan, "email");
    assert_eq!(quote.breakdown.original_price, 200.0);

    let request = SubscriptionQuote::new(["All"], BillingDuration::Monthly).with_plan("sms");
    let err = engine()
        .quote_subscription(&request, &plans(), outside_campaign(), None)
        .unwrap_err();
    assert!(matches!(err, PricingError::MissingPrice(_)));
}

#[test]
fn test_quote_without_plans() {
    let request = SubscriptionQuote::new(["All"], BillingDuration::Monthly);
    let err = engine()
        .quote_subscription(&request, &[], outside_campaign(), None)
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ServicePriceMissing);
}

#[test]
fn test_trial_ignores_campaign() {
    let request = SubscriptionQuote::new(["North"], BillingDuration::Monthly).trial();
    let quote = engine()
        .quote_subscription(&request, &plans(), during_campaign(), None)
        .unwrap();

    assert!(quote.campaign.is_active);
    assert_eq!(quote.base_price, 1.18);
    assert_eq!(quote.breakdown.original_price, 1.0);
    assert_eq!(quote.breakdown.gst_amount, 0.18);
    assert_eq!(quote.breakdown.total_price, 1.18);
}

#[test]
fn test_trial_without_trial_price() {
    let request = SubscriptionQuote::new(["South"], BillingDuration::Monthly).trial();
    let err = engine()
        .quote_subscription(&request, &plans(), outside_campaign(), None)
        .unwrap_err();
    assert!(matches!(err, PricingError::MissingPrice(_)));
}

#[tokio::test]
async fn test_quote_with_percentage_code() {
    let request = SubscriptionQuote::new(["All"], BillingDuration::Monthly);
    let (quote, promo) = engine()
        .quote_subscription_with_code(&request, &plans(), during_campaign(), "save10", &promos())
        .await
        .unwrap();

    // 10% of the campaign-discounted subtotal (700)
    let promo = promo.unwrap();
    assert_eq!(promo.code, "SAVE10");
    assert_eq!(promo.discount, 70.0);
    assert_eq!(quote.breakdown.original_price, 700.0);
    assert_eq!(quote.breakdown.promo_discount, 70.0);
    assert_eq!(quote.breakdown.subtotal_price, 630.0);
    assert_eq!(quote.breakdown.gst_amount, 113.4);
    assert_eq!(quote.breakdown.total_price, 743.4);
}

#[tokio::test]
async fn test_quote_with_oversized_flat_code() {
    let request = SubscriptionQuote::new(["All"], BillingDuration::Monthly);
    let (quote, promo) = engine()
        .quote_subscription_with_code(&request, &plans(), outside_campaign(), "HUGE", &promos())
        .await
        .unwrap();

    assert_eq!(promo.unwrap().discount, 1000.0);
    assert_eq!(quote.breakdown.subtotal_price, 0.0);
    assert_eq!(quote.breakdown.total_price, 0.0);
}

#[tokio::test]
async fn test_quote_with_blank_code() {
    let request = SubscriptionQuote::new(["All"], BillingDuration::Monthly);
    let (quote, promo) = engine()
        .quote_subscription_with_code(&request, &plans(), outside_campaign(), "  ", &promos())
        .await
        .unwrap();

    assert!(promo.is_none());
    assert_eq!(quote.breakdown.total_price, 1180.0);
}

#[tokio::test]
async fn test_quote_with_invalid_code() {
    let request = SubscriptionQuote::new(["All"], BillingDuration::Monthly);
    let err = engine()
        .quote_subscription_with_code(&request, &plans(), outside_campaign(), "BOGUS", &promos())
        .await
        .unwrap_err();

    assert!(matches!(err, PricingError::InvalidPromoCode { .. }));
    assert!(err.is_user_facing());
}

#[test]
fn test_quote_unlock_service() {
    let service = ServiceCatalog::DirectorUnlock { unit_price: 49.0 };
    let breakdown = engine().quote_service(&service, 3, None).unwrap();

    assert_eq!(breakdown.original_price, 124.58);
    assert_eq!(breakdown.gst_amount, 22.42);
    assert_eq!(breakdown.total_price, 147.0);
}

#[test]
fn test_quote_one_time_service_with_promo() {
    let service = ServiceCatalog::OneTime { price: 1180.0 };
    let promo = crate::promo::evaluate_promo("FLAT50", &PromoDefinition::flat(50.0), 1000.0).unwrap();
    let breakdown = engine().quote_service(&service, 1, Some(&promo)).unwrap();

    assert_eq!(breakdown.original_price, 1000.0);
    assert_eq!(breakdown.subtotal_price, 950.0);
    assert_eq!(breakdown.gst_amount, 171.0);
    assert_eq!(breakdown.total_price, 1121.0);
}

#[test]
fn test_quote_service_beyond_decimal_range() {
    let service = ServiceCatalog::CompanyUnlock { unit_price: 5e28 };
    let breakdown = engine().quote_service(&service, 2, None).unwrap();
    assert_eq!(breakdown.total_price, 0.0);
}

#[test]
fn test_quote_subscription_as_service_is_rejected() {
    let service = ServiceCatalog::Subscription { plans: plans() };
    let err = engine().quote_service(&service, 1, None).unwrap_err();
    assert!(matches!(err, PricingError::MissingPrice(_)));
}

#[test]
fn test_quote_monthly_rate() {
    let breakdown = engine().quote_monthly_rate(118.0, BillingDuration::Quarterly, None);
    assert_eq!(breakdown.original_price, 300.0);
    assert_eq!(breakdown.gst_amount, 54.0);
    assert_eq!(breakdown.total_price, 354.0);
}

#[test]
fn test_custom_tax_rate() {
    let engine = PricingEngine::new(PricingConfig::default().with_tax_rate(0.0)).unwrap();
    let request = SubscriptionQuote::new(["All"], BillingDuration::Monthly);
    let quote = engine
        .quote_subscription(&request, &plans(), outside_campaign(), None)
        .unwrap();

    assert_eq!(quote.breakdown.original_price, 1180.0);
    assert_eq!(quote.breakdown.gst_amount, 0.0);
    assert_eq!(quote.breakdown.total_price, 1180.0);
}

#[test]
fn test_request_deserializes_with_defaults() {
    let request: SubscriptionQuote =
        serde_json::from_str(r#"{"zones":["North"],"duration":"annually"}"#).unwrap();
    assert_eq!(request.duration, BillingDuration::Annually);
    assert_eq!(request.plan, None);
    assert!(!request.trial);
}
