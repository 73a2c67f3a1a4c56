//! Logger installation writes quote events to the rolling file

use pricing_engine::{BillingDuration, PricingConfig, PricingEngine, init_logger_with_file};

#[test]
fn file_logger_captures_quotes() {
    let dir = tempfile::tempdir().unwrap();
    init_logger_with_file(Some("debug"), true, Some(dir.path())).unwrap();

    // Only one global subscriber per process
    assert!(init_logger_with_file(Some("debug"), false, None).is_err());

    let engine = PricingEngine::new(PricingConfig::default()).unwrap();
    let breakdown = engine.quote_monthly_rate(118.0, BillingDuration::Annually, None);
    assert_eq!(breakdown.total_price, 1416.0);
    tracing::info!(total = breakdown.total_price, "quote done");

    let files: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    assert!(files.iter().any(|name| name.starts_with("pricing-engine")));
}
