use rust_decimal::Decimal;

#[test]
fn config_defaults_are_usable() {
    let cfg = gigpay::config::AppConfig::from_env();
    assert!(!cfg.internal_api_key.is_empty());
    assert!(cfg.min_withdrawal > Decimal::ZERO);
    assert!(cfg.fee_rate > Decimal::ZERO && cfg.fee_rate < Decimal::ONE);
}

#[test]
fn readiness_endpoints_exist_in_readme() {
    let readme = std::fs::read_to_string("README.md").unwrap_or_default();
    assert!(readme.contains("/ops/readiness"));
    assert!(readme.contains("/api/wallet/withdraw"));
    assert!(readme.contains("/api/gig/complete"));
}
