use gigpay::domain::money::{is_plausible_vpa, WithdrawalPolicy};
use rust_decimal::Decimal;

#[test]
fn five_hundred_against_ten_percent_fee() {
    let policy = WithdrawalPolicy::default();
    let quote = policy.quote(Decimal::new(500, 0));
    assert_eq!(quote.fee, Decimal::new(50, 0));
    assert_eq!(quote.payout_amount, Decimal::new(450, 0));
    assert_eq!(quote.amount, Decimal::new(500, 0));
}

#[test]
fn thirty_is_below_minimum_regardless_of_balance() {
    let policy = WithdrawalPolicy::default();
    assert!(policy.is_below_minimum(Decimal::new(30, 0)));
}

#[test]
fn minimum_boundary_is_inclusive() {
    let policy = WithdrawalPolicy::default();
    assert!(!policy.is_below_minimum(Decimal::new(50, 0)));
    assert!(policy.is_below_minimum(Decimal::new(4999, 2)));
}

#[test]
fn fee_plus_payout_reconstructs_amount() {
    let policy = WithdrawalPolicy::default();
    for cents in [5000_i64, 12345, 99999, 700000] {
        let amount = Decimal::new(cents, 2);
        let quote = policy.quote(amount);
        assert_eq!(quote.fee + quote.payout_amount, amount);
    }
}

#[test]
fn vpa_shape_check_only_requires_at() {
    assert!(is_plausible_vpa("a@b"));
    assert!(is_plausible_vpa("worker.01@okhdfcbank"));
    assert!(!is_plausible_vpa(""));
    assert!(!is_plausible_vpa("plainstring"));
}

#[test]
fn custom_policy_from_config_values() {
    let policy = WithdrawalPolicy::new(Decimal::new(100, 0), Decimal::new(5, 2));
    assert!(policy.is_below_minimum(Decimal::new(99, 0)));
    let quote = policy.quote(Decimal::new(200, 0));
    assert_eq!(quote.fee, Decimal::new(10, 0));
    assert_eq!(quote.payout_amount, Decimal::new(190, 0));
}
