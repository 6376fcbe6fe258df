use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct WithdrawalPolicy {
    pub min_amount: Decimal,
    pub fee_rate: Decimal,
}

impl WithdrawalPolicy {
    pub fn new(min_amount: Decimal, fee_rate: Decimal) -> Self {
        Self { min_amount, fee_rate }
    }

    pub fn is_below_minimum(&self, amount: Decimal) -> bool {
        amount <= Decimal::ZERO || amount < self.min_amount
    }

    pub fn quote(&self, amount: Decimal) -> FeeQuote {
        let fee = (amount * self.fee_rate).round_dp(2);
        FeeQuote {
            min_amount: self.min_amount,
            fee_rate: self.fee_rate,
            amount,
            fee,
            payout_amount: amount - fee,
        }
    }
}

impl Default for WithdrawalPolicy {
    fn default() -> Self {
        Self {
            min_amount: Decimal::new(50, 0),
            fee_rate: Decimal::new(10, 2),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeQuote {
    pub min_amount: Decimal,
    pub fee_rate: Decimal,
    pub amount: Decimal,
    pub fee: Decimal,
    pub payout_amount: Decimal,
}

// Minimal VPA shape check; full handle validation belongs to the payout rail.
pub fn is_plausible_vpa(upi: &str) -> bool {
    upi.contains('@')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_splits_fee_and_payout() {
        let policy = WithdrawalPolicy::default();
        let q = policy.quote(Decimal::new(500, 0));
        assert_eq!(q.fee, Decimal::new(50, 0));
        assert_eq!(q.payout_amount, Decimal::new(450, 0));
    }

    #[test]
    fn fee_rounds_to_paise() {
        let policy = WithdrawalPolicy::default();
        let q = policy.quote(Decimal::new(3333, 2));
        assert_eq!(q.fee, Decimal::new(333, 2));
        assert_eq!(q.payout_amount, Decimal::new(3000, 2));
    }

    #[test]
    fn minimum_covers_zero_and_negative() {
        let policy = WithdrawalPolicy::default();
        assert!(policy.is_below_minimum(Decimal::new(49, 0)));
        assert!(policy.is_below_minimum(Decimal::ZERO));
        assert!(policy.is_below_minimum(Decimal::new(-100, 0)));
        assert!(!policy.is_below_minimum(Decimal::new(50, 0)));
    }

    #[test]
    fn vpa_needs_a_handle_separator() {
        assert!(is_plausible_vpa("worker@okicici"));
        assert!(!is_plausible_vpa("workerokicici"));
    }
}
