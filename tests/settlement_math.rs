use gigpay::domain::rating::{fold_rating, DEFAULT_RATING};

#[test]
fn fresh_worker_takes_first_rating_exactly() {
    // Default (5.0, 0) folds to the incoming rating: (5.0*0 + r) / 1 = r.
    let stats = fold_rating(None, None, 3.0);
    assert_eq!(stats.rating, 3.0);
    assert_eq!(stats.rating_count, 1);
}

#[test]
fn established_worker_folds_weighted_mean() {
    let stats = fold_rating(Some(4.0), Some(3), 5.0);
    assert_eq!(stats.rating, 4.25);
    assert_eq!(stats.rating_count, 4);
}

#[test]
fn every_historical_rating_keeps_equal_weight() {
    let mut stats = fold_rating(None, None, 2.0);
    for r in [4.0, 4.0, 2.0] {
        stats = fold_rating(Some(stats.rating), Some(stats.rating_count), r);
    }
    assert_eq!(stats.rating_count, 4);
    assert!((stats.rating - 3.0).abs() < 1e-9);
}

#[test]
fn default_rating_is_perfect_not_zero() {
    assert_eq!(DEFAULT_RATING, 5.0);
}

#[test]
fn out_of_range_rating_is_folded_verbatim() {
    // The platform stores what the caller sent; no server-side clamp.
    let stats = fold_rating(Some(4.0), Some(1), 999.0);
    assert_eq!(stats.rating, 501.5);
    assert_eq!(stats.rating_count, 2);
}
