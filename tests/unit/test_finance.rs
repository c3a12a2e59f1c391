use moex_gateway::utils::finance::{
    non_zero, percent_change, price_change, resolve_price, round2,
};

#[test]
fn test_non_zero_filters_zero_and_none() {
    assert_eq!(non_zero(Some(105.0)), Some(105.0));
    assert_eq!(non_zero(Some(0.0)), None);
    assert_eq!(non_zero(None), None);
}

#[test]
fn test_resolve_price_prefers_primary() {
    assert_eq!(resolve_price(Some(105.0), Some(104.0)), Some(105.0));
}

#[test]
fn test_resolve_price_falls_back_when_primary_missing() {
    assert_eq!(resolve_price(None, Some(250.5)), Some(250.5));
}

#[test]
fn test_resolve_price_treats_zero_as_missing() {
    // ISS publishes zero for untraded snapshots
    assert_eq!(resolve_price(Some(0.0), Some(250.5)), Some(250.5));
    assert_eq!(resolve_price(Some(0.0), None), None);
}

#[test]
fn test_price_change_basic() {
    assert_eq!(price_change(Some(105.0), Some(100.0)), 5.0);
}

#[test]
fn test_price_change_zero_when_either_missing() {
    assert_eq!(price_change(None, Some(100.0)), 0.0);
    assert_eq!(price_change(Some(105.0), None), 0.0);
    assert_eq!(price_change(Some(105.0), Some(0.0)), 0.0);
}

#[test]
fn test_percent_change_basic() {
    // last=105, prev=100 -> +5%
    assert_eq!(percent_change(Some(105.0), Some(100.0)), 5.0);
}

#[test]
fn test_percent_change_never_divides_by_zero() {
    assert_eq!(percent_change(Some(105.0), Some(0.0)), 0.0);
    assert_eq!(percent_change(Some(105.0), None), 0.0);
    assert_eq!(percent_change(None, Some(100.0)), 0.0);
}

#[test]
fn test_percent_change_rounds_to_two_decimals() {
    // 4 / 99 * 100 = 4.0404...
    assert_eq!(percent_change(Some(103.0), Some(99.0)), 4.04);
}

#[test]
fn test_percent_change_negative_move() {
    assert_eq!(percent_change(Some(95.0), Some(100.0)), -5.0);
}

#[test]
fn test_round2() {
    assert_eq!(round2(4.0404), 4.04);
    assert_eq!(round2(-1.005_000_1), -1.01);
    assert_eq!(round2(5.0), 5.0);
}
