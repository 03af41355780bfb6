// Host-side tests for the spawn-credit accumulator.

use fx_core::*;
use rand::prelude::*;

#[test]
fn first_sample_never_spawns() {
    let mut acc = SpawnAccumulator::new(20.0);
    assert_eq!(acc.take(123_456.0, false), 0);
    assert_eq!(acc.credit(), 0.0);
}

#[test]
fn fractional_credit_carries_over() {
    let mut acc = SpawnAccumulator::new(20.0);
    acc.take(0.0, true);
    assert_eq!(acc.take(10.0, false), 0);
    assert!((acc.credit() - 0.5).abs() < 1e-12);
    assert_eq!(acc.take(30.0, false), 1);
    assert!((acc.credit() - 0.5).abs() < 1e-12);
    assert_eq!(acc.take(75.0, false), 2);
    assert!((acc.credit() - 0.75).abs() < 1e-12);
}

#[test]
fn reset_discards_stale_backlog() {
    let mut acc = SpawnAccumulator::new(20.0);
    acc.take(0.0, true);
    assert_eq!(acc.take(5_000.0, true), 0);
    assert_eq!(acc.take(5_040.0, false), 2);
}

#[test]
fn clock_going_backwards_spawns_nothing() {
    let mut acc = SpawnAccumulator::new(20.0);
    acc.take(1_000.0, true);
    assert_eq!(acc.take(900.0, false), 0);
    assert_eq!(acc.take(940.0, false), 2);
}

#[test]
fn irregular_polling_keeps_average_rate() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut acc = SpawnAccumulator::new(20.0);
    let mut now = 0.0;
    acc.take(now, true);
    let mut total: u64 = 0;
    for _ in 0..50_000 {
        now += rng.gen_range(0.0..37.0);
        total += acc.take(now, false) as u64;
        let expected = (now / 20.0).floor() as i64;
        assert!((total as i64 - expected).abs() <= 1, "drift at t={}", now);
    }
}

#[test]
fn polling_frequency_does_not_change_count() {
    // 1/16 is exact in binary, so the per-call credit sums without rounding
    let mut fast = SpawnAccumulator::new(16.0);
    let mut slow = SpawnAccumulator::new(16.0);
    fast.take(0.0, true);
    slow.take(0.0, true);
    let mut fast_total = 0;
    for i in 1..=1000 {
        fast_total += fast.take(i as f64, false);
    }
    let slow_total = slow.take(1000.0, false);
    assert_eq!(fast_total, 62);
    assert_eq!(slow_total, 62);
    assert_eq!(fast.credit(), slow.credit());
}
