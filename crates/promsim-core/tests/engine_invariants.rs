//! State engine invariant tests.
//!
//! The engine is driven with a pinned clock and a seeded RNG so every
//! assertion is deterministic.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use rand::rngs::StdRng;
use rand::SeedableRng;

use promsim_core::expo;
use promsim_core::sim::{Clock, SimEngine};

struct FixedClock(f64);

impl Clock for FixedClock {
    fn elapsed_secs(&self) -> f64 {
        self.0
    }
}

fn engine_at(elapsed: f64, seed: u64, gauges: usize) -> SimEngine {
    SimEngine::new(
        Box::new(FixedClock(elapsed)),
        Box::new(StdRng::seed_from_u64(seed)),
        gauges,
    )
    .unwrap()
}

#[test]
fn counters_only_move_upward() {
    for seed in 0..5 {
        let mut engine = engine_at(1.0, seed, 0);
        let mut prev: Vec<u64> = engine.counters().samples().map(|(_, _, v)| v).collect();
        for _ in 0..10 {
            engine.advance();
            let next: Vec<u64> = engine.counters().samples().map(|(_, _, v)| v).collect();
            for (p, n) in prev.iter().zip(&next) {
                assert!(n >= p, "counter decreased: {p} -> {n}");
            }
            prev = next;
        }
    }
}

#[test]
fn counters_with_positive_floor_strictly_increase() {
    let mut engine = engine_at(1.0, 9, 0);
    engine.advance();
    // GET/200 draws at least 10 and POST/200 at least 5 per interval.
    assert!(engine.counters().get("GET", "200").unwrap() >= 10);
    assert!(engine.counters().get("POST", "200").unwrap() >= 5);
}

#[test]
fn inf_bucket_always_matches_total_count() {
    let mut engine = engine_at(1.0, 3, 0);
    assert_eq!(engine.latency().inf_count(), engine.latency().total_count());
    for _ in 0..5 {
        engine.advance();
        assert_eq!(engine.latency().inf_count(), engine.latency().total_count());
    }
}

#[test]
fn bucket_counts_ascend_with_bound() {
    let mut engine = engine_at(1.0, 4, 0);
    for _ in 0..8 {
        engine.advance();
        let counts: Vec<u64> = engine.latency().finite_counts().map(|(_, c)| c).collect();
        for pair in counts.windows(2) {
            assert!(pair[0] <= pair[1], "bucket counts not ascending: {counts:?}");
        }
        assert!(*counts.last().unwrap() <= engine.latency().inf_count());
    }
}

#[test]
fn cpu_gauge_stays_in_display_range() {
    let mut engine = engine_at(123.0, 5, 0);
    for _ in 0..200 {
        let v = engine.cpu_usage_percent();
        assert!((0.0..=100.0).contains(&v), "cpu out of range: {v}");
    }
}

#[test]
fn integer_gauges_never_negative() {
    let mut engine = engine_at(77.0, 6, 0);
    for _ in 0..200 {
        assert!(engine.queue_depth() >= 0);
        assert!(engine.active_connections() >= 0);
    }
}

#[test]
fn advance_counts_intervals() {
    let mut engine = engine_at(1.0, 7, 0);
    engine.advance();
    engine.advance();
    engine.advance();
    assert_eq!(engine.intervals(), 3);
}

#[test]
fn seeded_scenario_one_advance_at_five_seconds() {
    let mut engine = engine_at(5.0, 42, 10);

    let get_ok_before = engine.counters().get("GET", "200").unwrap();
    let observed_before = engine.latency().total_count();

    engine.advance();

    let get_ok_delta = engine.counters().get("GET", "200").unwrap() - get_ok_before;
    assert!((10..=100).contains(&get_ok_delta), "delta {get_ok_delta}");

    let observed_delta = engine.latency().total_count() - observed_before;
    assert!((10..=50).contains(&observed_delta), "delta {observed_delta}");

    let cpu = engine.cpu_usage_percent();
    assert!((0.0..=100.0).contains(&cpu));

    let text = expo::render(&mut engine);
    let requests = text.find("# HELP http_requests_total").unwrap();
    let cpu_seconds = text.find("# HELP process_cpu_seconds_total").unwrap();
    let cpu_usage = text.find("# HELP node_cpu_usage_percent").unwrap();
    assert!(requests < cpu_seconds);
    assert!(cpu_seconds < cpu_usage);
}
