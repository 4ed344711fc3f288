//! Metric state simulation.
//!
//! [`SimEngine`] owns all mutable simulated state and the injected clock and
//! RNG. `advance()` is the only mutator and models one synthetic scrape
//! interval; gauge accessors derive values from elapsed time plus a fresh
//! noise draw and never touch counter or histogram state.

pub mod clock;
pub mod counters;
pub mod gauges;
pub mod histogram;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::{Distribution, Exp, Normal};

use crate::error::{PromSimError, Result};

pub use clock::{Clock, SystemClock};
pub use counters::RequestCounters;
pub use gauges::SyntheticGaugeSet;
pub use histogram::{LatencyHistogram, BUCKET_BOUNDS};

/// Observations drawn into the histogram per interval (inclusive range).
const OBSERVATIONS_PER_INTERVAL: (u32, u32) = (10, 50);

/// Rate of the exponential latency distribution (mean 0.1s).
const LATENCY_RATE: f64 = 10.0;

/// Standard deviation of the Gaussian noise applied to CPU and synthetic
/// gauges.
const NOISE_STD_DEV: f64 = 5.0;

/// Process-wide simulated metric state.
///
/// Constructed exactly once at startup; the exporter serializes
/// `advance()`-then-encode turns behind a lock.
pub struct SimEngine {
    clock: Box<dyn Clock>,
    rng: Box<dyn RngCore + Send>,
    counters: RequestCounters,
    latency: LatencyHistogram,
    synthetic: SyntheticGaugeSet,
    latency_dist: Exp<f64>,
    noise_dist: Normal<f64>,
    intervals: u64,
}

impl SimEngine {
    /// Build an engine from an explicit clock and random source.
    ///
    /// Injecting both keeps every draw deterministic under a seeded RNG and
    /// a pinned clock, which is what the integration tests rely on.
    pub fn new(
        clock: Box<dyn Clock>,
        rng: Box<dyn RngCore + Send>,
        gauge_count: usize,
    ) -> Result<Self> {
        let latency_dist = Exp::new(LATENCY_RATE)
            .map_err(|e| PromSimError::Internal(format!("latency distribution: {e}")))?;
        let noise_dist = Normal::new(0.0, NOISE_STD_DEV)
            .map_err(|e| PromSimError::Internal(format!("noise distribution: {e}")))?;

        tracing::debug!(gauge_count, "sim engine constructed");

        Ok(Self {
            clock,
            rng,
            counters: RequestCounters::new(),
            latency: LatencyHistogram::new(),
            synthetic: SyntheticGaugeSet::new(gauge_count),
            latency_dist,
            noise_dist,
            intervals: 0,
        })
    }

    /// Engine on the system clock and an entropy-seeded RNG.
    pub fn with_defaults(gauge_count: usize) -> Result<Self> {
        Self::new(
            Box::new(SystemClock::start()),
            Box::new(StdRng::from_entropy()),
            gauge_count,
        )
    }

    /// Evolve all mutable state by one synthetic scrape interval.
    ///
    /// Counters and histogram counts only ever move upward; no upper bound
    /// is enforced (the u64 domain does not overflow at test timescales).
    pub fn advance(&mut self) {
        self.counters.advance(&mut self.rng);

        let lo = OBSERVATIONS_PER_INTERVAL.0;
        let hi = OBSERVATIONS_PER_INTERVAL.1;
        let observations = self.rng.gen_range(lo..=hi);
        for _ in 0..observations {
            let latency = self.latency_dist.sample(&mut self.rng);
            self.latency.observe(latency);
        }

        self.intervals += 1;
        tracing::debug!(observations, intervals = self.intervals, "interval advanced");
    }

    /// Number of intervals applied so far.
    pub fn intervals(&self) -> u64 {
        self.intervals
    }

    /// Elapsed wall-clock seconds since engine construction. Doubles as the
    /// process CPU-seconds proxy.
    pub fn elapsed_secs(&self) -> f64 {
        self.clock.elapsed_secs()
    }

    pub fn counters(&self) -> &RequestCounters {
        &self.counters
    }

    pub fn latency(&self) -> &LatencyHistogram {
        &self.latency
    }

    pub fn synthetic(&self) -> &SyntheticGaugeSet {
        &self.synthetic
    }

    /// CPU usage gauge, clamped to [0, 100].
    pub fn cpu_usage_percent(&mut self) -> f64 {
        let noise = self.noise_dist.sample(&mut self.rng);
        gauges::cpu_usage_percent(self.clock.elapsed_secs(), noise)
    }

    /// Resident memory gauge in bytes.
    pub fn resident_memory_bytes(&self) -> u64 {
        gauges::resident_memory_bytes(self.clock.elapsed_secs())
    }

    /// Queue depth gauge, integer, never negative.
    pub fn queue_depth(&mut self) -> i64 {
        let jitter: i64 = self.rng.gen_range(-3..=5);
        gauges::queue_depth(self.clock.elapsed_secs(), jitter)
    }

    /// Active connections gauge, integer, never negative.
    pub fn active_connections(&mut self) -> i64 {
        let jitter: i64 = self.rng.gen_range(-10..=15);
        gauges::active_connections(self.clock.elapsed_secs(), jitter)
    }

    /// One value per configured synthetic gauge instance, in index order.
    pub fn synthetic_values(&mut self) -> Vec<f64> {
        let elapsed = self.clock.elapsed_secs();
        (0..self.synthetic.count())
            .map(|i| {
                let noise = self.noise_dist.sample(&mut self.rng);
                self.synthetic.value(i, elapsed, noise)
            })
            .collect()
    }
}
