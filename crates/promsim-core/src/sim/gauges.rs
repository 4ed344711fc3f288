//! Gauge waveforms.
//!
//! Each gauge is a pure function of elapsed seconds plus a pre-drawn noise
//! term; no state is kept between reads. The engine owns the RNG and passes
//! the draw in, which keeps every formula directly unit-testable.

/// CPU usage percentage: sinusoidal base (1-minute cycle) plus Gaussian
/// noise, clamped to the displayable range.
pub fn cpu_usage_percent(elapsed: f64, noise: f64) -> f64 {
    let base = 30.0 + 20.0 * (elapsed / 60.0).sin();
    (base + noise).clamp(0.0, 100.0)
}

/// Resident memory: 500MB base, slow wrapped growth, and a GC-style
/// fluctuation on a 30-second cycle. No noise term.
pub fn resident_memory_bytes(elapsed: f64) -> u64 {
    let base = 500_000_000;
    let growth = (elapsed * 100_000.0) as u64 % 200_000_000;
    let gc_cycle = (50_000_000.0 * (1.0 + (elapsed / 30.0).sin())) as u64;
    base + growth + gc_cycle
}

/// Queue depth: sinusoidal base plus integer jitter, truncated toward zero
/// and floored at 0.
pub fn queue_depth(elapsed: f64, jitter: i64) -> i64 {
    let base = 10.0 + 5.0 * (elapsed / 20.0).sin();
    ((base + jitter as f64).trunc() as i64).max(0)
}

/// Active connections: sinusoidal base plus integer jitter, truncated toward
/// zero and floored at 0.
pub fn active_connections(elapsed: f64, jitter: i64) -> i64 {
    let base = 50.0 + 30.0 * (elapsed / 45.0).sin();
    ((base + jitter as f64).trunc() as i64).max(0)
}

/// Configured set of synthetic gauges. The count is fixed at construction;
/// instance `i` gets a phase offset of `i * 0.5` and a period divisor of
/// `10 + i` so every instance traces a distinct curve.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticGaugeSet {
    count: usize,
}

impl SyntheticGaugeSet {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Value of instance `index` at `elapsed`, with one noise draw applied.
    /// Floored at 0, never truncated.
    pub fn value(&self, index: usize, elapsed: f64, noise: f64) -> f64 {
        let phase = index as f64 * 0.5;
        let period = 10.0 + index as f64;
        let base = 50.0 + 30.0 * ((elapsed + phase) / period).sin();
        (base + noise).max(0.0)
    }
}
