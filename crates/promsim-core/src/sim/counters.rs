//! Simulated request counters.
//!
//! Four method/code combinations are pre-declared at construction and only
//! ever move upward. Render order is the declaration order below, so the
//! storage is a fixed array rather than a map.

use rand::Rng;

/// One pre-declared label combination and its per-interval increment range
/// (inclusive on both ends).
struct TrafficPattern {
    method: &'static str,
    code: &'static str,
    lo: u64,
    hi: u64,
}

const PATTERNS: [TrafficPattern; 4] = [
    TrafficPattern { method: "GET", code: "200", lo: 10, hi: 100 },
    TrafficPattern { method: "GET", code: "404", lo: 0, hi: 5 },
    TrafficPattern { method: "POST", code: "200", lo: 5, hi: 50 },
    TrafficPattern { method: "POST", code: "500", lo: 0, hi: 2 },
];

/// Monotonic totals for the fixed request-counter family.
#[derive(Debug, Default)]
pub struct RequestCounters {
    totals: [u64; PATTERNS.len()],
}

impl RequestCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one synthetic traffic interval: every combination draws an
    /// independent increment from its own range.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for (total, p) in self.totals.iter_mut().zip(&PATTERNS) {
            *total += rng.gen_range(p.lo..=p.hi);
        }
    }

    /// Samples in declaration order: `(method, code, total)`.
    pub fn samples(&self) -> impl Iterator<Item = (&'static str, &'static str, u64)> + '_ {
        PATTERNS
            .iter()
            .zip(self.totals)
            .map(|(p, total)| (p.method, p.code, total))
    }

    /// Total for a single combination, if it is one of the declared four.
    pub fn get(&self, method: &str, code: &str) -> Option<u64> {
        PATTERNS
            .iter()
            .position(|p| p.method == method && p.code == code)
            .map(|i| self.totals[i])
    }
}
