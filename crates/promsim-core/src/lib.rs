//! promsim core: the simulated metric state engine and the text exposition encoder.
//!
//! This crate owns the interesting half of the program: time-varying
//! counter/gauge/histogram state evolved one synthetic scrape interval at a
//! time, and the renderer that turns a snapshot into the Prometheus text
//! exposition format (version 0.0.4 subset). It intentionally carries no
//! transport or runtime dependencies so the exporter binary and tests can
//! drive it directly.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `PromSimError`/`Result` so the serving
//! process does not crash mid-scrape.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod expo;
pub mod sim;

/// Shared result type.
pub use error::{PromSimError, Result};
pub use sim::{Clock, SimEngine, SystemClock};
