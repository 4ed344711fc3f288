//! Command-line options (strict parsing).
//!
//! Malformed values fail fast through clap with a usage message and a
//! non-zero exit before any socket is bound.

use clap::Parser;

use promsim_core::error::{PromSimError, Result};

const MAX_SYNTHETIC_GAUGES: usize = 100_000;

/// Synthetic Prometheus telemetry source for exercising scrape clients.
#[derive(Debug, Parser)]
#[command(name = "promsim-exporter", version)]
pub struct Options {
    /// Port to listen on.
    #[arg(short, long, default_value_t = 9090)]
    pub port: u16,

    /// Number of synthetic gauge metrics to generate.
    #[arg(short, long, default_value_t = 10)]
    pub metrics: usize,
}

impl Options {
    pub fn validate(&self) -> Result<()> {
        if self.metrics > MAX_SYNTHETIC_GAUGES {
            return Err(PromSimError::InvalidConfig(format!(
                "metrics must be at most {MAX_SYNTHETIC_GAUGES}"
            )));
        }
        Ok(())
    }
}
