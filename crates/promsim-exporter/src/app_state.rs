//! Shared application state for the exporter.
//!
//! Holds the parsed options and the single engine instance. The
//! advance-then-encode turn of each scrape runs under the engine lock as one
//! critical section, so no reader ever observes a partially applied update.

use std::sync::{Arc, Mutex, PoisonError};

use promsim_core::error::Result;
use promsim_core::{expo, SimEngine};

use crate::cli::Options;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    opts: Options,
    engine: Mutex<SimEngine>,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(opts: Options) -> Result<Self> {
        opts.validate()?;
        let engine = SimEngine::with_defaults(opts.metrics)?;
        Ok(Self {
            inner: Arc::new(AppStateInner {
                opts,
                engine: Mutex::new(engine),
            }),
        })
    }

    pub fn opts(&self) -> &Options {
        &self.inner.opts
    }

    /// Advance the simulation one interval and render the snapshot, as a
    /// single critical section. The lock is never held across an await.
    pub fn advance_and_render(&self) -> String {
        let mut engine = self
            .inner
            .engine
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        engine.advance();
        expo::render(&mut engine)
    }

    /// Number of scrape intervals applied so far.
    pub fn intervals(&self) -> u64 {
        self.inner
            .engine
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .intervals()
    }
}
