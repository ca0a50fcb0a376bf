//! The tick loop that drives a [`System`].
//!
//! The loop is explicit and bounded rather than a self-rescheduling
//! callback chain, and a [`CancelToken`] can stop it early from anywhere
//! that holds a clone.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde_json::Value;

use crate::error::FieldError;
use crate::surface::Surface;
use crate::system::System;

/// Cloneable cancellation handle for a running tick loop.
///
/// All clones share one flag; cancelling any of them stops the loop before
/// its next tick.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a fresh, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// True once any clone has cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Callback receiving the system's timing report after each tick.
pub type ReportFn = dyn FnMut(&Value);

/// Drives a system for a bounded number of ticks.
///
/// Single-threaded and cooperative: each tick synchronously draws and
/// computes, then the loop continues. State flows only through the system.
pub struct Runner {
    cancel: CancelToken,
    report: Option<Box<ReportFn>>,
}

impl Runner {
    /// Creates a runner with a fresh cancel token and no report callback.
    pub fn new() -> Self {
        Self {
            cancel: CancelToken::new(),
            report: None,
        }
    }

    /// Returns a clone of the cancel token for this runner.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Installs a callback invoked with [`System::report`] after every tick.
    pub fn with_report(mut self, report: Box<ReportFn>) -> Self {
        self.report = Some(report);
        self
    }

    /// Steps the system up to `ticks` times, stopping early on cancellation.
    ///
    /// Returns the number of ticks actually completed. A step error aborts
    /// the loop and propagates.
    pub fn run(
        &mut self,
        system: &mut dyn System,
        surface: &mut dyn Surface,
        ticks: usize,
    ) -> Result<usize, FieldError> {
        log::debug!("running up to {ticks} ticks");
        let mut completed = 0;
        for _ in 0..ticks {
            if self.cancel.is_cancelled() {
                log::debug!("cancelled after {completed} ticks");
                break;
            }
            system.step(surface)?;
            completed += 1;
            if let Some(report) = self.report.as_mut() {
                report(&system.report());
            }
        }
        Ok(completed)
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}
