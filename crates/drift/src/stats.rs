//! Rolling per-phase timing statistics.
//!
//! Each tick records how long the lines, circles, and state phases took;
//! the averages update incrementally as `avg*(n-1)/n + new/n` so the
//! report carries no history buffer.

use serde_json::{json, Value};

/// Incrementally updated arithmetic mean.
#[derive(Debug, Clone, Copy, Default)]
pub struct RollingMean {
    avg: f64,
    count: u64,
}

impl RollingMean {
    /// Creates an empty mean (average 0, count 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one sample into the mean.
    pub fn push(&mut self, sample: f64) {
        self.count += 1;
        let n = self.count as f64;
        self.avg = self.avg * (n - 1.0) / n + sample / n;
    }

    /// The current mean; 0 before any sample.
    pub fn average(&self) -> f64 {
        self.avg
    }

    /// Number of samples folded in.
    pub fn count(&self) -> u64 {
        self.count
    }
}

/// Rolling averages for the three phases of a tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickStats {
    lines: RollingMean,
    circles: RollingMean,
    state: RollingMean,
}

impl TickStats {
    /// Creates empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one tick's phase durations in milliseconds.
    pub fn record(&mut self, lines_ms: f64, circles_ms: f64, state_ms: f64) {
        self.lines.push(lines_ms);
        self.circles.push(circles_ms);
        self.state.push(state_ms);
    }

    /// Number of ticks recorded.
    pub fn ticks(&self) -> u64 {
        self.lines.count()
    }

    /// The report handed to the runner's callback each tick.
    pub fn as_json(&self) -> Value {
        json!({
            "lines_ms": self.lines.average(),
            "circles_ms": self.circles.average(),
            "state_ms": self.state.average(),
            "ticks": self.ticks(),
        })
    }
}
