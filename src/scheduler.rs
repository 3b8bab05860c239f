//! Fixed timestep scheduling
//!
//! Converts irregular host frame times into a whole number of fixed ticks,
//! so the simulation never sees wall-clock jitter.

use crate::consts::MAX_FRAME_DELTA_MS;

/// Accumulator that hands out ticks at a fixed interval
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    interval_ms: f64,
    max_substeps: u32,
    accumulator: f64,
    running: bool,
}

impl FixedTimestep {
    pub fn new(interval_ms: f64, max_substeps: u32) -> Self {
        Self {
            interval_ms,
            max_substeps,
            accumulator: 0.0,
            running: true,
        }
    }

    /// Add elapsed host time and return how many ticks are due.
    ///
    /// Frame deltas are clamped to `MAX_FRAME_DELTA_MS`. When the substep cap
    /// is hit the remaining backlog is dropped, keeping at most one partial
    /// interval.
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        if !self.running {
            return 0;
        }

        let elapsed = if elapsed_ms.is_finite() {
            elapsed_ms.clamp(0.0, MAX_FRAME_DELTA_MS)
        } else {
            0.0
        };
        self.accumulator += elapsed;

        let mut substeps = 0;
        while self.accumulator >= self.interval_ms && substeps < self.max_substeps {
            self.accumulator -= self.interval_ms;
            substeps += 1;
        }

        if substeps == self.max_substeps && self.accumulator >= self.interval_ms {
            log::debug!(
                "Dropping {:.1} ms of backlog after {} substeps",
                self.accumulator,
                substeps
            );
            self.accumulator %= self.interval_ms;
        }

        substeps
    }

    /// Stop handing out ticks (terminal outcome reached)
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Clear pending time and resume
    pub fn restart(&mut self) {
        self.accumulator = 0.0;
        self.running = true;
    }
}
