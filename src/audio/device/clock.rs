// src/audio/device/clock.rs
//! A monotonic clock that can be suspended and resumed.

use std::time::{Duration, Instant};

/// Counts time only while running, like an audio context's `currentTime`.
#[derive(Debug, Default, Clone)]
pub struct HostClock {
    accumulated: Duration,
    resumed_at: Option<Instant>,
}

impl HostClock {
    /// A suspended clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> f64 {
        let running = self.resumed_at.map(|t| t.elapsed()).unwrap_or_default();
        (self.accumulated + running).as_secs_f64()
    }

    pub fn is_running(&self) -> bool {
        self.resumed_at.is_some()
    }

    pub fn resume(&mut self) {
        if self.resumed_at.is_none() {
            self.resumed_at = Some(Instant::now());
        }
    }

    pub fn suspend(&mut self) {
        if let Some(started) = self.resumed_at.take() {
            self.accumulated += started.elapsed();
        }
    }
}
