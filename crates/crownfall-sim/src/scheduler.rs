//! Frame clock: turns host frame timestamps into simulation deltas.
//!
//! The host calls `frame` once per rendered frame, paused or not. While the
//! match is not running the baseline keeps moving, so resuming never applies
//! the time spent paused.

use crownfall_core::constants::MAX_FRAME_DT;

#[derive(Debug, Clone)]
pub struct FrameClock {
    last_timestamp_secs: Option<f64>,
    max_dt: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DT)
    }
}

impl FrameClock {
    pub fn new(max_dt: f64) -> Self {
        Self {
            last_timestamp_secs: None,
            max_dt,
        }
    }

    /// Record a frame at `timestamp_secs`. Returns the delta to simulate when
    /// `running`, or `None` when the frame should do no simulation work.
    pub fn frame(&mut self, timestamp_secs: f64, running: bool) -> Option<f64> {
        let previous = self.last_timestamp_secs.replace(timestamp_secs);
        if !running {
            return None;
        }
        let dt = match previous {
            Some(prev) => (timestamp_secs - prev).clamp(0.0, self.max_dt),
            None => 0.0,
        };
        Some(dt)
    }

    /// Forget the baseline; the next running frame simulates zero time.
    pub fn resync(&mut self) {
        self.last_timestamp_secs = None;
    }

    pub fn last_timestamp(&self) -> Option<f64> {
        self.last_timestamp_secs
    }
}
