//! Corrected wall clock resource.
//!
//! [`WallClock`] applies a fixed offset, obtained once from an external time
//! reference at startup, to the local clock. Until (and unless) the sync
//! succeeds the offset is zero and the displayed time is simply the local
//! time. There is no re-synchronization: local clock drift after the fetch
//! is reflected in full, corrected only by the one-shot offset.

use bevy_ecs::prelude::Resource;
use chrono::{DateTime, Duration, Local};

/// Local wall clock plus a one-shot correction offset.
#[derive(Resource, Debug, Clone)]
pub struct WallClock {
    offset: Duration,
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClock {
    /// Create a clock with a zero offset (uncorrected local time).
    pub fn new() -> Self {
        Self {
            offset: Duration::zero(),
        }
    }

    /// Install the offset computed by the time-sync thread.
    pub fn set_offset(&mut self, offset: Duration) {
        self.offset = offset;
    }

    /// The currently applied offset.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn offset(&self) -> Duration {
        self.offset
    }

    /// Corrected current time, recomputed fresh on every call.
    pub fn now(&self) -> DateTime<Local> {
        Local::now() + self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_tracks_local_clock_with_constant_offset() {
        let mut clock = WallClock::new();
        clock.set_offset(Duration::hours(1));

        let a = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(20));
        let b = clock.now();

        // Two quick calls differ by roughly the elapsed interval.
        let elapsed = b - a;
        assert!(elapsed >= Duration::milliseconds(20));
        assert!(elapsed < Duration::seconds(1));

        // The offset itself does not move between calls.
        assert_eq!(clock.offset(), Duration::hours(1));
    }

    #[test]
    fn zero_offset_matches_local_time() {
        let clock = WallClock::new();
        let delta = clock.now() - Local::now();
        assert!(delta.abs() < Duration::seconds(1));
    }
}
