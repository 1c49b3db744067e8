//! Result message of the one-shot reference-time fetch.
//!
//! The time-sync thread performs exactly one request against the time API
//! and reports back once; see [`crate::systems::timesync`]. There is no
//! re-synchronization for the lifetime of the process.

/// Outcome of the reference-time fetch.
#[derive(Debug)]
pub enum TimeSyncMsg {
    /// The fetch succeeded; apply this fixed offset to the local clock.
    Synced { offset: chrono::Duration },
    /// The fetch or parse failed; the local clock is used uncorrected.
    Failed { error: String },
}
