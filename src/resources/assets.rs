//! Asset manifest and aggregate load progress.
//!
//! The manifest is a fixed mapping of logical names to file paths, consumed
//! read-only at startup: six backdrop layers and two music tracks. The
//! [`AssetStore`] resource counts resolutions against that fixed total and
//! publishes the progress shown by the loading screen. Images resolve on the
//! main thread (see [`crate::systems::assets`]); music tracks resolve on the
//! audio thread and report back as messages.

use bevy_ecs::prelude::Resource;
use log::{debug, error};

/// Logical name of the ambient track played while waiting for the drop.
pub const TRACK_WAITING: &str = "waiting";
/// Logical name of the track played when the drop moment arrives.
pub const TRACK_OUTRO: &str = "outro";

/// Backdrop image layers: logical name → file path.
pub const IMAGE_MANIFEST: [(&str, &str); 6] = [
    ("sky", "./assets/sprites/sky.png"),
    ("far-clouds", "./assets/sprites/far-clouds.png"),
    ("near-clouds", "./assets/sprites/near-clouds.png"),
    ("far-mountains", "./assets/sprites/far-mountains.png"),
    ("mountains", "./assets/sprites/mountains.png"),
    ("trees", "./assets/sprites/trees.png"),
];

/// Music tracks: logical name → file path.
pub const MUSIC_MANIFEST: [(&str, &str); 2] = [
    (TRACK_WAITING, "./assets/music/waiting.mp3"),
    (TRACK_OUTRO, "./assets/music/outro.mp3"),
];

/// Aggregate load progress over every manifest entry.
///
/// `done` only ever increases, so `progress()` is monotonically
/// non-decreasing: it starts at 0.0 and reaches exactly 1.0 when, and only
/// when, every entry has resolved. Any load failure latches `failed` and the
/// store never becomes ready; there is no retry and no partial-asset mode.
#[derive(Resource, Debug)]
pub struct AssetStore {
    total: usize,
    done: usize,
    failed: Option<String>,
}

impl Default for AssetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetStore {
    /// Create a store sized for the full manifest.
    pub fn new() -> Self {
        Self {
            total: IMAGE_MANIFEST.len() + MUSIC_MANIFEST.len(),
            done: 0,
            failed: None,
        }
    }

    /// Create a store expecting `total` assets.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_total(total: usize) -> Self {
        Self {
            total,
            done: 0,
            failed: None,
        }
    }

    /// Record one resolved asset.
    pub fn mark_loaded(&mut self, id: &str) {
        if self.done < self.total {
            self.done += 1;
        }
        debug!("Asset '{}' loaded ({}/{})", id, self.done, self.total);
    }

    /// Record a terminal load failure. The first failure wins.
    pub fn mark_failed(&mut self, id: &str, error: &str) {
        error!("Failed to load asset '{}': {}", id, error);
        if self.failed.is_none() {
            self.failed = Some(format!("{id}: {error}"));
        }
    }

    /// Fraction of the manifest resolved so far, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.total == 0 {
            return 1.0;
        }
        self.done as f32 / self.total as f32
    }

    /// True once every manifest entry resolved without failure.
    pub fn ready(&self) -> bool {
        self.done == self.total && self.failed.is_none()
    }

    /// The first recorded failure, if any.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn failure(&self) -> Option<&str> {
        self.failed.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_starts_at_zero() {
        let store = AssetStore::with_total(4);
        assert_eq!(store.progress(), 0.0);
        assert!(!store.ready());
    }

    #[test]
    fn progress_is_monotonic_and_reaches_one() {
        let mut store = AssetStore::with_total(4);
        let mut last = store.progress();
        for i in 0..4 {
            store.mark_loaded("asset");
            let p = store.progress();
            assert!(p >= last, "progress decreased at step {i}");
            last = p;
        }
        assert_eq!(store.progress(), 1.0);
        assert!(store.ready());
    }

    #[test]
    fn ready_requires_every_entry() {
        let mut store = AssetStore::with_total(2);
        store.mark_loaded("a");
        assert!(!store.ready());
        store.mark_loaded("b");
        assert!(store.ready());
    }

    #[test]
    fn extra_marks_do_not_overflow_progress() {
        let mut store = AssetStore::with_total(1);
        store.mark_loaded("a");
        store.mark_loaded("a");
        assert_eq!(store.progress(), 1.0);
    }

    #[test]
    fn failure_latches_and_blocks_ready() {
        let mut store = AssetStore::with_total(2);
        store.mark_failed("sky", "no such file");
        store.mark_failed("trees", "decode error");
        assert_eq!(store.failure(), Some("sky: no such file"));
        store.mark_loaded("a");
        store.mark_loaded("b");
        assert!(!store.ready());
    }

    #[test]
    fn manifest_total_matches_fixed_asset_set() {
        let store = AssetStore::new();
        assert_eq!(store.total, 8);
    }
}
