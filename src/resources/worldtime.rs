//! Frame time resource.
//!
//! Updated once per frame with the raylib frame delta. `elapsed` drives the
//! cosmetic hint pulse; `delta` is the last frame's duration in seconds.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    /// Seconds since startup.
    pub elapsed: f32,
    /// Seconds covered by the last frame.
    pub delta: f32,
}
