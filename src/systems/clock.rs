//! Clock readout system.

use crate::components::clocktext::ClockText;
use crate::resources::clock::WallClock;
use bevy_ecs::prelude::*;

/// Rewrite the clock readout from the corrected wall clock.
///
/// Runs every frame while the scene is up; the readout is 24-hour
/// `HH:MM:SS` in the local timezone.
pub fn update_clock_text(clock: Res<WallClock>, mut query: Query<&mut ClockText>) {
    let now = clock.now();
    for mut text in &mut query {
        text.set_content(now.format("%H:%M:%S").to_string());
    }
}
