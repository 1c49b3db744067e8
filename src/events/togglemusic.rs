//! Music toggle event and observer.
//!
//! A mouse click while the scene is running triggers [`ToggleMusicEvent`].
//! The observer dismisses the instructions overlay (first click only, as a
//! side effect of removing the marker resource) and flips playback: from
//! idle it starts the looped waiting track, otherwise it stops whatever is
//! playing.

use crate::events::audio::AudioCmd;
use crate::resources::instructions::Instructions;
use crate::resources::playback::Playback;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

/// Event triggered by a mouse click to toggle ambient playback.
#[derive(Event, Debug, Clone, Copy)]
pub struct ToggleMusicEvent {}

/// Observer that dismisses the hint and toggles playback.
pub fn toggle_music_observer(
    _trigger: On<ToggleMusicEvent>,
    mut commands: Commands,
    mut playback: ResMut<Playback>,
    mut cmd_writer: MessageWriter<AudioCmd>,
) {
    debug!("ToggleMusicEvent triggered");
    commands.remove_resource::<Instructions>();
    if let Some(cmd) = playback.toggle() {
        cmd_writer.write(cmd);
    }
}
