//! Playback handle resource.
//!
//! The audio thread owns the actual music streams; this resource mirrors the
//! one piece of state the main thread must agree on: which track, if any, is
//! currently playing. At most one track is live at a time. Starting a second
//! track without stopping the first is refused; callers that switch tracks
//! (the drop trigger) stop explicitly first.

use crate::events::audio::AudioCmd;
use crate::resources::assets::TRACK_WAITING;
use bevy_ecs::prelude::Resource;
use log::warn;

/// The at-most-one currently playing music track.
#[derive(Resource, Debug, Default)]
pub struct Playback {
    current: Option<String>,
}

impl Playback {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Name of the playing track, if any.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_playing(&self) -> bool {
        self.current.is_some()
    }

    /// Start looped playback of `name` from idle.
    ///
    /// Returns the command to forward to the audio thread, or `None` if a
    /// track is already playing (the request is refused, not queued).
    pub fn play(&mut self, name: &str) -> Option<AudioCmd> {
        if let Some(current) = &self.current {
            warn!("Refusing to play '{}' while '{}' is active", name, current);
            return None;
        }
        self.current = Some(name.to_string());
        Some(AudioCmd::PlayMusic {
            id: name.to_string(),
            looped: true,
        })
    }

    /// Stop the active track, if any, and clear the handle.
    pub fn stop(&mut self) -> Option<AudioCmd> {
        self.current
            .take()
            .map(|id| AudioCmd::StopMusic { id })
    }

    /// From idle start the waiting track, otherwise stop.
    pub fn toggle(&mut self) -> Option<AudioCmd> {
        if self.is_playing() {
            self.stop()
        } else {
            self.play(TRACK_WAITING)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_from_idle_starts_waiting_track() {
        let mut playback = Playback::new();
        let cmd = playback.toggle();
        assert!(matches!(
            cmd,
            Some(AudioCmd::PlayMusic { ref id, looped: true }) if id == TRACK_WAITING
        ));
        assert_eq!(playback.current(), Some(TRACK_WAITING));
    }

    #[test]
    fn toggle_twice_returns_to_idle() {
        let mut playback = Playback::new();
        playback.toggle();
        let cmd = playback.toggle();
        assert!(matches!(
            cmd,
            Some(AudioCmd::StopMusic { ref id }) if id == TRACK_WAITING
        ));
        assert!(!playback.is_playing());
    }

    #[test]
    fn play_is_refused_while_busy() {
        let mut playback = Playback::new();
        assert!(playback.play("waiting").is_some());
        assert!(playback.play("outro").is_none());
        assert_eq!(playback.current(), Some("waiting"));
    }

    #[test]
    fn stop_from_idle_is_a_no_op() {
        let mut playback = Playback::new();
        assert!(playback.stop().is_none());
    }
}
