//! Per-frame input resource.
//!
//! Captures the handful of inputs the screensaver cares about and exposes
//! them to systems via the [`InputState`] resource: the music-toggle click,
//! the drop-timing cycle key, and the fullscreen toggle key. Key bindings
//! live in [`crate::systems::input`].

use bevy_ecs::prelude::*;

/// Boolean input state refreshed every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolState {
    /// Whether the input is currently held.
    pub active: bool,
    /// Whether the input was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the input was just released this frame.
    pub just_released: bool,
}

/// Resource capturing the per-frame input state relevant to the screensaver.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    /// Left mouse button; toggles ambient playback.
    pub toggle_music: BoolState,
    /// Cycles the drop-timing setting.
    pub cycle_timing: BoolState,
    /// Toggles fullscreen mode.
    pub fullscreen_toggle: BoolState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
    }

    #[test]
    fn test_inputstate_default_all_inactive() {
        let input = InputState::default();
        assert!(!input.toggle_music.active);
        assert!(!input.cycle_timing.active);
        assert!(!input.fullscreen_toggle.active);
        assert!(!input.toggle_music.just_pressed);
        assert!(!input.cycle_timing.just_pressed);
        assert!(!input.fullscreen_toggle.just_pressed);
    }
}
