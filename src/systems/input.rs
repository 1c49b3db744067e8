//! Input systems.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! writes the results into [`crate::resources::input::InputState`], emitting
//! the matching events:
//! - left click → [`ToggleMusicEvent`] (ignored while loading)
//! - **D** → [`CycleDropTimingEvent`]
//! - **F10** → [`SwitchFullScreenEvent`]

use bevy_ecs::prelude::*;
use raylib::prelude::{KeyboardKey, MouseButton};

use crate::events::cycletiming::CycleDropTimingEvent;
use crate::events::switchfullscreen::SwitchFullScreenEvent;
use crate::events::togglemusic::ToggleMusicEvent;
use crate::resources::appstate::{AppState, AppStates};
use crate::resources::input::InputState;

const KEY_CYCLE_TIMING: KeyboardKey = KeyboardKey::KEY_D;
const KEY_FULLSCREEN: KeyboardKey = KeyboardKey::KEY_F10;
const BUTTON_TOGGLE_MUSIC: MouseButton = MouseButton::MOUSE_BUTTON_LEFT;

/// Poll Raylib for input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    state: Res<AppState>,
    rl: NonSendMut<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    input.toggle_music.active = rl.is_mouse_button_down(BUTTON_TOGGLE_MUSIC);
    input.toggle_music.just_pressed = rl.is_mouse_button_pressed(BUTTON_TOGGLE_MUSIC);
    input.toggle_music.just_released = rl.is_mouse_button_released(BUTTON_TOGGLE_MUSIC);

    input.cycle_timing.active = rl.is_key_down(KEY_CYCLE_TIMING);
    input.cycle_timing.just_pressed = rl.is_key_pressed(KEY_CYCLE_TIMING);
    input.cycle_timing.just_released = rl.is_key_released(KEY_CYCLE_TIMING);

    input.fullscreen_toggle.active = rl.is_key_down(KEY_FULLSCREEN);
    input.fullscreen_toggle.just_pressed = rl.is_key_pressed(KEY_FULLSCREEN);
    input.fullscreen_toggle.just_released = rl.is_key_released(KEY_FULLSCREEN);

    // Clicks only mean something once the scene is up.
    if input.toggle_music.just_pressed && matches!(state.get(), AppStates::Running) {
        commands.trigger(ToggleMusicEvent {});
    }

    if input.cycle_timing.just_pressed {
        commands.trigger(CycleDropTimingEvent {});
    }

    if input.fullscreen_toggle.just_pressed {
        commands.trigger(SwitchFullScreenEvent {});
    }
}
