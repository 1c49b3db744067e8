use crate::events::appstate::AppStateChangedEvent;
use crate::resources::appstate::{AppState, AppStates, NextAppState, NextAppStates};
use bevy_ecs::prelude::*;

/// Emit the state change event when a transition is pending.
pub fn check_pending_state(mut commands: Commands, next_state: ResMut<NextAppState>) {
    if let NextAppStates::Pending(_new_state) = next_state.get() {
        commands.trigger(AppStateChangedEvent {});
    }
}

pub fn state_is_running(state: Res<AppState>) -> bool {
    matches!(state.get(), AppStates::Running)
}
