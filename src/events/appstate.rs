//! App state transition event and observer.
//!
//! Systems request a change to the high-level [`AppStates`] by updating
//! [`NextAppState`]. Emitting an [`AppStateChangedEvent`] then triggers the
//! observer in this module, which applies the transition to [`AppState`]
//! and invokes the enter hook registered in
//! [`crate::resources::systemsstore::SystemsStore`].
//!
//! This decouples the intent to change state from the mechanics of running
//! the enter hooks and avoids borrowing conflicts.

use crate::resources::appstate::NextAppStates::{Pending, Unchanged};
use crate::resources::appstate::{AppState, AppStates, NextAppState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending app state transition should be
/// applied.
///
/// Emitting this event causes [`observe_appstate_change_event`] to read
/// [`NextAppState`]. If it contains [`Pending`], the observer updates the
/// authoritative [`AppState`], runs the enter hook, and clears the pending
/// value; if it is [`Unchanged`], nothing happens.
#[derive(Event, Debug, Clone, Copy)]
pub struct AppStateChangedEvent {}

/// Observer that applies a pending app state transition.
///
/// Contract
/// - Reads the intention from [`NextAppState`].
/// - If pending, copies the new value into [`AppState`], resets
///   [`NextAppState`] to [`Unchanged`], and runs the enter hook for the new
///   state.
/// - If any required resource is missing, logs a diagnostic and returns.
///
/// The enter hooks are executed by looking up system IDs in [`SystemsStore`]
/// under well-known keys (currently `"enter_scene"`).
pub fn observe_appstate_change_event(
    _trigger: On<AppStateChangedEvent>,
    mut commands: Commands,
    mut next_app_state: Option<ResMut<NextAppState>>,
    mut app_state: Option<ResMut<AppState>>,
    systems_store: Res<SystemsStore>,
) {
    debug!("AppStateChangedEvent triggered");

    if let (Some(next_app_state), Some(app_state)) =
        (next_app_state.as_deref_mut(), app_state.as_deref_mut())
    {
        let next_state_value = next_app_state.get().clone();
        match next_state_value {
            Pending(new_state) => {
                info!("Transitioning from {:?} to {:?}", app_state.get(), new_state);
                app_state.set(new_state.clone());
                next_app_state.reset();
                on_state_enter(&new_state, &mut commands, &systems_store);
            }
            Unchanged => {
                debug!("No state change pending.");
            }
        }
    } else {
        warn!(
            "One or more resources missing in observe_appstate_change_event. next_state: {:?}, app_state: {:?}",
            next_app_state.is_some(),
            app_state.is_some()
        );
    }
}

/// Internal: run the "enter" hook for the given state.
fn on_state_enter(state: &AppStates, commands: &mut Commands, systems_store: &SystemsStore) {
    match state {
        AppStates::Loading => debug!("Entered Loading state"),
        AppStates::Running => {
            let enter_scene_system_id = systems_store
                .get("enter_scene")
                .expect("enter_scene system not found in SystemsStore");
            commands.run_system(*enter_scene_system_id);
        }
    }
}
