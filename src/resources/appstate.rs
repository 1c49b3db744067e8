//! High-level app state resources.
//!
//! These resources track the authoritative current state of the app and any
//! pending transition requested by systems. See
//! `crate::events::appstate::observe_appstate_change_event` for how a
//! transition is applied and hooks are invoked.

use bevy_ecs::prelude::Resource;

/// Discrete high-level states the screensaver can be in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AppStates {
    /// Assets are still resolving; the loading screen draws.
    #[default]
    Loading,
    /// Everything loaded; the scene draws and the drop trigger runs.
    Running,
}

/// Representation of a requested next state.
///
/// Use [`NextAppState::set`] to mark a transition as pending; an observer
/// will later apply it and reset the value to [`NextAppStates::Unchanged`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NextAppStates {
    #[default]
    Unchanged,
    Pending(AppStates),
}

/// Authoritative current app state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AppState {
    current: AppStates,
}

impl AppState {
    /// Create a new state initialized to [`AppStates::Loading`].
    pub fn new() -> Self {
        AppState {
            current: AppStates::Loading,
        }
    }

    /// Read-only access to the current state.
    pub fn get(&self) -> &AppStates {
        &self.current
    }

    /// Update the current state immediately.
    ///
    /// Prefer requesting transitions via [`NextAppState`] and the event
    /// observer when enter hooks must be triggered.
    pub fn set(&mut self, state: AppStates) {
        self.current = state;
    }
}

/// Intent to change to a new app state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NextAppState {
    next: NextAppStates,
}

impl NextAppState {
    /// Create a new value initialized to [`NextAppStates::Unchanged`].
    pub fn new() -> Self {
        NextAppState {
            next: NextAppStates::Unchanged,
        }
    }

    /// Get the current transition request.
    pub fn get(&self) -> &NextAppStates {
        &self.next
    }

    /// Request a transition to `next` by marking it as pending.
    ///
    /// The `check_pending_state` system will emit the state change event.
    pub fn set(&mut self, next: AppStates) {
        self.next = NextAppStates::Pending(next);
    }

    /// Reset to [`NextAppStates::Unchanged`].
    pub fn reset(&mut self) {
        self.next = NextAppStates::Unchanged;
    }
}
