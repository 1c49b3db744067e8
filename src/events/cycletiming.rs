//! Drop-timing cycle event and observer.
//!
//! Pressing **D** triggers [`CycleDropTimingEvent`]. The observer advances
//! the drop timing one step (minute → hour → year → minute) and saves the
//! settings file immediately, replacing the whole record.

use crate::resources::settings::Settings;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{error, info};

/// Event triggered to advance the drop-timing setting.
#[derive(Event, Debug, Clone, Copy)]
pub struct CycleDropTimingEvent {}

/// Observer that cycles [`Settings::drop_timing`] and persists the change.
pub fn cycle_drop_timing_observer(
    _trigger: On<CycleDropTimingEvent>,
    mut settings: ResMut<Settings>,
) {
    settings.drop_timing = settings.drop_timing.next();
    info!("Drop timing set to {}", settings.drop_timing.as_str());
    if let Err(e) = settings.save() {
        error!("Failed to save settings: {e}");
    }
}
