//! ECS resource bridging the main thread with the time-sync thread.
//!
//! [`setup_time_sync`] spawns a single short-lived thread that performs the
//! one-shot reference-time fetch and reports back over a channel; see
//! [`crate::systems::timesync`] for the fetch itself and the polling system.
//! The thread sends exactly one message and exits. No retry, no join.

use crate::events::timesync::TimeSyncMsg;
use crate::systems::timesync::time_sync_thread;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, unbounded};

/// Receiving end of the one-shot time-sync thread.
#[derive(Resource)]
pub struct TimeSyncBridge {
    /// Receiver for the single [`TimeSyncMsg`] result.
    pub rx: Receiver<TimeSyncMsg>,
}

/// Spawn the time-sync thread and register the bridge.
///
/// Startup does not wait on this: the loading screen renders while the fetch
/// is in flight, and the clock uses a zero offset until the result lands.
pub fn setup_time_sync(world: &mut World) {
    let (tx, rx) = unbounded::<TimeSyncMsg>();
    std::thread::spawn(move || time_sync_thread(tx));
    world.insert_resource(TimeSyncBridge { rx });
}
