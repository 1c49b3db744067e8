//! ECS resource bridging the main thread with the image loader threads.
//!
//! [`setup_loader`] fires one short-lived thread per manifest image. Each
//! thread reads its file and sends the bytes (or the error) back over a
//! shared channel, then exits; there is no command channel, no cancellation,
//! and nothing to join. The main thread drains the receiver every frame in
//! [`crate::systems::assets::upload_loaded_images`].

use crate::events::loader::LoaderMsg;
use crate::resources::assets::IMAGE_MANIFEST;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, unbounded};
use log::debug;

/// Receiving end of the one-shot image loader threads.
#[derive(Resource)]
pub struct LoaderBridge {
    /// Receiver for [`LoaderMsg`] results (loader threads -> ECS).
    pub rx: Receiver<LoaderMsg>,
}

/// Spawn one reader thread per manifest image and register the bridge.
///
/// Every load is initiated concurrently; results arrive in completion order.
pub fn setup_loader(world: &mut World) {
    let (tx, rx) = unbounded::<LoaderMsg>();

    for (id, path) in IMAGE_MANIFEST {
        let tx = tx.clone();
        std::thread::spawn(move || {
            debug!("Reading image '{}' from {}", id, path);
            let msg = match std::fs::read(path) {
                Ok(bytes) => LoaderMsg::ImageBytes { id, bytes },
                Err(e) => LoaderMsg::ImageFailed {
                    id,
                    error: e.to_string(),
                },
            };
            let _ = tx.send(msg);
        });
    }

    world.insert_resource(LoaderBridge { rx });
}
