//! Asset loading systems.
//!
//! Loading is fan-out/fan-in: [`begin_asset_load`] initiates every image
//! read (one thread per file) and every music decode (on the audio thread)
//! concurrently, then the per-frame systems here fold completions back into
//! the [`AssetStore`] counter that drives the loading screen. When the
//! counter reaches the manifest total the app transitions to Running.
//!
//! GPU uploads cannot leave the main thread, so image bytes come back raw
//! and [`upload_loaded_images`] decodes and uploads them here.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::events::loader::LoaderMsg;
use crate::resources::appstate::{AppState, AppStates, NextAppState};
use crate::resources::assets::{AssetStore, MUSIC_MANIFEST};
use crate::resources::audio::AudioBridge;
use crate::resources::loader::{LoaderBridge, setup_loader};
use crate::resources::texturestore::TextureStore;
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::*;

/// Kick off every asset load at once.
///
/// Spawns the image reader threads and queues a `LoadMusic` command per
/// track to the already-running audio thread. Called once from `main`
/// before the frame loop starts.
pub fn begin_asset_load(world: &mut World) {
    setup_loader(world);

    let bridge = world.resource::<AudioBridge>();
    for (id, path) in MUSIC_MANIFEST {
        let _ = bridge.tx_cmd.send(AudioCmd::LoadMusic {
            id: id.to_string(),
            path: path.to_string(),
        });
    }
}

/// Decode and upload image bytes delivered by the loader threads.
///
/// Exclusive system: the GL upload needs both the raylib handle and thread,
/// so they are temporarily taken out of the world while drawing-free. Each
/// successful upload bumps the asset counter; a failed read or decode marks
/// the store failed and loading never completes.
pub fn upload_loaded_images(world: &mut World) {
    let msgs: Vec<LoaderMsg> = world.resource::<LoaderBridge>().rx.try_iter().collect();
    if msgs.is_empty() {
        return;
    }

    let mut rl = world
        .remove_non_send_resource::<raylib::RaylibHandle>()
        .expect("raylib handle missing from world");
    let thread = world
        .remove_non_send_resource::<raylib::RaylibThread>()
        .expect("raylib thread missing from world");

    for msg in msgs {
        match msg {
            LoaderMsg::ImageBytes { id, bytes } => {
                let image = match Image::load_image_from_mem(".png", &bytes) {
                    Ok(image) => image,
                    Err(e) => {
                        world
                            .resource_mut::<AssetStore>()
                            .mark_failed(id, &e.to_string());
                        continue;
                    }
                };
                match rl.load_texture_from_image(&thread, &image) {
                    Ok(texture) => {
                        world.resource_mut::<TextureStore>().insert(id, texture);
                        world.resource_mut::<AssetStore>().mark_loaded(id);
                    }
                    Err(e) => {
                        world
                            .resource_mut::<AssetStore>()
                            .mark_failed(id, &e.to_string());
                    }
                }
            }
            LoaderMsg::ImageFailed { id, error } => {
                world.resource_mut::<AssetStore>().mark_failed(id, &error);
            }
        }
    }

    world.insert_non_send_resource(thread);
    world.insert_non_send_resource(rl);
}

/// Fold audio thread load replies into the asset counter.
pub fn track_music_loaded(
    mut reader: MessageReader<AudioMessage>,
    mut assets: ResMut<AssetStore>,
) {
    for msg in reader.read() {
        match msg {
            AudioMessage::MusicLoaded { id } => assets.mark_loaded(id),
            AudioMessage::MusicLoadFailed { id, error } => assets.mark_failed(id, error),
            _ => {}
        }
    }
}

/// Request the Loading → Running transition once every asset resolved.
pub fn check_assets_ready(
    assets: Res<AssetStore>,
    state: Res<AppState>,
    mut next_state: ResMut<NextAppState>,
) {
    if matches!(state.get(), AppStates::Loading) && assets.ready() {
        info!("All assets loaded");
        next_state.set(AppStates::Running);
    }
}
