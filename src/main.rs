//! Skyclock main entry point.
//!
//! A parallax clock screensaver written in Rust using:
//! - **raylib** for windowing, graphics, and audio
//! - **bevy_ecs** for the per-frame world and systems
//!
//! The window shows a tiled mountain backdrop with a large digital clock,
//! synced once at startup against an external time reference. A click
//! toggles looped ambient music; at the configured drop instant (every
//! minute, every hour, or New Year's Eve) playback switches to the outro
//! track.
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, ECS world, and resources
//! 2. Spawn the audio, image loader, and time-sync threads
//! 3. Register observers and systems
//! 4. Run the frame loop:
//!    - Fold thread results into the world (assets, time offset)
//!    - Poll input, advance the drop trigger
//!    - Render the loading screen or the scene
//! 5. Clean up the audio thread on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod resources;
mod systems;

use crate::events::appstate::observe_appstate_change_event;
use crate::events::cycletiming::cycle_drop_timing_observer;
use crate::events::switchfullscreen::switch_fullscreen_observer;
use crate::events::togglemusic::toggle_music_observer;
use crate::resources::appconfig::AppConfig;
use crate::resources::appstate::{AppState, NextAppState};
use crate::resources::assets::AssetStore;
use crate::resources::audio::{setup_audio, shutdown_audio};
use crate::resources::clock::WallClock;
use crate::resources::fontstore::FontStore;
use crate::resources::input::InputState;
use crate::resources::instructions::Instructions;
use crate::resources::outro::OutroState;
use crate::resources::playback::Playback;
use crate::resources::settings::{DropTiming, Settings};
use crate::resources::systemsstore::SystemsStore;
use crate::resources::texturestore::TextureStore;
use crate::resources::timesync::setup_time_sync;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::appstate::{check_pending_state, state_is_running};
use crate::systems::assets::{
    begin_asset_load, check_assets_ready, track_music_loaded, upload_loaded_images,
};
use crate::systems::audio::{
    forward_audio_cmds, poll_audio_messages, update_bevy_audio_cmds, update_bevy_audio_messages,
};
use crate::systems::clock::update_clock_text;
use crate::systems::drop::drop_trigger;
use crate::systems::input::update_input_state;
use crate::systems::render::render_frame;
use crate::systems::scene::{FONT_KEY, enter_scene};
use crate::systems::time::update_world_time;
use crate::systems::timesync::poll_time_sync;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::warn;
use std::path::PathBuf;

const FONT_PATH: &str = "./assets/fonts/Orbitron-Bold.ttf";

/// Skyclock parallax screensaver
#[derive(Parser)]
#[command(version, about = "An animated parallax clock with a New Year countdown drop.")]
struct Cli {
    /// Path to the window configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to the user settings file (default: ./settings.ini).
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Override the drop timing for this run: minute, hour, or year.
    /// The override is not saved.
    #[arg(long, value_name = "TIMING")]
    drop_timing: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Configuration & settings ---------------
    let mut config = match &cli.config {
        Some(path) => AppConfig::with_path(path),
        None => AppConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults

    let mut settings = Settings::load(
        cli.settings
            .clone()
            .unwrap_or_else(|| Settings::default().settings_path),
    );
    if let Some(timing) = &cli.drop_timing {
        match DropTiming::parse(timing) {
            Some(timing) => settings.drop_timing = timing,
            None => warn!("Unknown drop timing '{}', keeping '{}'", timing,
                settings.drop_timing.as_str()),
        }
    }
    log::info!("Drop timing: {}", settings.drop_timing.as_str());

    // --------------- Raylib window & fonts ---------------
    let window_width = config.window_width;
    let window_height = config.window_height;

    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Skyclock")
        .build();
    rl.set_target_fps(config.target_fps);

    let mut fonts = FontStore::new();
    match rl.load_font(&thread, FONT_PATH) {
        Ok(font) => fonts.add(FONT_KEY, font),
        Err(e) => warn!("Failed to load font '{}' ({}), using the built-in font", FONT_PATH, e),
    }

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(config);
    world.insert_resource(settings);
    world.insert_resource(InputState::default());
    world.insert_resource(WallClock::new());
    world.insert_resource(AssetStore::new());
    world.insert_resource(TextureStore::new());
    world.insert_resource(Playback::new());
    world.insert_resource(OutroState::new());
    world.insert_resource(Instructions);
    world.insert_resource(AppState::new());
    world.insert_resource(NextAppState::new());
    world.insert_non_send_resource(fonts);

    // Background threads: audio first (asset loading sends it commands),
    // then the image readers and the one-shot time sync.
    setup_audio(&mut world);
    setup_time_sync(&mut world);

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    begin_asset_load(&mut world);

    // --------------- State machinery & observers ---------------
    let mut systems_store = SystemsStore::new();
    let enter_scene_system_id = world.register_system(enter_scene);
    systems_store.insert("enter_scene", enter_scene_system_id);
    world.insert_resource(systems_store);

    world.spawn(Observer::new(observe_appstate_change_event));
    world.spawn(Observer::new(toggle_music_observer));
    world.spawn(Observer::new(cycle_drop_timing_observer));
    world.spawn(Observer::new(switch_fullscreen_observer));
    // Ensure observers are registered before any system triggers events.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(check_pending_state);
    update.add_systems(
        // audio systems must stay together and ordered
        (
            update_bevy_audio_cmds,
            forward_audio_cmds,
            poll_audio_messages,
            update_bevy_audio_messages,
        )
            .chain(),
    );
    update.add_systems(poll_time_sync);
    update.add_systems(upload_loaded_images);
    update.add_systems(track_music_loaded.after(update_bevy_audio_messages));
    update.add_systems(
        check_assets_ready
            .after(upload_loaded_images)
            .after(track_music_loaded),
    );
    update.add_systems(update_clock_text.run_if(state_is_running));
    update.add_systems(drop_trigger.run_if(state_is_running));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);
        render_frame(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        // Update window size each frame (may change due to resize)
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut window_size = world.resource_mut::<WindowSize>();
            window_size.w = new_w;
            window_size.h = new_h;
        }
    }
    shutdown_audio(&mut world);
}
