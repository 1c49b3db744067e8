//! Loading pipeline integration tests: asset progress bookkeeping, the audio
//! bridge systems, the Loading → Running transition, and scene spawning.

use bevy_ecs::prelude::*;
use crossbeam_channel::unbounded;

use skyclock::components::clocktext::ClockText;
use skyclock::components::hinttext::HintText;
use skyclock::components::parallaxlayer::ParallaxLayer;
use skyclock::components::zindex::ZIndex;
use skyclock::events::appstate::observe_appstate_change_event;
use skyclock::events::audio::{AudioCmd, AudioMessage};
use skyclock::resources::appstate::{AppState, AppStates, NextAppState, NextAppStates};
use skyclock::resources::assets::AssetStore;
use skyclock::resources::audio::AudioBridge;
use skyclock::resources::systemsstore::SystemsStore;
use skyclock::systems::appstate::check_pending_state;
use skyclock::systems::assets::{check_assets_ready, track_music_loaded};
use skyclock::systems::audio::{
    forward_audio_cmds, update_bevy_audio_cmds, update_bevy_audio_messages,
};
use skyclock::systems::scene::{PARALLAX_LAYERS, enter_scene};

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(AppState::new());
    world.insert_resource(NextAppState::new());
    world.init_resource::<Messages<AudioCmd>>();
    world.init_resource::<Messages<AudioMessage>>();
    world
}

fn tick_audio_messages(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((update_bevy_audio_messages, track_music_loaded).chain());
    schedule.run(world);
}

fn tick_audio_cmds(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((update_bevy_audio_cmds, forward_audio_cmds).chain());
    schedule.run(world);
}

fn tick_check_assets_ready(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(check_assets_ready);
    schedule.run(world);
}

fn tick_check_pending_state(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(check_pending_state);
    schedule.run(world);
}

fn tick_enter_scene(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(enter_scene);
    schedule.run(world);
}

// =============================================================================
// Asset progress
// =============================================================================

#[test]
fn music_loaded_messages_advance_progress() {
    let mut world = make_world();
    world.insert_resource(AssetStore::with_total(2));

    world
        .resource_mut::<Messages<AudioMessage>>()
        .write(AudioMessage::MusicLoaded {
            id: "waiting".to_string(),
        });

    tick_audio_messages(&mut world);

    let assets = world.resource::<AssetStore>();
    assert_eq!(assets.progress(), 0.5);
    assert!(!assets.ready());
}

#[test]
fn music_load_failure_latches_the_store() {
    let mut world = make_world();
    world.insert_resource(AssetStore::with_total(2));

    world
        .resource_mut::<Messages<AudioMessage>>()
        .write(AudioMessage::MusicLoadFailed {
            id: "outro".to_string(),
            error: "no such file".to_string(),
        });
    world
        .resource_mut::<Messages<AudioMessage>>()
        .write(AudioMessage::MusicLoaded {
            id: "waiting".to_string(),
        });

    tick_audio_messages(&mut world);

    let assets = world.resource::<AssetStore>();
    assert!(assets.failure().is_some());
    assert!(!assets.ready());
}

// =============================================================================
// Audio bridge
// =============================================================================

#[test]
fn audio_cmds_are_forwarded_over_the_channel() {
    let mut world = make_world();

    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    let (_tx_msg, rx_msg) = unbounded();
    let handle = std::thread::spawn(|| {});
    world.insert_resource(AudioBridge {
        tx_cmd,
        rx_msg,
        handle,
    });

    world
        .resource_mut::<Messages<AudioCmd>>()
        .write(AudioCmd::PlayMusic {
            id: "waiting".to_string(),
            looped: true,
        });

    tick_audio_cmds(&mut world);

    let forwarded = rx_cmd.try_recv().expect("command was not forwarded");
    assert!(matches!(
        forwarded,
        AudioCmd::PlayMusic { ref id, looped: true } if id == "waiting"
    ));
    assert!(rx_cmd.try_recv().is_err());
}

// =============================================================================
// Loading → Running
// =============================================================================

#[test]
fn ready_assets_request_the_running_state() {
    let mut world = make_world();
    let mut assets = AssetStore::with_total(1);
    assets.mark_loaded("sky");
    world.insert_resource(assets);

    tick_check_assets_ready(&mut world);

    assert_eq!(
        *world.resource::<NextAppState>().get(),
        NextAppStates::Pending(AppStates::Running)
    );
}

#[test]
fn pending_assets_do_not_request_a_transition() {
    let mut world = make_world();
    world.insert_resource(AssetStore::with_total(1));

    tick_check_assets_ready(&mut world);

    assert_eq!(
        *world.resource::<NextAppState>().get(),
        NextAppStates::Unchanged
    );
}

#[test]
fn state_transition_runs_the_scene_enter_hook() {
    let mut world = make_world();

    let mut systems_store = SystemsStore::new();
    let enter_scene_system_id = world.register_system(enter_scene);
    systems_store.insert("enter_scene", enter_scene_system_id);
    world.insert_resource(systems_store);

    world.add_observer(observe_appstate_change_event);
    world.flush();

    world.resource_mut::<NextAppState>().set(AppStates::Running);
    tick_check_pending_state(&mut world);

    assert_eq!(*world.resource::<AppState>().get(), AppStates::Running);
    assert_eq!(
        *world.resource::<NextAppState>().get(),
        NextAppStates::Unchanged
    );

    // The hook spawned the scene.
    let mut q = world.query::<&ParallaxLayer>();
    assert_eq!(q.iter(&world).count(), PARALLAX_LAYERS.len());
}

// =============================================================================
// Scene spawning
// =============================================================================

#[test]
fn scene_spawns_layers_back_to_front() {
    let mut world = make_world();
    tick_enter_scene(&mut world);

    let mut q = world.query::<(&ParallaxLayer, &ZIndex)>();
    let mut layers: Vec<(String, i32)> = q
        .iter(&world)
        .map(|(layer, z)| (layer.tex_key.clone(), z.0))
        .collect();
    layers.sort_by_key(|(_, z)| *z);

    let keys: Vec<&str> = layers.iter().map(|(key, _)| key.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "sky",
            "far-clouds",
            "near-clouds",
            "far-mountains",
            "mountains",
            "trees"
        ]
    );
    // Back-to-front: z strictly increasing from the sky outwards.
    for (i, (_, z)) in layers.iter().enumerate() {
        assert_eq!(*z, i as i32);
    }
}

#[test]
fn scene_spawns_one_clock_and_one_hint() {
    let mut world = make_world();
    tick_enter_scene(&mut world);

    let mut clocks = world.query::<&ClockText>();
    assert_eq!(clocks.iter(&world).count(), 1);
    let clock = clocks.iter(&world).next().unwrap();
    assert!(clock.content.is_empty()); // filled in on the first frame
    assert_eq!(clock.font_size, 48.0);

    let mut hints = world.query::<&HintText>();
    assert_eq!(hints.iter(&world).count(), 1);
}
