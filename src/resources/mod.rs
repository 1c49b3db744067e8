//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: asset bookkeeping, timing, audio
//! and loader bridges, configuration, and input state. Each submodule
//! documents the semantics and intended usage of its resource(s).
//!
//! Overview
//! - `appconfig` – window configuration loaded from an INI file
//! - `appstate` – authoritative and pending high-level app state
//! - `assets` – the fixed asset manifest and aggregate load progress
//! - `audio` – bridge and channels for the background audio thread
//! - `clock` – corrected wall clock (local time plus a one-shot offset)
//! - `fontstore` – loaded fonts keyed by string IDs
//! - `fullscreen` – presence marks the window as fullscreen
//! - `input` – per-frame pointer/keyboard state of inputs the app cares about
//! - `instructions` – presence keeps the "click to toggle music" hint visible
//! - `loader` – receiving end of the one-shot image loader threads
//! - `outro` – edge-detecting state for the drop trigger
//! - `playback` – the at-most-one currently playing music track
//! - `settings` – persisted drop-timing setting
//! - `systemsstore` – registry of dynamically-lookup-able systems by name
//! - `texturestore` – loaded textures keyed by string IDs
//! - `timesync` – receiving end of the one-shot time-sync thread
//! - `windowsize` – current window dimensions and the derived scale factor
//! - `worldtime` – frame time and seconds elapsed since startup

pub mod appconfig;
pub mod appstate;
pub mod assets;
pub mod audio;
pub mod clock;
pub mod fontstore;
pub mod fullscreen;
pub mod input;
pub mod instructions;
pub mod loader;
pub mod outro;
pub mod playback;
pub mod settings;
pub mod systemsstore;
pub mod texturestore;
pub mod timesync;
pub mod windowsize;
pub mod worldtime;
