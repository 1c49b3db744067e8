//! Screensaver systems.
//!
//! This module groups the ECS systems that advance loading, input, the drop
//! trigger, and rendering.
//!
//! Submodules overview
//! - [`appstate`] – check for pending state transitions and trigger events
//! - [`assets`] – upload loaded images, track music loads, detect readiness
//! - [`audio`] – the audio thread and the bridge systems around it
//! - [`clock`] – refresh the clock readout from the corrected wall clock
//! - [`drop`] – evaluate the drop condition and switch to the outro track
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`render`] – draw the loading screen or the scene using Raylib
//! - [`scene`] – spawn the fixed scene entities when loading completes
//! - [`time`] – update elapsed/delta seconds once per frame
//! - [`timesync`] – one-shot reference-time fetch and its polling system

pub mod appstate;
pub mod assets;
pub mod audio;
pub mod clock;
pub mod drop;
pub mod input;
pub mod render;
pub mod scene;
pub mod time;
pub mod timesync;
