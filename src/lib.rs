//! Skyclock library.
//!
//! This module exposes the screensaver's ECS components, resources, systems,
//! and events for use in integration tests.

pub mod components;
pub mod events;
pub mod resources;
pub mod systems;
