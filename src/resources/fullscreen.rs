//! Fullscreen marker resource.
//!
//! Presence of [`FullScreen`] in the world means the window is currently in
//! fullscreen mode. Toggled by the observer in
//! [`crate::events::switchfullscreen`].

use bevy_ecs::prelude::Resource;

/// Marker resource: present while the window is fullscreen.
#[derive(Resource, Debug, Clone, Copy)]
pub struct FullScreen {}
