//! Instructions overlay marker resource.
//!
//! Present from startup until the first click; while present, the renderer
//! draws the pulsing "Click anywhere to toggle music" hint. The toggle-music
//! observer removes it, which is what dismisses the overlay for good.

use bevy_ecs::prelude::Resource;

/// Marker resource: present while the instructions hint should be shown.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Instructions;
