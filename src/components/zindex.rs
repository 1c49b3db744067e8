//! Z-index component for render ordering.
//!
//! The [`ZIndex`] component controls the drawing order of scene entities.
//! Entities with higher z-index values are drawn on top of those with lower
//! values.

use bevy_ecs::prelude::Component;

/// Rendering order hint for 2D drawing.
///
/// Higher values are drawn later (on top). The renderer sorts by `ZIndex`
/// to achieve a painter's algorithm.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
