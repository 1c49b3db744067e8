//! Parallax backdrop layer component.
//!
//! Each layer references a texture by key and tiles it horizontally across
//! the window, starting at x=0 and repeating at its own logical tile width.
//! Tile widths are expressed at the reference resolution and scaled by the
//! window's vertical scale factor at draw time, so narrower tiles repeat
//! more often and read as a nearer layer. Layers do not scroll.

use bevy_ecs::prelude::Component;

/// A horizontally tiled backdrop layer.
#[derive(Component, Clone, Debug)]
pub struct ParallaxLayer {
    /// Key into the texture store.
    pub tex_key: String,
    /// Logical tile width in reference-resolution pixels, pre-scale.
    pub tile_width: f32,
}

impl ParallaxLayer {
    /// Creates a layer for the given texture key and logical tile width.
    pub fn new(tex_key: impl Into<String>, tile_width: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            tile_width,
        }
    }
}
