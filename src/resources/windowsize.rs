//! Window size resource.
//!
//! Tracks the current window dimensions in pixels, refreshed every frame so
//! a resize takes effect before the next draw. All scene proportions derive
//! from the window height via [`WindowSize::vertical_scale`].

use bevy_ecs::prelude::Resource;

/// Logical height the backdrop art and clock were authored against.
pub const REFERENCE_HEIGHT: f32 = 240.0;

/// Current window size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl WindowSize {
    /// Uniform scale factor applied to tile widths and the clock font:
    /// window height over the reference height.
    pub fn vertical_scale(&self) -> f32 {
        self.h as f32 / REFERENCE_HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_one_at_reference_height() {
        let size = WindowSize { w: 320, h: 240 };
        assert_eq!(size.vertical_scale(), 1.0);
    }

    #[test]
    fn scale_follows_window_height() {
        let size = WindowSize { w: 1920, h: 1080 };
        assert_eq!(size.vertical_scale(), 4.5);
    }
}
