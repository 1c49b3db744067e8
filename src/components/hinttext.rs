//! Instructions hint component.

use bevy_ecs::prelude::Component;

/// The "Click anywhere to toggle music" hint near the bottom of the window.
///
/// The hint is only drawn while the [`Instructions`] marker resource is
/// present; its opacity pulses with a sine of elapsed time. Purely cosmetic.
///
/// [`Instructions`]: crate::resources::instructions::Instructions
#[derive(Component, Clone, Debug)]
pub struct HintText {
    /// The hint string to render.
    pub content: String,
    /// Font store key.
    pub font: String,
    /// Font size in pixels (not scaled with the window).
    pub font_size: f32,
}

impl HintText {
    pub fn new(content: impl Into<String>, font: impl Into<String>, font_size: f32) -> Self {
        Self {
            content: content.into(),
            font: font.into(),
            font_size,
        }
    }
}
