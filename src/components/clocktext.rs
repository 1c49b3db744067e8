//! Clock readout component.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// The large centered time readout.
///
/// `content` holds the already formatted `HH:MM:SS` string and is rewritten
/// every frame by [`crate::systems::clock::update_clock_text`] from the
/// corrected wall clock. The renderer draws it two-tone: outline passes in
/// `outline`, then a fill pass in `fill`, for legibility over the backdrop.
#[derive(Component, Clone, Debug)]
pub struct ClockText {
    /// The formatted time string to render.
    pub content: String,
    /// Font store key.
    pub font: String,
    /// Font size at the reference resolution; scaled with the window height.
    pub font_size: f32,
    /// Fill color.
    pub fill: Color,
    /// Outline color drawn underneath the fill.
    pub outline: Color,
}

impl ClockText {
    /// Creates an empty readout; content is filled in on the first frame.
    pub fn new(font: impl Into<String>, font_size: f32, fill: Color, outline: Color) -> Self {
        Self {
            content: String::new(),
            font: font.into(),
            font_size,
            fill,
            outline,
        }
    }

    /// Updates the displayed time string.
    pub fn set_content(&mut self, new_content: impl Into<String>) {
        self.content = new_content.into();
    }
}
