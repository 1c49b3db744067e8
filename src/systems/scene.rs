//! Scene setup.
//!
//! Runs once, as the enter hook of the Running state, and spawns the fixed
//! set of scene entities: the six backdrop layers back-to-front, the clock
//! readout, and the instructions hint.

use crate::components::clocktext::ClockText;
use crate::components::hinttext::HintText;
use crate::components::parallaxlayer::ParallaxLayer;
use crate::components::zindex::ZIndex;
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::Color;

/// Backdrop layers in draw order, with their logical tile widths.
pub const PARALLAX_LAYERS: [(&str, f32); 6] = [
    ("sky", 320.0),
    ("far-clouds", 128.0),
    ("near-clouds", 144.0),
    ("far-mountains", 160.0),
    ("mountains", 320.0),
    ("trees", 240.0),
];

/// Font key everything is rendered with.
pub const FONT_KEY: &str = "orbitron";

/// Clock size at the reference resolution; scaled with the window height.
const CLOCK_FONT_SIZE: f32 = 48.0;
const CLOCK_FILL: Color = Color {
    r: 0x06,
    g: 0xD6,
    b: 0xD8,
    a: 255,
};
const CLOCK_OUTLINE: Color = Color {
    r: 0x03,
    g: 0x3D,
    b: 0x3E,
    a: 255,
};

const HINT_FONT_SIZE: f32 = 20.0;
const HINT_CONTENT: &str = "Click anywhere to toggle music";

/// Spawn the scene entities.
pub fn enter_scene(mut commands: Commands) {
    for (z, (key, tile_width)) in PARALLAX_LAYERS.iter().enumerate() {
        commands.spawn((ParallaxLayer::new(*key, *tile_width), ZIndex(z as i32)));
    }

    commands.spawn((ClockText::new(
        FONT_KEY,
        CLOCK_FONT_SIZE,
        CLOCK_FILL,
        CLOCK_OUTLINE,
    ),));

    commands.spawn((HintText::new(HINT_CONTENT, FONT_KEY, HINT_FONT_SIZE),));

    info!("Scene ready");
}
