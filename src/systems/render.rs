//! Frame rendering.
//!
//! One draw per frame, always last in the tick. While assets resolve this
//! draws the loading screen; afterwards it draws the tiled backdrop layers
//! back-to-front, the outlined clock readout, and (until the first click)
//! the pulsing instructions hint.
//!
//! Drawing needs the raylib handle and thread exclusively, so both are
//! temporarily taken out of the world for the duration of the frame. Scene
//! data is snapshotted into plain values first to keep the borrows simple.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::clocktext::ClockText;
use crate::components::hinttext::HintText;
use crate::components::parallaxlayer::ParallaxLayer;
use crate::components::zindex::ZIndex;
use crate::resources::assets::AssetStore;
use crate::resources::fontstore::FontStore;
use crate::resources::instructions::Instructions;
use crate::resources::texturestore::TextureStore;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;

const LOADING_LABEL: &str = "Loading...";
const LOADING_BAR_HEIGHT: f32 = 10.0;
const LOADING_TROUGH: Color = Color {
    r: 0x33,
    g: 0x33,
    b: 0x33,
    a: 255,
};
const LOADING_FILL: Color = Color {
    r: 0x00,
    g: 0xFF,
    b: 0xFF,
    a: 255,
};

const TEXT_SPACING: f32 = 1.0;
const OUTLINE_THICKNESS: f32 = 2.0;
const OUTLINE_OFFSETS: [(f32, f32); 8] = [
    (-OUTLINE_THICKNESS, -OUTLINE_THICKNESS),
    (0.0, -OUTLINE_THICKNESS),
    (OUTLINE_THICKNESS, -OUTLINE_THICKNESS),
    (-OUTLINE_THICKNESS, 0.0),
    (OUTLINE_THICKNESS, 0.0),
    (-OUTLINE_THICKNESS, OUTLINE_THICKNESS),
    (0.0, OUTLINE_THICKNESS),
    (OUTLINE_THICKNESS, OUTLINE_THICKNESS),
];

/// Draw one frame.
pub fn render_frame(world: &mut World) {
    let window = *world.resource::<WindowSize>();
    let elapsed = world.resource::<WorldTime>().elapsed;
    let show_instructions = world.contains_resource::<Instructions>();
    let (loading, progress) = {
        let assets = world.resource::<AssetStore>();
        (!assets.ready(), assets.progress())
    };

    // Snapshot scene entities into plain data before borrowing the handle.
    let mut layers: Vec<ParallaxLayer> = Vec::new();
    let mut clock: Option<ClockText> = None;
    let mut hint: Option<HintText> = None;
    if !loading {
        let mut by_z: Vec<(ParallaxLayer, ZIndex)> = {
            let mut q = world.query::<(&ParallaxLayer, &ZIndex)>();
            q.iter(world)
                .map(|(layer, z)| (layer.clone(), *z))
                .collect()
        };
        by_z.sort_by_key(|(_, z)| *z);
        layers = by_z.into_iter().map(|(layer, _)| layer).collect();

        let mut q = world.query::<&ClockText>();
        clock = q.iter(world).next().cloned();
        let mut q = world.query::<&HintText>();
        hint = q.iter(world).next().cloned();
    }

    let mut rl = world
        .remove_non_send_resource::<raylib::RaylibHandle>()
        .expect("raylib handle missing from world");
    let thread = world
        .remove_non_send_resource::<raylib::RaylibThread>()
        .expect("raylib thread missing from world");

    {
        let fonts = world.non_send_resource::<FontStore>();
        let mut d = rl.begin_drawing(&thread);

        if loading {
            draw_loading_screen(&mut d, fonts, window, progress);
        } else {
            d.clear_background(Color::BLACK);

            let textures = world.resource::<TextureStore>();
            let scale = window.vertical_scale();
            for layer in &layers {
                if let Some(tex) = textures.get(&layer.tex_key) {
                    draw_tiled_layer(&mut d, tex, layer.tile_width * scale, window);
                }
            }

            if let Some(clock) = &clock {
                draw_clock(&mut d, fonts, clock, window, scale);
            }

            if show_instructions {
                if let Some(hint) = &hint {
                    draw_hint(&mut d, fonts, hint, window, elapsed);
                }
            }
        }
    }

    world.insert_non_send_resource(thread);
    world.insert_non_send_resource(rl);
}

/// Black screen, centered progress bar, label above it.
fn draw_loading_screen(
    d: &mut RaylibDrawHandle,
    fonts: &FontStore,
    window: WindowSize,
    progress: f32,
) {
    d.clear_background(Color::BLACK);

    let bar_width = window.w as f32 * 0.8;
    let x = (window.w as f32 - bar_width) / 2.0;
    let y = window.h as f32 / 2.0;

    d.draw_rectangle(
        x as i32,
        y as i32,
        bar_width as i32,
        LOADING_BAR_HEIGHT as i32,
        LOADING_TROUGH,
    );
    d.draw_rectangle(
        x as i32,
        y as i32,
        (bar_width * progress) as i32,
        LOADING_BAR_HEIGHT as i32,
        LOADING_FILL,
    );

    draw_text_centered(
        d,
        fonts.get(crate::systems::scene::FONT_KEY),
        LOADING_LABEL,
        window.w as f32 / 2.0,
        y - 40.0,
        20.0,
        Color::WHITE,
    );
}

/// Tile one backdrop layer across the window width.
///
/// Tiles start at x=0 and repeat at the scaled tile width until coverage
/// reaches the right edge; each tile stretches to the full window height.
fn draw_tiled_layer(d: &mut RaylibDrawHandle, tex: &Texture2D, tile_width: f32, window: WindowSize) {
    if tile_width <= 0.0 {
        return;
    }
    let src = Rectangle {
        x: 0.0,
        y: 0.0,
        width: tex.width() as f32,
        height: tex.height() as f32,
    };
    let mut x = 0.0;
    while x < window.w as f32 {
        let dest = Rectangle {
            x,
            y: 0.0,
            width: tile_width,
            height: window.h as f32,
        };
        d.draw_texture_pro(tex, src, dest, Vector2 { x: 0.0, y: 0.0 }, 0.0, Color::WHITE);
        x += tile_width;
    }
}

/// Outlined two-tone clock readout at the window center.
fn draw_clock(
    d: &mut RaylibDrawHandle,
    fonts: &FontStore,
    clock: &ClockText,
    window: WindowSize,
    scale: f32,
) {
    let font_size = clock.font_size * scale;
    let cx = window.w as f32 / 2.0;
    let cy = window.h as f32 / 2.0 - font_size / 2.0;
    let font = fonts.get(&clock.font);

    for (dx, dy) in OUTLINE_OFFSETS {
        draw_text_centered(
            d,
            font,
            &clock.content,
            cx + dx,
            cy + dy,
            font_size,
            clock.outline,
        );
    }
    draw_text_centered(d, font, &clock.content, cx, cy, font_size, clock.fill);
}

/// Pulsing instructions hint near the bottom center.
fn draw_hint(
    d: &mut RaylibDrawHandle,
    fonts: &FontStore,
    hint: &HintText,
    window: WindowSize,
    elapsed: f32,
) {
    let alpha = (elapsed.sin() * 0.3 + 0.7).clamp(0.0, 1.0);
    let color = Color::new(255, 255, 255, (alpha * 255.0) as u8);
    draw_text_centered(
        d,
        fonts.get(&hint.font),
        &hint.content,
        window.w as f32 / 2.0,
        window.h as f32 - 40.0 - hint.font_size,
        hint.font_size,
        color,
    );
}

/// Draw `text` horizontally centered on `center_x` with its top at `y`.
///
/// Falls back to the built-in raylib font when the store has no entry.
fn draw_text_centered(
    d: &mut RaylibDrawHandle,
    font: Option<&Font>,
    text: &str,
    center_x: f32,
    y: f32,
    font_size: f32,
    color: Color,
) {
    match font {
        Some(font) => {
            let dims = font.measure_text(text, font_size, TEXT_SPACING);
            d.draw_text_ex(
                font,
                text,
                Vector2 {
                    x: center_x - dims.x / 2.0,
                    y,
                },
                font_size,
                TEXT_SPACING,
                color,
            );
        }
        None => {
            let width = measure_text(text, font_size as i32);
            d.draw_text(
                text,
                (center_x - width as f32 / 2.0) as i32,
                y as i32,
                font_size as i32,
                color,
            );
        }
    }
}
