//! ECS components for entities.
//!
//! This module groups the component types that can be attached to entities in
//! the screensaver scene. The scene is small and fixed: six parallax backdrop
//! layers, the clock readout, and the instructions hint.
//!
//! Submodules overview:
//! - [`clocktext`] – the large centered clock readout
//! - [`hinttext`] – the pulsing "click to toggle music" hint
//! - [`parallaxlayer`] – a horizontally tiled backdrop layer
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod clocktext;
pub mod hinttext;
pub mod parallaxlayer;
pub mod zindex;
