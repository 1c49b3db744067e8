//! Event types and observers used by the screensaver.
//!
//! This module groups the domain events exchanged across systems and the
//! corresponding observers that react to them, plus the message types that
//! cross the channel bridges to the background threads.
//!
//! Submodules:
//! - [`appstate`] – state transition notifications for the loading/running flow
//! - [`audio`] – commands and messages for the background audio thread
//! - [`cycletiming`] – advance the drop-timing setting and persist it
//! - [`loader`] – messages from the one-shot asset loader thread
//! - [`switchfullscreen`] – toggle fullscreen mode on/off
//! - [`timesync`] – result of the one-shot reference-time fetch
//! - [`togglemusic`] – start/stop the ambient track on click
//!
//! See each submodule for concrete event data and semantics.

pub mod appstate;
pub mod audio;
pub mod cycletiming;
pub mod loader;
pub mod switchfullscreen;
pub mod timesync;
pub mod togglemusic;
