//! Command and message types for the background audio thread.
//!
//! [`AudioCmd`] values travel from the ECS world to the audio thread;
//! [`AudioMessage`] values travel back. Both also exist as ECS message
//! queues so systems can write commands and read replies without touching
//! the channels directly.

use bevy_ecs::message::Message;

/// Commands sent *to* the audio thread.
#[derive(Message, Debug, Clone)]
pub enum AudioCmd {
    /// Decode the file at `path` and keep it under `id` for later playback.
    LoadMusic { id: String, path: String },
    /// Start playback of a previously loaded track from the beginning.
    PlayMusic { id: String, looped: bool },
    /// Stop playback of a track if it is playing.
    StopMusic { id: String },
    /// Unload everything and exit the thread.
    Shutdown,
}

/// Messages sent *back* from the audio thread.
#[derive(Message, Debug, Clone)]
pub enum AudioMessage {
    MusicLoaded { id: String },
    MusicLoadFailed { id: String, error: String },
    MusicPlayStarted { id: String },
    MusicStopped { id: String },
    /// A non-looped track reached its end.
    MusicFinished { id: String },
}
