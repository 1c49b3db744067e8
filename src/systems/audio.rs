//! Audio system implementation backed by a dedicated thread and Raylib.
//!
//! This module hosts the background audio thread and the systems that bridge
//! it with the ECS world:
//! - [`audio_thread`] runs on its own OS thread, owns the Raylib audio
//!   device, and processes [`AudioCmd`] messages, emitting [`AudioMessage`]
//!   replies.
//! - [`forward_audio_cmds`] pushes ECS-written commands over the channel.
//! - [`poll_audio_messages`] non-blockingly drains the thread's replies into
//!   the ECS message queue each frame.
//!
//! The design keeps Raylib audio API calls isolated to a single thread, while
//! the main thread communicates via lock-free channels. The thread must be
//! created once via [`crate::resources::audio::setup_audio`] and
//! joined via [`crate::resources::audio::shutdown_audio`].
//!
//! Music streaming requires periodic `update_stream()` calls; the thread's
//! loop takes care of it while tracks are playing, and restarts looped
//! tracks that reach their end.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::Messages;
use bevy_ecs::prelude::{MessageReader, MessageWriter, Res};
use bevy_ecs::system::ResMut;
use crossbeam_channel::{Receiver, Sender};
use log::{debug, error, info};
use raylib::core::audio::{Music, RaylibAudio};
use rustc_hash::{FxHashMap, FxHashSet};

/// Drain any pending replies from the audio thread and enqueue them into the
/// ECS [`Messages<AudioMessage>`] mailbox.
///
/// Non-blocking; intended to run each frame on the main thread.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
///
/// Bevy ECS' [`Messages`] API requires calling `update()` once per frame to
/// make messages written this frame visible to readers in the same frame.
/// Run this after [`poll_audio_messages`] in the schedule.
pub fn update_bevy_audio_messages(mut messages: ResMut<Messages<AudioMessage>>) {
    messages.update();
}

/// Forward ECS [`AudioCmd`] messages to the audio thread via the bridge.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // Ignore send errors on shutdown.
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for [`AudioCmd`] so same-frame readers can
/// observe writes.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Entry point of the dedicated audio thread.
///
/// Responsibilities:
/// - Initialize the Raylib audio device once for the life of the thread.
/// - Own all `Music` handles, preventing use from other threads.
/// - React to [`AudioCmd`] inputs to load tracks and control playback.
/// - Emit [`AudioMessage`] outputs for state changes (loaded, started,
///   stopped, finished).
/// - Periodically pump music streams and restart looped tracks at the end.
///
/// Concurrency model: `crossbeam_channel` for lock-free message passing; the
/// loop non-blockingly drains commands, performs the Raylib calls, and sleeps
/// briefly between iterations to avoid busy-waiting.
///
/// This function blocks until it receives [`AudioCmd::Shutdown`], at which
/// point it unloads resources and exits cleanly.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            panic!("Failed to initialize audio device: {}", e);
        }
    };

    debug!("Audio thread starting (id={:?})", std::thread::current().id());

    let mut musics: FxHashMap<String, Music> = FxHashMap::default();
    let mut playing: FxHashSet<String> = FxHashSet::default();
    let mut looped: FxHashSet<String> = FxHashSet::default();

    'run: loop {
        // 1) Drain commands
        for cmd in rx_cmd.try_iter() {
            match cmd {
                AudioCmd::LoadMusic { id, path } => match audio.new_music(&path) {
                    Ok(music) => {
                        info!("Loaded track '{}' from {}", id, path);
                        musics.insert(id.clone(), music);
                        let _ = tx_msg.send(AudioMessage::MusicLoaded { id });
                    }
                    Err(e) => {
                        error!("Failed to load track '{}' from {}: {}", id, path, e);
                        let _ = tx_msg.send(AudioMessage::MusicLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayMusic {
                    id,
                    looped: want_loop,
                } => {
                    if let Some(music) = musics.get(&id) {
                        debug!("Play '{}' looped={}", id, want_loop);
                        music.seek_stream(0.0);
                        music.play_stream();
                        playing.insert(id.clone());
                        if want_loop {
                            looped.insert(id.clone());
                        } else {
                            looped.remove(&id);
                        }
                        let _ = tx_msg.send(AudioMessage::MusicPlayStarted { id });
                    }
                }
                AudioCmd::StopMusic { id } => {
                    if let Some(music) = musics.get(&id) {
                        debug!("Stop '{}'", id);
                        music.stop_stream();
                        playing.remove(&id);
                        looped.remove(&id);
                        let _ = tx_msg.send(AudioMessage::MusicStopped { id });
                    }
                }
                AudioCmd::Shutdown => {
                    debug!("Audio shutdown requested");
                    musics.clear();
                    playing.clear();
                    looped.clear();
                    break 'run;
                }
            }
        }

        // 2) Pump streaming + detect ends.
        //    `update_stream()` must be called regularly while playing.
        //    If a track ended and isn't looped, emit Finished exactly once.
        let mut ended: Vec<String> = Vec::new();
        for id in playing.iter() {
            if let Some(music) = musics.get(id) {
                if music.is_stream_playing() {
                    music.update_stream();
                } else {
                    // Not currently playing; check if naturally finished.
                    let len = music.get_time_length();
                    let played = music.get_time_played();
                    if played >= len - 0.01 {
                        ended.push(id.clone());
                    }
                }
            }
        }
        for id in ended.iter() {
            if looped.contains(id) {
                if let Some(music) = musics.get(id) {
                    debug!("Restarting looped track '{}'", id);
                    music.seek_stream(0.0);
                    music.play_stream();
                    let _ = tx_msg.send(AudioMessage::MusicPlayStarted { id: id.clone() });
                }
            } else {
                debug!("Track '{}' finished", id);
                playing.remove(id);
                let _ = tx_msg.send(AudioMessage::MusicFinished { id: id.clone() });
            }
        }

        std::thread::sleep(std::time::Duration::from_millis(10));
    } // 'run

    debug!("Audio thread exiting (id={:?})", std::thread::current().id());

    // On exit, musics drop before `audio`, satisfying lifetimes
}
