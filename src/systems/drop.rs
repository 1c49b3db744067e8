//! Drop trigger system.
//!
//! Once per frame, evaluates whether the corrected current time sits on the
//! configured drop instant and, on the rising edge, switches playback to the
//! outro track: stop whatever is playing, start the outro looped. The state
//! re-arms only once the condition clears, so the outro starts exactly once
//! per qualifying second-window even though frames fire far more often.
//!
//! The condition is sampled at whatever frames happen to land inside the
//! qualifying second. If the frame rate drops so low that the second passes
//! between two frames, that cycle's drop is skipped entirely. That is the
//! intended behavior; do not widen the window.

use crate::events::audio::AudioCmd;
use crate::resources::clock::WallClock;
use crate::resources::outro::OutroState;
use crate::resources::playback::Playback;
use crate::resources::assets::TRACK_OUTRO;
use crate::resources::settings::{DropTiming, Settings};
use bevy_ecs::prelude::*;
use chrono::{Datelike, Timelike};
use log::info;

/// Second of the qualifying minute at which the drop fires.
const DROP_SECOND: u32 = 2;

/// True iff `t` sits on the drop instant for the given granularity.
///
/// - `Minute`: every occurrence of the target second.
/// - `Hour`: minute 59 at the target second.
/// - `Year`: December 31st, 23:59 at the target second.
pub fn should_drop<T: Datelike + Timelike>(t: &T, timing: DropTiming) -> bool {
    match timing {
        DropTiming::Minute => t.second() == DROP_SECOND,
        DropTiming::Hour => t.minute() == 59 && t.second() == DROP_SECOND,
        DropTiming::Year => {
            t.month() == 12
                && t.day() == 31
                && t.hour() == 23
                && t.minute() == 59
                && t.second() == DROP_SECOND
        }
    }
}

/// Advance the edge-detecting state and produce the playback switch.
///
/// Returns the audio commands to forward this frame: empty except on the
/// rising edge, where the current track is stopped (if any) and the outro is
/// started looped.
pub fn run_drop_transition(
    outro: &mut OutroState,
    playback: &mut Playback,
    condition: bool,
) -> Vec<AudioCmd> {
    let mut cmds = Vec::new();
    if outro.advance(condition) {
        info!("Drop! switching to the outro track");
        if let Some(cmd) = playback.stop() {
            cmds.push(cmd);
        }
        if let Some(cmd) = playback.play(TRACK_OUTRO) {
            cmds.push(cmd);
        }
    }
    cmds
}

/// Per-frame drop evaluation against the corrected wall clock.
pub fn drop_trigger(
    clock: Res<WallClock>,
    settings: Res<Settings>,
    mut outro: ResMut<OutroState>,
    mut playback: ResMut<Playback>,
    mut cmd_writer: MessageWriter<AudioCmd>,
) {
    let now = clock.now();
    let condition = should_drop(&now, settings.drop_timing);
    for cmd in run_drop_transition(&mut outro, &mut playback, condition) {
        cmd_writer.write(cmd);
    }
}
