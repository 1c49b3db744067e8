//! Drop trigger integration tests: condition truth tables, edge detection,
//! and the playback switch on the rising edge.

use chrono::{NaiveDate, NaiveDateTime};

use skyclock::events::audio::AudioCmd;
use skyclock::resources::assets::{TRACK_OUTRO, TRACK_WAITING};
use skyclock::resources::outro::OutroState;
use skyclock::resources::playback::Playback;
use skyclock::resources::settings::DropTiming;
use skyclock::systems::drop::{run_drop_transition, should_drop};

fn at(month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, month, day)
        .unwrap()
        .and_hms_opt(hour, min, sec)
        .unwrap()
}

// =============================================================================
// should_drop truth tables
// =============================================================================

#[test]
fn minute_timing_fires_on_target_second_regardless_of_the_rest() {
    assert!(should_drop(&at(3, 15, 10, 30, 2), DropTiming::Minute));
    assert!(should_drop(&at(12, 31, 23, 59, 2), DropTiming::Minute));
    assert!(should_drop(&at(1, 1, 0, 0, 2), DropTiming::Minute));
    assert!(!should_drop(&at(3, 15, 10, 30, 1), DropTiming::Minute));
    assert!(!should_drop(&at(3, 15, 10, 30, 3), DropTiming::Minute));
}

#[test]
fn hour_timing_requires_minute_59() {
    assert!(should_drop(&at(3, 15, 10, 59, 2), DropTiming::Hour));
    assert!(should_drop(&at(7, 1, 0, 59, 2), DropTiming::Hour));
    assert!(!should_drop(&at(3, 15, 10, 58, 2), DropTiming::Hour));
    assert!(!should_drop(&at(3, 15, 10, 59, 1), DropTiming::Hour));
    assert!(!should_drop(&at(3, 15, 10, 59, 3), DropTiming::Hour));
}

#[test]
fn year_timing_fires_only_on_new_years_eve() {
    assert!(should_drop(&at(12, 31, 23, 59, 2), DropTiming::Year));
    // One second either side of the instant.
    assert!(!should_drop(&at(12, 31, 23, 59, 1), DropTiming::Year));
    assert!(!should_drop(&at(12, 31, 23, 59, 3), DropTiming::Year));
    // Right minute and second, wrong date.
    assert!(!should_drop(&at(12, 30, 23, 59, 2), DropTiming::Year));
    assert!(!should_drop(&at(6, 30, 23, 59, 2), DropTiming::Year));
    assert!(!should_drop(&at(12, 31, 22, 59, 2), DropTiming::Year));
}

// =============================================================================
// Edge detection
// =============================================================================

#[test]
fn outro_state_fires_once_per_contiguous_window() {
    let mut outro = OutroState::new();

    // Rising edge fires exactly once.
    assert!(outro.advance(true));
    // Frames keep landing inside the same qualifying second.
    assert!(!outro.advance(true));
    assert!(!outro.advance(true));
    // Condition clears; state re-arms without firing.
    assert!(!outro.advance(false));
    assert!(!outro.is_outro);
    // Next window fires again.
    assert!(outro.advance(true));
}

#[test]
fn outro_state_stays_idle_while_condition_is_false() {
    let mut outro = OutroState::new();
    for _ in 0..10 {
        assert!(!outro.advance(false));
    }
    assert!(!outro.is_outro);
}

// =============================================================================
// Playback switch on the rising edge
// =============================================================================

#[test]
fn drop_stops_current_track_and_starts_outro() {
    let mut playback = Playback::new();
    playback.toggle(); // waiting track is playing
    let mut outro = OutroState::new();

    let cmds = run_drop_transition(&mut outro, &mut playback, true);
    assert_eq!(cmds.len(), 2);
    assert!(matches!(
        &cmds[0],
        AudioCmd::StopMusic { id } if id == TRACK_WAITING
    ));
    assert!(matches!(
        &cmds[1],
        AudioCmd::PlayMusic { id, looped: true } if id == TRACK_OUTRO
    ));
    assert_eq!(playback.current(), Some(TRACK_OUTRO));
}

#[test]
fn drop_from_idle_only_starts_outro() {
    let mut playback = Playback::new();
    let mut outro = OutroState::new();

    let cmds = run_drop_transition(&mut outro, &mut playback, true);
    assert_eq!(cmds.len(), 1);
    assert!(matches!(
        &cmds[0],
        AudioCmd::PlayMusic { id, looped: true } if id == TRACK_OUTRO
    ));
}

#[test]
fn drop_does_not_retrigger_while_window_holds() {
    let mut playback = Playback::new();
    let mut outro = OutroState::new();

    assert!(!run_drop_transition(&mut outro, &mut playback, true).is_empty());
    // Many frames inside the same second: no further commands.
    for _ in 0..5 {
        assert!(run_drop_transition(&mut outro, &mut playback, true).is_empty());
    }
    // Window clears, next window triggers again.
    assert!(run_drop_transition(&mut outro, &mut playback, false).is_empty());
    let cmds = run_drop_transition(&mut outro, &mut playback, true);
    assert_eq!(cmds.len(), 2); // stop previous outro, start it again
}
