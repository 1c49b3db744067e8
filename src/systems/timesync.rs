//! One-shot reference-time fetch.
//!
//! At startup a background thread performs exactly one request against the
//! world time API, computes the offset between the reported UTC instant and
//! the local clock at that moment, and sends the result back. The offset is
//! then applied to every subsequent "current time" query for the remainder
//! of the process lifetime. On failure the offset stays zero and the
//! displayed time silently falls back to the local clock. No retry, no
//! timeout beyond the transport's own, no cancellation.

use crate::events::timesync::TimeSyncMsg;
use crate::resources::clock::WallClock;
use crate::resources::timesync::TimeSyncBridge;
use bevy_ecs::prelude::*;
use chrono::{DateTime, Duration, Utc};
use crossbeam_channel::Sender;
use log::{info, warn};
use serde::Deserialize;

/// External time reference queried once at startup.
pub const TIME_API_URL: &str = "http://worldtimeapi.org/api/ip";

#[derive(Debug, Deserialize)]
struct TimeApiResponse {
    utc_datetime: String,
}

/// Parse the API payload and compute `reference − local` at this instant.
fn offset_from_response(body: &str) -> Result<Duration, String> {
    let response: TimeApiResponse =
        serde_json::from_str(body).map_err(|e| format!("bad payload: {e}"))?;
    let server: DateTime<Utc> = DateTime::parse_from_rfc3339(&response.utc_datetime)
        .map_err(|e| format!("bad utc_datetime: {e}"))?
        .with_timezone(&Utc);
    Ok(server - Utc::now())
}

fn fetch_reference_offset() -> Result<Duration, String> {
    let body = ureq::get(TIME_API_URL)
        .call()
        .map_err(|e| e.to_string())?
        .into_string()
        .map_err(|e| e.to_string())?;
    offset_from_response(&body)
}

/// Entry point of the short-lived time-sync thread.
///
/// Sends exactly one [`TimeSyncMsg`] and returns.
pub fn time_sync_thread(tx: Sender<TimeSyncMsg>) {
    let msg = match fetch_reference_offset() {
        Ok(offset) => TimeSyncMsg::Synced { offset },
        Err(error) => TimeSyncMsg::Failed { error },
    };
    let _ = tx.send(msg);
}

/// Apply the sync result to the wall clock when it arrives.
///
/// Non-blocking; runs every frame but sees at most one message ever.
pub fn poll_time_sync(bridge: Res<TimeSyncBridge>, mut clock: ResMut<WallClock>) {
    for msg in bridge.rx.try_iter() {
        match msg {
            TimeSyncMsg::Synced { offset } => {
                info!(
                    "Time sync complete, offset {} ms",
                    offset.num_milliseconds()
                );
                clock.set_offset(offset);
            }
            TimeSyncMsg::Failed { error } => {
                warn!("Time sync failed ({error}), falling back to the local clock");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_parses_rfc3339_payload() {
        let in_an_hour = Utc::now() + Duration::hours(1);
        let body = format!("{{\"utc_datetime\": \"{}\"}}", in_an_hour.to_rfc3339());
        let offset = offset_from_response(&body).unwrap();
        assert!(offset > Duration::minutes(59));
        assert!(offset < Duration::minutes(61));
    }

    #[test]
    fn offset_rejects_garbage_payload() {
        assert!(offset_from_response("not json").is_err());
        assert!(offset_from_response("{\"utc_datetime\": \"yesterday\"}").is_err());
    }
}
