//! Session events → push-channel messages.
//!
//! | Event                              | Topic                 | Payload                                              |
//! |------------------------------------|-----------------------|------------------------------------------------------|
//! | `InstructionChanged`               | `/topic/instructions` | `{instruction, index, timestamp}`                    |
//! | `ProximityAlert`                   | `/topic/alerts`       | `{distance, instruction, message, kind, timestamp}`  |
//! | `Arrived` (manual advance)         | `/topic/instructions` | `{instruction, index, timestamp}`                    |
//! | `Arrived` (from a fix)             | `/topic/arrival`      | `"ARRIVAL: <message>"`                               |
//! | `PositionEcho`                     | `/topic/position`     | `{latitude, longitude, accuracy, speed, timestamp}`  |
//!
//! Command acknowledgements ([`status_message`]) are plain strings on
//! `/topic/navigation`.

use serde::Serialize;

use nav_core::NavResult;
use nav_session::{Command, NavEvent};

use crate::{OutputResult, Topic};

/// Alert kind tag carried by every proximity payload.
pub const PROXIMITY_KIND: &str = "PROXIMITY";

pub const NAVIGATION_STARTED: &str = "NAVIGATION_STARTED";
pub const NAVIGATION_STOPPED: &str = "NAVIGATION_STOPPED";

/// One message ready for the push channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PushMessage {
    pub topic:   Topic,
    /// JSON document or plain-text status.
    pub payload: String,
}

impl PushMessage {
    pub fn new(topic: Topic, payload: impl Into<String>) -> Self {
        Self { topic, payload: payload.into() }
    }
}

// ── Payloads ──────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct InstructionPayload<'a> {
    instruction: &'a str,
    index:       usize,
    timestamp:   u64,
}

#[derive(Serialize)]
struct AlertPayload<'a> {
    distance:    i64,
    instruction: &'a str,
    message:     &'a str,
    kind:        &'static str,
    timestamp:   u64,
}

#[derive(Serialize)]
struct PositionPayload {
    latitude:  f64,
    longitude: f64,
    accuracy:  f64,
    speed:     f64,
    timestamp: u64,
}

// ── Encoding ──────────────────────────────────────────────────────────────────

/// Encode `event` for the push channel, stamping JSON payloads with
/// `timestamp_ms`.
pub fn encode_event(event: &NavEvent, timestamp_ms: u64) -> OutputResult<PushMessage> {
    let message = match event {
        NavEvent::InstructionChanged { text, index } => PushMessage::new(
            Topic::Instructions,
            serde_json::to_string(&InstructionPayload {
                instruction: text,
                index:       *index,
                timestamp:   timestamp_ms,
            })?,
        ),

        NavEvent::ProximityAlert { distance_m, instruction_text, message } => PushMessage::new(
            Topic::Alerts,
            serde_json::to_string(&AlertPayload {
                distance:    *distance_m,
                instruction: instruction_text,
                message,
                kind:        PROXIMITY_KIND,
                timestamp:   timestamp_ms,
            })?,
        ),

        NavEvent::Arrived { index, distance_m: None, message } => PushMessage::new(
            Topic::Instructions,
            serde_json::to_string(&InstructionPayload {
                instruction: message,
                index:       *index,
                timestamp:   timestamp_ms,
            })?,
        ),

        NavEvent::Arrived { distance_m: Some(_), message, .. } => {
            PushMessage::new(Topic::Arrival, format!("ARRIVAL: {message}"))
        }

        NavEvent::PositionEcho { coordinate, accuracy_m, speed_mps } => PushMessage::new(
            Topic::Position,
            serde_json::to_string(&PositionPayload {
                latitude:  coordinate.lat,
                longitude: coordinate.lon,
                accuracy:  *accuracy_m,
                speed:     *speed_mps,
                timestamp: timestamp_ms,
            })?,
        ),
    };
    Ok(message)
}

/// Acknowledgement for a handled command, if the command has one.
///
/// `Start` and `Stop` are acknowledged on `/topic/navigation`; a rejected
/// `Advance` is reported on `/topic/instructions`, where the client is
/// waiting for the next instruction.  Successful `Advance` and `Clear`
/// produce no status (their events speak for themselves).
pub fn status_message(command: Command, result: &NavResult<Vec<NavEvent>>) -> Option<PushMessage> {
    match (command, result) {
        (Command::Start, Ok(_))    => Some(PushMessage::new(Topic::Navigation, NAVIGATION_STARTED)),
        (Command::Stop, _)         => Some(PushMessage::new(Topic::Navigation, NAVIGATION_STOPPED)),
        (Command::Advance, Err(e)) => Some(PushMessage::new(Topic::Instructions, format!("ERROR: {e}"))),
        (_, Err(e))                => Some(PushMessage::new(Topic::Navigation, format!("ERROR: {e}"))),
        (Command::Advance | Command::Clear, Ok(_)) => None,
    }
}
