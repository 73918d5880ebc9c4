//! Plain data row type written by event writers.

use serde::Serialize;

use nav_core::{NavError, SessionId};
use nav_session::NavEvent;

/// Kind tag for rows recording a rejected command or fix.
pub const REJECTED_KIND: &str = "rejected";

/// One logged session event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRow {
    pub session_id:   u64,
    /// Timestamp of the most recent fix seen for the session, `0` before any.
    pub timestamp_ms: u64,
    /// [`NavEvent::kind`] or `"rejected"`.
    pub kind:         &'static str,
    pub index:        Option<usize>,
    pub distance_m:   Option<i64>,
    pub latitude:     Option<f64>,
    pub longitude:    Option<f64>,
    /// Instruction text, alert/arrival message, or rejection reason.
    pub text:         String,
}

impl EventRow {
    pub fn from_event(session: SessionId, timestamp_ms: u64, event: &NavEvent) -> Self {
        let mut row = Self::blank(session, timestamp_ms, event.kind());
        match event {
            NavEvent::InstructionChanged { text, index } => {
                row.index = Some(*index);
                row.text = text.clone();
            }
            NavEvent::ProximityAlert { distance_m, message, .. } => {
                row.distance_m = Some(*distance_m);
                row.text = message.clone();
            }
            NavEvent::Arrived { index, distance_m, message } => {
                row.index = Some(*index);
                row.distance_m = *distance_m;
                row.text = message.clone();
            }
            NavEvent::PositionEcho { coordinate, .. } => {
                row.latitude = Some(coordinate.lat);
                row.longitude = Some(coordinate.lon);
            }
        }
        row
    }

    pub fn rejected(session: SessionId, timestamp_ms: u64, error: &NavError) -> Self {
        Self {
            text: error.to_string(),
            ..Self::blank(session, timestamp_ms, REJECTED_KIND)
        }
    }

    fn blank(session: SessionId, timestamp_ms: u64, kind: &'static str) -> Self {
        Self {
            session_id: session.get(),
            timestamp_ms,
            kind,
            index:      None,
            distance_m: None,
            latitude:   None,
            longitude:  None,
            text:       String::new(),
        }
    }
}
