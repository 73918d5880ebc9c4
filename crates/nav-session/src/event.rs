//! Outbound session events.

use nav_core::Coordinate;

/// Something the client should be told about.
///
/// A single command or fix may produce several events; they are returned in
/// the order they occurred.
#[derive(Clone, Debug, PartialEq)]
pub enum NavEvent {
    /// The current instruction changed (on start or advance).
    InstructionChanged {
        text:  String,
        index: usize,
    },
    /// The user is approaching the current maneuver.  Fires at most once per
    /// instruction.
    ProximityAlert {
        /// Rounded distance to the maneuver.
        distance_m:       i64,
        instruction_text: String,
        /// Ready-to-speak message, e.g. "In 180 meters, Turn right".
        message:          String,
    },
    /// Navigation finished.
    Arrived {
        /// Instruction index at the time of arrival.
        index:      usize,
        /// Rounded distance to the destination when arrival was detected from
        /// a fix; `None` when reached by advancing past the last instruction.
        distance_m: Option<i64>,
        message:    String,
    },
    /// The fix that was just processed.
    PositionEcho {
        coordinate: Coordinate,
        accuracy_m: f64,
        speed_mps:  f64,
    },
}

impl NavEvent {
    /// Stable snake_case tag, used as the event kind in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            NavEvent::InstructionChanged { .. } => "instruction_changed",
            NavEvent::ProximityAlert { .. }     => "proximity_alert",
            NavEvent::Arrived { .. }            => "arrived",
            NavEvent::PositionEcho { .. }       => "position_echo",
        }
    }

    #[inline]
    pub fn is_arrival(&self) -> bool {
        matches!(self, NavEvent::Arrived { .. })
    }

    /// Human-readable text carried by the event, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            NavEvent::InstructionChanged { text, .. } => Some(text),
            NavEvent::ProximityAlert { message, .. }  => Some(message),
            NavEvent::Arrived { message, .. }         => Some(message),
            NavEvent::PositionEcho { .. }             => None,
        }
    }
}
