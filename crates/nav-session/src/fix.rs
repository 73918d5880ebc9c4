//! Live GPS position fixes.

use serde::Deserialize;

use nav_core::{Coordinate, NavError, NavResult};

use crate::NavEvent;

/// One GPS reading from the client.  Each fix supersedes the previous one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PositionFix {
    pub coordinate:   Coordinate,
    /// Horizontal accuracy radius reported by the device.
    pub accuracy_m:   f64,
    /// Ground speed; `0.0` when the device did not report one.
    pub speed_mps:    f64,
    /// Device timestamp, when supplied.
    pub timestamp_ms: Option<u64>,
}

/// Client message body, e.g.
/// `{"latitude": -23.55, "longitude": -46.63, "accuracy": 8.0, "speed": 11.2}`.
#[derive(Deserialize)]
struct FixBody {
    latitude:  f64,
    longitude: f64,
    accuracy:  f64,
    #[serde(default)]
    speed:     Option<f64>,
    #[serde(default)]
    timestamp: Option<u64>,
}

impl PositionFix {
    pub fn new(coordinate: Coordinate, accuracy_m: f64, speed_mps: f64) -> Self {
        Self { coordinate, accuracy_m, speed_mps, timestamp_ms: None }
    }

    #[inline]
    pub fn with_timestamp(mut self, timestamp_ms: u64) -> Self {
        self.timestamp_ms = Some(timestamp_ms);
        self
    }

    /// Parse the client's position message.
    ///
    /// # Errors
    ///
    /// [`NavError::InvalidInput`] for malformed JSON, missing required
    /// fields, or an out-of-range coordinate.
    pub fn from_json(body: &str) -> NavResult<PositionFix> {
        let parsed: FixBody = serde_json::from_str(body)
            .map_err(|e| NavError::InvalidInput(format!("malformed position fix: {e}")))?;

        let coordinate = Coordinate::new(parsed.latitude, parsed.longitude);
        if !coordinate.is_valid() {
            return Err(NavError::InvalidInput(format!("position out of range: {coordinate}")));
        }

        Ok(PositionFix {
            coordinate,
            accuracy_m:   parsed.accuracy,
            speed_mps:    parsed.speed.unwrap_or(0.0),
            timestamp_ms: parsed.timestamp,
        })
    }

    /// The echo event for this fix.
    ///
    /// Sessions append it themselves while active; hosts that echo positions
    /// regardless of state build it directly.
    pub fn echo(&self) -> NavEvent {
        NavEvent::PositionEcho {
            coordinate: self.coordinate,
            accuracy_m: self.accuracy_m,
            speed_mps:  self.speed_mps,
        }
    }
}
