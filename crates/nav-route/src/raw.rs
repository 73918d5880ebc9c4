//! Raw router responses.
//!
//! # Wire format
//!
//! The router answers a driving request with JSON of this shape (fields the
//! engine does not use are ignored):
//!
//! ```json
//! {
//!   "code": "Ok",
//!   "routes": [{
//!     "distance": 1234.5,
//!     "duration": 180.2,
//!     "geometry": "p~iF~ps|U_ulLnnqC",
//!     "legs": [{
//!       "steps": [{
//!         "distance": 120.0,
//!         "duration": 14.1,
//!         "name": "Avenida Paulista",
//!         "maneuver": { "type": "depart", "modifier": "left", "location": [-46.65, -23.56] }
//!       }]
//!     }]
//!   }]
//! }
//! ```
//!
//! A failed request carries a non-`"Ok"` `code` and usually a `message`.

use serde::Deserialize;

use nav_core::{Coordinate, NavError, NavResult};

/// Status code the router uses for success.
pub const STATUS_OK: &str = "Ok";

/// A complete router response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawRoute {
    pub code:    String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub routes:  Vec<RouteCandidate>,
}

impl RawRoute {
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.code == STATUS_OK
    }

    /// The provider's failure message, falling back to the status code.
    pub fn failure_message(&self) -> String {
        match &self.message {
            Some(m) if !m.trim().is_empty() => m.clone(),
            _ => format!("router returned status {}", self.code),
        }
    }

    /// The first (best-ranked) route, if any.
    #[inline]
    pub fn primary(&self) -> Option<&RouteCandidate> {
        self.routes.first()
    }
}

/// One route alternative.  Only the first one is ever compiled.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RouteCandidate {
    /// Total length in metres.
    #[serde(default)]
    pub distance: f64,
    /// Total travel time in seconds.
    #[serde(default)]
    pub duration: f64,
    /// Encoded route geometry, kept opaque.
    #[serde(default)]
    pub geometry: serde_json::Value,
    #[serde(default)]
    pub legs:     Vec<RouteLeg>,
}

impl RouteCandidate {
    /// All steps of all legs, in travel order.
    pub fn steps(&self) -> impl Iterator<Item = &RawStep> {
        self.legs.iter().flat_map(|leg| leg.steps.iter())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RouteLeg {
    #[serde(default)]
    pub steps: Vec<RawStep>,
}

/// One router step: a maneuver followed by a stretch of road.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawStep {
    pub distance: f64,
    #[serde(default)]
    pub duration: f64,
    /// Street name; empty or `null` for unnamed roads.
    #[serde(default)]
    pub name:     Option<String>,
    pub maneuver: RawManeuver,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawManeuver {
    #[serde(rename = "type")]
    pub kind:     String,
    #[serde(default)]
    pub modifier: Option<String>,
    /// `[longitude, latitude]`.
    #[serde(default)]
    pub location: Option<[f64; 2]>,
}

impl RawManeuver {
    /// Maneuver position, converting from the router's `[lon, lat]` order.
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.location.map(|[lon, lat]| Coordinate::new(lat, lon))
    }

    /// Modifier with empty strings treated as absent.
    pub fn modifier(&self) -> Option<&str> {
        self.modifier.as_deref().map(str::trim).filter(|m| !m.is_empty())
    }
}

/// Parse a router response body.
///
/// # Errors
///
/// Returns [`NavError::ServiceError`] when the body is not a well-formed
/// response.  A well-formed failure response (`code != "Ok"`) parses
/// successfully; the compiler turns it into [`NavError::RoutingFailed`].
pub fn parse_route_response(body: &str) -> NavResult<RawRoute> {
    serde_json::from_str(body)
        .map_err(|e| NavError::ServiceError(format!("malformed route response: {e}")))
}
