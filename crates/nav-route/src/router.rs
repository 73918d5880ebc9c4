//! The routing-engine collaborator.
//!
//! # Pluggability
//!
//! The engine never performs network I/O itself.  Hosts implement
//! [`Router`] on top of whatever HTTP client they use and hand the parsed
//! [`RawRoute`] back; [`RouteRequest`] renders the request path the routing
//! service expects and [`parse_route_response`][crate::parse_route_response]
//! decodes its body.

use nav_core::{Coordinate, NavResult};

use crate::RawRoute;

// ── Router trait ──────────────────────────────────────────────────────────────

/// Computes a driving route between two coordinates.
pub trait Router {
    /// Return the raw router response for a car route from `origin` to
    /// `destination`.
    ///
    /// A router that answered with a failure status should still return
    /// `Ok(raw)`; `Err` is reserved for transport and parse failures
    /// ([`NavError::ServiceError`][nav_core::NavError::ServiceError]).
    fn route(&self, origin: Coordinate, destination: Coordinate) -> NavResult<RawRoute>;
}

// ── RouteRequest ──────────────────────────────────────────────────────────────

/// A driving request with full geometry and per-step maneuvers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RouteRequest {
    pub origin:      Coordinate,
    pub destination: Coordinate,
}

impl RouteRequest {
    pub fn new(origin: Coordinate, destination: Coordinate) -> Self {
        Self { origin, destination }
    }

    /// Request path relative to the service's `/route/v1/driving/` endpoint.
    ///
    /// Coordinates are written `lon,lat` as the routing service expects.
    pub fn path(&self) -> String {
        format!(
            "{},{};{},{}?overview=full&steps=true&geometries=polyline&annotations=true",
            self.origin.lon, self.origin.lat, self.destination.lon, self.destination.lat,
        )
    }
}
