//! Compiled instructions and routes.

use nav_core::{Coordinate, Place};

use crate::ManeuverKind;

/// One driving maneuver, ready to be shown or spoken.
#[derive(Clone, Debug, PartialEq)]
pub struct Instruction {
    pub text:                  String,
    pub maneuver_kind:         ManeuverKind,
    pub modifier:              Option<String>,
    pub street_name:           String,
    /// Length of the stretch following this maneuver.
    pub leg_distance_m:        f64,
    pub leg_duration_s:        f64,
    /// Distance travelled from the route start to this maneuver.
    pub cumulative_distance_m: f64,
    /// Route distance at which the approach alert for the *next* stretch is
    /// due: `max(0, total after this step - alert lead)`.
    pub alert_threshold_m:     f64,
    pub coordinate:            Option<Coordinate>,
    /// Set once the proximity alert for this maneuver has been emitted.
    pub alert_fired:           bool,
}

impl Instruction {
    #[inline]
    pub fn is_arrival(&self) -> bool {
        self.maneuver_kind.is_arrival()
    }
}

/// A route compiled into instructions.
///
/// Immutable after compilation except for the per-instruction `alert_fired`
/// flags, which belong to the navigation session that owns the route.
#[derive(Clone, Debug, PartialEq)]
pub struct CompiledRoute {
    pub origin:           Place,
    pub destination:      Place,
    /// Non-empty whenever the router returned at least one step; the last
    /// element is then the synthetic arrival instruction.
    pub instructions:     Vec<Instruction>,
    pub total_distance_m: f64,
    pub total_duration_s: f64,
    /// The router's route geometry, kept opaque for map clients.
    pub raw_geometry:     serde_json::Value,
}

impl CompiledRoute {
    #[inline]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// `true` if `index` is the last instruction.
    #[inline]
    pub fn is_last(&self, index: usize) -> bool {
        index + 1 >= self.instructions.len()
    }

    #[inline]
    pub fn destination_coordinate(&self) -> Option<Coordinate> {
        self.destination.coordinate
    }

    /// Sum of all retained leg distances.
    pub fn instruction_distance_m(&self) -> f64 {
        self.instructions.iter().map(|i| i.leg_distance_m).sum()
    }
}
