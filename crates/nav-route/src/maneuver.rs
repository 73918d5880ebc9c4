//! Maneuver kinds reported by the router.
//!
//! Unknown tags are preserved in [`ManeuverKind::Other`] so the raw tag
//! survives into the compiled instruction; they render with the generic
//! "continue straight" rule.

/// The kind of driving action a route step begins with.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum ManeuverKind {
    Depart,
    Arrive,
    Turn,
    Continue,
    Roundabout,
    Rotary,
    Fork,
    Merge,
    OnRamp,
    OffRamp,
    /// Any other router tag (`new name`, `end of road`, `notification`, …).
    Other(String),
}

impl ManeuverKind {
    /// Parse a router `maneuver.type` tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "depart"     => ManeuverKind::Depart,
            "arrive"     => ManeuverKind::Arrive,
            "turn"       => ManeuverKind::Turn,
            "continue"   => ManeuverKind::Continue,
            "roundabout" => ManeuverKind::Roundabout,
            "rotary"     => ManeuverKind::Rotary,
            "fork"       => ManeuverKind::Fork,
            "merge"      => ManeuverKind::Merge,
            "on ramp"    => ManeuverKind::OnRamp,
            "off ramp"   => ManeuverKind::OffRamp,
            other        => ManeuverKind::Other(other.to_string()),
        }
    }

    /// The router tag for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            ManeuverKind::Depart     => "depart",
            ManeuverKind::Arrive     => "arrive",
            ManeuverKind::Turn       => "turn",
            ManeuverKind::Continue   => "continue",
            ManeuverKind::Roundabout => "roundabout",
            ManeuverKind::Rotary     => "rotary",
            ManeuverKind::Fork       => "fork",
            ManeuverKind::Merge      => "merge",
            ManeuverKind::OnRamp     => "on ramp",
            ManeuverKind::OffRamp    => "off ramp",
            ManeuverKind::Other(tag) => tag,
        }
    }

    #[inline]
    pub fn is_arrival(&self) -> bool {
        matches!(self, ManeuverKind::Arrive)
    }
}

impl std::fmt::Display for ManeuverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
