//! Session lifecycle state.

/// Whether a session is tracking its route.
///
/// ```text
///          start()
///   Idle ──────────▶ Active
///    ▲                 │
///    └─────────────────┘
///   stop() / clear() / arrival
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum NavState {
    /// No route, or a route that has not been started (or has finished).
    #[default]
    Idle,
    /// Route present and fixes are being matched against it.
    Active,
}

impl NavState {
    #[inline]
    pub fn is_active(self) -> bool {
        self == NavState::Active
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NavState::Idle   => "idle",
            NavState::Active => "active",
        }
    }
}

impl std::fmt::Display for NavState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
