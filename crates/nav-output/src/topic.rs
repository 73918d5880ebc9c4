//! Push-channel topics.

/// Broadcast topic a message is published on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    /// Start/stop acknowledgements and command errors.
    Navigation,
    /// Current-instruction updates.
    Instructions,
    /// Proximity alerts.
    Alerts,
    /// Arrival detected from a position fix.
    Arrival,
    /// Position echoes.
    Position,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::Navigation,
        Topic::Instructions,
        Topic::Alerts,
        Topic::Arrival,
        Topic::Position,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Topic::Navigation   => "/topic/navigation",
            Topic::Instructions => "/topic/instructions",
            Topic::Alerts       => "/topic/alerts",
            Topic::Arrival      => "/topic/arrival",
            Topic::Position     => "/topic/position",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
