//! Inbound session commands.

/// A client command addressed to one session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Start,
    Stop,
    /// Manual "next instruction".
    Advance,
    /// Drop the route and reset.
    Clear,
}

impl Command {
    pub const ALL: [Command; 4] = [Command::Start, Command::Stop, Command::Advance, Command::Clear];

    /// Push-channel destination the client sends this command to.
    pub fn destination(self) -> &'static str {
        match self {
            Command::Start   => "navigation.start",
            Command::Stop    => "navigation.stop",
            Command::Advance => "navigation.next",
            Command::Clear   => "navigation.clear",
        }
    }

    /// Decode a destination name; a leading `/app/` prefix is ignored.
    pub fn from_destination(destination: &str) -> Option<Command> {
        let name = destination.trim();
        let name = name.strip_prefix("/app/").unwrap_or(name);
        Command::ALL.into_iter().find(|c| c.destination() == name)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.destination())
    }
}
