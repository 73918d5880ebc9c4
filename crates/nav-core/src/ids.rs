//! Session identity.
//!
//! Sessions are keyed by the host's connection/user identity.  The wrapper is
//! `Copy + Ord + Hash` so it can be used as a map key without ceremony.

use std::fmt;

/// Identifies one navigation session (one user or push-channel connection).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionId(pub u64);

impl SessionId {
    /// Raw identifier value.
    #[inline(always)]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl From<u64> for SessionId {
    #[inline(always)]
    fn from(n: u64) -> SessionId {
        SessionId(n)
    }
}
