//! Shared error taxonomy.
//!
//! Sub-crates may define their own error enums for their own concerns
//! (provider lookups, CSV loading, output writers) and convert into
//! `NavError` where a failure crosses into navigation semantics.

use thiserror::Error;

/// Which end of a route a failure refers to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Origin,
    Destination,
}

impl Endpoint {
    pub fn as_str(self) -> &'static str {
        match self {
            Endpoint::Origin      => "origin",
            Endpoint::Destination => "destination",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error taxonomy of the navigation engine.
///
/// Every variant carries enough text to be shown to a user as-is.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NavError {
    /// Malformed postal code, coordinate token, or required field.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The directory or geocoder had no match.
    #[error("not found: {0}")]
    NotFound(String),

    /// Upstream transport or parse failure.
    #[error("service error: {0}")]
    ServiceError(String),

    /// The router reported a non-`Ok` status.
    #[error("routing failed: {0}")]
    RoutingFailed(String),

    /// `compile` was called before both endpoints had coordinates.
    #[error("{0} has no coordinates")]
    MissingCoordinates(Endpoint),

    /// A session command needs a route and none is set.
    #[error("no route defined")]
    NoRoute,

    /// A session command needs active navigation.
    #[error("navigation not active")]
    NotActive,
}

/// Shorthand result type for all `nav-*` crates.
pub type NavResult<T> = Result<T, NavError>;
