//! `nav-core`: foundational types for the car navigation engine.
//!
//! This crate is a dependency of every other `nav-*` crate.  It has no
//! `nav-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`geo`]    | `Coordinate`, haversine distance, `COORD:` token parsing |
//! | [`place`]  | `Place`: a resolved (or failed) address                 |
//! | [`ids`]    | `SessionId`                                              |
//! | [`config`] | `NavConfig` and its per-component sections, `Locale`     |
//! | [`error`]  | `NavError`, `NavResult`, `Endpoint`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod place;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CompileConfig, GeocodeConfig, Locale, NavConfig, SessionConfig};
pub use error::{Endpoint, NavError, NavResult};
pub use geo::{Coordinate, EARTH_RADIUS_M};
pub use ids::SessionId;
pub use place::Place;
