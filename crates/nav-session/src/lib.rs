//! `nav-session`: live navigation state.
//!
//! A [`NavigationSession`] owns one compiled route and consumes commands and
//! position fixes, returning the [`NavEvent`]s the client should see.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`session`]  | `NavigationSession`                                   |
//! | [`state`]    | `NavState`                                            |
//! | [`event`]    | `NavEvent`                                            |
//! | [`command`]  | `Command` and its push-channel destination names      |
//! | [`fix`]      | `PositionFix`, client JSON parsing                    |
//! | [`registry`] | `SessionRegistry` keyed by `SessionId`                |
//! | [`observer`] | `SessionObserver`, `NoopObserver`                     |
//! | [`track`]    | Recorded-track CSV loader                             |
//! | [`error`]    | `TrackError`                                          |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `fx-hash` | Registry map uses `rustc_hash::FxHashMap`.              |
//!
//! Session commands return `nav_core::NavResult`: `NoRoute` and `NotActive`
//! are ordinary outcomes the host reports back to the client.

pub mod command;
pub mod error;
pub mod event;
pub mod fix;
pub mod observer;
pub mod registry;
pub mod session;
pub mod state;
pub mod track;

#[cfg(test)]
mod tests;

pub use command::Command;
pub use error::{TrackError, TrackResult};
pub use event::NavEvent;
pub use fix::PositionFix;
pub use observer::{NoopObserver, SessionObserver};
pub use registry::SessionRegistry;
pub use session::NavigationSession;
pub use state::NavState;
pub use track::{load_fixes_csv, load_fixes_reader};
