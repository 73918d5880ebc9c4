//! `nav-service`: the route-planning front door.
//!
//! | Module        | Contents                                   |
//! |---------------|--------------------------------------------|
//! | [`navigator`] | `Navigator<D, G, R>`, `NavigatorBuilder`   |
//! | [`history`]   | `SearchHistory`                            |
//!
//! ```text
//! input ─Resolver─▶ Place ─Router─▶ RawRoute ─Compiler─▶ CompiledRoute ─▶ NavigationSession
//! ```
//!
//! The navigator holds no per-user navigation state; sessions live in a
//! `nav_session::SessionRegistry` owned by the host.

pub mod history;
pub mod navigator;


pub use history::{SearchHistory, HISTORY_CAPACITY};
pub use navigator::{Navigator, NavigatorBuilder};
