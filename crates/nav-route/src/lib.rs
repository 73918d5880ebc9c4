//! `nav-route`: router responses and the turn-by-turn instruction compiler.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`raw`]         | `RawRoute` and friends, `parse_route_response`             |
//! | [`router`]      | `Router` trait, `RouteRequest`                             |
//! | [`maneuver`]    | `ManeuverKind`                                             |
//! | [`phrases`]     | Locale phrase tables (`EN`, `PT_BR`)                       |
//! | [`text`]        | Tag → rule table and the pure text renderer                |
//! | [`instruction`] | `Instruction`, `CompiledRoute`                             |
//! | [`compiler`]    | `Compiler`, `compile`                                      |
//!
//! # Pipeline
//!
//! ```text
//! router JSON ──parse_route_response──▶ RawRoute ──Compiler::compile──▶ CompiledRoute
//! ```
//!
//! The compiler never geocodes: both places must already carry coordinates.

pub mod compiler;
pub mod instruction;
pub mod maneuver;
pub mod phrases;
pub mod raw;
pub mod router;
pub mod text;


pub use compiler::{compile, Compiler};
pub use instruction::{CompiledRoute, Instruction};
pub use maneuver::ManeuverKind;
pub use phrases::{Phrases, DEFAULT_STREET};
pub use raw::{parse_route_response, RawManeuver, RawRoute, RawStep, RouteCandidate, RouteLeg};
pub use router::{RouteRequest, Router};
