//! `nav-geocode`: postal-code and free-text resolution.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`provider`] | `PostalDirectory`, `Geocoder` traits; `PostalRecord`, `AddressQuery`, `GeocodeHit` |
//! | [`wire`]     | JSON parsers for directory and geocoder response bodies         |
//! | [`region`]   | Region name → two-letter code table                             |
//! | [`resolver`] | `Resolver<D, G>`                                                |
//! | [`error`]    | `LookupError`, `LookupResult<T>`                                |
//!
//! # Failure model
//!
//! Providers return `Result`s; the resolver does not.  Every failure becomes
//! a [`Place`][nav_core::Place] with `valid = false` (or an empty result
//! list) so callers can render a message without error handling.

pub mod error;
pub mod provider;
pub mod region;
pub mod resolver;
pub mod wire;


pub use error::{LookupError, LookupResult};
pub use provider::{AddressQuery, GeocodeHit, GeocodeQuery, Geocoder, HitAddress, PostalDirectory, PostalRecord};
pub use region::region_code;
pub use resolver::{normalize_postal_code, Resolver};
pub use wire::{parse_postal_response, parse_postal_search_response, parse_search_response, postal_request_path};
