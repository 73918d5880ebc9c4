//! The geocode resolver.
//!
//! Every public method is total: provider failures are logged and folded
//! into the returned [`Place`] (`valid = false` plus a message) or into an
//! empty result, never propagated.

use log::{debug, info, warn};

use nav_core::{Coordinate, GeocodeConfig, NavError, Place};

use crate::region::region_code;
use crate::{AddressQuery, GeocodeHit, GeocodeQuery, Geocoder, LookupError, PostalDirectory, PostalRecord};

pub const INVALID_POSTAL_CODE:        &str = "invalid postal code";
pub const POSTAL_CODE_NOT_FOUND:      &str = "postal code not found";
pub const POSTAL_SERVICE_UNAVAILABLE: &str = "postal service unavailable";
pub const INVALID_COORDINATES:        &str = "invalid coordinates";
pub const INCOMPLETE_ADDRESS:         &str = "incomplete address";
pub const ADDRESS_NOT_FOUND:          &str = "address not found";

/// Number of digits in a postal code.
pub const POSTAL_CODE_DIGITS: usize = 8;

/// Strip every non-digit; `Some` only if exactly eight digits remain.
pub fn normalize_postal_code(input: &str) -> Option<String> {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    (digits.len() == POSTAL_CODE_DIGITS).then_some(digits)
}

/// Resolves postal codes, coordinate tokens and free text to [`Place`]s.
///
/// # Type parameters
///
/// `D` is the postal directory and `G` the geocoder.  Both are plain values
/// owned by the resolver; hosts that share clients pass references or
/// `Arc`s wrapped in their own trait impls.
pub struct Resolver<D: PostalDirectory, G: Geocoder> {
    directory: D,
    geocoder:  G,
    config:    GeocodeConfig,
}

impl<D: PostalDirectory, G: Geocoder> Resolver<D, G> {
    pub fn new(directory: D, geocoder: G, config: GeocodeConfig) -> Self {
        Self { directory, geocoder, config }
    }

    #[inline]
    pub fn config(&self) -> &GeocodeConfig {
        &self.config
    }

    #[inline]
    pub fn directory(&self) -> &D {
        &self.directory
    }

    #[inline]
    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    /// Resolve a postal code to an address, geocoding it if the directory
    /// did not supply a coordinate.
    ///
    /// A valid place without a coordinate is returned when geocoding fails:
    /// the address is still useful, routing will report the gap later.
    pub fn resolve_by_postal_code(&self, code: &str) -> Place {
        let Some(code) = normalize_postal_code(code) else {
            debug!("rejecting postal code {code:?}");
            return Place::from_error(&NavError::InvalidInput(INVALID_POSTAL_CODE.to_string()));
        };

        let record = match self.directory.lookup(&code) {
            Ok(record) => record,
            Err(LookupError::NotFound) => {
                info!("postal code {code} not found");
                return Place::from_error(&NavError::NotFound(POSTAL_CODE_NOT_FOUND.to_string()));
            }
            Err(LookupError::Service(msg)) => {
                warn!("postal directory failed for {code}: {msg}");
                return Place::from_error(&NavError::ServiceError(
                    POSTAL_SERVICE_UNAVAILABLE.to_string(),
                ));
            }
        };

        let mut place = self.place_from_record(record);
        if place.coordinate.is_none() {
            self.fill_coordinate(&mut place);
        }
        place
    }

    /// Resolve a street address through the postal directory; the first
    /// matching record wins.  Geocoded like
    /// [`resolve_by_postal_code`][Self::resolve_by_postal_code].
    pub fn resolve_by_address(&self, region: &str, city: &str, street: &str) -> Place {
        let query = AddressQuery::new(region.trim(), city.trim(), street.trim());
        if query.is_incomplete() {
            debug!("rejecting incomplete address {query:?}");
            return Place::from_error(&NavError::InvalidInput(INCOMPLETE_ADDRESS.to_string()));
        }

        let record = match self.directory.search_by_address(&query) {
            Ok(records) => match records.into_iter().next() {
                Some(record) => record,
                None => {
                    info!("no postal record for {}, {}, {}", query.street, query.city, query.region);
                    return Place::from_error(&NavError::NotFound(ADDRESS_NOT_FOUND.to_string()));
                }
            },
            Err(LookupError::NotFound) => {
                return Place::from_error(&NavError::NotFound(ADDRESS_NOT_FOUND.to_string()));
            }
            Err(LookupError::Service(msg)) => {
                warn!("postal directory address search failed: {msg}");
                return Place::from_error(&NavError::ServiceError(
                    POSTAL_SERVICE_UNAVAILABLE.to_string(),
                ));
            }
        };

        let mut place = self.place_from_record(record);
        self.fill_coordinate(&mut place);
        place
    }

    /// Geocode `text` within the configured country; first hit wins.
    pub fn resolve_coordinate_for_query(&self, text: &str) -> Option<Coordinate> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let query = GeocodeQuery::new(text, self.config.country_code.as_str(), 1);
        match self.geocoder.search(&query) {
            Ok(hits) => {
                let found = hits.first().and_then(|h| h.coordinate);
                if found.is_none() {
                    debug!("no coordinate for {text:?}");
                }
                found
            }
            Err(e) => {
                warn!("geocoder failed for {text:?}: {e}");
                None
            }
        }
    }

    /// Look up a coordinate for `place` from its address text if it has
    /// none.  Returns whether the place now has a coordinate.
    pub fn fill_coordinate(&self, place: &mut Place) -> bool {
        if place.coordinate.is_none() {
            place.coordinate = self.resolve_coordinate_for_query(&place.query_text());
        }
        place.coordinate.is_some()
    }

    /// Resolve a free-text query to candidate places, best first.
    ///
    /// Queries that are postal codes (eight digits once non-digits are
    /// stripped) go through [`resolve_by_postal_code`][Self::resolve_by_postal_code]
    /// and yield at most one place.
    pub fn resolve_free_text(&self, query: &str) -> Vec<Place> {
        if normalize_postal_code(query).is_some() {
            let place = self.resolve_by_postal_code(query);
            return if place.valid { vec![place] } else { vec![] };
        }

        let text = query.trim();
        if text.is_empty() {
            debug!("empty free-text query");
            return vec![];
        }

        let request = GeocodeQuery::new(text, self.config.country_code.as_str(), self.config.search_limit);
        let hits = match self.geocoder.search(&request) {
            Ok(hits) => hits,
            Err(e) => {
                warn!("geocoder search failed for {text:?}: {e}");
                return vec![];
            }
        };

        let total = hits.len();
        let places: Vec<Place> = hits.into_iter().filter_map(|hit| self.place_from_hit(hit)).collect();
        debug!("search {text:?}: {} of {total} hits usable", places.len());
        places
    }

    /// Resolve user input that is either a `COORD:lat,lng` token or a postal
    /// code.
    pub fn resolve_input(&self, input: &str) -> Place {
        if input.trim_start().starts_with(nav_core::geo::COORD_TOKEN_PREFIX) {
            return match Coordinate::parse_token(input) {
                Some(c) => Place::from_coordinate(c),
                None => Place::from_error(&NavError::InvalidInput(INVALID_COORDINATES.to_string())),
            };
        }
        self.resolve_by_postal_code(input)
    }

    // ── Mapping ───────────────────────────────────────────────────────────

    fn place_from_record(&self, record: PostalRecord) -> Place {
        Place {
            postal_code:   Some(record.postal_code),
            street:        record.street,
            neighborhood:  record.neighborhood,
            city:          record.city,
            region:        region_code(&record.region, &self.config.fallback_region),
            coordinate:    record.coordinate,
            valid:         true,
            error_message: None,
        }
    }

    /// `None` for hits without a usable coordinate.
    fn place_from_hit(&self, hit: GeocodeHit) -> Option<Place> {
        let coordinate = hit.coordinate?;
        let street = hit
            .address
            .street_name()
            .map(str::to_string)
            .unwrap_or_else(|| {
                hit.display_name.split(',').next().unwrap_or_default().trim().to_string()
            });

        Some(Place {
            postal_code:   hit.address.postcode.clone().filter(|p| !p.trim().is_empty()),
            street,
            neighborhood:  hit.address.neighborhood().unwrap_or_default().to_string(),
            city:          hit.address.city().unwrap_or_default().to_string(),
            region:        region_code(
                hit.address.state.as_deref().unwrap_or_default(),
                &self.config.fallback_region,
            ),
            coordinate:    Some(coordinate),
            valid:         true,
            error_message: None,
        })
    }
}
