//! Provider traits and the values they exchange.
//!
//! The resolver never talks to the network.  Hosts implement
//! [`PostalDirectory`] and [`Geocoder`] on top of their HTTP client and use
//! the parsers in [`crate::wire`] to decode response bodies.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use nav_core::Coordinate;

use crate::LookupResult;

/// RFC 3986 unreserved characters pass through; everything else is encoded.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

// ── Postal directory ──────────────────────────────────────────────────────────

/// A structured address returned by the postal directory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostalRecord {
    pub postal_code:  String,
    pub street:       String,
    pub neighborhood: String,
    pub city:         String,
    pub region:       String,
    /// Some directories geocode their records; most do not.
    pub coordinate:   Option<Coordinate>,
}

/// A structured street search: region code, city and street name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressQuery {
    pub region: String,
    pub city:   String,
    pub street: String,
}

impl AddressQuery {
    pub fn new(region: impl Into<String>, city: impl Into<String>, street: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            city:   city.into(),
            street: street.into(),
        }
    }

    /// `true` when any component is blank.
    pub fn is_incomplete(&self) -> bool {
        [&self.region, &self.city, &self.street].iter().any(|s| s.trim().is_empty())
    }

    /// Request path relative to the directory base URL:
    /// `{region}/{city}/{street}/json/`, each segment percent-encoded.
    pub fn request_path(&self) -> String {
        format!(
            "{}/{}/{}/json/",
            percent_encode(self.region.trim()),
            percent_encode(self.city.trim()),
            percent_encode(self.street.trim()),
        )
    }
}

/// Maps postal codes and street addresses to directory records.
pub trait PostalDirectory {
    /// Look up `code` (exactly 8 ASCII digits).
    ///
    /// Returns [`LookupError::NotFound`][crate::LookupError::NotFound] when
    /// the directory has no such code and
    /// [`LookupError::Service`][crate::LookupError::Service] on transport or
    /// parse failure.
    fn lookup(&self, code: &str) -> LookupResult<PostalRecord>;

    /// All records matching a street address, best first.  An empty `Vec`
    /// means no match.
    fn search_by_address(&self, query: &AddressQuery) -> LookupResult<Vec<PostalRecord>>;
}

// ── Geocoder ──────────────────────────────────────────────────────────────────

/// A free-text geocoding request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeocodeQuery {
    pub text:         String,
    /// ISO country filter, e.g. `"br"`.
    pub country_code: String,
    pub limit:        usize,
}

impl GeocodeQuery {
    pub fn new(text: impl Into<String>, country_code: impl Into<String>, limit: usize) -> Self {
        Self {
            text:         text.into(),
            country_code: country_code.into(),
            limit,
        }
    }

    /// URL query string for the geocoder's `/search` endpoint.
    pub fn to_query_string(&self) -> String {
        format!(
            "format=json&q={}&countrycodes={}&limit={}&addressdetails=1",
            percent_encode(&self.text),
            percent_encode(&self.country_code),
            self.limit,
        )
    }
}

/// Address components of a geocoder hit.  All optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct HitAddress {
    pub road:          Option<String>,
    pub street:        Option<String>,
    pub pedestrian:    Option<String>,
    pub footway:       Option<String>,
    pub suburb:        Option<String>,
    pub neighbourhood: Option<String>,
    pub city:          Option<String>,
    pub town:          Option<String>,
    pub village:       Option<String>,
    pub state:         Option<String>,
    pub postcode:      Option<String>,
}

impl HitAddress {
    /// Street name by preference: road, street, pedestrian path, footway.
    pub fn street_name(&self) -> Option<&str> {
        first_non_empty(&[&self.road, &self.street, &self.pedestrian, &self.footway])
    }

    pub fn neighborhood(&self) -> Option<&str> {
        first_non_empty(&[&self.suburb, &self.neighbourhood])
    }

    pub fn city(&self) -> Option<&str> {
        first_non_empty(&[&self.city, &self.town, &self.village])
    }
}

/// One ranked geocoder result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeocodeHit {
    /// `None` when the provider's coordinates were missing or unparseable.
    pub coordinate:   Option<Coordinate>,
    pub display_name: String,
    pub address:      HitAddress,
}

/// Maps free text to ranked coordinates.
pub trait Geocoder {
    /// Run `query`, returning hits best-first.  An empty `Vec` means no match.
    fn search(&self, query: &GeocodeQuery) -> LookupResult<Vec<GeocodeHit>>;
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn first_non_empty<'a>(fields: &[&'a Option<String>]) -> Option<&'a str> {
    fields
        .iter()
        .filter_map(|&f| f.as_deref())
        .map(str::trim)
        .find(|s| !s.is_empty())
}

fn percent_encode(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}
