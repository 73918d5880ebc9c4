//! Provider response bodies.
//!
//! # Postal directory
//!
//! `GET {base}/{code}/json/` answers with
//!
//! ```json
//! { "cep": "01310-100", "logradouro": "Avenida Paulista", "bairro": "Bela Vista",
//!   "localidade": "São Paulo", "uf": "SP", "ibge": "3550308" }
//! ```
//!
//! or `{ "erro": true }` (older deployments send `"erro": "true"`) for an
//! unknown code.
//!
//! `GET {base}/{uf}/{city}/{street}/json/` answers with an array of the same
//! objects, empty when nothing matches.
//!
//! # Geocoder
//!
//! `GET {base}/search?{query}` answers with a ranked JSON array; coordinates
//! are decimal strings:
//!
//! ```json
//! [{ "lat": "-23.5613", "lon": "-46.6565", "display_name": "Avenida Paulista, Bela Vista, …",
//!    "address": { "road": "Avenida Paulista", "suburb": "Bela Vista",
//!                 "city": "São Paulo", "state": "São Paulo", "postcode": "01310-100" } }]
//! ```

use serde::Deserialize;

use nav_core::Coordinate;

use crate::{GeocodeHit, HitAddress, LookupError, LookupResult, PostalRecord};

// ── Postal directory ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PostalBody {
    #[serde(default)]
    cep:        Option<String>,
    #[serde(default)]
    logradouro: Option<String>,
    #[serde(default)]
    bairro:     Option<String>,
    #[serde(default)]
    localidade: Option<String>,
    #[serde(default)]
    uf:         Option<String>,
    #[serde(default)]
    erro:       Option<serde_json::Value>,
}

impl PostalBody {
    fn is_error(&self) -> bool {
        match &self.erro {
            Some(serde_json::Value::Bool(b))   => *b,
            Some(serde_json::Value::String(s)) => s.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    fn into_record(self) -> Option<PostalRecord> {
        if self.is_error() {
            return None;
        }
        let postal_code = self.cep.filter(|c| !c.trim().is_empty())?;
        Some(PostalRecord {
            postal_code,
            street:       self.logradouro.unwrap_or_default(),
            neighborhood: self.bairro.unwrap_or_default(),
            city:         self.localidade.unwrap_or_default(),
            region:       self.uf.unwrap_or_default(),
            coordinate:   None,
        })
    }
}

/// Request path (relative to the directory base URL) for `code`.
pub fn postal_request_path(code: &str) -> String {
    format!("{code}/json/")
}

/// Parse a postal-directory response body.
///
/// An `erro` flag or a missing `cep` field means the code is unknown.
pub fn parse_postal_response(body: &str) -> LookupResult<PostalRecord> {
    let parsed: PostalBody = serde_json::from_str(body)
        .map_err(|e| LookupError::Service(format!("malformed postal response: {e}")))?;

    parsed.into_record().ok_or(LookupError::NotFound)
}

/// Parse a street-search response body.
///
/// Entries flagged `erro` or lacking a `cep` are dropped.  A body that is an
/// error object rather than an array means no match.
pub fn parse_postal_search_response(body: &str) -> LookupResult<Vec<PostalRecord>> {
    let parsed: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| LookupError::Service(format!("malformed postal response: {e}")))?;
    if parsed.is_object() {
        return Ok(vec![]);
    }

    let entries: Vec<PostalBody> = serde_json::from_value(parsed)
        .map_err(|e| LookupError::Service(format!("malformed postal response: {e}")))?;
    Ok(entries.into_iter().filter_map(PostalBody::into_record).collect())
}

// ── Geocoder ──────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SearchHit {
    #[serde(default)]
    lat:          Option<String>,
    #[serde(default)]
    lon:          Option<String>,
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    address:      HitAddress,
}

impl SearchHit {
    fn coordinate(&self) -> Option<Coordinate> {
        let lat = self.lat.as_deref()?.trim().parse::<f64>().ok()?;
        let lon = self.lon.as_deref()?.trim().parse::<f64>().ok()?;
        Some(Coordinate::new(lat, lon)).filter(|c| c.is_valid())
    }
}

/// Parse a geocoder search response body into ranked hits.
///
/// Hits with missing or unparseable coordinates are kept with
/// `coordinate: None`; the resolver decides what to do with them.
pub fn parse_search_response(body: &str) -> LookupResult<Vec<GeocodeHit>> {
    let parsed: Vec<SearchHit> = serde_json::from_str(body)
        .map_err(|e| LookupError::Service(format!("malformed search response: {e}")))?;

    Ok(parsed
        .into_iter()
        .map(|hit| GeocodeHit {
            coordinate:   hit.coordinate(),
            display_name: hit.display_name,
            address:      hit.address,
        })
        .collect())
}
