//! Resolved addresses.

use crate::{Coordinate, NavError};

/// A resolved address, or the reason resolution failed.
///
/// Resolution never raises: a failed lookup is a `Place` with `valid = false`
/// and a human-readable `error_message`.  A valid place is expected to carry
/// a coordinate once resolution completes, but address data without one is
/// still returned as valid (routing will fail later if no coordinate is ever
/// obtained).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    pub postal_code:   Option<String>,
    pub street:        String,
    pub neighborhood:  String,
    pub city:          String,
    /// Two-letter region code (e.g. `"SP"`), or `"GPS"` for coordinate input.
    pub region:        String,
    pub coordinate:    Option<Coordinate>,
    pub valid:         bool,
    pub error_message: Option<String>,
}

impl Place {
    /// A failed resolution carrying `message`.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid:         false,
            error_message: Some(message.into()),
            ..Self::default()
        }
    }

    /// A failed resolution described by `err`.
    pub fn from_error(err: &NavError) -> Self {
        let message = match err {
            // Already phrased for display; drop the category prefix.
            NavError::InvalidInput(m)
            | NavError::NotFound(m)
            | NavError::ServiceError(m)
            | NavError::RoutingFailed(m) => m.clone(),
            other => other.to_string(),
        };
        Self::invalid(message)
    }

    /// A place standing for a raw GPS coordinate (no postal data).
    pub fn from_coordinate(coordinate: Coordinate) -> Self {
        Self {
            postal_code:   None,
            street:        "GPS location".to_string(),
            neighborhood:  String::new(),
            city:          "GPS coordinate".to_string(),
            region:        "GPS".to_string(),
            coordinate:    Some(coordinate),
            valid:         true,
            error_message: None,
        }
    }

    /// Free-text query describing this address: the non-empty fields among
    /// street, neighborhood, city and region, joined with `", "`.
    pub fn query_text(&self) -> String {
        [
            self.street.as_str(),
            self.neighborhood.as_str(),
            self.city.as_str(),
            self.region.as_str(),
        ]
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }

    #[inline]
    pub fn has_coordinate(&self) -> bool {
        self.coordinate.is_some()
    }
}

impl std::fmt::Display for Place {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.valid {
            return write!(f, "<invalid: {}>", self.error_message.as_deref().unwrap_or("unknown"));
        }
        f.write_str(&self.query_text())?;
        if let Some(code) = &self.postal_code {
            write!(f, " [{code}]")?;
        }
        Ok(())
    }
}
