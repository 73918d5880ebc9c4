//! Engine configuration.
//!
//! Every threshold the engine uses lives here with a `Default` matching the
//! production values.  With the `serde` feature every struct deserializes
//! with `#[serde(default)]`, so a config file only needs the keys it changes:
//!
//! ```toml
//! locale = "pt-br"
//!
//! [geocode]
//! search_limit = 5
//!
//! [session]
//! arrival_radius_m = 30.0
//! ```

/// Language of rendered instruction text and event messages.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Locale {
    #[default]
    En,
    PtBr,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En   => "en",
            Locale::PtBr => "pt-br",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geocoder and postal-directory settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeocodeConfig {
    /// ISO country filter passed to the geocoder (`countrycodes=`).
    pub country_code:    String,
    /// Maximum number of free-text search results.
    pub search_limit:    usize,
    /// Region code used when a full region name is not in the lookup table.
    pub fallback_region: String,
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self {
            country_code:    "br".to_string(),
            search_limit:    10,
            fallback_region: "BR".to_string(),
        }
    }
}

/// Instruction-compiler settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CompileConfig {
    /// Interior steps shorter than this are dropped as noise.
    pub min_step_m:            f64,
    /// How far before a maneuver its alert threshold sits.
    pub alert_lead_m:          f64,
    /// Steps longer than this get a " for N meters" suffix.
    pub distance_suffix_min_m: f64,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            min_step_m:            10.0,
            alert_lead_m:          200.0,
            distance_suffix_min_m: 50.0,
        }
    }
}

/// Live-tracking settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Proximity alerts fire strictly inside `(alert_min_m, alert_max_m)`.
    pub alert_min_m:      f64,
    pub alert_max_m:      f64,
    /// Within this distance of the current maneuver the session advances.
    pub advance_radius_m: f64,
    /// Within this distance of the destination the session arrives.
    pub arrival_radius_m: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            alert_min_m:      100.0,
            alert_max_m:      200.0,
            advance_radius_m: 50.0,
            arrival_radius_m: 50.0,
        }
    }
}

impl SessionConfig {
    /// `true` when `distance_m` lies strictly inside the alert band.
    #[inline]
    pub fn in_alert_band(&self, distance_m: f64) -> bool {
        distance_m > self.alert_min_m && distance_m < self.alert_max_m
    }
}

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    pub locale:  Locale,
    pub geocode: GeocodeConfig,
    pub compile: CompileConfig,
    pub session: SessionConfig,
}
