//! Recorded GPS track loader.
//!
//! # CSV format
//!
//! One row per fix, in playback order:
//!
//! ```csv
//! timestamp_ms,latitude,longitude,accuracy_m,speed_mps
//! 1700000000000,-23.561400,-46.655900,8.0,11.2
//! 1700000001000,-23.561310,-46.655120,6.5,
//! ```
//!
//! `speed_mps` may be empty (treated as `0.0`).  Rows with out-of-range
//! coordinates are rejected.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use nav_core::Coordinate;

use crate::{PositionFix, TrackError, TrackResult};

#[derive(Deserialize)]
struct FixRecord {
    timestamp_ms: u64,
    latitude:     f64,
    longitude:    f64,
    accuracy_m:   f64,
    speed_mps:    Option<f64>,
}

/// Load a GPS track from a CSV file.
pub fn load_fixes_csv(path: &Path) -> TrackResult<Vec<PositionFix>> {
    let file = std::fs::File::open(path).map_err(TrackError::Io)?;
    load_fixes_reader(file)
}

/// Like [`load_fixes_csv`] but accepts any `Read` source.
pub fn load_fixes_reader<R: Read>(reader: R) -> TrackResult<Vec<PositionFix>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    csv_reader
        .deserialize::<FixRecord>()
        .enumerate()
        .map(|(row, result)| {
            let r = result.map_err(|e| TrackError::Parse(e.to_string()))?;
            let coordinate = Coordinate::new(r.latitude, r.longitude);
            if !coordinate.is_valid() {
                // Row numbers are 1-based and exclude the header.
                return Err(TrackError::Parse(format!("row {}: coordinate out of range", row + 1)));
            }
            Ok(PositionFix::new(coordinate, r.accuracy_m, r.speed_mps.unwrap_or(0.0))
                .with_timestamp(r.timestamp_ms))
        })
        .collect()
}
