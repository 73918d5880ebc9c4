//! CSV event-log backend.
//!
//! Creates `session_events.csv` in the configured output directory.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{Writer, WriterBuilder};

use crate::writer::EventWriter;
use crate::{EventRow, OutputResult};

pub const EVENTS_FILE: &str = "session_events.csv";

pub const EVENTS_HEADER: [&str; 8] = [
    "session_id",
    "timestamp_ms",
    "kind",
    "index",
    "distance_m",
    "latitude",
    "longitude",
    "text",
];

/// Writes session events to one CSV file.
pub struct CsvEventWriter {
    events:   Writer<File>,
    path:     PathBuf,
    finished: bool,
}

impl CsvEventWriter {
    /// Create `session_events.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let path = dir.join(EVENTS_FILE);
        // Rows are serialized without automatic headers so the header is
        // present even when nothing is logged.
        let mut events = WriterBuilder::new().has_headers(false).from_path(&path)?;
        events.write_record(EVENTS_HEADER)?;

        Ok(Self { events, path, finished: false })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventWriter for CsvEventWriter {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.serialize(row)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        Ok(())
    }
}
