//! The `EventWriter` trait implemented by event-log backends.

use crate::{EventRow, OutputResult};

/// Destination for logged session events.
///
/// Errors are surfaced to the observer, which stores the first one for
/// [`EventLogObserver::take_error`][crate::EventLogObserver::take_error].
pub trait EventWriter {
    /// Append one row.
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
