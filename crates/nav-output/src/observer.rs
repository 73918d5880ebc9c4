//! Session observers that log events and queue push messages.

use std::collections::HashMap;

use log::warn;

use nav_core::{NavError, SessionId};
use nav_session::{NavEvent, PositionFix, SessionObserver};

use crate::row::EventRow;
use crate::writer::EventWriter;
use crate::{encode_event, OutputError, OutputResult, PushMessage};

/// Latest fix timestamp per session; events are stamped with it.
#[derive(Default)]
struct FixClock {
    latest: HashMap<SessionId, u64>,
}

impl FixClock {
    fn observe(&mut self, session: SessionId, fix: &PositionFix) {
        if let Some(ts) = fix.timestamp_ms {
            self.latest.insert(session, ts);
        }
    }

    fn now(&self, session: SessionId) -> u64 {
        self.latest.get(&session).copied().unwrap_or(0)
    }
}

// ── Event log ─────────────────────────────────────────────────────────────────

/// A [`SessionObserver`] that writes every event and rejection to any
/// [`EventWriter`] backend.
///
/// Errors from the writer are stored internally because `SessionObserver`
/// methods have no return value.  Check for them with
/// [`take_error`][Self::take_error] after the run.
pub struct EventLogObserver<W: EventWriter> {
    writer:     W,
    clock:      FixClock,
    last_error: Option<OutputError>,
}

impl<W: EventWriter> EventLogObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, clock: FixClock::default(), last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.  The first error seen so far, if any, wins.
    pub fn finish(&mut self) -> OutputResult<()> {
        let result = self.writer.finish();
        self.store_err(result);
        self.take_error().map_or(Ok(()), Err)
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: EventWriter> SessionObserver for EventLogObserver<W> {
    fn on_fix(&mut self, session: SessionId, fix: &PositionFix) {
        self.clock.observe(session, fix);
    }

    fn on_event(&mut self, session: SessionId, event: &NavEvent) {
        let row = EventRow::from_event(session, self.clock.now(session), event);
        let result = self.writer.write_event(&row);
        self.store_err(result);
    }

    fn on_rejected(&mut self, session: SessionId, error: &NavError) {
        let row = EventRow::rejected(session, self.clock.now(session), error);
        let result = self.writer.write_event(&row);
        self.store_err(result);
    }
}

// ── Push queue ────────────────────────────────────────────────────────────────

/// A [`SessionObserver`] that encodes events into push messages for the host
/// to deliver.
#[derive(Default)]
pub struct PushQueue {
    clock:   FixClock,
    pending: Vec<(SessionId, PushMessage)>,
}

impl PushQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a message that did not come from an event (e.g. a
    /// [`status_message`][crate::status_message]).
    pub fn push(&mut self, session: SessionId, message: PushMessage) {
        self.pending.push((session, message));
    }

    /// Remove and return all queued messages in emission order.
    pub fn drain(&mut self) -> Vec<(SessionId, PushMessage)> {
        std::mem::take(&mut self.pending)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl SessionObserver for PushQueue {
    fn on_fix(&mut self, session: SessionId, fix: &PositionFix) {
        self.clock.observe(session, fix);
    }

    fn on_event(&mut self, session: SessionId, event: &NavEvent) {
        match encode_event(event, self.clock.now(session)) {
            Ok(message) => self.pending.push((session, message)),
            Err(e) => warn!("{session}: dropping {} event: {e}", event.kind()),
        }
    }
}
