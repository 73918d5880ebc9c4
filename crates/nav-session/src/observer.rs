//! Session observer trait for logging and push delivery.

use nav_core::{NavError, SessionId};

use crate::{NavEvent, PositionFix};

/// Callbacks invoked by [`SessionRegistry`][crate::SessionRegistry] as it
/// routes commands and fixes to sessions.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: console printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SessionObserver for Printer {
///     fn on_event(&mut self, session: SessionId, event: &NavEvent) {
///         if let Some(text) = event.text() {
///             println!("{session}: {text}");
///         }
///     }
/// }
/// ```
pub trait SessionObserver {
    /// Called for every fix accepted by an active session, before its events.
    fn on_fix(&mut self, _session: SessionId, _fix: &PositionFix) {}

    /// Called once per emitted event, in emission order.
    fn on_event(&mut self, _session: SessionId, _event: &NavEvent) {}

    /// Called when a command or fix is rejected (`NoRoute`, `NotActive`).
    fn on_rejected(&mut self, _session: SessionId, _error: &NavError) {}
}

/// A [`SessionObserver`] that does nothing.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}
