//! Sessions keyed by connection identity.

use log::debug;

use nav_core::{Locale, NavError, NavResult, SessionConfig, SessionId};

use crate::{Command, NavEvent, NavigationSession, PositionFix, SessionObserver};

#[cfg(feature = "fx-hash")]
type SessionMap = rustc_hash::FxHashMap<SessionId, NavigationSession>;

#[cfg(not(feature = "fx-hash"))]
type SessionMap = std::collections::HashMap<SessionId, NavigationSession>;

/// All live sessions of a host.
///
/// The registry is a plain owned value.  Hosts that receive commands and
/// fixes on several threads wrap it (or each session) in a mutex.
pub struct SessionRegistry {
    sessions: SessionMap,
    config:   SessionConfig,
    locale:   Locale,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(SessionConfig::default(), Locale::default())
    }
}

impl SessionRegistry {
    /// An empty registry; sessions it opens use `config` and `locale`.
    pub fn new(config: SessionConfig, locale: Locale) -> Self {
        Self { sessions: SessionMap::default(), config, locale }
    }

    /// The session for `id`, created idle if absent.
    pub fn open(&mut self, id: SessionId) -> &mut NavigationSession {
        let (config, locale) = (&self.config, self.locale);
        self.sessions.entry(id).or_insert_with(|| {
            debug!("{id}: session opened");
            NavigationSession::with_config(id, config.clone(), locale)
        })
    }

    #[inline]
    pub fn get(&self, id: SessionId) -> Option<&NavigationSession> {
        self.sessions.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: SessionId) -> Option<&mut NavigationSession> {
        self.sessions.get_mut(&id)
    }

    /// Remove and return the session for `id`.
    pub fn close(&mut self, id: SessionId) -> Option<NavigationSession> {
        let removed = self.sessions.remove(&id);
        if removed.is_some() {
            debug!("{id}: session closed");
        }
        removed
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Ids of all open sessions, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = SessionId> + '_ {
        self.sessions.keys().copied()
    }

    /// Run `command` on the session for `id` (opening it if needed) and
    /// report the outcome to `observer`.
    pub fn handle_command<O: SessionObserver>(
        &mut self,
        id:       SessionId,
        command:  Command,
        observer: &mut O,
    ) -> NavResult<Vec<NavEvent>> {
        let result = self.open(id).handle(command);
        Self::report(id, &result, observer);
        result
    }

    /// Feed `fix` to the session for `id` and report the outcome to
    /// `observer`.
    ///
    /// # Errors
    ///
    /// [`NavError::NotActive`] if there is no such session or it is idle.
    pub fn handle_fix<O: SessionObserver>(
        &mut self,
        id:       SessionId,
        fix:      PositionFix,
        observer: &mut O,
    ) -> NavResult<Vec<NavEvent>> {
        let result = match self.sessions.get_mut(&id) {
            Some(session) if session.is_active() => {
                observer.on_fix(id, &fix);
                session.on_position_fix(fix)
            }
            _ => Err(NavError::NotActive),
        };
        Self::report(id, &result, observer);
        result
    }

    fn report<O: SessionObserver>(id: SessionId, result: &NavResult<Vec<NavEvent>>, observer: &mut O) {
        match result {
            Ok(events) => events.iter().for_each(|e| observer.on_event(id, e)),
            Err(e) => observer.on_rejected(id, e),
        }
    }
}
