//! The per-user navigation state machine.

use log::{debug, info};

use nav_core::{Locale, NavError, NavResult, SessionConfig, SessionId};
use nav_route::{CompiledRoute, Instruction, Phrases};

use crate::{Command, NavEvent, NavState, PositionFix};

/// Tracks one user's progress along a compiled route.
///
/// # Invariants
///
/// - `Active` implies a route is set and `current_index < instructions.len()`.
/// - Commands rejected for the current state (`NoRoute`, `NotActive`) leave
///   the session unchanged.
///
/// The session does no locking.  The host must deliver commands and fixes for
/// one session from a single ordered stream.
#[derive(Debug)]
pub struct NavigationSession {
    id:            SessionId,
    route:         Option<CompiledRoute>,
    state:         NavState,
    current_index: usize,
    last_fix:      Option<PositionFix>,
    config:        SessionConfig,
    phrases:       &'static Phrases,
}

impl NavigationSession {
    /// An idle session with default thresholds and English messages.
    pub fn new(id: SessionId) -> Self {
        Self::with_config(id, SessionConfig::default(), Locale::default())
    }

    pub fn with_config(id: SessionId, config: SessionConfig, locale: Locale) -> Self {
        Self {
            id,
            route: None,
            state: NavState::Idle,
            current_index: 0,
            last_fix: None,
            config,
            phrases: Phrases::for_locale(locale),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[inline]
    pub fn state(&self) -> NavState {
        self.state
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[inline]
    pub fn route(&self) -> Option<&CompiledRoute> {
        self.route.as_ref()
    }

    #[inline]
    pub fn last_fix(&self) -> Option<&PositionFix> {
        self.last_fix.as_ref()
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn current_instruction(&self) -> Option<&Instruction> {
        self.route.as_ref()?.instructions.get(self.current_index)
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Install `route`, replacing any previous one.  The session goes idle
    /// and must be started again.
    pub fn set_route(&mut self, route: CompiledRoute) {
        info!("{}: route set ({} instructions, {:.0} m)", self.id, route.len(), route.total_distance_m);
        self.route = Some(route);
        self.state = NavState::Idle;
        self.current_index = 0;
        self.last_fix = None;
    }

    /// Begin navigation from the first instruction.
    ///
    /// # Errors
    ///
    /// [`NavError::NoRoute`] if no route is set or the route has no
    /// instructions.
    pub fn start(&mut self) -> NavResult<Vec<NavEvent>> {
        let first = self
            .route
            .as_ref()
            .and_then(|r| r.instructions.first())
            .ok_or(NavError::NoRoute)?;

        let event = NavEvent::InstructionChanged { text: first.text.clone(), index: 0 };
        self.state = NavState::Active;
        self.current_index = 0;
        info!("{}: navigation started", self.id);
        Ok(vec![event])
    }

    /// Stop navigating.  Always succeeds; the route is kept.
    pub fn stop(&mut self) {
        if self.state.is_active() {
            info!("{}: navigation stopped at instruction {}", self.id, self.current_index);
        }
        self.state = NavState::Idle;
        self.current_index = 0;
    }

    /// Move to the next instruction, or finish if on the last one.
    ///
    /// # Errors
    ///
    /// [`NavError::NotActive`] unless the session is active.  In particular a
    /// second call after arrival is rejected rather than re-announcing it.
    pub fn advance(&mut self) -> NavResult<Vec<NavEvent>> {
        if !self.state.is_active() {
            return Err(NavError::NotActive);
        }
        let route = self.route.as_ref().ok_or(NavError::NotActive)?;

        if route.is_last(self.current_index) {
            self.state = NavState::Idle;
            info!("{}: arrived (advanced past last instruction)", self.id);
            return Ok(vec![NavEvent::Arrived {
                index:      self.current_index,
                distance_m: None,
                message:    self.phrases.arrival_message.to_string(),
            }]);
        }

        self.current_index += 1;
        let text = route.instructions[self.current_index].text.clone();
        debug!("{}: instruction {} {text:?}", self.id, self.current_index);
        Ok(vec![NavEvent::InstructionChanged { text, index: self.current_index }])
    }

    /// Match a live position against the route.
    ///
    /// Rules, in order:
    ///
    /// 1. distance to the current maneuver strictly inside the alert band
    ///    (100–200 m) and no alert yet for it → `ProximityAlert`;
    /// 2. within the advance radius (50 m) of the maneuver and not on the
    ///    last instruction → [`advance`][Self::advance];
    /// 3. within the arrival radius (50 m) of the destination → `Arrived`,
    ///    session goes idle.
    ///
    /// A `PositionEcho` closes every result.
    ///
    /// # Errors
    ///
    /// [`NavError::NotActive`] when idle; the fix is not recorded.
    pub fn on_position_fix(&mut self, fix: PositionFix) -> NavResult<Vec<NavEvent>> {
        if !self.state.is_active() {
            return Err(NavError::NotActive);
        }
        self.last_fix = Some(fix);

        let mut events = Vec::new();
        let index = self.current_index;
        let id = self.id;
        let phrases = self.phrases;
        let config = &self.config;

        let route = self.route.as_mut().ok_or(NavError::NotActive)?;
        let is_last = route.is_last(index);

        let should_advance = match route.instructions.get_mut(index) {
            Some(instruction) => match instruction.coordinate {
                Some(target) => {
                    let d = fix.coordinate.distance_m(target);
                    debug!("{id}: {d:.1} m to maneuver {index}");

                    if config.in_alert_band(d) && !instruction.alert_fired {
                        instruction.alert_fired = true;
                        let distance_m = d.round() as i64;
                        events.push(NavEvent::ProximityAlert {
                            distance_m,
                            instruction_text: instruction.text.clone(),
                            message: phrases.proximity_message(distance_m, &instruction.text),
                        });
                    }
                    d < config.advance_radius_m && !is_last
                }
                None => false,
            },
            None => false,
        };

        if should_advance {
            events.extend(self.advance()?);
        }

        if let Some(event) = self.check_arrival(&fix) {
            events.push(event);
        }

        events.push(fix.echo());
        Ok(events)
    }

    /// Drop the route and the last fix; back to a fresh idle session.
    pub fn clear(&mut self) {
        debug!("{}: cleared", self.id);
        self.route = None;
        self.last_fix = None;
        self.state = NavState::Idle;
        self.current_index = 0;
    }

    /// Dispatch a client command.
    pub fn handle(&mut self, command: Command) -> NavResult<Vec<NavEvent>> {
        match command {
            Command::Start   => self.start(),
            Command::Stop    => { self.stop();  Ok(Vec::new()) }
            Command::Advance => self.advance(),
            Command::Clear   => { self.clear(); Ok(Vec::new()) }
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn check_arrival(&mut self, fix: &PositionFix) -> Option<NavEvent> {
        if !self.state.is_active() {
            return None;
        }
        let destination = self.route.as_ref()?.destination_coordinate()?;
        let d = fix.coordinate.distance_m(destination);
        debug!("{}: {d:.1} m to destination", self.id);
        if d >= self.config.arrival_radius_m {
            return None;
        }

        self.state = NavState::Idle;
        let distance_m = d.round() as i64;
        info!("{}: arrived {distance_m} m from destination", self.id);
        Some(NavEvent::Arrived {
            index:      self.current_index,
            distance_m: Some(distance_m),
            message:    self.phrases.near_destination_message(distance_m),
        })
    }
}
