//! Unit tests for nav-session.
//!
//! Routes are laid out along a meridian so that a fix `d` metres north of a
//! point is exactly `d` metres away by haversine.

#[cfg(test)]
mod fixtures {
    use std::f64::consts::PI;

    use nav_core::{Coordinate, Place, EARTH_RADIUS_M};
    use nav_route::{CompiledRoute, Instruction, ManeuverKind};

    use crate::PositionFix;

    pub const M_PER_DEG: f64 = EARTH_RADIUS_M * PI / 180.0;

    pub fn north_of(c: Coordinate, meters: f64) -> Coordinate {
        Coordinate::new(c.lat + meters / M_PER_DEG, c.lon)
    }

    pub fn start_point() -> Coordinate {
        Coordinate::new(-23.0, -46.0)
    }

    /// Maneuver 1 km and destination 2 km south of the start.
    pub fn turn_point() -> Coordinate {
        north_of(start_point(), -1000.0)
    }

    pub fn destination() -> Coordinate {
        north_of(start_point(), -2000.0)
    }

    pub fn instruction(text: &str, kind: ManeuverKind, at: Coordinate, cumulative: f64) -> Instruction {
        Instruction {
            text:                  text.to_string(),
            maneuver_kind:         kind,
            modifier:              None,
            street_name:           "Rua Augusta".to_string(),
            leg_distance_m:        1000.0,
            leg_duration_s:        100.0,
            cumulative_distance_m: cumulative,
            alert_threshold_m:     (cumulative + 1000.0 - 200.0).max(0.0),
            coordinate:            Some(at),
            alert_fired:           false,
        }
    }

    pub fn route_with(instructions: Vec<Instruction>, destination: Coordinate) -> CompiledRoute {
        CompiledRoute {
            origin:           Place::from_coordinate(start_point()),
            destination:      Place::from_coordinate(destination),
            instructions,
            total_distance_m: 2000.0,
            total_duration_s: 200.0,
            raw_geometry:     serde_json::Value::Null,
        }
    }

    /// depart → turn right → arrive.
    pub fn route() -> CompiledRoute {
        let mut arrive = instruction(
            "You have arrived at your destination",
            ManeuverKind::Arrive,
            destination(),
            2000.0,
        );
        arrive.leg_distance_m = 0.0;
        route_with(
            vec![
                instruction("Start on Rua Augusta for 1000 meters", ManeuverKind::Depart, start_point(), 0.0),
                instruction("Turn right on Rua Augusta for 1000 meters", ManeuverKind::Turn, turn_point(), 1000.0),
                arrive,
            ],
            destination(),
        )
    }

    pub fn fix_at(c: Coordinate) -> PositionFix {
        PositionFix::new(c, 5.0, 10.0)
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod commands {
    use nav_core::{NavError, SessionId};

    use super::fixtures::*;
    use crate::{Command, NavEvent, NavState, NavigationSession};

    fn started() -> NavigationSession {
        let mut s = NavigationSession::new(SessionId(1));
        s.set_route(route());
        s.start().unwrap();
        s
    }

    #[test]
    fn start_without_route_is_rejected() {
        let mut s = NavigationSession::new(SessionId(1));
        assert_eq!(s.start(), Err(NavError::NoRoute));
        assert_eq!(s.state(), NavState::Idle);
    }

    #[test]
    fn start_with_empty_route_is_rejected() {
        let mut s = NavigationSession::new(SessionId(1));
        s.set_route(route_with(vec![], destination()));
        assert_eq!(s.start(), Err(NavError::NoRoute));
        assert!(!s.is_active());
    }

    #[test]
    fn start_emits_first_instruction() {
        let mut s = NavigationSession::new(SessionId(1));
        s.set_route(route());
        let events = s.start().unwrap();
        assert_eq!(
            events,
            vec![NavEvent::InstructionChanged {
                text:  "Start on Rua Augusta for 1000 meters".into(),
                index: 0,
            }]
        );
        assert_eq!(s.state(), NavState::Active);
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn advance_walks_then_arrives_once() {
        let mut s = started();

        let e = s.advance().unwrap();
        assert_eq!(e, vec![NavEvent::InstructionChanged {
            text:  "Turn right on Rua Augusta for 1000 meters".into(),
            index: 1,
        }]);
        assert_eq!(s.advance().unwrap()[0], NavEvent::InstructionChanged {
            text:  "You have arrived at your destination".into(),
            index: 2,
        });

        let arrival = s.advance().unwrap();
        assert_eq!(arrival, vec![NavEvent::Arrived {
            index:      2,
            distance_m: None,
            message:    "You have arrived at your destination!".into(),
        }]);
        assert_eq!(s.state(), NavState::Idle);
        assert_eq!(s.current_index(), 2);

        assert_eq!(s.advance(), Err(NavError::NotActive));
        assert_eq!(s.current_index(), 2);
    }

    #[test]
    fn advance_while_idle_is_rejected() {
        let mut s = NavigationSession::new(SessionId(1));
        s.set_route(route());
        assert_eq!(s.advance(), Err(NavError::NotActive));
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn stop_resets_index_and_keeps_route() {
        let mut s = started();
        s.advance().unwrap();
        s.stop();
        assert_eq!(s.state(), NavState::Idle);
        assert_eq!(s.current_index(), 0);
        assert!(s.route().is_some());
        // Stop is unconditional.
        s.stop();
        assert_eq!(s.state(), NavState::Idle);
    }

    #[test]
    fn set_route_forces_idle_and_clears_fix() {
        let mut s = started();
        s.on_position_fix(fix_at(north_of(start_point(), 500.0))).unwrap();
        s.advance().unwrap();
        assert!(s.last_fix().is_some());

        s.set_route(route());
        assert_eq!(s.state(), NavState::Idle);
        assert_eq!(s.current_index(), 0);
        assert!(s.last_fix().is_none());
    }

    #[test]
    fn clear_drops_everything() {
        let mut s = started();
        s.clear();
        assert!(s.route().is_none());
        assert!(s.last_fix().is_none());
        assert_eq!(s.state(), NavState::Idle);
        assert_eq!(s.start(), Err(NavError::NoRoute));
    }

    #[test]
    fn handle_dispatches() {
        let mut s = NavigationSession::new(SessionId(1));
        s.set_route(route());
        assert_eq!(s.handle(Command::Start).unwrap().len(), 1);
        assert_eq!(s.handle(Command::Advance).unwrap()[0].kind(), "instruction_changed");
        assert!(s.handle(Command::Stop).unwrap().is_empty());
        assert_eq!(s.handle(Command::Advance), Err(NavError::NotActive));
        assert!(s.handle(Command::Clear).unwrap().is_empty());
        assert!(s.route().is_none());
    }

    #[test]
    fn destinations_decode() {
        assert_eq!(Command::from_destination("navigation.start"), Some(Command::Start));
        assert_eq!(Command::from_destination("/app/navigation.next"), Some(Command::Advance));
        assert_eq!(Command::from_destination("navigation.stop"), Some(Command::Stop));
        assert_eq!(Command::from_destination("navigation.clear"), Some(Command::Clear));
        assert_eq!(Command::from_destination("navigation.pause"), None);
        for c in Command::ALL {
            assert_eq!(Command::from_destination(&c.to_string()), Some(c));
        }
    }
}

// ── Position tracking ─────────────────────────────────────────────────────────

#[cfg(test)]
mod tracking {
    use nav_core::{Locale, NavError, SessionConfig, SessionId};
    use nav_route::ManeuverKind;

    use super::fixtures::*;
    use crate::{NavEvent, NavState, NavigationSession};

    fn started() -> NavigationSession {
        let mut s = NavigationSession::new(SessionId(7));
        s.set_route(route());
        s.start().unwrap();
        s
    }

    fn alerts(events: &[NavEvent]) -> Vec<i64> {
        events
            .iter()
            .filter_map(|e| match e {
                NavEvent::ProximityAlert { distance_m, .. } => Some(*distance_m),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn approach_fires_one_alert_then_advances() {
        let mut s = started();
        let mut all = Vec::new();
        for d in [250.0, 180.0, 150.0, 90.0, 40.0] {
            let events = s.on_position_fix(fix_at(north_of(start_point(), d))).unwrap();
            assert_eq!(events.last().map(NavEvent::kind), Some("position_echo"));
            all.push(events);
        }

        let fired: Vec<i64> = all.iter().flat_map(|e| alerts(e)).collect();
        assert_eq!(fired, vec![180]);
        assert_eq!(alerts(&all[1]), vec![180]);

        let changes: Vec<&NavEvent> = all
            .iter()
            .flatten()
            .filter(|e| matches!(e, NavEvent::InstructionChanged { .. }))
            .collect();
        assert_eq!(changes.len(), 1);
        assert!(matches!(changes[0], NavEvent::InstructionChanged { index: 1, .. }));
        assert!(all[4].iter().any(|e| matches!(e, NavEvent::InstructionChanged { index: 1, .. })));

        assert_eq!(s.current_index(), 1);
        assert!(s.route().unwrap().instructions[0].alert_fired);
        assert!(!s.route().unwrap().instructions[1].alert_fired);
        assert!(s.is_active());
    }

    #[test]
    fn alert_message_is_composed() {
        let mut s = started();
        let events = s.on_position_fix(fix_at(north_of(start_point(), 150.0))).unwrap();
        match &events[0] {
            NavEvent::ProximityAlert { distance_m, instruction_text, message } => {
                assert_eq!(*distance_m, 150);
                assert_eq!(instruction_text, "Start on Rua Augusta for 1000 meters");
                assert_eq!(message, "In 150 meters, Start on Rua Augusta for 1000 meters");
            }
            other => panic!("expected alert, got {other:?}"),
        }
    }

    #[test]
    fn outside_alert_band_is_silent() {
        let mut s = started();
        for d in [95.0, 205.0, 60.0, 400.0] {
            let events = s.on_position_fix(fix_at(north_of(start_point(), d))).unwrap();
            assert!(alerts(&events).is_empty(), "alert at {d} m");
        }
    }

    #[test]
    fn alert_does_not_refire_after_restart() {
        let mut s = started();
        let near = fix_at(north_of(start_point(), 150.0));
        assert_eq!(alerts(&s.on_position_fix(near).unwrap()), vec![150]);
        s.stop();
        s.start().unwrap();
        assert!(alerts(&s.on_position_fix(near).unwrap()).is_empty());
    }

    #[test]
    fn fix_while_idle_is_rejected_and_not_recorded() {
        let mut s = NavigationSession::new(SessionId(7));
        s.set_route(route());
        let fix = fix_at(start_point());
        assert_eq!(s.on_position_fix(fix), Err(NavError::NotActive));
        assert!(s.last_fix().is_none());
        assert_eq!(fix.echo().kind(), "position_echo");
    }

    #[test]
    fn fix_is_recorded_and_echoed() {
        let mut s = started();
        let fix = fix_at(north_of(start_point(), 600.0));
        let events = s.on_position_fix(fix).unwrap();
        assert_eq!(events, vec![NavEvent::PositionEcho {
            coordinate: fix.coordinate,
            accuracy_m: 5.0,
            speed_mps:  10.0,
        }]);
        assert_eq!(s.last_fix(), Some(&fix));
    }

    #[test]
    fn near_destination_arrives_and_goes_idle() {
        let mut s = started();
        s.advance().unwrap();
        let events = s.on_position_fix(fix_at(north_of(destination(), 10.0))).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0], NavEvent::Arrived {
            index:      1,
            distance_m: Some(10),
            message:    "You are 10m from your destination!".into(),
        });
        assert_eq!(events[1].kind(), "position_echo");
        assert_eq!(s.state(), NavState::Idle);

        assert_eq!(s.on_position_fix(fix_at(destination())), Err(NavError::NotActive));
    }

    #[test]
    fn auto_advance_precedes_arrival_on_same_fix() {
        // Final turn 30 m before the destination.
        let turn = north_of(destination(), 30.0);
        let mut s = NavigationSession::new(SessionId(7));
        s.set_route(route_with(
            vec![
                instruction("Start", ManeuverKind::Depart, start_point(), 0.0),
                instruction("Turn left", ManeuverKind::Turn, turn, 1000.0),
                instruction("You have arrived at your destination", ManeuverKind::Arrive, destination(), 2000.0),
            ],
            destination(),
        ));
        s.start().unwrap();
        s.advance().unwrap();

        let events = s.on_position_fix(fix_at(destination())).unwrap();
        let kinds: Vec<&str> = events.iter().map(NavEvent::kind).collect();
        assert_eq!(kinds, ["instruction_changed", "arrived", "position_echo"]);
        assert!(matches!(events[1], NavEvent::Arrived { index: 2, distance_m: Some(0), .. }));
        assert_eq!(s.state(), NavState::Idle);
    }

    #[test]
    fn last_instruction_never_auto_advances() {
        let mut s = started();
        s.advance().unwrap();
        s.advance().unwrap();
        // On the arrival instruction; 60 m out is outside the arrival radius.
        let events = s.on_position_fix(fix_at(north_of(destination(), 60.0))).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(s.current_index(), 2);
        assert!(s.is_active());
    }

    #[test]
    fn instruction_without_coordinate_only_checks_arrival() {
        let mut r = route();
        r.instructions[0].coordinate = None;
        let mut s = NavigationSession::new(SessionId(7));
        s.set_route(r);
        s.start().unwrap();
        let events = s.on_position_fix(fix_at(north_of(start_point(), 150.0))).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn thresholds_and_locale_are_configurable() {
        let config = SessionConfig { alert_min_m: 300.0, alert_max_m: 400.0, ..SessionConfig::default() };
        let mut s = NavigationSession::with_config(SessionId(7), config, Locale::PtBr);
        s.set_route(route());
        s.start().unwrap();

        assert!(alerts(&s.on_position_fix(fix_at(north_of(start_point(), 150.0))).unwrap()).is_empty());
        let events = s.on_position_fix(fix_at(north_of(start_point(), 350.0))).unwrap();
        match &events[0] {
            NavEvent::ProximityAlert { message, .. } => assert!(message.starts_with("Em 350 metros, ")),
            other => panic!("expected alert, got {other:?}"),
        }
    }
}

// ── Fix parsing and recorded tracks ───────────────────────────────────────────

#[cfg(test)]
mod fixes {
    use std::io::Cursor;

    use nav_core::{Coordinate, NavError};

    use crate::{load_fixes_reader, PositionFix, TrackError};

    #[test]
    fn client_json_parses() {
        let fix = PositionFix::from_json(
            r#"{"latitude": -23.5614, "longitude": -46.6559, "accuracy": 8.0, "speed": 11.5, "timestamp": 1700000000000}"#,
        )
        .unwrap();
        assert_eq!(fix.coordinate, Coordinate::new(-23.5614, -46.6559));
        assert_eq!(fix.accuracy_m, 8.0);
        assert_eq!(fix.speed_mps, 11.5);
        assert_eq!(fix.timestamp_ms, Some(1_700_000_000_000));
    }

    #[test]
    fn speed_and_timestamp_are_optional() {
        let fix = PositionFix::from_json(r#"{"latitude": 1.0, "longitude": 2.0, "accuracy": 3.0}"#).unwrap();
        assert_eq!(fix.speed_mps, 0.0);
        assert_eq!(fix.timestamp_ms, None);
    }

    #[test]
    fn bad_client_json_is_invalid_input() {
        for body in [
            "not json",
            r#"{"latitude": 1.0, "longitude": 2.0}"#,
            r#"{"latitude": 91.0, "longitude": 2.0, "accuracy": 3.0}"#,
        ] {
            assert!(matches!(PositionFix::from_json(body), Err(NavError::InvalidInput(_))), "{body}");
        }
    }

    #[test]
    fn track_csv_loads_in_order() {
        let csv = "timestamp_ms,latitude,longitude,accuracy_m,speed_mps\n\
                   1000,-23.5614,-46.6559,8.0,11.2\n\
                   2000,-23.5613,-46.6551,6.5,\n";
        let fixes = load_fixes_reader(Cursor::new(csv)).unwrap();
        assert_eq!(fixes.len(), 2);
        assert_eq!(fixes[0].timestamp_ms, Some(1000));
        assert_eq!(fixes[0].speed_mps, 11.2);
        assert_eq!(fixes[1].speed_mps, 0.0);
        assert_eq!(fixes[1].coordinate, Coordinate::new(-23.5613, -46.6551));
    }

    #[test]
    fn malformed_track_rows_are_rejected() {
        let bad_number = "timestamp_ms,latitude,longitude,accuracy_m,speed_mps\n1000,north,-46.0,8.0,1.0\n";
        assert!(matches!(load_fixes_reader(Cursor::new(bad_number)), Err(TrackError::Parse(_))));

        let out_of_range = "timestamp_ms,latitude,longitude,accuracy_m,speed_mps\n\
                            1000,-23.0,-46.0,8.0,1.0\n\
                            2000,-123.0,-46.0,8.0,1.0\n";
        match load_fixes_reader(Cursor::new(out_of_range)) {
            Err(TrackError::Parse(msg)) => assert!(msg.starts_with("row 2"), "{msg}"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod registry {
    use nav_core::{NavError, SessionId};

    use super::fixtures::*;
    use crate::{Command, NavEvent, NoopObserver, PositionFix, SessionObserver, SessionRegistry};

    #[derive(Default)]
    struct Recorder {
        fixes:    usize,
        events:   Vec<(SessionId, &'static str)>,
        rejected: Vec<(SessionId, NavError)>,
    }

    impl SessionObserver for Recorder {
        fn on_fix(&mut self, _session: SessionId, _fix: &PositionFix) {
            self.fixes += 1;
        }
        fn on_event(&mut self, session: SessionId, event: &NavEvent) {
            self.events.push((session, event.kind()));
        }
        fn on_rejected(&mut self, session: SessionId, error: &NavError) {
            self.rejected.push((session, error.clone()));
        }
    }

    #[test]
    fn sessions_are_isolated() {
        let mut reg = SessionRegistry::default();
        let (a, b) = (SessionId(1), SessionId(2));
        reg.open(a).set_route(route());
        reg.open(b).set_route(route());

        reg.handle_command(a, Command::Start, &mut NoopObserver).unwrap();
        reg.handle_command(a, Command::Advance, &mut NoopObserver).unwrap();

        assert_eq!(reg.get(a).unwrap().current_index(), 1);
        assert!(!reg.get(b).unwrap().is_active());
        assert_eq!(reg.get(b).unwrap().current_index(), 0);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn observer_sees_events_and_rejections() {
        let mut reg = SessionRegistry::default();
        let id = SessionId(9);
        let mut rec = Recorder::default();

        assert_eq!(reg.handle_command(id, Command::Start, &mut rec), Err(NavError::NoRoute));
        assert_eq!(reg.len(), 1);

        reg.get_mut(id).unwrap().set_route(route());
        reg.handle_command(id, Command::Start, &mut rec).unwrap();
        reg.handle_fix(id, fix_at(north_of(start_point(), 150.0)), &mut rec).unwrap();

        assert_eq!(rec.fixes, 1);
        assert_eq!(rec.events, vec![
            (id, "instruction_changed"),
            (id, "proximity_alert"),
            (id, "position_echo"),
        ]);
        assert_eq!(rec.rejected, vec![(id, NavError::NoRoute)]);
    }

    #[test]
    fn fix_for_unknown_or_idle_session_is_rejected() {
        let mut reg = SessionRegistry::default();
        let mut rec = Recorder::default();
        let fix = fix_at(start_point());

        assert_eq!(reg.handle_fix(SessionId(3), fix, &mut rec), Err(NavError::NotActive));
        assert!(reg.is_empty());

        reg.open(SessionId(3));
        assert_eq!(reg.handle_fix(SessionId(3), fix, &mut rec), Err(NavError::NotActive));
        assert_eq!(rec.fixes, 0);
        assert_eq!(rec.rejected.len(), 2);
    }

    #[test]
    fn close_removes_session() {
        let mut reg = SessionRegistry::default();
        reg.open(SessionId(1));
        reg.open(SessionId(2));
        assert!(reg.close(SessionId(1)).is_some());
        assert!(reg.close(SessionId(1)).is_none());
        assert_eq!(reg.ids().collect::<Vec<_>>(), vec![SessionId(2)]);
    }
}
