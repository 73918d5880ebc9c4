//! Unit tests for nav-core primitives.

#[cfg(test)]
mod geo {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::Coordinate;

    #[test]
    fn zero_distance() {
        let p = Coordinate::new(-23.5505, -46.6333);
        assert_eq!(p.distance_m(p), 0.0);
    }

    #[test]
    fn antipodal_is_half_circumference() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        let d = a.distance_m(b);
        assert!((d - 20_015_086.8).abs() < 1.0, "got {d}");

        let north = Coordinate::new(90.0, 0.0);
        let south = Coordinate::new(-90.0, 0.0);
        assert!((north.distance_m(south) - 20_015_086.8).abs() < 1.0);
    }

    #[test]
    fn off_axis_antipodes_are_finite() {
        let a = Coordinate::new(-40.860078, -143.92495);
        let b = Coordinate::new(40.860078, 36.07505);
        let d = a.distance_m(b);
        assert!((d - 20_015_086.8).abs() < 1.0, "got {d}");

        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..10_000 {
            let lat: f64 = rng.gen_range(-90.0..=90.0);
            let lon: f64 = rng.gen_range(-180.0..=0.0);
            let d = Coordinate::new(lat, lon).distance_m(Coordinate::new(-lat, lon + 180.0));
            assert!(d.is_finite(), "NaN for ({lat}, {lon})");
            assert!((d - 20_015_086.8).abs() < 1.0, "got {d} for ({lat}, {lon})");
        }
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.195 km on the 6,371 km sphere
        let a = Coordinate::new(-23.0, -46.0);
        let b = Coordinate::new(-24.0, -46.0);
        let d = a.distance_m(b);
        assert!((d - 111_194.9).abs() < 1.0, "got {d}");
    }

    #[test]
    fn symmetric_and_non_negative() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..500 {
            let a = Coordinate::new(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0));
            let b = Coordinate::new(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0));
            let ab = a.distance_m(b);
            let ba = b.distance_m(a);
            assert!(ab >= 0.0);
            assert!((ab - ba).abs() < 1e-6, "{a} {b}: {ab} vs {ba}");
            assert!(ab <= 20_015_087.0);
        }
    }

    #[test]
    fn triangle_inequality() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            let mut pick = || Coordinate::new(rng.gen_range(-60.0..=60.0), rng.gen_range(-170.0..=170.0));
            let (a, b, c) = (pick(), pick(), pick());
            assert!(a.distance_m(c) <= a.distance_m(b) + b.distance_m(c) + 1e-3);
        }
    }

    #[test]
    fn parse_coordinate_token() {
        let c = Coordinate::parse_token("COORD:-23.561414,-46.655881").unwrap();
        assert_eq!(c, Coordinate::new(-23.561414, -46.655881));

        // Whitespace around the numbers is tolerated.
        assert!(Coordinate::parse_token(" COORD: -1.5 , 2.25 ").is_some());
    }

    #[test]
    fn reject_malformed_tokens() {
        assert!(Coordinate::parse_token("01310-100").is_none());
        assert!(Coordinate::parse_token("COORD:").is_none());
        assert!(Coordinate::parse_token("COORD:1.0").is_none());
        assert!(Coordinate::parse_token("COORD:1.0,2.0,3.0").is_none());
        assert!(Coordinate::parse_token("COORD:abc,2.0").is_none());
        assert!(Coordinate::parse_token("COORD:95.0,2.0").is_none());
        assert!(Coordinate::parse_token("COORD:NaN,2.0").is_none());
    }

    #[test]
    fn display() {
        assert_eq!(Coordinate::new(1.5, -2.25).to_string(), "(1.500000, -2.250000)");
    }
}

#[cfg(test)]
mod place {
    use crate::{Coordinate, Endpoint, NavError, Place};

    #[test]
    fn query_text_skips_empty_fields() {
        let place = Place {
            street: "Avenida Paulista".into(),
            neighborhood: String::new(),
            city: "São Paulo".into(),
            region: "SP".into(),
            valid: true,
            ..Place::default()
        };
        assert_eq!(place.query_text(), "Avenida Paulista, São Paulo, SP");
    }

    #[test]
    fn query_text_all_empty() {
        assert_eq!(Place::default().query_text(), "");
    }

    #[test]
    fn invalid_carries_message() {
        let place = Place::invalid("invalid postal code");
        assert!(!place.valid);
        assert_eq!(place.error_message.as_deref(), Some("invalid postal code"));
        assert!(place.coordinate.is_none());
    }

    #[test]
    fn from_error_strips_category() {
        let place = Place::from_error(&NavError::NotFound("postal code not found".into()));
        assert_eq!(place.error_message.as_deref(), Some("postal code not found"));

        let place = Place::from_error(&NavError::MissingCoordinates(Endpoint::Origin));
        assert_eq!(place.error_message.as_deref(), Some("origin has no coordinates"));
    }

    #[test]
    fn from_coordinate_is_valid() {
        let c = Coordinate::new(-22.9, -43.2);
        let place = Place::from_coordinate(c);
        assert!(place.valid);
        assert_eq!(place.coordinate, Some(c));
        assert_eq!(place.region, "GPS");
        assert!(place.postal_code.is_none());
    }
}

#[cfg(test)]
mod config {
    use crate::{NavConfig, SessionConfig};

    #[test]
    fn defaults_match_production_constants() {
        let cfg = NavConfig::default();
        assert_eq!(cfg.geocode.search_limit, 10);
        assert_eq!(cfg.geocode.fallback_region, "BR");
        assert_eq!(cfg.compile.min_step_m, 10.0);
        assert_eq!(cfg.compile.alert_lead_m, 200.0);
        assert_eq!(cfg.compile.distance_suffix_min_m, 50.0);
        assert_eq!(cfg.session.advance_radius_m, 50.0);
        assert_eq!(cfg.session.arrival_radius_m, 50.0);
    }

    #[test]
    fn alert_band_is_exclusive() {
        let s = SessionConfig::default();
        assert!(!s.in_alert_band(100.0));
        assert!(s.in_alert_band(100.1));
        assert!(s.in_alert_band(199.9));
        assert!(!s.in_alert_band(200.0));
        assert!(!s.in_alert_band(250.0));
    }
}

#[cfg(test)]
mod errors {
    use crate::{Endpoint, NavError, SessionId};

    #[test]
    fn display() {
        assert_eq!(NavError::NoRoute.to_string(), "no route defined");
        assert_eq!(NavError::NotActive.to_string(), "navigation not active");
        assert_eq!(
            NavError::MissingCoordinates(Endpoint::Destination).to_string(),
            "destination has no coordinates"
        );
        assert_eq!(
            NavError::RoutingFailed("Impossible route".into()).to_string(),
            "routing failed: Impossible route"
        );
    }

    #[test]
    fn session_id_display() {
        assert_eq!(SessionId(7).to_string(), "SessionId(7)");
        assert_eq!(SessionId::from(9).get(), 9);
    }
}
