//! Unit tests for wg-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AlertId, MoverId, WatchPointId};

    #[test]
    fn index_roundtrip() {
        let id = MoverId(7);
        assert_eq!(id.index(), 7);
        assert_eq!(MoverId::try_from(7usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(MoverId(0) < MoverId(1));
        assert!(WatchPointId(10) > WatchPointId(9));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(MoverId::INVALID.0, u32::MAX);
        assert_eq!(WatchPointId::default(), WatchPointId::INVALID);
        assert_eq!(AlertId::INVALID.0, u64::MAX);
    }

    #[test]
    fn alert_id_next() {
        assert_eq!(AlertId(0).next(), AlertId(1));
    }

    #[test]
    fn display() {
        assert_eq!(MoverId(3).to_string(), "MoverId(3)");
        assert_eq!(WatchPointId(0).to_string(), "WatchPointId(0)");
    }
}

#[cfg(test)]
mod geo {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(26.0270, 76.5085);
        assert!(p.distance_m(p) < 1e-6);
    }

    #[test]
    fn one_degree_of_latitude() {
        let a = GeoPoint::new(30.0, 78.0);
        let b = GeoPoint::new(31.0, 78.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let a = GeoPoint::new(rng.gen_range(-89.0..89.0), rng.gen_range(-179.0..179.0));
            let b = GeoPoint::new(rng.gen_range(-89.0..89.0), rng.gen_range(-179.0..179.0));
            let ab = a.distance_m(b);
            let ba = b.distance_m(a);
            assert!((ab - ba).abs() <= 1e-6 * ab.max(1.0), "{a} {b}: {ab} vs {ba}");
        }
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = GeoPoint::new(10.0, 20.0);
        let b = GeoPoint::new(12.0, 24.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), GeoPoint::new(11.0, 22.0));
    }

    #[test]
    fn validity() {
        assert!(GeoPoint::new(0.0, 0.0).is_valid());
        assert!(!GeoPoint::new(91.0, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, f64::NAN).is_valid());
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick, Timestamp};

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(10).offset(3), Tick(13));
        assert!(Tick(120).is_multiple_of(60));
        assert!(!Tick(121).is_multiple_of(60));
        assert!(!Tick(0).is_multiple_of(0));
    }

    #[test]
    fn elapsed_may_be_negative() {
        let t0 = Timestamp::from_secs(10);
        let t1 = Timestamp::from_secs(4);
        assert_eq!(t0.elapsed_since(t1), 6_000);
        assert_eq!(t1.elapsed_since(t0), -6_000);
    }

    #[test]
    fn timestamp_display() {
        assert_eq!(Timestamp(45_250).to_string(), "45.250s");
    }

    #[test]
    fn clock_advance_and_reset() {
        let mut clock = SimClock::new();
        clock.advance(Timestamp(16));
        clock.advance(Timestamp(33));
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.last_now, Some(Timestamp(33)));
        clock.reset();
        assert_eq!(clock.current_tick, Tick::ZERO);
        assert_eq!(clock.last_now, None);
    }
}

#[cfg(test)]
mod kind {
    use crate::{MoverKind, RiskTier, Severity};

    #[test]
    fn parse_known_and_unknown() {
        assert_eq!("Tiger".parse::<MoverKind>().unwrap(), MoverKind::Tiger);
        assert_eq!(" bear ".parse::<MoverKind>().unwrap(), MoverKind::Bear);
        assert_eq!("wolf".parse::<MoverKind>().unwrap(), MoverKind::Unknown);
        assert_eq!("HIGH".parse::<RiskTier>().unwrap(), RiskTier::High);
        assert_eq!("extreme".parse::<RiskTier>().unwrap(), RiskTier::Unknown);
    }

    #[test]
    fn priorities() {
        assert_eq!(Severity::Critical.priority(), 3);
        assert_eq!(Severity::High.priority(), 2);
        assert_eq!(Severity::Medium.priority(), 1);
        assert_eq!(Severity::Low.priority(), 0);
    }

    #[test]
    fn ord_matches_priority() {
        let mut all = [Severity::High, Severity::Low, Severity::Critical, Severity::Medium];
        all.sort();
        let priorities: Vec<u8> = all.iter().map(|s| s.priority()).collect();
        assert_eq!(priorities, [0, 1, 2, 3]);
    }

    #[test]
    fn display() {
        assert_eq!(MoverKind::Leopard.to_string(), "leopard");
        assert_eq!(RiskTier::Medium.to_string(), "medium");
        assert_eq!(Severity::Critical.title(), "CRITICAL ALERT");
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, SimConfig};

    #[test]
    fn default_is_stock_tuning() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.alert_radius_m, 4_000.0);
        assert_eq!(cfg.cooldown_window(), 45_000);
        assert_eq!(cfg.display_window(), 5_000);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_unordered_radii() {
        let cfg = SimConfig { high_radius_m: 500.0, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn rejects_non_positive_radius() {
        let cfg = SimConfig { critical_radius_m: 0.0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { alert_radius_m: f64::INFINITY, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}
