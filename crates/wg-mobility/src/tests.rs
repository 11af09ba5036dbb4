//! Unit tests for wg-mobility.

use wg_core::{GeoPoint, MoverId, MoverKind};
use wg_registry::{Registry, RegistryBuilder};

use crate::state::position_at;
use crate::{MobilityEngine, MoverState};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn route3() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(0.0, 1.0),
        GeoPoint::new(1.0, 1.0),
    ]
}

/// Two movers on the same three-point route with different speeds.
fn registry(speeds: &[f64]) -> Registry {
    let mut b = RegistryBuilder::new();
    for (i, &speed) in speeds.iter().enumerate() {
        b.add_mover(format!("m{i}"), MoverKind::Tiger, speed, route3());
    }
    b.build().unwrap()
}

fn close(a: GeoPoint, b: GeoPoint) -> bool {
    (a.lat - b.lat).abs() < 1e-9 && (a.lon - b.lon).abs() < 1e-9
}

// ── Interpolation ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod interpolation {
    use super::*;

    #[test]
    fn integer_progress_hits_waypoints() {
        let r = route3();
        assert!(close(position_at(&r, 0.0), r[0]));
        assert!(close(position_at(&r, 1.0), r[1]));
    }

    #[test]
    fn fractional_progress_blends_lat_and_lon_independently() {
        let r = route3();
        assert!(close(position_at(&r, 0.25), GeoPoint::new(0.0, 0.25)));
        assert!(close(position_at(&r, 1.5), GeoPoint::new(0.5, 1.0)));
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        let r = route3();
        assert!(close(position_at(&r, -3.0), r[0]));
        assert!(close(position_at(&r, 7.0), r[2]));
    }

    #[test]
    fn short_routes_do_not_underflow() {
        let p = GeoPoint::new(3.0, 4.0);
        assert_eq!(position_at(&[p], 0.7), p);

        let q = GeoPoint::new(5.0, 4.0);
        assert!(close(position_at(&[p, q], 0.5), GeoPoint::new(4.0, 4.0)));
        assert!(close(position_at(&[p, q], 9.0), q));
    }
}

// ── MoverState ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod mover_state {
    use super::*;

    #[test]
    fn starts_at_first_waypoint() {
        let reg = registry(&[0.1]);
        let s = MoverState::at_start(&reg.movers()[0]);
        assert_eq!(s.progress, 0.0);
        assert_eq!(s.position, route3()[0]);
        assert!(s.visible);
    }

    #[test]
    fn advance_moves_by_speed() {
        let reg = registry(&[0.25]);
        let spec = &reg.movers()[0];
        let mut s = MoverState::at_start(spec);
        assert!(!s.advance(spec));
        assert!((s.progress - 0.25).abs() < 1e-12);
        assert!(close(s.position, GeoPoint::new(0.0, 0.25)));
    }

    #[test]
    fn wraps_to_start_instead_of_reversing() {
        // speed = route.len() - 1, progress = route.len() - 2 + 0.99
        let reg = registry(&[2.0]);
        let spec = &reg.movers()[0];
        let mut s = MoverState { progress: 1.99, position: position_at(&spec.route, 1.99), visible: true };
        assert!(s.advance(spec));
        assert_eq!(s.progress, 0.0);
        assert_eq!(s.position, spec.route[0]);
    }

    #[test]
    fn progress_stays_below_segment_count() {
        let reg = registry(&[0.37]);
        let spec = &reg.movers()[0];
        let mut s = MoverState::at_start(spec);
        for _ in 0..1_000 {
            s.advance(spec);
            assert!(s.progress >= 0.0 && s.progress < spec.segment_count() as f64);
        }
    }

    #[test]
    fn reaching_end_exactly_wraps() {
        let reg = registry(&[0.5]);
        let spec = &reg.movers()[0];
        let mut s = MoverState::at_start(spec);
        let wraps: Vec<bool> = (0..4).map(|_| s.advance(spec)).collect();
        assert_eq!(wraps, [false, false, false, true]);
        assert_eq!(s.progress, 0.0);
    }
}

// ── MobilityEngine ────────────────────────────────────────────────────────────

#[cfg(test)]
mod engine {
    use super::*;
    use crate::MobilityError;

    #[test]
    fn movers_advance_independently() {
        let reg = registry(&[0.1, 0.3]);
        let mut eng = MobilityEngine::new(&reg);
        eng.advance_all(&reg);
        assert!((eng.store.states[0].progress - 0.1).abs() < 1e-12);
        assert!((eng.store.states[1].progress - 0.3).abs() < 1e-12);
    }

    #[test]
    fn hidden_movers_do_not_move() {
        let reg = registry(&[0.1, 0.1]);
        let mut eng = MobilityEngine::new(&reg);
        eng.set_visibility(MoverId(1), false).unwrap();
        eng.advance_all(&reg);
        assert!(eng.store.states[0].progress > 0.0);
        assert_eq!(eng.store.states[1].progress, 0.0);
        assert_eq!(eng.store.visible_count(), 1);
        assert!(!eng.store.is_visible(MoverId(1)));
    }

    #[test]
    fn advance_all_reports_wraps() {
        let reg = registry(&[2.0, 0.1]);
        let mut eng = MobilityEngine::new(&reg);
        // 0.0 + 2.0 lands exactly on the end of the last segment.
        assert_eq!(eng.advance_all(&reg), vec![MoverId(0)]);
        assert_eq!(eng.store.states[0].progress, 0.0);
        assert!(eng.advance_all(&reg).contains(&MoverId(0)));
    }

    #[test]
    fn reset_rewinds_every_mover_and_keeps_visibility() {
        let reg = registry(&[0.4, 0.7]);
        let mut eng = MobilityEngine::new(&reg);
        eng.set_visibility(MoverId(0), false).unwrap();
        for _ in 0..3 {
            eng.advance_all(&reg);
        }
        eng.reset(&reg);
        for (spec, s) in reg.movers().iter().zip(&eng.store.states) {
            assert_eq!(s.progress, 0.0);
            assert_eq!(s.position, spec.route[0]);
        }
        assert!(!eng.store.states[0].visible);
    }

    #[test]
    fn unknown_mover_visibility_errors() {
        let reg = registry(&[0.1]);
        let mut eng = MobilityEngine::new(&reg);
        let err = eng.set_visibility(MoverId(5), false).unwrap_err();
        assert!(matches!(err, MobilityError::UnknownMover(MoverId(5))));
    }
}
