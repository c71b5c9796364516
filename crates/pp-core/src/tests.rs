//! Unit tests for pp-core primitives.

#[cfg(test)]
mod ids {
    use crate::{PuckId, SpotId};

    #[test]
    fn index_roundtrip() {
        let id = PuckId(4);
        assert_eq!(id.index(), 4);
        assert_eq!(PuckId::try_from(4usize).unwrap(), id);
    }

    #[test]
    fn spot_id_rejects_overflow() {
        assert!(SpotId::try_from(300usize).is_err());
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(PuckId::INVALID.0, u32::MAX);
        assert_eq!(SpotId::INVALID.0, u8::MAX);
        assert_eq!(SpotId::default(), SpotId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(PuckId(7).to_string(), "PuckId(7)");
        assert_eq!(SpotId(8).to_string(), "SpotId(8)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GridPoint;

    #[test]
    fn zero_distance() {
        let p = GridPoint::new(420, 180);
        assert_eq!(p.distance_sq(p), 0);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn pythagorean_distance() {
        let a = GridPoint::new(0, 0);
        let b = GridPoint::new(30, 40);
        assert_eq!(a.distance_sq(b), 2_500);
        assert!((a.distance(b) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn extent_check() {
        assert!(GridPoint::new(0, 480).within_extent(480));
        assert!(!GridPoint::new(481, 0).within_extent(480));
        assert!(!GridPoint::new(-1, 10).within_extent(480));
    }

    #[test]
    fn display() {
        assert_eq!(GridPoint::new(180, 60).to_string(), "(180, 60)");
    }
}

#[cfg(test)]
mod puck {
    use crate::{GridPoint, Puck, PuckId, SpotId};

    #[test]
    fn starts_unparked_and_unprocessed() {
        let p = Puck::new(PuckId(0), GridPoint::new(5, 6));
        assert_eq!(p.spot(), None);
        assert!(!p.is_processed());
        assert_eq!(p.position(), GridPoint::new(5, 6));
    }

    #[test]
    fn mark_processed_is_idempotent() {
        let mut p = Puck::new(PuckId(0), GridPoint::new(0, 0));
        p.mark_processed();
        p.mark_processed();
        assert!(p.is_processed());
    }

    #[test]
    fn set_position_keeps_spot() {
        let mut p = Puck::new(PuckId(0), GridPoint::new(0, 0));
        p.park(SpotId(2), GridPoint::new(420, 60));
        p.set_position(GridPoint::new(1, 2));
        assert_eq!(p.position(), GridPoint::new(1, 2));
        assert_eq!(p.spot(), Some(SpotId(2)));
        p.unpark();
        assert_eq!(p.spot(), None);
    }

    #[test]
    fn park_moves_puck() {
        let mut p = Puck::new(PuckId(1), GridPoint::new(0, 0));
        p.park(SpotId(0), GridPoint::new(180, 60));
        assert_eq!(p.spot(), Some(SpotId(0)));
        assert_eq!(p.position(), GridPoint::new(180, 60));
    }
}

#[cfg(test)]
mod spot {
    use crate::{GridPoint, ParkingSpot, SpotId, SPOT_LAYOUT};

    #[test]
    fn layout_has_nine_spots_in_path_order() {
        let spots = ParkingSpot::layout();
        assert_eq!(spots.len(), 9);
        assert_eq!(spots[0].position(), GridPoint::new(180, 60));
        assert_eq!(spots[3].position(), GridPoint::new(420, 180));
        assert_eq!(spots[8].position(), GridPoint::new(420, 300));
        for (i, s) in spots.iter().enumerate() {
            assert_eq!(s.id(), SpotId(i as u8));
            assert_eq!(s.position(), SPOT_LAYOUT[i]);
            assert!(!s.is_occupied());
        }
    }

    #[test]
    fn toggle_flips_both_ways() {
        let mut s = ParkingSpot::new(SpotId(0), GridPoint::new(180, 60));
        s.toggle_occupied();
        assert!(s.is_occupied());
        s.toggle_occupied();
        assert!(!s.is_occupied());
    }
}

#[cfg(test)]
mod config {
    use crate::{PathConfig, PathError};

    #[test]
    fn default_is_valid() {
        let cfg = PathConfig::default();
        assert_eq!(cfg.max_pucks, 9);
        assert_eq!(cfg.grid_extent, 480);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_zero_and_too_many_pucks() {
        let zero = PathConfig { max_pucks: 0, ..PathConfig::default() };
        assert!(matches!(zero.validate(), Err(PathError::Config(_))));
        let ten = PathConfig { max_pucks: 10, ..PathConfig::default() };
        assert!(matches!(ten.validate(), Err(PathError::Config(_))));
    }

    #[test]
    fn rejects_negative_extent() {
        let cfg = PathConfig { grid_extent: -1, ..PathConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.grid_point(480), r2.grid_point(480));
        }
    }

    #[test]
    fn grid_point_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            assert!(rng.grid_point(480).within_extent(480));
        }
    }

    #[test]
    fn gen_range_inclusive_bounds() {
        let mut rng = SimRng::new(7);
        for _ in 0..1000 {
            let n: usize = rng.gen_range(1..=9);
            assert!((1..=9).contains(&n));
        }
    }
}

#[cfg(test)]
mod stage {
    use crate::Stage;

    #[test]
    fn display() {
        assert_eq!(Stage::Populated.to_string(), "populated");
        assert_eq!(Stage::Processed.to_string(), "processed");
    }
}
