//! Unit tests for sf-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod pos {
    use crate::{MOORE_OFFSETS, Pos};

    #[test]
    fn manhattan_is_symmetric() {
        let a = Pos::new(1, 1);
        let b = Pos::new(4, -3);
        assert_eq!(a.manhattan(b), 7);
        assert_eq!(b.manhattan(a), 7);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn moore_excludes_self_and_keeps_scan_order() {
        let centre = Pos::new(5, 5);
        let cells: Vec<Pos> = centre.moore().collect();
        assert_eq!(cells.len(), 8);
        assert!(!cells.contains(&centre));
        assert_eq!(cells[0], Pos::new(4, 4));
        assert_eq!(cells[1], Pos::new(4, 5));
        assert_eq!(cells[7], Pos::new(6, 6));
        assert_eq!(MOORE_OFFSETS.len(), 8);
    }

    #[test]
    fn within_bounds() {
        assert!(Pos::new(0, 0).within(3, 3));
        assert!(Pos::new(2, 2).within(3, 3));
        assert!(!Pos::new(3, 0).within(3, 3));
        assert!(!Pos::new(-1, 0).within(3, 3));
        assert!(!Pos::new(0, -1).within(3, 3));
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn tick_display() {
        assert_eq!(Tick(3).to_string(), "T3");
    }

    #[test]
    fn default_config_matches_reference_run() {
        let cfg = SimConfig::default();
        assert_eq!((cfg.width, cfg.height), (48, 48));
        assert_eq!(cfg.shoppers, 50);
        assert_eq!(cfg.end_tick(), Tick(400));
        assert_eq!(cfg.batch_ticks, 25);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn empty_grid_rejected() {
        let cfg = SimConfig { width: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_batch_rejected() {
        let cfg = SimConfig { batch_ticks: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use rand::{Rng, RngCore};

    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.next_u64(), r2.next_u64());
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut r0 = SimRng::new(1);
        let mut r1 = SimRng::new(2);
        assert_ne!(r0.next_u64(), r1.next_u64());
    }

    #[test]
    fn children_diverge() {
        let mut root = SimRng::new(7);
        let mut a = root.child(0);
        let mut b = root.child(1);
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn child_streams_replay_from_root_seed() {
        let mut a = SimRng::new(99).child(3);
        let mut b = SimRng::new(99).child(3);
        for _ in 0..50 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn usable_through_rng_trait() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0..8usize);
            assert!(v < 8);
        }
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
