//! crates/stronghold_core/tests/geometry_proptests.rs
//! Quantified invariants from spec.md §8, checked over random inputs.

use proptest::prelude::*;
use stronghold_core::{angle_delta, chunk_from_world, wrap_rads, Chunk};
use std::f64::consts::PI;

proptest! {
    #[test]
    fn wrap_rads_stays_in_half_open_range(r in -1000.0f64..1000.0) {
        let w = wrap_rads(r);
        prop_assert!(w > -PI - 1e-6 && w <= PI + 1e-6);
    }

    #[test]
    fn wrap_rads_is_idempotent(r in -1000.0f64..1000.0) {
        let w = wrap_rads(r);
        prop_assert!((wrap_rads(w) - w).abs() < 1e-9);
    }

    #[test]
    fn angle_delta_stays_in_half_open_range(
        cx in -2000i32..2000,
        cz in -2000i32..2000,
        a in -50.0f64..50.0,
        sx in -20000.0f64..20000.0,
        sz in -20000.0f64..20000.0,
    ) {
        let c = Chunk::new(cx, cz);
        let d = angle_delta(c, a, sx, sz);
        prop_assert!(d > -PI - 1e-6 && d <= PI + 1e-6);
    }

    #[test]
    fn chunk_from_world_floors_toward_negative_infinity(x in -100000i64..100000) {
        let c = chunk_from_world(x as f64, 0.0);
        let lower = c.cx as i64 * 16;
        let upper = lower + 16;
        prop_assert!(lower <= x && x < upper);
    }

    #[test]
    fn center_round_trips_for_any_chunk(cx in -100000i32..100000, cz in -100000i32..100000) {
        let c = Chunk::new(cx, cz);
        let (x, z) = c.center();
        prop_assert_eq!(chunk_from_world(x, z), c);
    }
}
