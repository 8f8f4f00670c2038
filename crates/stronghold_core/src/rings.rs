//! crates/stronghold_core/src/rings.rs
//! The eight fixed annular bands Strongholds generate on, and the
//! classifier mapping a chunk to its ring index.

use crate::geometry::{dist, Chunk};

/// Symmetric slack applied to both ends of every ring band, in world units.
pub const RING_SLACK: f64 = 240.0;

/// `(min_radius, max_radius)` pairs, in world units, outermost last.
pub const RINGS: [(f64, f64); 8] = [
    (1408.0, 2688.0),
    (4480.0, 5760.0),
    (7552.0, 8832.0),
    (10624.0, 11904.0),
    (13696.0, 14976.0),
    (16768.0, 18048.0),
    (19840.0, 21120.0),
    (22912.0, 24192.0),
];

/// Outer radius of the outermost ring, before slack.
pub const OUTER_MAX: f64 = RINGS[RINGS.len() - 1].1;

/// Classify a chunk's ring by the distance from its center to the origin.
/// Returns the first ring `i` with `min_i - RING_SLACK <= r <= max_i + RING_SLACK`,
/// or `-1` if none matches.
pub fn ring_id(c: Chunk) -> i32 {
    let (cx, cz) = c.center();
    let r = dist(0.0, 0.0, cx, cz);
    for (i, (min, max)) in RINGS.iter().enumerate() {
        if r < min - RING_SLACK {
            continue;
        }
        if r > max + RING_SLACK {
            continue;
        }
        return i as i32;
    }
    -1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_band_members_are_never_unclassified() {
        for &(min, max) in RINGS.iter() {
            for r in [
                min - RING_SLACK + 1.0,
                min,
                (min + max) / 2.0,
                max,
                max + RING_SLACK - 1.0,
            ] {
                // Walk outward from the origin along +x until a chunk center
                // lands near distance `r`; ring_id must accept it.
                let c = crate::geometry::chunk_from_world(r, 0.0);
                assert_ne!(ring_id(c), -1, "r={r} should classify into some ring");
            }
        }
    }

    #[test]
    fn far_outside_every_band_is_unclassified() {
        let c = crate::geometry::chunk_from_world(100.0, 100.0);
        assert_eq!(ring_id(c), -1);
    }
}
