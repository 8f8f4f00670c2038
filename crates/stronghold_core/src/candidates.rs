//! crates/stronghold_core/src/candidates.rs
//! Candidate enumeration along a throw's line of sight.

use std::collections::HashSet;

use crate::geometry::{chunk_from_world, dist, Chunk};
use crate::rings::OUTER_MAX;
use crate::throw::Throw;

/// Slack added to the outer ring's max radius before the walker gives up.
const ENUM_SLACK: f64 = 240.0;
/// Walker step size, world units.
const STEP: f64 = 2.0;

/// Chunks the throw's forward ray plausibly crosses, out to the outermost
/// ring plus slack. Order is first-seen (deduplicated), not spatial.
///
/// At each 2-unit step, the enclosing chunk and its 2x2 neighborhood at
/// offsets `(-1..=0) x (-1..=0)` are added; this compensates for the ray
/// grazing a chunk boundary and for floating-point slack in the walker.
pub fn chunks_in_throw(t: &Throw) -> Vec<Chunk> {
    let (dx, dz) = t.forward();
    let mut cx = t.x;
    let mut cz = t.z;

    let mut seen: HashSet<Chunk> = HashSet::new();
    let mut out = Vec::new();

    loop {
        let block_x = cx.floor();
        let block_z = cz.floor();
        let base = chunk_from_world(block_x, block_z);

        for xo in -1..=0 {
            for zo in -1..=0 {
                let c = Chunk::new(base.cx + xo, base.cz + zo);
                if seen.insert(c) {
                    out.push(c);
                }
            }
        }

        let last_dist = dist(0.0, 0.0, cx, cz);
        cx += dx * STEP;
        cz += dz * STEP;
        let new_dist = dist(0.0, 0.0, cx, cz);

        if new_dist > last_dist && new_dist > OUTER_MAX + ENUM_SLACK {
            break;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_toward_known_goal_passes_through_its_chunk() {
        // Mirrors heuristic test #1: throw pointed (within measurement
        // noise) at a real stronghold chunk must have it enumerated.
        let t = Throw::from_degrees(-214.79, 386.16, 76.50, 0.0);
        let goal = crate::geometry::chunk_from_world(-1608.0, 728.0);
        let found = chunks_in_throw(&t);
        assert!(found.contains(&goal), "goal {goal:?} not enumerated");
    }

    #[test]
    fn enumeration_terminates_and_is_deduplicated() {
        let t = Throw::from_degrees(0.0, 0.0, 10.0, 0.0);
        let found = chunks_in_throw(&t);
        let unique: HashSet<_> = found.iter().copied().collect();
        assert_eq!(found.len(), unique.len());
        assert!(!found.is_empty());
    }

    #[test]
    fn ray_already_past_outer_bound_heading_outward_terminates_immediately() {
        // Starting far outside every ring and heading further out: the
        // walker's early-out must fire on the very first step.
        let t = Throw::from_degrees(100_000.0, 0.0, 90.0, 0.0);
        let found = chunks_in_throw(&t);
        // A single 2x2 neighborhood is at most 4 chunks.
        assert!(found.len() <= 4);
    }
}
