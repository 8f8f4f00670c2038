//! crates/stronghold_core/tests/heuristics.rs
//! Concrete end-to-end scenarios from spec.md §8, ported directly from
//! the original `heuristic_test.go` fixtures.

use stronghold_core::{chunk_dist, chunk_from_world, ring_id, Session, Throw};

/// `(x, z, yaw_degrees, goal_x, goal_z)` — one throw, one known goal.
const HEURISTIC_TESTS: [(f64, f64, f64, f64, f64); 6] = [
    (-214.79, 386.16, 76.50, -1608.0, 728.0),
    (320.18, 255.34, -53.40, 1240.0, 936.0),
    (454.38, -319.63, -188.55, 248.0, -1688.0),
    (-87.85, -434.11, 575.85, 504.0, -1256.0),
    (-1003.81, 170.63, 448.94, -2600.0, 200.0),
    (-146.06, 457.92, 668.39, 1192.0, 1528.0),
];

#[test]
fn single_throw_scenarios_surface_the_known_goal() {
    for (n, &(x, z, yaw, gx, gz)) in HEURISTIC_TESTS.iter().enumerate() {
        let mut sess = Session::new();
        sess.new_throw(Throw::from_degrees(x, z, yaw, 0.0));
        let goal = chunk_from_world(gx, gz);
        let found = sess.guess();
        assert!(
            found.iter().any(|c| c.chunk == goal),
            "test {n} failed: stronghold {goal} not found among {} candidates",
            found.len()
        );
    }
}

/// Three successive throws converging on the same stronghold.
fn progression_throws() -> Vec<Throw> {
    vec![
        Throw::from_degrees(294.96, -486.85, -499.05, 0.0),
        Throw::from_degrees(362.90, -669.03, -493.95, 0.0),
        Throw::from_degrees(467.60, -843.82, -488.70, 0.0),
    ]
}

#[test]
fn progression_converges_on_third_throw() {
    let goal = chunk_from_world(936.0, -1224.0);
    let mut sess = Session::new();
    let mut best = None;
    for t in progression_throws() {
        sess.new_throw(t);
        best = stronghold_core::central(&sess.guess());
    }
    let best = best.expect("three throws must produce a ranking");
    assert!(
        chunk_dist(best.chunk, goal) <= 2.0 * 16.0 + 1e-6,
        "central guess {} not within 2 chunks of goal {}",
        best.chunk,
        goal
    );
}

#[test]
fn goal_chunks_are_always_ring_classified() {
    // Sanity check on the fixture data itself: every known goal must sit
    // on one of the eight bands (spec.md §8's ring-membership invariant).
    for &(_, _, _, gx, gz) in HEURISTIC_TESTS.iter() {
        let goal = chunk_from_world(gx, gz);
        assert!(ring_id(goal) >= 0, "goal {goal} not ring-classified");
    }
}

#[test]
fn repeated_guess_without_new_throws_is_stable() {
    let mut sess = Session::new();
    sess.new_throw(Throw::from_degrees(-214.79, 386.16, 76.50, 0.0));
    let a = sess.guess();
    let b = sess.guess();
    assert_eq!(a, b);
}
