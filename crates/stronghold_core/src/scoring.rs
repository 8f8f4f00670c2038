//! crates/stronghold_core/src/scoring.rs
//! The three scoring layers and the tunable parameter set they share.
//!
//! Every layer is a pure function of `(throws, chunk, params)`: repeating
//! `Session::guess` without adding throws yields identical rankings
//! (spec.md §8).

use crate::geometry::{angle_delta, deg_to_rad, dist, Chunk};
use crate::rings::{ring_id, RINGS};
use crate::rng::StrongholdRng;
use crate::throw::Throw;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hard angle gate: a throw rejects a chunk outright beyond this deviation.
const ANGLE_GATE_DEGREES: f64 = 0.7;

/// Below this magnitude, `sin(u.a - t.a)` is treated as parallel rays and
/// the pair is skipped rather than risking a `NaN`/`inf` intersection.
const PARALLEL_EPS: f64 = 1e-9;

/// The four tunable scalars behind the scoring layers.
///
/// `angle_pref` is in radians, `ring_mod` and `math_factor` are world-unit
/// tolerances, `average_distance` is a fraction in `[0, 1]` selecting a
/// preferred radius within a ring (not an average of observed distances).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayerSet {
    pub angle_pref: f64,
    pub ring_mod: f64,
    pub average_distance: f64,
    pub math_factor: f64,
}

impl LayerSet {
    /// Default parameters, tuned offline. Their exact values are not part
    /// of the contract (spec.md §4.5.4); only the bucketed formulas are.
    pub fn one_eye_set() -> Self {
        Self {
            angle_pref: 0.0008,
            ring_mod: 50.0,
            average_distance: 0.5,
            math_factor: 50.0,
        }
    }

    /// Angle layer: accumulates per-throw agreement, gated hard at 0.7deg.
    ///
    /// Per throw: if the deviation exceeds the gate, the whole layer
    /// returns 0 immediately (this throw rejects the chunk). Otherwise a
    /// base `+1` plus `+2`/`+3`/`+4` for increasingly tight nested bands
    /// around `angle_pref`, all additive.
    pub fn angle(&self, throws: &[Throw], c: Chunk) -> i64 {
        let gate = deg_to_rad(ANGLE_GATE_DEGREES);
        let mut total = 0i64;
        for t in throws {
            let delta = angle_delta(c, t.a, t.x, t.z).abs();
            if delta > gate {
                return 0;
            }
            total += 1;
            if delta < 3.0 * self.angle_pref {
                total += 2;
            }
            if delta < 2.0 * self.angle_pref {
                total += 3;
            }
            if delta < self.angle_pref {
                total += 4;
            }
        }
        total
    }

    /// Ring layer: rewards chunks near the preferred radius within their
    /// ring. Returns 0 for chunks outside every ring band.
    pub fn ring(&self, c: Chunk) -> i64 {
        let id = ring_id(c);
        if id < 0 {
            return 0;
        }
        let (min, max) = RINGS[id as usize];
        let (cx, cz) = c.center();
        let r = dist(0.0, 0.0, cx, cz);
        let preferred = min + (max - min) * self.average_distance;
        let delta = r - preferred;
        if delta < self.ring_mod {
            3
        } else if delta < 2.0 * self.ring_mod {
            2
        } else {
            1
        }
    }

    /// Cross-angle layer: for every pair of throws, scores how close the
    /// chunk lies to the two forward rays' intersection point. With fewer
    /// than two throws this is neutral (returns 1).
    pub fn cross_angle(&self, throws: &[Throw], c: Chunk) -> i64 {
        if throws.len() < 2 {
            return 1;
        }
        let mut score = 1i64;
        for i in 0..throws.len() - 1 {
            for j in (i + 1)..throws.len() {
                let t = throws[i];
                let u = throws[j];
                let denom = (u.a - t.a).sin();
                if denom.abs() < PARALLEL_EPS {
                    continue;
                }
                let k = ((u.z - t.z) * u.a.sin() + (u.x - t.x) * u.a.cos()) / denom;
                let nx = t.x - k * t.a.sin();
                let nz = t.z + k * t.a.cos();

                let (cx, cz) = c.center();
                let d = dist(nx, nz, cx, cz);

                if d < 25.0 * self.math_factor {
                    score += 1;
                }
                if d < 12.0 * self.math_factor {
                    score += 2;
                }
                if d < 5.0 * self.math_factor {
                    score += 3;
                }
                if d < self.math_factor {
                    score += 4;
                }
            }
        }
        score
    }

    /// Total confidence: the product of all three layers. If `angle`
    /// returns 0 the chunk is eliminated regardless of the other layers.
    pub fn confidence(&self, throws: &[Throw], c: Chunk) -> i64 {
        self.angle(throws, c) * self.ring(c) * self.cross_angle(throws, c)
    }

    /// Mutate one randomly chosen field by a factor in `[0.8, 1.2]`. Used
    /// only by the offline parameter-search utility; never called from
    /// steady-state prediction.
    pub fn mutate(&self, rng: &mut StrongholdRng) -> LayerSet {
        const FACTOR: f64 = 0.20;
        let eff = (rng.next_unit() - 0.5) * 2.0 * FACTOR;
        let mut out = *self;
        match rng.next_index(4) {
            0 => out.angle_pref *= 1.0 + eff,
            1 => out.ring_mod *= 1.0 + eff,
            2 => out.average_distance *= 1.0 + eff,
            3 => out.math_factor *= 1.0 + eff,
            _ => unreachable!("next_index(4) is always < 4"),
        }
        out
    }
}
