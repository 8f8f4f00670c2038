//! crates/stronghold_core/src/throw.rs
//! A single Eye-of-Ender observation.

use crate::geometry::deg_to_rad;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One thrown-projectile observation: a world position and an aim angle.
///
/// `a` (yaw) is normalized to `(-pi, pi]` on construction. `tilt` (pitch)
/// is carried for parse round-tripping only; no scoring layer reads it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Throw {
    pub x: f64,
    pub z: f64,
    pub a: f64,
    pub tilt: f64,
}

impl Throw {
    /// Construct from an already-radians yaw/tilt pair.
    pub fn new(x: f64, z: f64, yaw_rad: f64, tilt_rad: f64) -> Self {
        Self {
            x,
            z,
            a: crate::geometry::wrap_rads(yaw_rad),
            tilt: crate::geometry::wrap_rads(tilt_rad),
        }
    }

    /// Construct from degrees (the unit operator command logs use),
    /// normalizing yaw values arbitrarily far outside `[-360, 360]`.
    pub fn from_degrees(x: f64, z: f64, yaw_deg: f64, tilt_deg: f64) -> Self {
        Self::new(x, z, deg_to_rad(yaw_deg), deg_to_rad(tilt_deg))
    }

    /// Forward unit vector derived from yaw: `(-sin a, cos a)`.
    pub fn forward(&self) -> (f64, f64) {
        (-self.a.sin(), self.a.cos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaw_normalizes_beyond_one_full_turn() {
        let t1 = Throw::from_degrees(0.0, 0.0, -499.05, 0.0);
        let t2 = Throw::from_degrees(0.0, 0.0, -499.05 + 720.0, 0.0);
        assert!((t1.a - t2.a).abs() < 1e-9);
    }

    #[test]
    fn forward_vector_is_unit_length() {
        let t = Throw::from_degrees(1.0, 2.0, 37.5, -10.0);
        let (dx, dz) = t.forward();
        assert!((dx * dx + dz * dz - 1.0).abs() < 1e-9);
    }
}
