//! stronghold_core — geometry, ring model, candidate enumeration, and
//! layered scoring for Stronghold triangulation from Eye-of-Ender throws.
//!
//! This crate is pure: no I/O, no OS randomness (the only RNG use is the
//! offline parameter-mutation utility in [`scoring::LayerSet::mutate`]).
//! Parsing of operator command logs and any user-facing surface live
//! outside this crate (see `stronghold_io`, `stronghold_tune`).
//!
//! - Geometry: chunk/world conversions, signed angles, distances.
//! - Ring model: the eight concentric Stronghold bands.
//! - Candidate enumeration: chunks a throw's ray plausibly crosses.
//! - Session: accumulates throws, caches the candidate set, ranks guesses.
//! - Scoring: `Angle`, `Ring`, `CrossAngle` layers fused into `Confidence`.

#![forbid(unsafe_code)]

pub mod candidates;
pub mod geometry;
pub mod rings;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod throw;

// Tight, explicit re-exports for the common entry points.
pub use candidates::chunks_in_throw;
pub use geometry::{angle_delta, chunk_dist, chunk_from_world, deg_to_rad, dist, wrap_rads, Chunk};
pub use rings::{ring_id, OUTER_MAX, RINGS, RING_SLACK};
pub use rng::StrongholdRng;
pub use scoring::LayerSet;
pub use session::{central, Candidate, Session};
pub use throw::Throw;
