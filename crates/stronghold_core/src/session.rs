//! crates/stronghold_core/src/session.rs
//! The stateful accumulator: throws in, ranked candidates out.

use std::collections::HashSet;
use std::fmt;

use crate::candidates::chunks_in_throw;
use crate::geometry::{angle_delta, Chunk};
use crate::rings::ring_id;
use crate::scoring::LayerSet;
use crate::throw::Throw;

/// A chunk paired with its total confidence score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub chunk: Chunk,
    pub confidence: i64,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (confidence {})", self.chunk, self.confidence)
    }
}

/// Stateful accumulator of throws and the cached candidate set they imply.
///
/// `new_throw` is the only mutating operation; `guess` is a pure function
/// of the current throws and candidate set, so repeated calls without new
/// throws always return the same ranking.
pub struct Session {
    throws: Vec<Throw>,
    candidates: Option<HashSet<Chunk>>,
    params: LayerSet,
}

impl Session {
    /// An empty session using the default parameter set.
    pub fn new() -> Self {
        Self::with_params(LayerSet::one_eye_set())
    }

    /// An empty session using a caller-chosen parameter set.
    pub fn with_params(params: LayerSet) -> Self {
        Self {
            throws: Vec::new(),
            candidates: None,
            params,
        }
    }

    pub fn throws(&self) -> &[Throw] {
        &self.throws
    }

    pub fn params(&self) -> &LayerSet {
        &self.params
    }

    /// Append a throw and update the candidate set.
    ///
    /// Policy: with no prior candidates, seed the set from this throw's
    /// ray-enumeration, keeping only ring-valid chunks. Otherwise intersect
    /// the prior set with this throw's enumeration (also ring-filtered).
    /// The candidate set never grows across throws.
    ///
    /// Returns the number of accepted candidates after this throw, for
    /// diagnostics.
    pub fn new_throw(&mut self, t: Throw) -> usize {
        let enumerated: HashSet<Chunk> = chunks_in_throw(&t)
            .into_iter()
            .filter(|&c| ring_id(c) >= 0)
            .collect();

        self.candidates = Some(match self.candidates.take() {
            None => enumerated,
            Some(prev) => prev.intersection(&enumerated).copied().collect(),
        });

        self.throws.push(t);
        self.candidates.as_ref().map_or(0, |s| s.len())
    }

    /// Score every current candidate and return a ranking sorted by
    /// descending confidence, ties broken by `(cx, cz)` ascending.
    pub fn guess(&self) -> Vec<Candidate> {
        let mut out: Vec<Candidate> = match &self.candidates {
            None => Vec::new(),
            Some(set) => set
                .iter()
                .map(|&chunk| Candidate {
                    chunk,
                    confidence: self.params.confidence(&self.throws, chunk),
                })
                .collect(),
        };
        out.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| (a.chunk.cx, a.chunk.cz).cmp(&(b.chunk.cx, b.chunk.cz)))
        });
        out
    }

    /// Human-readable per-layer breakdown for the goal and best-guess
    /// chunks against the given throw. Diagnostic only; not scored by
    /// tests.
    pub fn explain(&self, t: &Throw, goal: Chunk, best: Chunk) -> String {
        let mut s = String::new();
        for (chunk, label) in [(goal, "goal"), (best, "best")] {
            let angle = self.params.angle(&self.throws, chunk);
            let ring = self.params.ring(chunk);
            let cross = self.params.cross_angle(&self.throws, chunk);
            s.push_str(&format!(
                "-- {label} {chunk} -- angle={angle} ring={ring} crossangle={cross} confidence={}\n",
                angle * ring * cross
            ));
            let delta = angle_delta(chunk, t.a, t.x, t.z);
            s.push_str(&format!(
                "   delta vs this throw: {:.6} rad ({:.4} deg)\n",
                delta,
                delta.to_degrees()
            ));
        }
        s
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Centroid chunk of the top-confidence cluster: the mean, rounded to the
/// nearest integer, of every candidate within 1 of the maximum confidence.
/// The returned candidate's confidence is the cluster's maximum.
pub fn central(ranked: &[Candidate]) -> Option<Candidate> {
    let max_confidence = ranked.iter().map(|c| c.confidence).max()?;
    let cluster: Vec<&Candidate> = ranked
        .iter()
        .filter(|c| c.confidence >= max_confidence - 1)
        .collect();

    let n = cluster.len() as f64;
    let sum_cx: f64 = cluster.iter().map(|c| c.chunk.cx as f64).sum();
    let sum_cz: f64 = cluster.iter().map(|c| c.chunk.cz as f64).sum();

    Some(Candidate {
        chunk: Chunk::new((sum_cx / n).round() as i32, (sum_cz / n).round() as i32),
        confidence: max_confidence,
    })
}
