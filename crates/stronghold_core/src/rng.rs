//! crates/stronghold_core/src/rng.rs
//! Seeded RNG for the offline parameter-mutation utility only. No OS
//! entropy is ever consumed; the scoring contract never depends on
//! randomness (spec.md §5).

use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

/// Newtype over `ChaCha20Rng`, seedable for reproducible parameter search.
pub struct StrongholdRng(ChaCha20Rng);

impl StrongholdRng {
    /// Build from an integer seed.
    pub fn from_seed(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&seed.to_le_bytes());
        Self(ChaCha20Rng::from_seed(bytes))
    }

    /// Uniform index in `[0, n)` via rejection sampling (avoids modulo bias).
    pub fn next_index(&mut self, n: u64) -> u64 {
        assert!(n > 0, "next_index requires n > 0");
        let zone = u64::MAX - (u64::MAX % n);
        loop {
            let x = self.0.next_u64();
            if x < zone {
                return x % n;
            }
        }
    }

    /// Uniform `f64` in `[0, 1)`, using the top 53 bits of a `u64` draw.
    pub fn next_unit(&mut self) -> f64 {
        let bits = self.0.next_u64() >> 11;
        (bits as f64) * (1.0 / (1u64 << 53) as f64)
    }
}

impl Default for StrongholdRng {
    fn default() -> Self {
        Self::from_seed(0)
    }
}
