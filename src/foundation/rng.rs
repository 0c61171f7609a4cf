use xxhash_rust::xxh3::xxh3_64_with_seed;

const XXH3_SEED: u64 = 0x7c3d_9f52_b614_08a7;

/// Deterministic stream of `f64` draws in `[0, 1)` seeded from an identifier
/// string.
///
/// Seeding hashes the identifier with XXH3-64 under the fixed crate seed
/// above. The stream itself is SplitMix64 (Steele, Lea & Flood's reference
/// mixer); each draw takes the top 53 bits of the next output and scales them
/// into `[0, 1)`. Identical identifiers produce identical streams across
/// runs and platforms.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub(crate) fn from_identifier(id: &str) -> Self {
        Self {
            state: xxh3_64_with_seed(id.as_bytes(), XXH3_SEED),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Next draw in `[0, 1)`.
    pub(crate) fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
