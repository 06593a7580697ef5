//! RNG oracle for deterministic random number generation.
//!
//! Used wherever a stat block fills in data the caller left out (IVs,
//! personality values). Given the same seed every implementation must yield
//! the same value, so a monster generated from a seed can be regenerated
//! exactly.

/// RNG oracle for deterministic random number generation.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }
}

/// PCG-XSH-RR generator: 64-bit LCG state, 32-bit permuted output.
///
/// Stateless; each call derives its output from the seed alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Derives an independent seed for one random draw.
///
/// * `base_seed` - seed supplied by the caller for the whole monster
/// * `personality_value` - distinguishes monsters sharing a base seed
/// * `slot` - index of the value being drawn (e.g. the stat's table order)
/// * `context` - separates unrelated draws for the same slot
pub fn compute_seed(base_seed: u64, personality_value: u32, slot: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash multipliers followed by a murmur-style avalanche.
    let mut hash = base_seed;
    hash ^= (personality_value as u64).wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (slot as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}

/// `context` values used by [`compute_seed`].
pub mod seed_context {
    pub const IV: u32 = 0;
    pub const PERSONALITY: u32 = 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_value() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
        assert_ne!(rng.next_u32(42), rng.next_u32(43));
    }

    #[test]
    fn range_is_inclusive_and_bounded() {
        let rng = PcgRng;
        for seed in 0..500 {
            let value = rng.range(seed, 0, 31);
            assert!(value <= 31);
        }
        assert_eq!(rng.range(9, 5, 5), 5);
        assert_eq!(rng.range(9, 7, 3), 7);
    }

    #[test]
    fn seeds_differ_per_slot_and_context() {
        let a = compute_seed(1, 100, 0, seed_context::IV);
        let b = compute_seed(1, 100, 1, seed_context::IV);
        let c = compute_seed(1, 100, 0, seed_context::PERSONALITY);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, compute_seed(1, 100, 0, seed_context::IV));
    }
}
