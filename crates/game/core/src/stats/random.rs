//! Deterministic generation of values a caller leaves unspecified.

use crate::config::GameConfig;
use crate::env::{RngOracle, compute_seed, seed_context};

/// Draws an IV in `0..=MAX_IV` for the stat at table position `slot`.
pub fn generate_iv<R>(rng: &R, seed: u64, personality_value: u32, slot: u32) -> i32
where
    R: RngOracle + ?Sized,
{
    let draw_seed = compute_seed(seed, personality_value, slot, seed_context::IV);
    rng.range(draw_seed, 0, GameConfig::MAX_IV as u32) as i32
}

/// Draws a 32-bit personality value.
pub fn generate_personality<R>(rng: &R, seed: u64) -> u32
where
    R: RngOracle + ?Sized,
{
    rng.next_u32(compute_seed(seed, 0, 0, seed_context::PERSONALITY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    #[test]
    fn ivs_stay_in_range() {
        for seed in 0..200 {
            for slot in 0..6 {
                let iv = generate_iv(&PcgRng, seed, 12345, slot);
                assert!((0..=GameConfig::MAX_IV).contains(&iv), "{iv}");
            }
        }
    }

    #[test]
    fn generation_is_reproducible() {
        assert_eq!(
            generate_iv(&PcgRng, 99, 7, 2),
            generate_iv(&PcgRng, 99, 7, 2)
        );
        assert_eq!(
            generate_personality(&PcgRng, 99),
            generate_personality(&PcgRng, 99)
        );
    }
}
