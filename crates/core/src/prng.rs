//! Seedable Xorshift64 generator behind the random sort order.
//!
//! Pure integer arithmetic, so the same seed shuffles a palette the same way
//! on every platform.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::time::{SystemTime, UNIX_EPOCH};

/// Xorshift64 PRNG with shifts (13, 7, 17).
///
/// Seed 0 is a fixed point of the algorithm and is replaced with a non-zero
/// fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Seeds from the wall clock. Used when the caller does not pin a seed.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::new(nanos)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Returns a value in [0, max). Modulo reduction; `max` must be non-zero.
    pub fn next_below(&mut self, max: u64) -> u64 {
        self.next_u64() % max
    }

    /// Returns -1, 0, or 1 with equal probability.
    pub fn next_sign(&mut self) -> i32 {
        self.next_below(3) as i32 - 1
    }

    /// [`next_sign`](Self::next_sign) as an [`Ordering`].
    pub fn next_ordering(&mut self) -> Ordering {
        self.next_sign().cmp(&0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_u64_produces_known_golden_value_for_seed_42() {
        // If this breaks, every seeded shuffle changes.
        let mut rng = Xorshift64::new(42);
        assert_eq!(rng.next_u64(), 45_454_805_674);
    }

    #[test]
    fn seed_zero_does_not_produce_all_zeros() {
        let mut rng = Xorshift64::new(0);
        assert_ne!(rng.next_u64(), 0);
        assert_ne!(rng.next_u64(), 0);
    }

    #[test]
    fn two_instances_with_same_seed_produce_identical_orderings() {
        let mut a = Xorshift64::new(42);
        let mut b = Xorshift64::new(42);
        for i in 0..1000 {
            assert_eq!(a.next_ordering(), b.next_ordering(), "diverged at {i}");
        }
    }

    #[test]
    fn next_sign_covers_all_three_values() {
        let mut rng = Xorshift64::new(2024);
        let mut seen = [false; 3];
        for _ in 0..1000 {
            let s = rng.next_sign();
            assert!((-1..=1).contains(&s), "sign {s} out of range");
            seen[(s + 1) as usize] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn from_clock_produces_values() {
        let mut rng = Xorshift64::from_clock();
        assert_ne!(rng.next_u64(), 0);
    }

    #[test]
    fn serialization_roundtrip_preserves_state() {
        let mut rng = Xorshift64::new(42);
        for _ in 0..50 {
            rng.next_u64();
        }
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: Xorshift64 = serde_json::from_str(&json).unwrap();
        for i in 0..100 {
            assert_eq!(rng.next_u64(), restored.next_u64(), "diverged at {i}");
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn next_below_in_bounds_for_any_seed_and_max(
                seed: u64,
                max in 1_u64..10_000,
            ) {
                let mut rng = Xorshift64::new(seed);
                for _ in 0..100 {
                    let v = rng.next_below(max);
                    prop_assert!(v < max, "next_below({max}) = {v} for seed {seed}");
                }
            }

            #[test]
            fn signs_are_roughly_balanced(seed: u64) {
                let mut rng = Xorshift64::new(seed);
                let mut buckets = [0u32; 3];
                for _ in 0..3_000 {
                    buckets[(rng.next_sign() + 1) as usize] += 1;
                }
                // Expected ~1000 each; loose bound to avoid flakes.
                for (i, &count) in buckets.iter().enumerate() {
                    prop_assert!(count >= 500, "bucket {i} has {count} for seed {seed}");
                }
            }
        }
    }
}
