//! RNG module - deterministic random source for scrambles
//!
//! Scrambles only need uniform picks from a small move list, so a seeded
//! LCG is enough. The same seed always reproduces the same scramble, which
//! keeps shuffles replayable in tests and from the command line.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // 0 is a fixed point of the multiplier half of the recurrence
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // High bits of an LCG are far better distributed than the low ones
        (((self.next_u32() >> 8) as u64 * max as u64) >> 24) as u32
    }

    /// Pick a uniformly random element
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.next_range(items.len() as u32) as usize;
        items.get(index)
    }

    /// Current internal state, usable as a seed to resume the sequence
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_eq!(rng.state(), 1);
        assert_ne!(rng.next_u32(), rng.next_u32());
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; 12];
        for _ in 0..2000 {
            let v = rng.next_range(12) as usize;
            assert!(v < 12);
            seen[v] = true;
        }
        // Every bucket gets hit over enough draws
        assert!(seen.iter().all(|&s| s));
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_choose() {
        let mut rng = SimpleRng::new(99);
        let empty: [u8; 0] = [];
        assert_eq!(rng.choose(&empty), None);

        let items = ['a', 'b', 'c'];
        for _ in 0..20 {
            assert!(items.contains(rng.choose(&items).unwrap()));
        }
    }

    #[test]
    fn test_resume_from_state() {
        let mut rng = SimpleRng::new(4242);
        rng.next_u32();
        let mut resumed = SimpleRng::new(rng.state());
        assert_eq!(rng.next_u32(), resumed.next_u32());
    }
}
