use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_core::RngCore;

const MAXF64: f64 = 9007199254740992.0;

/// Deterministic randomness source backed by a [ChaCha8Rng].
pub struct Source {
    source: ChaCha8Rng,
}

/// Returns a fresh 32-byte seed drawn from the thread-local OS-seeded generator.
pub fn new_seed() -> [u8; 32] {
    let mut seed = [0u8; 32];
    rand::rng().fill_bytes(&mut seed);
    seed
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    pub fn new_seed(&mut self) -> [u8; 32] {
        let mut seed: [u8; 32] = [0u8; 32];
        self.source.fill_bytes(&mut seed);
        seed
    }

    /// Returns an independent source seeded from this one.
    pub fn branch(&mut self) -> Self {
        Source::new(self.new_seed())
    }

    /// Returns a uniform value in [0, max) by rejection sampling on `next_u64() & mask`.
    /// `mask` must cover max-1, typically `max.next_power_of_two() - 1`.
    #[inline(always)]
    pub fn next_u64n(&mut self, max: u64, mask: u64) -> u64 {
        debug_assert!(max != 0, "invalid max: 0");
        let mut x: u64 = self.next_u64() & mask;
        while x >= max {
            x = self.next_u64() & mask;
        }
        x
    }

    #[inline(always)]
    pub fn next_f64(&mut self, min: f64, max: f64) -> f64 {
        min + ((self.next_u64() << 11 >> 11) as f64) / MAXF64 * (max - min)
    }

    /// Returns -1 or 1 with probability prob/2 each and 0 otherwise.
    #[inline(always)]
    pub fn next_ternary(&mut self, prob: f64) -> i64 {
        let x: f64 = self.next_f64(0.0, 1.0);
        if x >= prob {
            return 0;
        }
        if self.next_u32() & 1 == 1 { 1 } else { -1 }
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a: Source = Source::new([7u8; 32]);
        let mut b: Source = Source::new([7u8; 32]);
        (0..32).for_each(|_| assert_eq!(a.next_u64(), b.next_u64()));
    }

    #[test]
    fn branch_diverges() {
        let mut a: Source = Source::new([0u8; 32]);
        let mut b: Source = a.branch();
        let xs: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn next_u64n_in_range() {
        let mut source: Source = Source::new([1u8; 32]);
        let max: u64 = 257;
        let mask: u64 = max.next_power_of_two() - 1;
        (0..1000).for_each(|_| assert!(source.next_u64n(max, mask) < max));
    }

    #[test]
    fn next_ternary_support() {
        let mut source: Source = Source::new([2u8; 32]);
        let mut seen: [bool; 3] = [false; 3];
        (0..1000).for_each(|_| {
            let x: i64 = source.next_ternary(2.0 / 3.0);
            assert!((-1..=1).contains(&x));
            seen[(x + 1) as usize] = true;
        });
        assert!(seen.iter().all(|s| *s));
    }
}
