use crate::modulus::Modulus;

/// A prime modulus q.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prime {
    pub modulus: Modulus,
}

impl Prime {
    /// Returns `None` if q is not a prime > 2.
    pub fn new(q: u64) -> Option<Self> {
        if q <= 2 || !is_prime(q) {
            return None;
        }
        Some(Self::new_unchecked(q))
    }

    /// Does not check that q is prime.
    pub fn new_unchecked(q: u64) -> Self {
        Self {
            modulus: Modulus::new(q),
        }
    }

    #[inline(always)]
    pub fn q(&self) -> u64 {
        self.modulus.q
    }

    /// Returns a primitive nth_root-th root of unity mod q.
    /// Panics if nth_root is not a power of two dividing q-1.
    pub fn primitive_nth_root(&self, nth_root: u64) -> u64 {
        assert!(
            nth_root.is_power_of_two(),
            "invalid nth_root={}: not a power of two",
            nth_root
        );
        assert!(
            (self.q() - 1) % nth_root == 0,
            "invalid prime: q={} != 1 mod nth_root={}",
            self.q(),
            nth_root
        );

        let m: &Modulus = &self.modulus;
        let minus_one: u64 = self.q() - 1;
        let exponent: u64 = (self.q() - 1) / nth_root;

        // For a power-of-two order, psi has order exactly nth_root iff psi^(nth_root/2) = -1.
        let mut candidate: u64 = 2;
        loop {
            let psi: u64 = m.pow(candidate, exponent);
            if nth_root == 1 || m.pow(psi, nth_root >> 1) == minus_one {
                return psi;
            }
            candidate += 1;
        }
    }
}

/// Deterministic Miller-Rabin for 64-bit integers.
pub fn is_prime(n: u64) -> bool {
    const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    if n < 2 {
        return false;
    }

    for p in WITNESSES {
        if n % p == 0 {
            return n == p;
        }
    }

    let mut d: u64 = n - 1;
    let mut s: u32 = 0;
    while d & 1 == 0 {
        d >>= 1;
        s += 1;
    }

    let mul = |a: u64, b: u64| ((a as u128 * b as u128) % n as u128) as u64;
    let pow = |mut x: u64, mut e: u64| {
        let mut y: u64 = 1;
        while e > 0 {
            if e & 1 == 1 {
                y = mul(y, x);
            }
            x = mul(x, x);
            e >>= 1;
        }
        y
    };

    'witness: for a in WITNESSES {
        let mut x: u64 = pow(a, d);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul(x, x);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }

    true
}

/// Walks primes q = 1 mod nth_root below 2^bit_size (downstream) or above it (upstream).
pub struct NTTFriendlyPrimesGenerator {
    bit_size: u32,
    next_prime: u64,
    prev_prime: u64,
    nth_root: u64,
}

impl NTTFriendlyPrimesGenerator {
    pub fn new(bit_size: u32, nth_root: u64) -> Self {
        assert!(
            (2..=61).contains(&bit_size),
            "invalid bit_size={}: must be in [2, 61]",
            bit_size
        );
        assert!(
            nth_root.is_power_of_two() && nth_root < 1 << bit_size,
            "invalid nth_root={}: must be a power of two < 2^bit_size",
            nth_root
        );
        let next_prime: u64 = (1 << bit_size) + 1;
        Self {
            bit_size,
            next_prime,
            prev_prime: next_prime - nth_root,
            nth_root,
        }
    }

    /// Returns the next prime q = 1 mod nth_root with q < 2^bit_size, largest first.
    pub fn next_downstream_prime(&mut self) -> Option<Prime> {
        let floor: u64 = 1 << (self.bit_size - 1);
        while self.prev_prime > floor {
            let candidate: u64 = self.prev_prime;
            self.prev_prime -= self.nth_root;
            if is_prime(candidate) {
                return Some(Prime::new_unchecked(candidate));
            }
        }
        None
    }

    /// Returns the next prime q = 1 mod nth_root with q > 2^bit_size, smallest first.
    pub fn next_upstream_prime(&mut self) -> Option<Prime> {
        let ceil: u64 = 1 << (self.bit_size + 1);
        while self.next_prime < ceil {
            let candidate: u64 = self.next_prime;
            self.next_prime += self.nth_root;
            if is_prime(candidate) {
                return Some(Prime::new_unchecked(candidate));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miller_rabin() {
        let small: Vec<u64> = (0..60).filter(|x| is_prime(*x)).collect();
        assert_eq!(
            small,
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59]
        );
        assert!(is_prime(65537));
        assert!(is_prime(0x1fffffffffe00001));
        assert!(!is_prime(0x1fffffffffe00001 * 3));
        assert!(!is_prime(3215031751)); // strong pseudoprime to bases 2, 3, 5, 7
    }

    #[test]
    fn prime_generation() {
        let nth_root: u64 = 1 << 6;
        let mut generator: NTTFriendlyPrimesGenerator = NTTFriendlyPrimesGenerator::new(30, nth_root);
        let primes: Vec<Prime> = (0..10).filter_map(|_| generator.next_downstream_prime()).collect();
        assert_eq!(primes.len(), 10);
        primes.iter().for_each(|prime| {
            assert_eq!(prime.q() % nth_root, 1);
            assert!(prime.q() < 1 << 30);
            assert!(is_prime(prime.q()));
        });
        assert!(primes.windows(2).all(|w| w[0].q() > w[1].q()));

        let up: Prime = generator.next_upstream_prime().unwrap();
        assert!(up.q() > 1 << 30);
        assert_eq!(up.q() % nth_root, 1);
    }

    #[test]
    fn primitive_nth_root() {
        let prime: Prime = Prime::new(65537).unwrap();
        let nth_root: u64 = 32;
        let psi: u64 = prime.primitive_nth_root(nth_root);
        assert_eq!(prime.modulus.pow(psi, nth_root), 1);
        assert_eq!(prime.modulus.pow(psi, nth_root >> 1), prime.q() - 1);
    }
}
