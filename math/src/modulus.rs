pub mod barrett;
pub mod prime;

use barrett::Barrett;

pub trait WordOps<O> {
    fn log2(self) -> O;
    fn reverse_bits_msb(self, n: u32) -> O;
    fn mask(self) -> O;
}

impl WordOps<u64> for u64 {
    /// Number of bits needed to represent self-1, i.e. ceil(log2(self)).
    #[inline(always)]
    fn log2(self) -> u64 {
        (u64::BITS - (self - 1).leading_zeros()) as _
    }
    #[inline(always)]
    fn reverse_bits_msb(self, n: u32) -> u64 {
        if n == 0 {
            return 0;
        }
        self.reverse_bits() >> (u64::BITS - n)
    }
    #[inline(always)]
    fn mask(self) -> u64 {
        (1 << self.log2()) - 1
    }
}

impl WordOps<usize> for usize {
    #[inline(always)]
    fn log2(self) -> usize {
        (usize::BITS - (self - 1).leading_zeros()) as _
    }
    #[inline(always)]
    fn reverse_bits_msb(self, n: u32) -> usize {
        if n == 0 {
            return 0;
        }
        self.reverse_bits() >> (usize::BITS - n)
    }
    #[inline(always)]
    fn mask(self) -> usize {
        (1 << self.log2()) - 1
    }
}

pub trait ReduceOnce<O> {
    /// Assigns self-q to self if self >= q.
    /// User must ensure that 2q fits in O.
    fn reduce_once_assign(&mut self, q: O);
    /// Returns self-q if self >= q else self.
    /// User must ensure that 2q fits in O.
    fn reduce_once(&self, q: O) -> O;
}

impl ReduceOnce<u64> for u64 {
    #[inline(always)]
    fn reduce_once_assign(&mut self, q: u64) {
        debug_assert!(q < 0x8000000000000000, "2q >= 2^64");
        *self = (*self).min(self.wrapping_sub(q))
    }

    #[inline(always)]
    fn reduce_once(&self, q: u64) -> u64 {
        debug_assert!(q < 0x8000000000000000, "2q >= 2^64");
        (*self).min(self.wrapping_sub(q))
    }
}

/// Word-size modulus q < 2^62 with the scalar operations used by [crate::ring::Ring].
/// Values are kept in [0, q).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Modulus {
    pub q: u64,
    pub two_q: u64,
}

impl Modulus {
    pub fn new(q: u64) -> Self {
        assert!(q > 1, "invalid modulus q={}: must be > 1", q);
        assert!(q < 1 << 62, "invalid modulus q={}: must be < 2^62", q);
        Self { q, two_q: q << 1 }
    }

    #[inline(always)]
    pub fn q(&self) -> u64 {
        self.q
    }

    #[inline(always)]
    pub fn reduce(&self, x: u64) -> u64 {
        x % self.q
    }

    /// Maps a signed integer to its representative in [0, q).
    #[inline(always)]
    pub fn reduce_i64(&self, x: i64) -> u64 {
        x.rem_euclid(self.q as i64) as u64
    }

    /// Maps x in [0, q) to its centered representative in (-q/2, q/2].
    #[inline(always)]
    pub fn center(&self, x: u64) -> i64 {
        debug_assert!(x < self.q);
        if x > self.q >> 1 {
            x as i64 - self.q as i64
        } else {
            x as i64
        }
    }

    #[inline(always)]
    pub fn add(&self, a: u64, b: u64) -> u64 {
        (a + b).reduce_once(self.q)
    }

    #[inline(always)]
    pub fn sub(&self, a: u64, b: u64) -> u64 {
        (a + self.q - b).reduce_once(self.q)
    }

    #[inline(always)]
    pub fn neg(&self, a: u64) -> u64 {
        (self.q - a).reduce_once(self.q)
    }

    #[inline(always)]
    pub fn mul(&self, a: u64, b: u64) -> u64 {
        ((a as u128 * b as u128) % self.q as u128) as u64
    }

    /// Returns x^exponent mod q.
    pub fn pow(&self, x: u64, exponent: u64) -> u64 {
        let mut y: u64 = 1 % self.q;
        let mut x: u64 = self.reduce(x);
        let mut i: u64 = exponent;
        while i > 0 {
            if i & 1 == 1 {
                y = self.mul(y, x);
            }
            x = self.mul(x, x);
            i >>= 1;
        }
        y
    }

    /// Returns x^-1 mod q, or `None` if gcd(x, q) != 1.
    pub fn inv(&self, x: u64) -> Option<u64> {
        let (mut r0, mut r1) = (self.q as i128, self.reduce(x) as i128);
        let (mut t0, mut t1) = (0i128, 1i128);
        while r1 != 0 {
            let quo: i128 = r0 / r1;
            (r0, r1) = (r1, r0 - quo * r1);
            (t0, t1) = (t1, t0 - quo * t1);
        }
        if r0 != 1 {
            return None;
        }
        Some(t0.rem_euclid(self.q as i128) as u64)
    }

    /// Returns the Shoup precomputation of v for repeated multiplications by v.
    #[inline(always)]
    pub fn prepare(&self, v: u64) -> Barrett<u64> {
        debug_assert!(v < self.q);
        let quotient: u64 = (((v as u128) << 64) / self.q as u128) as _;
        Barrett(v, quotient)
    }

    /// Returns lhs * rhs mod q in [0, q).
    #[inline(always)]
    pub fn mul_external(&self, lhs: Barrett<u64>, rhs: u64) -> u64 {
        let t: u64 = ((*lhs.quotient() as u128 * rhs as u128) >> 64) as _;
        rhs.wrapping_mul(*lhs.value())
            .wrapping_sub(self.q.wrapping_mul(t))
            .reduce_once(self.q)
    }
}
