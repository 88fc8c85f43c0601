use crate::dft::ntt::Table;
use crate::modulus::prime::Prime;
use crate::poly::Poly;
use crate::ring::Ring;
use itertools::izip;

impl Ring<u64> {
    /// Panics if n is not a power of two >= 2 or if q != 1 mod 2n.
    pub fn new(n: usize, prime: Prime) -> Self {
        assert!(
            n.is_power_of_two() && n >= 2,
            "invalid n={}: not a power of two >= 2",
            n
        );
        Self {
            n,
            modulus: prime.modulus,
            dft: Box::new(Table::<u64>::new(prime, (2 * n) as u64)),
        }
    }

    pub fn new_poly(&self) -> Poly<u64> {
        Poly::<u64>::new(self.n())
    }

    /// Lifts signed coefficients into [0, q).
    pub fn from_i64(&self, a: &Poly<i64>, b: &mut Poly<u64>) {
        assert!(
            a.n() <= self.n(),
            "invalid a.n()={} > n={}",
            a.n(),
            self.n()
        );
        debug_assert!(b.n() == self.n(), "b.n()={} != n={}", b.n(), self.n());
        b.zero();
        izip!(a.0.iter(), b.0.iter_mut()).for_each(|(a, b)| *b = self.modulus.reduce_i64(*a));
    }

    /// Returns the centered representatives of a in (-q/2, q/2].
    pub fn to_i64_centered(&self, a: &Poly<u64>) -> Poly<i64> {
        Poly(a.0.iter().map(|x| self.modulus.center(*x)).collect())
    }
}

impl Ring<u64> {
    pub fn ntt_inplace(&self, poly: &mut Poly<u64>) {
        self.dft.forward_inplace(&mut poly.0)
    }

    pub fn intt_inplace(&self, poly: &mut Poly<u64>) {
        self.dft.backward_inplace(&mut poly.0)
    }
}

impl Ring<u64> {
    // b <- a + b
    #[inline(always)]
    pub fn a_add_b_into_b(&self, a: &Poly<u64>, b: &mut Poly<u64>) {
        debug_assert!(a.n() == self.n(), "a.n()={} != n={}", a.n(), self.n());
        debug_assert!(b.n() == self.n(), "b.n()={} != n={}", b.n(), self.n());
        izip!(a.0.iter(), b.0.iter_mut()).for_each(|(a, b)| *b = self.modulus.add(*a, *b));
    }

    // c <- a + b
    #[inline(always)]
    pub fn a_add_b_into_c(&self, a: &Poly<u64>, b: &Poly<u64>, c: &mut Poly<u64>) {
        debug_assert!(a.n() == self.n(), "a.n()={} != n={}", a.n(), self.n());
        debug_assert!(b.n() == self.n(), "b.n()={} != n={}", b.n(), self.n());
        debug_assert!(c.n() == self.n(), "c.n()={} != n={}", c.n(), self.n());
        izip!(a.0.iter(), b.0.iter(), c.0.iter_mut())
            .for_each(|(a, b, c)| *c = self.modulus.add(*a, *b));
    }

    // a <- a - b
    #[inline(always)]
    pub fn a_sub_b_into_a(&self, b: &Poly<u64>, a: &mut Poly<u64>) {
        debug_assert!(a.n() == self.n(), "a.n()={} != n={}", a.n(), self.n());
        debug_assert!(b.n() == self.n(), "b.n()={} != n={}", b.n(), self.n());
        izip!(a.0.iter_mut(), b.0.iter()).for_each(|(a, b)| *a = self.modulus.sub(*a, *b));
    }

    // a <- -a
    #[inline(always)]
    pub fn a_neg_into_a(&self, a: &mut Poly<u64>) {
        debug_assert!(a.n() == self.n(), "a.n()={} != n={}", a.n(), self.n());
        a.0.iter_mut().for_each(|a| *a = self.modulus.neg(*a));
    }

    // a <- a * b, b a scalar in [0, q)
    #[inline(always)]
    pub fn a_mul_b_scalar_into_a(&self, b: u64, a: &mut Poly<u64>) {
        debug_assert!(a.n() == self.n(), "a.n()={} != n={}", a.n(), self.n());
        let b = self.modulus.prepare(self.modulus.reduce(b));
        a.0.iter_mut()
            .for_each(|a| *a = self.modulus.mul_external(b, *a));
    }

    // c <- a * b mod X^n + 1, all operands in coefficient domain.
    pub fn a_mul_b_into_c(&self, a: &Poly<u64>, b: &Poly<u64>, c: &mut Poly<u64>) {
        debug_assert!(a.n() == self.n(), "a.n()={} != n={}", a.n(), self.n());
        debug_assert!(b.n() == self.n(), "b.n()={} != n={}", b.n(), self.n());
        debug_assert!(c.n() == self.n(), "c.n()={} != n={}", c.n(), self.n());
        let mut b_ntt: Poly<u64> = b.clone();
        c.copy_from(a);
        self.ntt_inplace(c);
        self.ntt_inplace(&mut b_ntt);
        izip!(c.0.iter_mut(), b_ntt.0.iter()).for_each(|(c, b)| *c = self.modulus.mul(*c, *b));
        self.intt_inplace(c);
    }

    // b <- a * b mod X^n + 1
    pub fn a_mul_b_into_b(&self, a: &Poly<u64>, b: &mut Poly<u64>) {
        let b_in: Poly<u64> = b.clone();
        self.a_mul_b_into_c(a, &b_in, b);
    }

    // d <- d + a * b mod X^n + 1
    pub fn a_mul_b_add_into_d(&self, a: &Poly<u64>, b: &Poly<u64>, d: &mut Poly<u64>) {
        let mut tmp: Poly<u64> = self.new_poly();
        self.a_mul_b_into_c(a, b, &mut tmp);
        self.a_add_b_into_b(&tmp, d);
    }
}
