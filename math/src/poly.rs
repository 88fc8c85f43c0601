use std::cmp::PartialEq;

/// Coefficient vector of a polynomial in Z[X]/(X^n + 1), constant term first.
///
/// `Poly<u64>` holds residues mod q and is manipulated through [crate::ring::Ring].
/// `Poly<i64>` holds plain signed integers (plaintexts and public constants).
#[derive(Clone, Debug, Eq, Default)]
pub struct Poly<O>(pub Vec<O>);

impl<O> Poly<O>
where
    O: Default + Clone + Copy,
{
    pub fn new(n: usize) -> Self {
        Self(vec![O::default(); n])
    }

    pub fn n(&self) -> usize {
        self.0.len()
    }

    pub fn log_n(&self) -> usize {
        (usize::BITS - (self.n() - 1).leading_zeros()) as usize
    }

    pub fn resize(&mut self, n: usize) {
        self.0.resize(n, O::default());
    }

    pub fn set_all(&mut self, v: &O) {
        self.0.fill(*v)
    }

    pub fn zero(&mut self) {
        self.set_all(&O::default())
    }

    /// Returns the i-th coefficient, or zero if i >= n.
    pub fn coeff(&self, i: usize) -> O {
        self.0.get(i).copied().unwrap_or_default()
    }

    /// Sets the i-th coefficient, growing the vector with zeros if needed.
    pub fn set_coeff(&mut self, i: usize, v: O) {
        if i >= self.n() {
            self.resize(i + 1);
        }
        self.0[i] = v;
    }

    pub fn copy_from(&mut self, other: &Poly<O>) {
        if std::ptr::eq(self, other) {
            return;
        }
        self.resize(other.n());
        self.0.copy_from_slice(&other.0)
    }
}

impl Poly<i64> {
    /// Returns X^degree in a ring of dimension n.
    pub fn monomial(n: usize, degree: usize) -> Self {
        assert!(degree < n, "invalid degree={} >= n={}", degree, n);
        let mut poly: Poly<i64> = Poly::new(n);
        poly.0[degree] = 1;
        poly
    }

    pub fn mul_scalar_inplace(&mut self, k: i64) {
        self.0.iter_mut().for_each(|x| *x *= k);
    }

    /// Returns k * self.
    pub fn scaled(&self, k: i64) -> Self {
        let mut out: Poly<i64> = self.clone();
        out.mul_scalar_inplace(k);
        out
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|x| *x == 0)
    }
}

impl<O: PartialEq> PartialEq for Poly<O> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || (self.0 == other.0)
    }
}
