use crate::modulus::WordOps;
use crate::poly::Poly;
use crate::ring::Ring;
use sampling::distributions::Gaussian;
use sampling::source::Source;

impl Ring<u64> {
    pub fn fill_uniform(&self, source: &mut Source, a: &mut Poly<u64>) {
        let max: u64 = self.modulus.q;
        let mask: u64 = max.mask();
        a.0.iter_mut()
            .for_each(|a| *a = source.next_u64n(max, mask));
    }

    /// Coefficients in {-1, 0, 1}, non-zero with probability prob.
    pub fn fill_ternary_prob(&self, prob: f64, source: &mut Source, a: &mut Poly<u64>) {
        a.0.iter_mut()
            .for_each(|a| *a = self.modulus.reduce_i64(source.next_ternary(prob)));
    }

    pub fn fill_gaussian(&self, dist: &Gaussian, source: &mut Source, a: &mut Poly<u64>) {
        a.0.iter_mut()
            .for_each(|a| *a = self.modulus.reduce_i64(dist.sample(source)));
    }
}

impl Ring<u64> {
    /// Exactly hw coefficients set to +/-1 at uniformly random positions, the rest zero.
    pub fn fill_ternary_hw(&self, hw: usize, source: &mut Source, a: &mut Poly<u64>) {
        let n: usize = a.n();
        assert!(hw <= n, "invalid hw={} > n={}", hw, n);
        let mut idx: Vec<usize> = (0..n).collect();
        a.zero();
        (0..hw).for_each(|i| {
            let range: u64 = (n - i) as u64;
            let j: usize = i + source.next_u64n(range, range.mask()) as usize;
            idx.swap(i, j);
            let sign: i64 = if source.next_u64n(2, 1) == 1 { 1 } else { -1 };
            a.0[idx[i]] = self.modulus.reduce_i64(sign);
        });
    }
}
