use crate::modulus::WordOps;
use crate::poly::Poly;
use crate::ring::Ring;

impl Ring<u64> {
    /// Number of base-2^log_base digits needed to cover [0, q).
    pub fn digits(&self, log_base: usize) -> usize {
        let log_q: usize = self.modulus.q.log2() as usize;
        (log_q + log_base - 1) / log_base
    }

    /// b <- i-th unsigned base-2^log_base digit of a.
    pub fn a_ith_digit_unsigned_into_b(&self, i: usize, a: &Poly<u64>, log_base: usize, b: &mut Poly<u64>) {
        assert!(
            (1..64).contains(&log_base),
            "invalid log_base={}: must be in [1, 63]",
            log_base
        );
        let shift: usize = i * log_base;
        let mask: u64 = (1 << log_base) - 1;
        b.0.iter_mut().zip(a.0.iter()).for_each(|(b, a)| {
            *b = if shift >= 64 { 0 } else { (a >> shift) & mask };
        });
    }

    /// Returns the unsigned base-2^log_base digits of a, least significant first.
    pub fn decompose(&self, a: &Poly<u64>, log_base: usize) -> Vec<Poly<u64>> {
        (0..self.digits(log_base))
            .map(|i| {
                let mut digit: Poly<u64> = self.new_poly();
                self.a_ith_digit_unsigned_into_b(i, a, log_base, &mut digit);
                digit
            })
            .collect()
    }
}
