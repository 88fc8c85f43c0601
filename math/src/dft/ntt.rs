use crate::dft::DFT;
use crate::modulus::barrett::Barrett;
use crate::modulus::prime::Prime;
use crate::modulus::{Modulus, WordOps};
use itertools::izip;

/// Negacyclic NTT tables for Z_q[X]/(X^n + 1), with twiddles stored in bit-reversed order.
pub struct Table<O> {
    modulus: Modulus,
    psi: O,
    psi_forward_rev: Vec<Barrett<O>>,
    psi_backward_rev: Vec<Barrett<O>>,
    n_inv: Barrett<O>,
}

impl Table<u64> {
    /// Panics if nth_root is not a power of two or if q != 1 mod nth_root.
    pub fn new(prime: Prime, nth_root: u64) -> Table<u64> {
        assert!(
            nth_root & (nth_root - 1) == 0 && nth_root >= 2,
            "invalid argument: nth_root = {} is not a power of two >= 2",
            nth_root
        );

        let modulus: Modulus = prime.modulus;
        let psi: u64 = prime.primitive_nth_root(nth_root);
        let psi_inv: u64 = modulus.pow(psi, nth_root - 1);

        let n: usize = (nth_root >> 1) as usize;
        let log_n: u32 = n.trailing_zeros();

        let mut psi_forward_rev: Vec<Barrett<u64>> = vec![Barrett(0, 0); n];
        let mut psi_backward_rev: Vec<Barrett<u64>> = vec![Barrett(0, 0); n];

        let mut powers_forward: u64 = 1u64;
        let mut powers_backward: u64 = 1u64;

        for i in 0..n {
            let i_rev: usize = i.reverse_bits_msb(log_n);
            psi_forward_rev[i_rev] = modulus.prepare(powers_forward);
            psi_backward_rev[i_rev] = modulus.prepare(powers_backward);
            powers_forward = modulus.mul(powers_forward, psi);
            powers_backward = modulus.mul(powers_backward, psi_inv);
        }

        let n_inv: u64 = modulus.pow(n as u64, modulus.q - 2);

        Self {
            modulus,
            psi,
            psi_forward_rev,
            psi_backward_rev,
            n_inv: modulus.prepare(n_inv),
        }
    }

    pub fn psi(&self) -> u64 {
        self.psi
    }

    pub fn n(&self) -> usize {
        self.psi_forward_rev.len()
    }
}

impl DFT<u64> for Table<u64> {
    fn forward_inplace(&self, a: &mut [u64]) {
        self.forward_inplace_core(a)
    }

    fn backward_inplace(&self, a: &mut [u64]) {
        self.backward_inplace_core(a)
    }
}

impl Table<u64> {
    /// Cooley-Tukey butterflies, natural order in, bit-reversed order out.
    pub fn forward_inplace_core(&self, a: &mut [u64]) {
        let n: usize = a.len();
        assert!(
            n == self.n(),
            "invalid a.len()={} != table n={}",
            n,
            self.n()
        );
        let log_n: u32 = n.trailing_zeros();

        for layer in 0..log_n {
            let (m, size) = (1 << layer, n >> (layer + 1));
            izip!(a.chunks_exact_mut(2 * size), &self.psi_forward_rev[m..]).for_each(|(a, psi)| {
                let (a, b) = a.split_at_mut(size);
                izip!(a, b).for_each(|(a, b)| self.dit_inplace(a, b, *psi));
            });
        }
    }

    #[inline(always)]
    fn dit_inplace(&self, a: &mut u64, b: &mut u64, t: Barrett<u64>) {
        let bt: u64 = self.modulus.mul_external(t, *b);
        *b = self.modulus.sub(*a, bt);
        *a = self.modulus.add(*a, bt);
    }

    /// Gentleman-Sande butterflies, bit-reversed order in, natural order out, scaled by n^-1.
    pub fn backward_inplace_core(&self, a: &mut [u64]) {
        let n: usize = a.len();
        assert!(
            n == self.n(),
            "invalid a.len()={} != table n={}",
            n,
            self.n()
        );
        let log_n: u32 = n.trailing_zeros();

        for layer in (0..log_n).rev() {
            let (m, size) = (1 << layer, n >> (layer + 1));
            izip!(a.chunks_exact_mut(2 * size), &self.psi_backward_rev[m..]).for_each(|(a, psi)| {
                let (a, b) = a.split_at_mut(size);
                izip!(a, b).for_each(|(a, b)| self.dif_inplace(a, b, *psi));
            });
        }

        a.iter_mut()
            .for_each(|a| *a = self.modulus.mul_external(self.n_inv, *a));
    }

    #[inline(always)]
    fn dif_inplace(&self, a: &mut u64, b: &mut u64, t: Barrett<u64>) {
        let d: u64 = self.modulus.sub(*a, *b);
        *a = self.modulus.add(*a, *b);
        *b = self.modulus.mul_external(t, d);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn negacyclic_schoolbook(modulus: &Modulus, a: &[u64], b: &[u64]) -> Vec<u64> {
        let n: usize = a.len();
        let mut c: Vec<u64> = vec![0; n];
        for i in 0..n {
            for j in 0..n {
                let prod: u64 = modulus.mul(a[i], b[j]);
                if i + j < n {
                    c[i + j] = modulus.add(c[i + j], prod);
                } else {
                    c[i + j - n] = modulus.sub(c[i + j - n], prod);
                }
            }
        }
        c
    }

    #[test]
    fn test_ntt() {
        let prime: Prime = Prime::new(0x1fffffffffe00001).unwrap();
        let n: u64 = 32;
        let ntt_table: Table<u64> = Table::<u64>::new(prime, n << 1);
        let mut a: Vec<u64> = (0..n).collect();
        let b: Vec<u64> = a.clone();
        ntt_table.forward_inplace(&mut a);
        assert_ne!(a, b);
        ntt_table.backward_inplace(&mut a);
        assert_eq!(a, b);
    }

    #[test]
    fn test_ntt_negacyclic_product() {
        let prime: Prime = Prime::new(65537).unwrap();
        let n: usize = 16;
        let ntt_table: Table<u64> = Table::<u64>::new(prime, (n << 1) as u64);
        let modulus: Modulus = prime.modulus;

        let a: Vec<u64> = (0..n as u64).map(|i| (i * 7919 + 3) % modulus.q).collect();
        let b: Vec<u64> = (0..n as u64).map(|i| (i * 104729 + 11) % modulus.q).collect();
        let want: Vec<u64> = negacyclic_schoolbook(&modulus, &a, &b);

        let mut a_ntt: Vec<u64> = a.clone();
        let mut b_ntt: Vec<u64> = b.clone();
        ntt_table.forward_inplace(&mut a_ntt);
        ntt_table.forward_inplace(&mut b_ntt);
        let mut c: Vec<u64> = izip!(a_ntt, b_ntt).map(|(x, y)| modulus.mul(x, y)).collect();
        ntt_table.backward_inplace(&mut c);

        assert_eq!(c, want);
    }
}
