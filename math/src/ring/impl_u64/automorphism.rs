use crate::automorphism::AutomorphismPermutation;
use crate::modulus::WordOps;
use crate::poly::Poly;
use crate::ring::Ring;

impl Ring<u64> {
    /// b <- a(X^gal_el), coefficient domain.
    pub fn a_apply_automorphism_into_b(&self, a: &Poly<u64>, gal_el: usize, b: &mut Poly<u64>) {
        debug_assert!(
            a.n() == b.n(),
            "invalid inputs: a.n() = {} != b.n() = {}",
            a.n(),
            b.n()
        );

        assert!(
            gal_el & 1 == 1,
            "invalid gal_el={}: not coprime with nth_root={}",
            gal_el,
            self.cyclotomic_order()
        );

        let n: usize = a.n();
        let mask: usize = n - 1;
        let log_n: usize = n.log2();
        let gal_el: usize = gal_el & (self.cyclotomic_order() - 1);
        let q: u64 = self.modulus.q();
        let b_vec: &mut Vec<u64> = &mut b.0;

        a.0.iter().enumerate().for_each(|(i, ai)| {
            let gal_el_i: usize = i * gal_el;
            let sign: u64 = ((gal_el_i >> log_n) & 1) as u64;
            let i_out: usize = gal_el_i & mask;
            b_vec[i_out] = if sign == 1 { (q - ai) % q } else { *ai };
        });
    }

    /// b <- a(X^gal_el) using a precomputed permutation.
    pub fn a_apply_automorphism_from_perm_into_b(
        &self,
        a: &Poly<u64>,
        perm: &AutomorphismPermutation,
        b: &mut Poly<u64>,
    ) {
        debug_assert!(
            a.n() == b.n(),
            "invalid inputs: a.n() = {} != b.n() = {}",
            a.n(),
            b.n()
        );
        assert!(
            perm.n() == a.n(),
            "invalid permutation: perm.n() = {} != a.n() = {}",
            perm.n(),
            a.n()
        );

        let n: usize = a.n();
        let mask: usize = n - 1;
        let q: u64 = self.modulus.q();
        let b_vec: &mut Vec<u64> = &mut b.0;

        a.0.iter().enumerate().for_each(|(i, ai)| {
            let idx: usize = perm.permutation[i];
            let sign: usize = idx >> (usize::BITS - 1);
            b_vec[idx & mask] = if sign == 1 { (q - ai) % q } else { *ai };
        });
    }

    pub fn a_apply_automorphism_from_perm_into_a(&self, perm: &AutomorphismPermutation, a: &mut Poly<u64>) {
        let a_in: Poly<u64> = a.clone();
        self.a_apply_automorphism_from_perm_into_b(&a_in, perm, a);
    }
}
