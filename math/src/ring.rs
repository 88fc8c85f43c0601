pub mod impl_u64;

use crate::dft::DFT;
use crate::modulus::{Modulus, WordOps};

/// Polynomial ring Z_q[X]/(X^n + 1) for a power-of-two n and an NTT-friendly prime q.
pub struct Ring<O> {
    pub n: usize,
    pub modulus: Modulus,
    pub dft: Box<dyn DFT<O> + Send + Sync>,
}

impl<O> std::fmt::Debug for Ring<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ring")
            .field("n", &self.n)
            .field("modulus", &self.modulus)
            .finish_non_exhaustive()
    }
}

impl<O> Ring<O> {
    pub fn log_n(&self) -> usize {
        self.n().log2()
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Order m of the cyclotomic polynomial X^n + 1, i.e. 2n.
    pub fn cyclotomic_order(&self) -> usize {
        self.n << 1
    }

    /// Returns the Galois element X -> X^{gen} with gen reduced into [0, 2n).
    pub fn galois_element(&self, gen_1: i64) -> usize {
        gen_1.rem_euclid(self.cyclotomic_order() as i64) as usize
    }
}
