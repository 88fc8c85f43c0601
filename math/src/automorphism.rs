use crate::modulus::WordOps;

/// Lookup table for the automorphism X^{i} -> X^{i * gal_el mod 2n} on coefficients.
/// The most significant bit of each entry flags a sign flip (X^n = -1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutomorphismPermutation {
    pub gal_el: usize,
    pub permutation: Vec<usize>,
}

impl AutomorphismPermutation {
    /// Panics if n is not a power of two or if gal_el is even.
    pub fn new(n: usize, gal_el: usize) -> Self {
        assert!(n.is_power_of_two(), "invalid n={}: not a power-of-two", n);
        assert!(
            gal_el & 1 == 1,
            "invalid gal_el={}: not coprime with nth_root={}",
            gal_el,
            2 * n
        );

        let gal_el: usize = gal_el & (2 * n - 1);
        let log_n: usize = n.log2();
        let mask: usize = n - 1;

        let permutation: Vec<usize> = (0..n)
            .map(|i| {
                let gal_el_i: usize = i * gal_el;
                let sign: usize = (gal_el_i >> log_n) & 1;
                (gal_el_i & mask) | (sign << (usize::BITS - 1))
            })
            .collect();

        Self {
            gal_el,
            permutation,
        }
    }

    pub fn n(&self) -> usize {
        self.permutation.len()
    }
}

/// Returns gal_el^-1 mod nth_root.
pub fn galois_element_inv(gal_el: usize, nth_root: usize) -> usize {
    assert!(
        nth_root.is_power_of_two(),
        "invalid nth_root={}: not a power-of-two",
        nth_root
    );
    assert!(gal_el & 1 == 1, "invalid gal_el={}: not odd", gal_el);
    // The unit group of Z/2^k has exponent at most 2^(k-2), so gal_el^(nth_root/2 - 1) = gal_el^-1.
    let mask: usize = nth_root - 1;
    let mut inv: usize = 1;
    let mut base: usize = gal_el & mask;
    let mut e: usize = (nth_root >> 1).saturating_sub(1);
    while e > 0 {
        if e & 1 == 1 {
            inv = inv.wrapping_mul(base) & mask;
        }
        base = base.wrapping_mul(base) & mask;
        e >>= 1;
    }
    inv
}
