use crate::ciphertext::Ciphertext;
use crate::keys::SecretKey;
use math::poly::Poly;
use math::ring::Ring;
use std::sync::Arc;

impl SecretKey {
    /// Returns c0 + c1*s in (-q/2, q/2].
    pub fn phase(&self, ct: &Ciphertext) -> Poly<i64> {
        assert!(
            Arc::ptr_eq(self.public_key(), ct.public_key()),
            "invalid ciphertext: not encrypted under this secret key"
        );
        let ring: &Ring<u64> = self.params.ring();
        let mut phase: Poly<u64> = ring.new_poly();
        ring.a_mul_b_into_c(&ct.value[1], &self.value, &mut phase);
        ring.a_add_b_into_b(&ct.value[0], &mut phase);
        ring.to_i64_centered(&phase)
    }

    /// Returns the plaintext with coefficients in [0, t).
    pub fn decrypt(&self, ct: &Ciphertext) -> Poly<i64> {
        let t: i64 = self.params.plaintext_modulus() as i64;
        let mut pt: Poly<i64> = self.phase(ct);
        pt.0.iter_mut().for_each(|x| *x = x.rem_euclid(t));
        pt
    }
}
