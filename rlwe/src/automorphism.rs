use crate::ciphertext::Ciphertext;
use crate::error::{RlweError, RlweResult};
use crate::key_generator::KeyGenerator;
use crate::key_switching::key_switch;
use crate::keys::{AutomorphismKey, SecretKey};
use crate::parameters::Parameters;
use math::automorphism::AutomorphismPermutation;
use math::poly::Poly;
use math::ring::Ring;
use std::sync::Arc;

impl SecretKey {
    /// Generates the key for X -> X^gal_el and publishes it on the public key.
    /// Re-installing replaces the previous key for the same element.
    pub fn install_automorphism_key(&mut self, gal_el: usize) -> RlweResult<()> {
        if gal_el & 1 == 0 {
            return Err(RlweError::InvalidParameters(format!(
                "gal_el={} is not invertible mod {}",
                gal_el,
                self.params.cyclotomic_order()
            )));
        }
        let key: AutomorphismKey =
            KeyGenerator {}.gen_automorphism_key(&self.params, &self.value, gal_el, &mut self.source);
        self.public_key.insert_automorphism_key(key);
        Ok(())
    }
}

impl Ciphertext {
    /// Maps an encryption of m(X) to an encryption of m(X^gal_el).
    /// Fails without touching self if no key for gal_el is installed.
    pub fn automorphism_inplace(&mut self, gal_el: usize) -> RlweResult<()> {
        let params: Arc<Parameters> = self.params().clone();
        let gal_el: usize = gal_el % params.cyclotomic_order();
        let key: Arc<AutomorphismKey> = self
            .public_key()
            .automorphism_key(gal_el)
            .ok_or(RlweError::MissingAutomorphismKey { gal_el })?;

        let ring: &Ring<u64> = params.ring();
        let perm: AutomorphismPermutation = AutomorphismPermutation::new(ring.n(), gal_el);

        let mut c0: Poly<u64> = ring.new_poly();
        let mut c1: Poly<u64> = ring.new_poly();
        ring.a_apply_automorphism_from_perm_into_b(&self.value[0], &perm, &mut c0);
        ring.a_apply_automorphism_from_perm_into_b(&self.value[1], &perm, &mut c1);

        // (sigma(c0), sigma(c1)) decrypts under sigma(s): switch sigma(c1) back to s.
        let [r0, r1] = key_switch(&params, &c1, &key.key);
        ring.a_add_b_into_b(&r0, &mut c0);
        self.value = [c0, r1];
        Ok(())
    }
}
