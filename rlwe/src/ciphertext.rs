use crate::key_switching::relinearize;
use crate::keys::PublicKey;
use crate::parameters::Parameters;
use math::poly::Poly;
use math::ring::Ring;
use std::sync::Arc;

/// RLWE ciphertext (c0, c1) decrypting to c0 + c1*s = m + t*e mod q.
///
/// Carries the [PublicKey] it was produced under, which also holds the
/// evaluation keys used by [Ciphertext::mul_inplace] and
/// [Ciphertext::automorphism_inplace].
#[derive(Clone, Debug)]
pub struct Ciphertext {
    pub(crate) value: [Poly<u64>; 2],
    public_key: Arc<PublicKey>,
}

impl Ciphertext {
    pub(crate) fn new(value: [Poly<u64>; 2], public_key: Arc<PublicKey>) -> Self {
        Self { value, public_key }
    }

    /// Trivial encryption of zero.
    pub fn zero(public_key: &Arc<PublicKey>) -> Self {
        let ring: &Ring<u64> = public_key.params().ring();
        Self::new([ring.new_poly(), ring.new_poly()], public_key.clone())
    }

    pub fn value(&self) -> &[Poly<u64>; 2] {
        &self.value
    }

    pub fn public_key(&self) -> &Arc<PublicKey> {
        &self.public_key
    }

    pub fn params(&self) -> &Arc<Parameters> {
        self.public_key.params()
    }

    fn assert_same_key(&self, other: &Ciphertext) {
        assert!(
            Arc::ptr_eq(&self.public_key, &other.public_key),
            "invalid operands: ciphertexts are encrypted under different keys"
        );
    }

    // self <- self + other
    pub fn add_inplace(&mut self, other: &Ciphertext) {
        self.assert_same_key(other);
        let ring: &Ring<u64> = self.public_key.params().ring();
        ring.a_add_b_into_b(&other.value[0], &mut self.value[0]);
        ring.a_add_b_into_b(&other.value[1], &mut self.value[1]);
    }

    // self <- self - other
    pub fn sub_inplace(&mut self, other: &Ciphertext) {
        self.assert_same_key(other);
        let ring: &Ring<u64> = self.public_key.params().ring();
        ring.a_sub_b_into_a(&other.value[0], &mut self.value[0]);
        ring.a_sub_b_into_a(&other.value[1], &mut self.value[1]);
    }

    /// self <- self * other, relinearized back to two components.
    pub fn mul_inplace(&mut self, other: &Ciphertext) {
        self.assert_same_key(other);
        let public_key: Arc<PublicKey> = self.public_key.clone();
        let params: &Parameters = public_key.params();
        let ring: &Ring<u64> = params.ring();
        let [a0, a1] = &self.value;
        let [b0, b1] = &other.value;

        let mut c0: Poly<u64> = ring.new_poly();
        let mut c1: Poly<u64> = ring.new_poly();
        let mut c2: Poly<u64> = ring.new_poly();

        // (a0 + a1*s)(b0 + b1*s) = a0b0 + (a0b1 + a1b0)*s + a1b1*s^2
        ring.a_mul_b_into_c(a0, b0, &mut c0);
        ring.a_mul_b_into_c(a0, b1, &mut c1);
        ring.a_mul_b_add_into_d(a1, b0, &mut c1);
        ring.a_mul_b_into_c(a1, b1, &mut c2);

        let mut c: [Poly<u64>; 2] = [c0, c1];
        relinearize(params, &mut c, &c2, public_key.relinearization_key());
        self.value = c;
    }

    /// self <- self * k for a plaintext constant k.
    pub fn mul_constant_inplace(&mut self, k: &Poly<i64>) {
        let params: &Parameters = self.public_key.params();
        let ring: &Ring<u64> = params.ring();
        let k: Poly<u64> = params.encode_plaintext(k);
        ring.a_mul_b_into_b(&k, &mut self.value[0]);
        ring.a_mul_b_into_b(&k, &mut self.value[1]);
    }

    /// self <- self + k for a plaintext constant k.
    pub fn add_constant_inplace(&mut self, k: &Poly<i64>) {
        let params: &Parameters = self.public_key.params();
        let ring: &Ring<u64> = params.ring();
        ring.a_add_b_into_b(&params.encode_plaintext(k), &mut self.value[0]);
    }
}
