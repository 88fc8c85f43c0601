use crate::ciphertext::Ciphertext;
use crate::keys::{PublicKey, SecretKey};
use crate::parameters::Parameters;
use math::poly::Poly;
use math::ring::Ring;
use sampling::source::Source;
use std::sync::Arc;

impl Parameters {
    /// Lifts a plaintext into Z_q, each coefficient reduced mod t to its
    /// centered representative first.
    pub fn encode_plaintext(&self, pt: &Poly<i64>) -> Poly<u64> {
        let t: i64 = self.plaintext_modulus() as i64;
        let half_t: i64 = t >> 1;
        let centered: Poly<i64> = Poly(
            pt.0.iter()
                .map(|x| {
                    let x: i64 = x.rem_euclid(t);
                    if x > half_t { x - t } else { x }
                })
                .collect(),
        );
        let ring: &Ring<u64> = self.ring();
        let mut out: Poly<u64> = ring.new_poly();
        ring.from_i64(&centered, &mut out);
        out
    }

    /// Returns t * e with e drawn from the error distribution.
    pub(crate) fn sample_scaled_error(&self, source_xe: &mut Source) -> Poly<u64> {
        let ring: &Ring<u64> = self.ring();
        let mut e: Poly<u64> = ring.new_poly();
        ring.fill_gaussian(self.xe(), source_xe, &mut e);
        ring.a_mul_b_scalar_into_a(self.plaintext_modulus(), &mut e);
        e
    }
}

/// Returns (-a*s + t*e + pt, a).
pub fn encrypt_rlwe_sk(
    params: &Parameters,
    sk: &Poly<u64>,
    pt: Option<&Poly<u64>>,
    source_xa: &mut Source,
    source_xe: &mut Source,
) -> [Poly<u64>; 2] {
    let ring: &Ring<u64> = params.ring();

    let mut c1: Poly<u64> = ring.new_poly();
    ring.fill_uniform(source_xa, &mut c1);

    // c0 <- -a*s + t*e
    let mut c0: Poly<u64> = ring.new_poly();
    ring.a_mul_b_into_c(&c1, sk, &mut c0);
    ring.a_neg_into_a(&mut c0);
    ring.a_add_b_into_b(&params.sample_scaled_error(source_xe), &mut c0);

    if let Some(pt) = pt {
        ring.a_add_b_into_b(pt, &mut c0);
    }

    [c0, c1]
}

/// Returns (pk0*u + t*e0 + pt, pk1*u + t*e1) with u ternary.
pub fn encrypt_rlwe_pk(
    params: &Parameters,
    pk: &[Poly<u64>; 2],
    pt: Option<&Poly<u64>>,
    source: &mut Source,
) -> [Poly<u64>; 2] {
    let ring: &Ring<u64> = params.ring();

    let mut u: Poly<u64> = ring.new_poly();
    ring.fill_ternary_prob(0.5, source, &mut u);

    let mut c0: Poly<u64> = ring.new_poly();
    let mut c1: Poly<u64> = ring.new_poly();
    ring.a_mul_b_into_c(&pk[0], &u, &mut c0);
    ring.a_mul_b_into_c(&pk[1], &u, &mut c1);
    ring.a_add_b_into_b(&params.sample_scaled_error(source), &mut c0);
    ring.a_add_b_into_b(&params.sample_scaled_error(source), &mut c1);

    if let Some(pt) = pt {
        ring.a_add_b_into_b(pt, &mut c0);
    }

    [c0, c1]
}

impl SecretKey {
    pub fn encrypt(&self, pt: &Poly<i64>, source: &mut Source) -> Ciphertext {
        let mut source_xa: Source = source.branch();
        let mut source_xe: Source = source.branch();
        let value: [Poly<u64>; 2] = encrypt_rlwe_sk(
            &self.params,
            &self.value,
            Some(&self.params.encode_plaintext(pt)),
            &mut source_xa,
            &mut source_xe,
        );
        Ciphertext::new(value, self.public_key.clone())
    }
}

impl PublicKey {
    pub fn encrypt(self: &Arc<Self>, pt: &Poly<i64>, source: &mut Source) -> Ciphertext {
        let value: [Poly<u64>; 2] = encrypt_rlwe_pk(
            self.params(),
            self.value(),
            Some(&self.params().encode_plaintext(pt)),
            source,
        );
        Ciphertext::new(value, self.clone())
    }
}
