use crate::encryptor::encrypt_rlwe_sk;
use crate::keys::{AutomorphismKey, PublicKey, SecretKey, SwitchingKey};
use crate::parameters::Parameters;
use math::poly::Poly;
use math::ring::Ring;
use sampling::source::Source;
use std::sync::Arc;
use tracing::debug;

pub struct KeyGenerator {}

impl KeyGenerator {
    /// Samples a secret of hamming weight params.xs() and derives its
    /// public key and relinearization key.
    pub fn gen_secret_key(&self, params: &Arc<Parameters>, source: &mut Source) -> SecretKey {
        let ring: &Ring<u64> = params.ring();
        let mut value: Poly<u64> = ring.new_poly();
        ring.fill_ternary_hw(params.xs(), source, &mut value);

        let mut pk_source: Source = source.branch();
        let public_key: PublicKey = self.gen_public_key(params, &value, &mut pk_source);

        SecretKey {
            params: params.clone(),
            value,
            public_key: Arc::new(public_key),
            source: source.branch(),
        }
    }

    pub fn gen_public_key(&self, params: &Arc<Parameters>, sk: &Poly<u64>, source: &mut Source) -> PublicKey {
        let mut source_xa: Source = source.branch();
        let mut source_xe: Source = source.branch();
        let value: [Poly<u64>; 2] = encrypt_rlwe_sk(params, sk, None, &mut source_xa, &mut source_xe);
        let rlk: SwitchingKey = self.gen_relinearization_key(params, sk, source);
        PublicKey::new(params.clone(), value, rlk)
    }

    /// Returns a [SwitchingKey] from sk_in to sk_out.
    pub fn gen_switching_key(
        &self,
        params: &Parameters,
        sk_in: &Poly<u64>,
        sk_out: &Poly<u64>,
        source: &mut Source,
    ) -> SwitchingKey {
        let ring: &Ring<u64> = params.ring();
        let mut source_xa: Source = source.branch();
        let mut source_xe: Source = source.branch();

        let rows: Vec<[Poly<u64>; 2]> = (0..params.rows())
            .map(|i| {
                let w_i: u64 = ring.modulus.pow(2, (i * params.log_base2k()) as u64);
                let mut m: Poly<u64> = sk_in.clone();
                ring.a_mul_b_scalar_into_a(w_i, &mut m);
                encrypt_rlwe_sk(params, sk_out, Some(&m), &mut source_xa, &mut source_xe)
            })
            .collect();

        SwitchingKey { rows }
    }

    /// Switching key from s^2 to s.
    pub fn gen_relinearization_key(&self, params: &Parameters, sk: &Poly<u64>, source: &mut Source) -> SwitchingKey {
        let ring: &Ring<u64> = params.ring();
        let mut sk_squared: Poly<u64> = ring.new_poly();
        ring.a_mul_b_into_c(sk, sk, &mut sk_squared);
        self.gen_switching_key(params, &sk_squared, sk, source)
    }

    /// Switching key from sigma(s) to s, sigma: X -> X^gal_el.
    pub fn gen_automorphism_key(
        &self,
        params: &Parameters,
        sk: &Poly<u64>,
        gal_el: usize,
        source: &mut Source,
    ) -> AutomorphismKey {
        let ring: &Ring<u64> = params.ring();
        let gal_el: usize = gal_el % params.cyclotomic_order();
        let mut sk_auto: Poly<u64> = ring.new_poly();
        ring.a_apply_automorphism_into_b(sk, gal_el, &mut sk_auto);
        debug!(gal_el, rows = params.rows(), "generating automorphism key");
        AutomorphismKey {
            gal_el,
            key: self.gen_switching_key(params, &sk_auto, sk, source),
        }
    }
}
