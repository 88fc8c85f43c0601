use super::{AutomorphismKeyInstaller, Ciphertext, EncryptionContext, Encryptor, KeySwitchCapability};
use crate::RingElement;
use crate::error::{CompareError, CompareResult};
use ::rlwe::{Ciphertext as RlweCiphertext, Parameters, PublicKey, RlweError, SecretKey};
use sampling::source::Source;
use std::sync::Arc;

impl From<RlweError> for CompareError {
    fn from(err: RlweError) -> Self {
        match err {
            RlweError::MissingAutomorphismKey { gal_el } => {
                CompareError::MissingKeySwitchMaterial { exponent: gal_el }
            }
            RlweError::InvalidParameters(msg) => CompareError::InvalidRingParameters(msg),
            err @ RlweError::NoNttPrime { .. } => CompareError::InvalidRingParameters(err.to_string()),
        }
    }
}

impl EncryptionContext for Parameters {
    fn ring_degree(&self) -> usize {
        self.n()
    }

    fn cyclotomic_index(&self) -> usize {
        self.cyclotomic_order()
    }

    fn plaintext_modulus(&self) -> u64 {
        Parameters::plaintext_modulus(self)
    }
}

impl KeySwitchCapability for PublicKey {
    fn has_automorphism_key(&self, exponent: usize) -> bool {
        PublicKey::has_automorphism_key(self, exponent)
    }
}

impl Ciphertext for RlweCiphertext {
    type PublicKey = Arc<PublicKey>;

    fn public_key(&self) -> &Arc<PublicKey> {
        RlweCiphertext::public_key(self)
    }

    fn zero(key: &Arc<PublicKey>) -> Self {
        RlweCiphertext::zero(key)
    }

    fn add_inplace(&mut self, other: &Self) {
        RlweCiphertext::add_inplace(self, other)
    }

    fn mul_inplace(&mut self, other: &Self) {
        RlweCiphertext::mul_inplace(self, other)
    }

    fn mul_constant_inplace(&mut self, k: &RingElement) {
        RlweCiphertext::mul_constant_inplace(self, k)
    }

    fn add_constant_inplace(&mut self, k: &RingElement) {
        RlweCiphertext::add_constant_inplace(self, k)
    }

    fn automorphism_inplace(&mut self, exponent: usize) -> CompareResult<()> {
        Ok(RlweCiphertext::automorphism_inplace(self, exponent)?)
    }
}

impl Encryptor for SecretKey {
    type Context = Parameters;
    type Ciphertext = RlweCiphertext;

    fn context(&self) -> &Parameters {
        self.params()
    }

    fn encrypt(&self, pt: &RingElement, source: &mut Source) -> RlweCiphertext {
        SecretKey::encrypt(self, pt, source)
    }
}

impl Encryptor for Arc<PublicKey> {
    type Context = Parameters;
    type Ciphertext = RlweCiphertext;

    fn context(&self) -> &Parameters {
        self.params()
    }

    fn encrypt(&self, pt: &RingElement, source: &mut Source) -> RlweCiphertext {
        PublicKey::encrypt(self, pt, source)
    }
}

impl AutomorphismKeyInstaller for SecretKey {
    fn install_automorphism_key(&mut self, exponent: usize) -> CompareResult<()> {
        Ok(SecretKey::install_automorphism_key(self, exponent)?)
    }
}
