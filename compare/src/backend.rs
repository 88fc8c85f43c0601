//! Capabilities required from the homomorphic encryption scheme.

#[cfg(feature = "rlwe")]
pub mod rlwe;

use crate::RingElement;
use crate::error::CompareResult;
use sampling::source::Source;
use std::sync::Arc;

/// Ring and plaintext parameters of an encryption scheme instance.
pub trait EncryptionContext {
    /// Ring degree N.
    fn ring_degree(&self) -> usize;
    /// Cyclotomic index m, with N = m/2 for power-of-two m.
    fn cyclotomic_index(&self) -> usize;
    /// Plaintext modulus p^r.
    fn plaintext_modulus(&self) -> u64;
}

pub trait KeySwitchCapability {
    /// Whether key-switching material for X -> X^exponent is available.
    fn has_automorphism_key(&self, exponent: usize) -> bool;
}

impl<T: KeySwitchCapability + ?Sized> KeySwitchCapability for Arc<T> {
    fn has_automorphism_key(&self, exponent: usize) -> bool {
        (**self).has_automorphism_key(exponent)
    }
}

/// Homomorphic operations on a ciphertext. All operations mutate the receiver.
pub trait Ciphertext: Clone {
    type PublicKey: KeySwitchCapability;

    fn public_key(&self) -> &Self::PublicKey;

    /// Encryption of zero under key.
    fn zero(key: &Self::PublicKey) -> Self;

    fn add_inplace(&mut self, other: &Self);

    fn mul_inplace(&mut self, other: &Self);

    fn mul_constant_inplace(&mut self, k: &RingElement);

    fn add_constant_inplace(&mut self, k: &RingElement);

    /// Maps an encryption of m(X) to an encryption of m(X^exponent).
    /// Must fail without mutating self if the key material is missing.
    fn automorphism_inplace(&mut self, exponent: usize) -> CompareResult<()>;
}

pub trait Encryptor {
    type Context: EncryptionContext;
    type Ciphertext: Ciphertext;

    fn context(&self) -> &Self::Context;

    fn encrypt(&self, pt: &RingElement, source: &mut Source) -> Self::Ciphertext;
}

/// Implemented by secret keys able to publish automorphism keys.
pub trait AutomorphismKeyInstaller: Encryptor {
    fn install_automorphism_key(&mut self, exponent: usize) -> CompareResult<()>;
}
