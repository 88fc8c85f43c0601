use crate::args::{Validation, check_ring_structure};
use crate::backend::{AutomorphismKeyInstaller, Ciphertext, EncryptionContext, KeySwitchCapability};
use crate::error::{CompareError, CompareResult};
use tracing::debug;

/// Exponent m-1 of the automorphism X -> X^(m-1) = X^-1.
pub fn negation_exponent(context: &impl EncryptionContext) -> CompareResult<usize> {
    match context.cyclotomic_index() {
        m if m < 2 => Err(CompareError::InvalidRingParameters(format!(
            "cyclotomic index m={} must be at least 2",
            m
        ))),
        m => Ok(m - 1),
    }
}

/// Publishes the key-switching material for X -> X^(m-1).
/// Must run once per secret key before any comparison; running it again
/// replaces the material.
pub fn install_negation_key<K: AutomorphismKeyInstaller>(secret_key: &mut K) -> CompareResult<()> {
    let exponent: usize = negation_exponent(secret_key.context())?;
    check_ring_structure(secret_key.context(), Validation::Warn)?;
    debug!(exponent, "installing negation key");
    secret_key.install_automorphism_key(exponent)
}

/// Fails with [CompareError::MissingKeySwitchMaterial] if the key of ct
/// cannot apply X -> X^(m-1).
pub fn check_negation_key<C: Ciphertext>(ct: &C, context: &impl EncryptionContext) -> CompareResult<()> {
    let exponent: usize = negation_exponent(context)?;
    if !ct.public_key().has_automorphism_key(exponent) {
        return Err(CompareError::MissingKeySwitchMaterial { exponent });
    }
    Ok(())
}
