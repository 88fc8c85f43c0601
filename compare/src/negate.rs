use crate::backend::{Ciphertext, EncryptionContext};
use crate::error::CompareResult;
use crate::setup::{check_negation_key, negation_exponent};

/// Maps an encryption of X^k to an encryption of X^-k = -X^(N-k), in place.
/// The ciphertext is left untouched on error.
pub fn negate_degree<C: Ciphertext>(ct: &mut C, context: &impl EncryptionContext) -> CompareResult<()> {
    check_negation_key(ct, context)?;
    ct.automorphism_inplace(negation_exponent(context)?)
}
