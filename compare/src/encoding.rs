use crate::RingElement;
use crate::backend::{EncryptionContext, Encryptor};
use crate::error::{CompareError, CompareResult};
use sampling::source::Source;

/// Returns N, failing if the context reports an empty ring.
pub(crate) fn ring_degree(context: &impl EncryptionContext) -> CompareResult<usize> {
    match context.ring_degree() {
        0 => Err(CompareError::InvalidRingParameters(
            "ring degree must be positive".to_string(),
        )),
        n => Ok(n),
    }
}

/// Returns the monomial X^(value mod N), negative values wrapping around.
pub fn encode_on_degree(value: i64, context: &impl EncryptionContext) -> CompareResult<RingElement> {
    let n: usize = ring_degree(context)?;
    let degree: usize = value.rem_euclid(n as i64) as usize;
    Ok(RingElement::monomial(n, degree))
}

/// Encrypts X^(value mod N) with the given key.
pub fn encrypt_in_degree<E: Encryptor>(
    value: i64,
    key: &E,
    source: &mut Source,
) -> CompareResult<E::Ciphertext> {
    let pt: RingElement = encode_on_degree(value, key.context())?;
    Ok(key.encrypt(&pt, source))
}
