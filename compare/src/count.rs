use crate::RingElement;
use crate::args::ComparisonSpec;
use crate::backend::{Ciphertext, EncryptionContext};
use crate::encoding::ring_degree;
use crate::error::CompareResult;
use crate::negate::negate_degree;
use crate::setup::check_negation_key;
use tracing::debug;

/// Returns an encryption whose constant coefficient is |{i : b_i < a}|,
/// for ct_a encrypting X^a and cts_b encrypting X^(b_i).
///
/// The sum of the X^(b_i) is compared against X^a in one pass with the
/// spec (1, 0), then corrected by k * midpoint. The non-constant
/// coefficients are not blinded.
pub fn count_less_than<C: Ciphertext>(
    ct_a: &C,
    cts_b: &[C],
    context: &impl EncryptionContext,
) -> CompareResult<C> {
    check_negation_key(ct_a, context)?;
    let n: usize = ring_degree(context)?;
    let spec: ComparisonSpec = ComparisonSpec::new(1, 0, context)?;
    debug!(k = cts_b.len(), "count_less_than");

    let mut sum_b: C = C::zero(ct_a.public_key());
    cts_b.iter().for_each(|ct_b| sum_b.add_inplace(ct_b));

    // sum_i X^-(b_i)
    negate_degree(&mut sum_b, context)?;
    sum_b.mul_inplace(ct_a);
    sum_b.mul_constant_inplace(&spec.scaled_mask());

    let t: i64 = spec.plaintext_modulus() as i64;
    let k: i64 = (cts_b.len() as i64).rem_euclid(t);
    let mut correction: RingElement = RingElement::new(n);
    correction.set_coeff(0, (k as i128 * spec.midpoint() as i128).rem_euclid(t as i128) as i64);
    sum_b.add_constant_inplace(&correction);
    Ok(sum_b)
}
