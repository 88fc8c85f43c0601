use crate::RingElement;
use crate::args::ComparisonSpec;
use crate::backend::{Ciphertext, EncryptionContext};
use crate::error::CompareResult;
use crate::negate::negate_degree;
use crate::randomizer::Randomizer;
use crate::setup::check_negation_key;
use crate::test_vector::build_equality_test_vector;
use tracing::debug;

/// Returns an encryption whose constant coefficient is 0 if a = b and 1
/// otherwise, for ct_a and ct_b encrypting X^a and X^b with a, b in [0, N).
///
/// With d = a - b, the zero-constant mask contributes -1, 0 or +1 for
/// d > 0, d = 0 or d < 0, and a `ComparisonSpec` with codes (2, 0)
/// contributes 2 for d > 0 and 0 otherwise. If randomize is set the non-constant coefficients are
/// blinded.
pub fn equality_test<C: Ciphertext>(
    ct_a: &C,
    ct_b: &C,
    context: &impl EncryptionContext,
    randomize: bool,
    randomizer: &mut Randomizer<'_>,
) -> CompareResult<C> {
    check_negation_key(ct_a, context)?;
    debug!(randomize, "equality_test");

    let mask: RingElement = build_equality_test_vector(context)?;
    let spec: ComparisonSpec = ComparisonSpec::new(2, 0, context)?;

    // X^(a-b)
    let mut a_minus_b: C = ct_b.clone();
    negate_degree(&mut a_minus_b, context)?;
    a_minus_b.mul_inplace(ct_a);

    let mut res: C = a_minus_b.clone();
    res.mul_constant_inplace(&mask);

    a_minus_b.mul_constant_inplace(&spec.scaled_mask());
    a_minus_b.add_constant_inplace(&RingElement::monomial(mask.n(), 0).scaled(spec.midpoint()));

    res.add_inplace(&a_minus_b);

    if randomize {
        let mut r: RingElement = randomizer.sample_blinding_polynomial(context)?;
        r.set_coeff(0, 0);
        res.add_constant_inplace(&r);
    }
    Ok(res)
}
