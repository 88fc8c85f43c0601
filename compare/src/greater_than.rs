use crate::RingElement;
use crate::args::ComparisonSpec;
use crate::backend::{Ciphertext, EncryptionContext};
use crate::encoding::ring_degree;
use crate::error::{CompareError, CompareResult};
use crate::negate::negate_degree;
use crate::randomizer::Randomizer;
use crate::setup::check_negation_key;
use tracing::{debug, trace};

/// Returns an encryption whose constant coefficient is `spec.if_greater()`
/// if a > b and `spec.if_not_greater()` otherwise, for ct_a and ct_b
/// encrypting X^a and X^b with a, b in [0, N).
///
/// The other coefficients are blinded when `spec.randomize()` is set.
/// Fails before touching anything if the key of ct_a lacks the negation key.
pub fn greater_than<C: Ciphertext>(
    ct_a: &C,
    ct_b: &C,
    spec: &ComparisonSpec,
    context: &impl EncryptionContext,
    randomizer: &mut Randomizer<'_>,
) -> CompareResult<C> {
    check_negation_key(ct_a, context)?;
    spec.check_context(context)?;
    debug!(
        if_greater = spec.if_greater(),
        if_not_greater = spec.if_not_greater(),
        randomize = spec.randomize(),
        "greater_than"
    );

    // X^-b
    let mut res: C = ct_b.clone();
    negate_degree(&mut res, context)?;

    // X^(a-b)
    res.mul_inplace(ct_a);

    res.mul_constant_inplace(&spec.scaled_mask());
    res.add_constant_inplace(&blinding(spec, context, randomizer)?);
    Ok(res)
}

/// Same as [greater_than] with b in the clear, using one constant
/// multiplication by [prepare_xb] instead of a ciphertext product.
pub fn greater_than_plain<C: Ciphertext>(
    ct_a: &C,
    b: i64,
    spec: &ComparisonSpec,
    context: &impl EncryptionContext,
    randomizer: &mut Randomizer<'_>,
) -> CompareResult<C> {
    check_negation_key(ct_a, context)?;
    spec.check_context(context)?;
    debug!(
        b,
        if_greater = spec.if_greater(),
        if_not_greater = spec.if_not_greater(),
        randomize = spec.randomize(),
        "greater_than_plain"
    );

    let xb: RingElement = prepare_xb(b, spec, context)?;

    let mut res: C = ct_a.clone();
    res.mul_constant_inplace(&xb);
    res.add_constant_inplace(&blinding(spec, context, randomizer)?);
    Ok(res)
}

/// Returns X^-b * (if_not_greater - midpoint) * mask, i.e. the scaled mask
/// with its top b coefficients negated.
///
/// Requires N = m/2 and 0 <= b < N.
pub fn prepare_xb(b: i64, spec: &ComparisonSpec, context: &impl EncryptionContext) -> CompareResult<RingElement> {
    let n: usize = ring_degree(context)?;
    let m: usize = context.cyclotomic_index();
    if m != n << 1 {
        return Err(CompareError::RingStructure { n, m });
    }
    if b < 0 || b >= n as i64 {
        return Err(CompareError::OperandOutOfRange { value: b, n });
    }
    spec.check_context(context)?;

    let mut xb: RingElement = spec.scaled_mask();
    xb.0[n - b as usize..].iter_mut().for_each(|c| *c = -*c);
    Ok(xb)
}

/// [greater_than] returning 0 if a > b and 1 otherwise, randomized.
pub fn greater_than_default<C: Ciphertext>(
    ct_a: &C,
    ct_b: &C,
    context: &impl EncryptionContext,
    randomizer: &mut Randomizer<'_>,
) -> CompareResult<C> {
    let spec: ComparisonSpec = ComparisonSpec::new(0, 1, context)?;
    greater_than(ct_a, ct_b, &spec, context, randomizer)
}

/// [greater_than_plain] returning 0 if a > b and 1 otherwise, randomized.
pub fn greater_than_plain_default<C: Ciphertext>(
    ct_a: &C,
    b: i64,
    context: &impl EncryptionContext,
    randomizer: &mut Randomizer<'_>,
) -> CompareResult<C> {
    let spec: ComparisonSpec = ComparisonSpec::new(0, 1, context)?;
    greater_than_plain(ct_a, b, &spec, context, randomizer)
}

/// Constant added to the masked product: midpoint at X^0, and either zeros
/// or uniform noise elsewhere.
fn blinding(
    spec: &ComparisonSpec,
    context: &impl EncryptionContext,
    randomizer: &mut Randomizer<'_>,
) -> CompareResult<RingElement> {
    let mut r: RingElement = if spec.randomize() {
        randomizer.sample_blinding_polynomial(context)?
    } else {
        RingElement::new(ring_degree(context)?)
    };
    trace!(randomize = spec.randomize(), "blinding constant");
    r.set_coeff(0, spec.midpoint());
    Ok(r)
}
