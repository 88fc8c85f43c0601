use crate::RingElement;
use crate::backend::EncryptionContext;
use crate::encoding::ring_degree;
use crate::error::{CompareError, CompareResult};
use crate::test_vector::build_test_vector;
use math::modulus::Modulus;
use tracing::{debug, warn};

/// How a ring whose degree is not half its cyclotomic index is reported.
/// The comparison is only correct when N = m/2.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Validation {
    /// Emit a warning and continue.
    #[default]
    Warn,
    /// Fail with [CompareError::RingStructure].
    Strict,
}

pub fn check_ring_structure(context: &impl EncryptionContext, validation: Validation) -> CompareResult<()> {
    let n: usize = context.ring_degree();
    let m: usize = context.cyclotomic_index();
    if n << 1 == m {
        return Ok(());
    }
    match validation {
        Validation::Warn => {
            warn!(n, m, "ring degree is not half of the cyclotomic index, comparison results are unreliable");
            Ok(())
        }
        Validation::Strict => Err(CompareError::RingStructure { n, m }),
    }
}

/// Output codes and mask of one comparison.
///
/// Decrypts to `if_greater` when a > b and to `if_not_greater` otherwise.
/// Built for one plaintext modulus and rejected by contexts with another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonSpec {
    if_greater: i64,
    if_not_greater: i64,
    midpoint: i64,
    randomize: bool,
    mask: RingElement,
    plaintext_modulus: u64,
}

impl ComparisonSpec {
    /// Randomized spec, ring structure checked with [Validation::Warn].
    pub fn new(if_greater: i64, if_not_greater: i64, context: &impl EncryptionContext) -> CompareResult<Self> {
        Self::with_validation(if_greater, if_not_greater, context, Validation::Warn)
    }

    pub fn with_validation(
        if_greater: i64,
        if_not_greater: i64,
        context: &impl EncryptionContext,
        validation: Validation,
    ) -> CompareResult<Self> {
        ring_degree(context)?;
        check_ring_structure(context, validation)?;

        let plaintext_modulus: u64 = context.plaintext_modulus();
        if !(2..1 << 62).contains(&plaintext_modulus) {
            return Err(CompareError::InvalidRingParameters(format!(
                "plaintext modulus {} not in [2, 2^62)",
                plaintext_modulus
            )));
        }

        let modulus: Modulus = Modulus::new(plaintext_modulus);
        let half: u64 = modulus.inv(2).ok_or_else(|| {
            CompareError::InvalidRingParameters(format!(
                "2 is not invertible mod plaintext modulus {}",
                plaintext_modulus
            ))
        })?;

        let if_greater: i64 = modulus.reduce_i64(if_greater) as i64;
        let if_not_greater: i64 = modulus.reduce_i64(if_not_greater) as i64;
        let sum: u64 = modulus.add(if_greater as u64, if_not_greater as u64);
        let midpoint: i64 = modulus.mul(half, sum) as i64;

        debug!(if_greater, if_not_greater, midpoint, plaintext_modulus, "comparison spec");

        Ok(Self {
            if_greater,
            if_not_greater,
            midpoint,
            randomize: true,
            mask: build_test_vector(context)?,
            plaintext_modulus,
        })
    }

    /// Sets whether non-constant coefficients of the result are blinded.
    pub fn randomized(mut self, randomize: bool) -> Self {
        self.randomize = randomize;
        self
    }

    pub fn if_greater(&self) -> i64 {
        self.if_greater
    }

    pub fn if_not_greater(&self) -> i64 {
        self.if_not_greater
    }

    /// (if_greater + if_not_greater) / 2 mod p^r.
    pub fn midpoint(&self) -> i64 {
        self.midpoint
    }

    pub fn randomize(&self) -> bool {
        self.randomize
    }

    pub fn mask(&self) -> &RingElement {
        &self.mask
    }

    pub fn plaintext_modulus(&self) -> u64 {
        self.plaintext_modulus
    }

    /// (if_not_greater - midpoint) * mask, coefficients in [0, p^r).
    pub fn scaled_mask(&self) -> RingElement {
        let t: i64 = self.plaintext_modulus as i64;
        let k: i64 = (self.if_not_greater - self.midpoint).rem_euclid(t);
        self.mask.scaled(k)
    }

    /// Fails if this `ComparisonSpec` was built for another ring or plaintext modulus.
    pub(crate) fn check_context(&self, context: &impl EncryptionContext) -> CompareResult<()> {
        if self.plaintext_modulus != context.plaintext_modulus() || self.mask.n() != context.ring_degree() {
            return Err(CompareError::InvalidRingParameters(format!(
                "spec built for n={} and plaintext modulus {}, context has n={} and plaintext modulus {}",
                self.mask.n(),
                self.plaintext_modulus,
                context.ring_degree(),
                context.plaintext_modulus()
            )));
        }
        Ok(())
    }
}
