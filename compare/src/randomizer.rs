use crate::RingElement;
use crate::backend::EncryptionContext;
use crate::encoding::ring_degree;
use crate::error::{CompareError, CompareResult};
use math::context::{ArithmeticContext, ModulusGuard};
use sampling::source::Source;
use tracing::trace;

/// Draws blinding polynomials uniform mod p^r.
///
/// Sampling switches the shared [ArithmeticContext] to p^r for the duration
/// of the draw. The switch is held by a [ModulusGuard], so the previous
/// modulus is restored on every exit path and concurrent randomizers on the
/// same context are serialized.
pub struct Randomizer<'a> {
    source: Source,
    arith: &'a ArithmeticContext,
}

impl Randomizer<'static> {
    /// Uses the process-wide [ArithmeticContext].
    pub fn new(source: Source) -> Self {
        Self::with_context(source, ArithmeticContext::global())
    }
}

impl<'a> Randomizer<'a> {
    pub fn with_context(source: Source, arith: &'a ArithmeticContext) -> Self {
        Self { source, arith }
    }

    pub fn arithmetic_context(&self) -> &'a ArithmeticContext {
        self.arith
    }

    pub fn sample_blinding_polynomial(&mut self, context: &impl EncryptionContext) -> CompareResult<RingElement> {
        let n: usize = ring_degree(context)?;
        let t: u64 = context.plaintext_modulus();
        if !(2..1 << 62).contains(&t) {
            return Err(CompareError::InvalidRingParameters(format!(
                "plaintext modulus {} not in [2, 2^62)",
                t
            )));
        }

        let guard: ModulusGuard<'_> = self.arith.push(t);
        trace!(n, t, saved = ?guard.saved(), "sampling blinding polynomial");
        Ok(guard.random_poly(n, &mut self.source))
    }
}
