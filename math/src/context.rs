use crate::modulus::{Modulus, WordOps};
use crate::poly::Poly;
use sampling::source::Source;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Active arithmetic modulus shared by code that samples or reduces
/// "mod the current modulus".
///
/// Overrides are scoped: [ArithmeticContext::push] returns a [ModulusGuard]
/// that holds the lock for its whole lifetime and restores the previous
/// modulus when dropped, including during unwinding.
#[derive(Debug, Default)]
pub struct ArithmeticContext {
    active: Mutex<Option<u64>>,
}

static GLOBAL: ArithmeticContext = ArithmeticContext::new();

impl ArithmeticContext {
    pub const fn new() -> Self {
        Self {
            active: Mutex::new(None),
        }
    }

    /// Process-wide context.
    pub fn global() -> &'static ArithmeticContext {
        &GLOBAL
    }

    fn lock(&self) -> MutexGuard<'_, Option<u64>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Currently active modulus. Blocks while a [ModulusGuard] is alive on
    /// another thread and deadlocks if called while the caller holds one.
    pub fn modulus(&self) -> Option<u64> {
        *self.lock()
    }

    /// Sets the active modulus outside of any scope.
    pub fn init(&self, q: u64) {
        assert!(q > 1, "invalid modulus q={}: must be > 1", q);
        *self.lock() = Some(q);
    }

    /// Installs q as the active modulus until the returned guard is dropped.
    pub fn push(&self, q: u64) -> ModulusGuard<'_> {
        let modulus: Modulus = Modulus::new(q);
        let mut active: MutexGuard<'_, Option<u64>> = self.lock();
        let saved: Option<u64> = active.replace(q);
        ModulusGuard {
            active,
            saved,
            modulus,
        }
    }
}

/// Scoped modulus override. See [ArithmeticContext::push].
#[derive(Debug)]
pub struct ModulusGuard<'a> {
    active: MutexGuard<'a, Option<u64>>,
    saved: Option<u64>,
    modulus: Modulus,
}

impl ModulusGuard<'_> {
    pub fn modulus(&self) -> &Modulus {
        &self.modulus
    }

    /// Modulus that will be restored on drop.
    pub fn saved(&self) -> Option<u64> {
        self.saved
    }

    /// Returns a polynomial of n coefficients uniform in [0, q).
    pub fn random_poly(&self, n: usize, source: &mut Source) -> Poly<i64> {
        let q: u64 = self.modulus.q();
        let mask: u64 = q.mask();
        Poly((0..n).map(|_| source.next_u64n(q, mask) as i64).collect())
    }
}

impl Drop for ModulusGuard<'_> {
    fn drop(&mut self) {
        *self.active = self.saved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn push_restores_on_drop() {
        let ctx: ArithmeticContext = ArithmeticContext::new();
        ctx.init(97);
        {
            let guard: ModulusGuard<'_> = ctx.push(257);
            assert_eq!(guard.modulus().q(), 257);
            assert_eq!(guard.saved(), Some(97));
        }
        assert_eq!(ctx.modulus(), Some(97));
    }

    #[test]
    fn push_restores_unset() {
        let ctx: ArithmeticContext = ArithmeticContext::new();
        drop(ctx.push(17));
        assert_eq!(ctx.modulus(), None);
    }

    #[test]
    fn push_restores_on_panic() {
        let ctx: ArithmeticContext = ArithmeticContext::new();
        ctx.init(97);
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _guard: ModulusGuard<'_> = ctx.push(257);
            panic!("sampling failed");
        }));
        assert!(result.is_err());
        assert_eq!(ctx.modulus(), Some(97));
    }

    #[test]
    fn random_poly_in_range() {
        let ctx: ArithmeticContext = ArithmeticContext::new();
        let mut source: Source = Source::new([0u8; 32]);
        let guard: ModulusGuard<'_> = ctx.push(257);
        let poly: Poly<i64> = guard.random_poly(64, &mut source);
        assert_eq!(poly.n(), 64);
        poly.0.iter().for_each(|c| assert!((0..257).contains(c)));
    }

    #[test]
    fn overrides_are_exclusive() {
        let ctx: Arc<ArithmeticContext> = Arc::new(ArithmeticContext::new());
        ctx.init(2);
        let holders: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..4u64)
            .map(|t| {
                let ctx: Arc<ArithmeticContext> = ctx.clone();
                let holders: Arc<AtomicUsize> = holders.clone();
                std::thread::spawn(move || {
                    for _ in 0..64 {
                        let _guard: ModulusGuard<'_> = ctx.push(101 + t);
                        assert_eq!(holders.fetch_add(1, Ordering::SeqCst), 0);
                        std::thread::yield_now();
                        holders.fetch_sub(1, Ordering::SeqCst);
                    }
                })
            })
            .collect();

        handles.into_iter().for_each(|h| h.join().unwrap());
        assert_eq!(ctx.modulus(), Some(2));
    }
}
