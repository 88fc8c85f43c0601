use compare::backend::EncryptionContext;
use compare::{Randomizer, RingElement};
use math::context::{ArithmeticContext, ModulusGuard};
use sampling::source::Source;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

struct Context {
    n: usize,
    t: u64,
}

impl EncryptionContext for Context {
    fn ring_degree(&self) -> usize {
        self.n
    }
    fn cyclotomic_index(&self) -> usize {
        self.n << 1
    }
    fn plaintext_modulus(&self) -> u64 {
        self.t
    }
}

#[test]
fn global_context_restored_across_threads() {
    let global: &'static ArithmeticContext = ArithmeticContext::global();
    global.init(1 << 50);

    let handles: Vec<_> = [257u64, 65537, 97, 3]
        .into_iter()
        .enumerate()
        .map(|(i, t)| {
            std::thread::spawn(move || {
                let mut randomizer: Randomizer<'static> = Randomizer::new(Source::new([i as u8; 32]));
                let context: Context = Context { n: 64, t };
                (0..32).for_each(|_| {
                    let r: RingElement = randomizer.sample_blinding_polynomial(&context).unwrap();
                    r.0.iter().for_each(|c| assert!((0..t as i64).contains(c)));
                });
            })
        })
        .collect();

    handles.into_iter().for_each(|h| h.join().unwrap());
    assert_eq!(global.modulus(), Some(1 << 50));
}

#[test]
fn sampling_waits_for_outstanding_override() {
    let arith: Arc<ArithmeticContext> = Arc::new(ArithmeticContext::new());
    arith.init(7);
    let sampled: Arc<AtomicBool> = Arc::new(AtomicBool::new(false));

    let guard: ModulusGuard<'_> = arith.push(11);

    let handle = {
        let arith: Arc<ArithmeticContext> = arith.clone();
        let sampled: Arc<AtomicBool> = sampled.clone();
        std::thread::spawn(move || {
            let mut randomizer: Randomizer<'_> = Randomizer::with_context(Source::new([0u8; 32]), &arith);
            randomizer
                .sample_blinding_polynomial(&Context { n: 8, t: 257 })
                .unwrap();
            sampled.store(true, Ordering::SeqCst);
        })
    };

    std::thread::sleep(std::time::Duration::from_millis(50));
    assert!(!sampled.load(Ordering::SeqCst));
    assert_eq!(guard.saved(), Some(7));
    drop(guard);

    handle.join().unwrap();
    assert!(sampled.load(Ordering::SeqCst));
    assert_eq!(arith.modulus(), Some(7));
}
