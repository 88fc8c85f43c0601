use compare::{ComparisonSpec, Randomizer, count_less_than, encrypt_in_degree, equality_test, greater_than, greater_than_plain, install_negation_key};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rlwe::parameters::{DEFAULT_PARAMS, Parameters, ParametersLiteral, TEST_PARAMS_N16, TEST_PARAMS_N32};
use rlwe::{Ciphertext, KeyGenerator, SecretKey};
use sampling::source::Source;
use std::sync::Arc;

fn setup(lit: &ParametersLiteral) -> (Arc<Parameters>, Ciphertext, Ciphertext) {
    let params: Arc<Parameters> = Arc::new(Parameters::new(lit).unwrap());
    let mut source: Source = Source::new([0u8; 32]);
    let mut sk: SecretKey = KeyGenerator {}.gen_secret_key(&params, &mut source);
    install_negation_key(&mut sk).unwrap();
    let ct_a: Ciphertext = encrypt_in_degree(5, sk.public_key(), &mut source).unwrap();
    let ct_b: Ciphertext = encrypt_in_degree(3, sk.public_key(), &mut source).unwrap();
    (params, ct_a, ct_b)
}

fn comparator(c: &mut Criterion) {
    let mut b: criterion::BenchmarkGroup<'_, criterion::measurement::WallTime> =
        c.benchmark_group("compare");

    for lit in [TEST_PARAMS_N16, TEST_PARAMS_N32, DEFAULT_PARAMS] {
        let (params, ct_a, ct_b) = setup(&lit);
        let spec: ComparisonSpec = ComparisonSpec::new(0, 1, params.as_ref()).unwrap();
        let mut randomizer: Randomizer<'static> = Randomizer::new(Source::new([1u8; 32]));
        let n: usize = params.n();

        let id: BenchmarkId = BenchmarkId::new("greater_than", format!("n={}", n));
        b.bench_with_input(id, &(), |bench: &mut criterion::Bencher<'_>, _| {
            bench.iter(|| greater_than(&ct_a, &ct_b, &spec, params.as_ref(), &mut randomizer).unwrap())
        });

        let id: BenchmarkId = BenchmarkId::new("greater_than_plain", format!("n={}", n));
        b.bench_with_input(id, &(), |bench: &mut criterion::Bencher<'_>, _| {
            bench.iter(|| greater_than_plain(&ct_a, 3, &spec, params.as_ref(), &mut randomizer).unwrap())
        });

        let id: BenchmarkId = BenchmarkId::new("equality_test", format!("n={}", n));
        b.bench_with_input(id, &(), |bench: &mut criterion::Bencher<'_>, _| {
            bench.iter(|| equality_test(&ct_a, &ct_b, params.as_ref(), true, &mut randomizer).unwrap())
        });

        let cts_b: Vec<Ciphertext> = vec![ct_b.clone(); 8];
        let id: BenchmarkId = BenchmarkId::new("count_less_than/k=8", format!("n={}", n));
        b.bench_with_input(id, &(), |bench: &mut criterion::Bencher<'_>, _| {
            bench.iter(|| count_less_than(&ct_a, &cts_b, params.as_ref()).unwrap())
        });
    }
}

criterion_group!(benches, comparator);
criterion_main!(benches);
