use compare::{
    ComparisonSpec, Randomizer, count_less_than, encrypt_in_degree, equality_test, greater_than, greater_than_plain,
    install_negation_key,
};
use rlwe::parameters::{DEFAULT_PARAMS, Parameters};
use rlwe::{Ciphertext, KeyGenerator, SecretKey};
use sampling::source::{Source, new_seed};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let params: Arc<Parameters> = Arc::new(Parameters::new(&DEFAULT_PARAMS)?);
    let mut source: Source = Source::new(new_seed());
    let mut sk: SecretKey = KeyGenerator {}.gen_secret_key(&params, &mut source);
    install_negation_key(&mut sk)?;

    let mut randomizer: Randomizer<'static> = Randomizer::new(source.branch());
    let spec: ComparisonSpec = ComparisonSpec::new(0, 1, params.as_ref())?;

    let (a, b) = (42, 17);
    let ct_a: Ciphertext = encrypt_in_degree(a, sk.public_key(), &mut source)?;
    let ct_b: Ciphertext = encrypt_in_degree(b, sk.public_key(), &mut source)?;

    let res: Ciphertext = greater_than(&ct_a, &ct_b, &spec, params.as_ref(), &mut randomizer)?;
    println!("greater_than({}, {}) -> {}", a, b, sk.decrypt(&res).coeff(0));

    let res: Ciphertext = greater_than_plain(&ct_b, a, &spec, params.as_ref(), &mut randomizer)?;
    println!("greater_than({}, {}) -> {}", b, a, sk.decrypt(&res).coeff(0));

    let res: Ciphertext = equality_test(&ct_a, &ct_a, params.as_ref(), true, &mut randomizer)?;
    println!("equality_test({}, {}) -> {}", a, a, sk.decrypt(&res).coeff(0));

    let values: Vec<i64> = vec![3, 50, 17, 41, 42, 63];
    let cts: Vec<Ciphertext> = values
        .iter()
        .map(|v| encrypt_in_degree(*v, sk.public_key(), &mut source))
        .collect::<Result<_, _>>()?;
    let res: Ciphertext = count_less_than(&ct_a, &cts, params.as_ref())?;
    println!("|{{v in {:?} : v < {}}}| -> {}", values, a, sk.decrypt(&res).coeff(0));

    Ok(())
}
