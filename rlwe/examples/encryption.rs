use math::poly::Poly;
use rlwe::parameters::{DEFAULT_PARAMS, Parameters};
use rlwe::{Ciphertext, KeyGenerator, SecretKey};
use sampling::source::Source;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let params: Arc<Parameters> = match Parameters::new(&DEFAULT_PARAMS) {
        Ok(params) => Arc::new(params),
        Err(err) => {
            eprintln!("{}", err);
            return;
        }
    };

    let mut source: Source = Source::new([0; 32]);
    let mut sk: SecretKey = KeyGenerator {}.gen_secret_key(&params, &mut source);

    let n: usize = params.n();
    let want: Poly<i64> = Poly((0..n as i64).collect());

    let mut ct: Ciphertext = sk.public_key().encrypt(&want, &mut source);
    println!("decrypt(encrypt(m))[..8] = {:?}", &sk.decrypt(&ct).0[..8]);

    ct.mul_inplace(&ct.clone());
    println!("decrypt(m*m)[..8] = {:?}", &sk.decrypt(&ct).0[..8]);

    let gal_el: usize = params.cyclotomic_order() - 1;
    if let Err(err) = sk.install_automorphism_key(gal_el) {
        eprintln!("{}", err);
        return;
    }
    let mut ct: Ciphertext = sk.public_key().encrypt(&want, &mut source);
    match ct.automorphism_inplace(gal_el) {
        Ok(()) => println!("decrypt(m(X^-1))[..8] = {:?}", &sk.decrypt(&ct).0[..8]),
        Err(err) => eprintln!("{}", err),
    }
}
