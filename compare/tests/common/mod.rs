#![allow(dead_code)]

use compare::{RingElement, encrypt_in_degree, install_negation_key};
use rlwe::parameters::{Parameters, ParametersLiteral};
use rlwe::{Ciphertext, KeyGenerator, SecretKey};
use sampling::source::Source;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub fn sub_test<F: FnOnce()>(name: &str, f: F) {
    println!("Running {}", name);
    f();
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub struct Setup {
    pub params: Arc<Parameters>,
    pub sk: SecretKey,
    pub source: Source,
}

impl Setup {
    /// Keys with the negation key installed.
    pub fn new(lit: &ParametersLiteral, seed: u8) -> Self {
        let mut setup: Setup = Self::without_negation_key(lit, seed);
        install_negation_key(&mut setup.sk).unwrap();
        setup
    }

    pub fn without_negation_key(lit: &ParametersLiteral, seed: u8) -> Self {
        init_tracing();
        let params: Arc<Parameters> = Arc::new(Parameters::new(lit).unwrap());
        let mut source: Source = Source::new([seed; 32]);
        let sk: SecretKey = KeyGenerator {}.gen_secret_key(&params, &mut source);
        Self { params, sk, source }
    }

    pub fn n(&self) -> usize {
        self.params.n()
    }

    /// Public-key encryption of X^value.
    pub fn encrypt(&mut self, value: i64) -> Ciphertext {
        encrypt_in_degree(value, self.sk.public_key(), &mut self.source).unwrap()
    }

    pub fn decrypt(&self, ct: &Ciphertext) -> RingElement {
        self.sk.decrypt(ct)
    }

    pub fn decrypt_constant(&self, ct: &Ciphertext) -> i64 {
        self.sk.decrypt(ct).coeff(0)
    }
}
