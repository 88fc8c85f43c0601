#![cfg(feature = "rlwe")]

mod common;

use common::Setup;
use compare::backend::{Ciphertext as _, EncryptionContext, KeySwitchCapability};
use compare::{
    CompareError, ComparisonSpec, RingElement, Validation, check_negation_key, install_negation_key,
    negate_degree, negation_exponent,
};
use rlwe::Ciphertext;
use rlwe::parameters::{TEST_PARAMS_N16, TEST_PARAMS_N32};

#[test]
fn negation_key_installation() {
    let mut setup: Setup = Setup::without_negation_key(&TEST_PARAMS_N16, 40);
    let params = setup.params.clone();
    let exponent: usize = negation_exponent(params.as_ref()).unwrap();
    assert_eq!(exponent, 31);

    let ct: Ciphertext = setup.encrypt(1);
    assert!(!setup.sk.public_key().has_automorphism_key(exponent));
    assert_eq!(
        check_negation_key(&ct, params.as_ref()),
        Err(CompareError::MissingKeySwitchMaterial { exponent })
    );

    install_negation_key(&mut setup.sk).unwrap();
    assert!(KeySwitchCapability::has_automorphism_key(ct.public_key(), exponent));
    assert_eq!(check_negation_key(&ct, params.as_ref()), Ok(()));

    // Idempotent: the material is replaced, not duplicated.
    install_negation_key(&mut setup.sk).unwrap();
    assert_eq!(setup.sk.public_key().automorphism_gal_els(), vec![exponent]);
}

#[test]
fn negate_degree_maps_k_to_minus_k() {
    let mut setup: Setup = Setup::new(&TEST_PARAMS_N32, 42);
    let params = setup.params.clone();
    let n: usize = setup.n();
    let t: i64 = params.plaintext_modulus() as i64;

    (0..n).for_each(|k| {
        let mut ct: Ciphertext = setup.encrypt(k as i64);
        negate_degree(&mut ct, params.as_ref()).unwrap();

        // X^-k = -X^(n-k) for k > 0
        let mut want: RingElement = RingElement::new(n);
        if k == 0 {
            want.0[0] = 1;
        } else {
            want.0[n - k] = t - 1;
        }
        assert_eq!(setup.decrypt(&ct), want, "k={}", k);

        negate_degree(&mut ct, params.as_ref()).unwrap();
        assert_eq!(setup.decrypt(&ct), RingElement::monomial(n, k), "k={} (involution)", k);
    });
}

#[test]
fn negate_degree_without_key_leaves_ciphertext() {
    let mut setup: Setup = Setup::without_negation_key(&TEST_PARAMS_N16, 44);
    let params = setup.params.clone();
    let mut ct: Ciphertext = setup.encrypt(5);
    let before = ct.value().clone();
    assert_eq!(
        negate_degree(&mut ct, params.as_ref()),
        Err(CompareError::MissingKeySwitchMaterial { exponent: 31 })
    );
    assert_eq!(ct.value(), &before);
}

#[test]
fn zero_ciphertext_through_trait() {
    let setup: Setup = Setup::new(&TEST_PARAMS_N16, 46);
    let zero: Ciphertext = <Ciphertext as compare::backend::Ciphertext>::zero(setup.sk.public_key());
    assert!(setup.decrypt(&zero).is_zero());
}

/// Ring whose degree is not half of the cyclotomic index.
struct SkewedContext;

impl EncryptionContext for SkewedContext {
    fn ring_degree(&self) -> usize {
        16
    }
    fn cyclotomic_index(&self) -> usize {
        48
    }
    fn plaintext_modulus(&self) -> u64 {
        257
    }
}

#[test]
fn ring_structure_is_advisory_unless_strict() {
    common::init_tracing();
    assert!(ComparisonSpec::new(0, 1, &SkewedContext).is_ok());
    assert!(compare::build_test_vector(&SkewedContext).is_ok());
    assert_eq!(
        ComparisonSpec::with_validation(0, 1, &SkewedContext, Validation::Strict),
        Err(CompareError::RingStructure { n: 16, m: 48 })
    );
    assert_eq!(
        compare::check_ring_structure(&SkewedContext, Validation::Strict),
        Err(CompareError::RingStructure { n: 16, m: 48 })
    );
}
