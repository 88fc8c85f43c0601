//! Comparison of integers encrypted "in the degree" of an RLWE plaintext.
//!
//! A value v is encoded as the monomial X^v of Z[X]/(X^N + 1). Multiplying
//! an encryption of X^a by an encryption of X^-b and by the all-ones test
//! vector yields a ciphertext whose constant coefficient is -1 if a > b
//! and +1 otherwise, which a [ComparisonSpec] maps to two output codes.

pub mod args;
pub mod backend;
pub mod count;
pub mod encoding;
pub mod equality;
pub mod error;
pub mod greater_than;
pub mod negate;
pub mod randomizer;
pub mod setup;
pub mod test_vector;

pub use args::{ComparisonSpec, Validation, check_ring_structure};
pub use count::count_less_than;
pub use encoding::{encode_on_degree, encrypt_in_degree};
pub use equality::equality_test;
pub use error::{CompareError, CompareResult};
pub use greater_than::{
    greater_than, greater_than_default, greater_than_plain, greater_than_plain_default, prepare_xb,
};
pub use negate::negate_degree;
pub use randomizer::Randomizer;
pub use setup::{check_negation_key, install_negation_key, negation_exponent};
pub use test_vector::{build_equality_test_vector, build_test_vector};

/// Plaintext and constant polynomial, constant term first.
pub type RingElement = math::poly::Poly<i64>;
