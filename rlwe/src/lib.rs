pub mod automorphism;
pub mod ciphertext;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod key_generator;
pub mod key_switching;
pub mod keys;
pub mod parameters;

pub use ciphertext::Ciphertext;
pub use error::{RlweError, RlweResult};
pub use key_generator::KeyGenerator;
pub use keys::{AutomorphismKey, PublicKey, SecretKey, SwitchingKey};
pub use parameters::{Parameters, ParametersLiteral};
