use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RlweError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("No NTT-friendly prime of {bits} bits for nth_root={nth_root}")]
    NoNttPrime { bits: usize, nth_root: usize },

    #[error("Missing automorphism key for gal_el={gal_el}")]
    MissingAutomorphismKey { gal_el: usize },
}

pub type RlweResult<T> = Result<T, RlweError>;
