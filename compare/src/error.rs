use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    #[error("Missing key-switching material for automorphism exponent {exponent}")]
    MissingKeySwitchMaterial { exponent: usize },

    #[error("Invalid ring parameters: {0}")]
    InvalidRingParameters(String),

    #[error("Ring degree n={n} is not half of the cyclotomic index m={m}")]
    RingStructure { n: usize, m: usize },

    #[error("Operand {value} out of range [0, {n})")]
    OperandOutOfRange { value: i64, n: usize },
}

pub type CompareResult<T> = Result<T, CompareError>;
