pub mod automorphism;
pub mod context;
pub mod dft;
pub mod modulus;
pub mod poly;
pub mod ring;

pub use context::{ArithmeticContext, ModulusGuard};
pub use poly::Poly;
pub use ring::Ring;
