pub mod automorphism;
pub mod decomposition;
pub mod ring;
pub mod sampling;
