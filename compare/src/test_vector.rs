use crate::RingElement;
use crate::args::{Validation, check_ring_structure};
use crate::backend::EncryptionContext;
use crate::encoding::ring_degree;
use crate::error::CompareResult;

/// Returns 1 + X + ... + X^(N-1).
///
/// Multiplying X^d by this mask gives a constant coefficient of -1 for
/// 0 < d < N and +1 for -N < d <= 0.
pub fn build_test_vector(context: &impl EncryptionContext) -> CompareResult<RingElement> {
    let n: usize = ring_degree(context)?;
    check_ring_structure(context, Validation::Warn)?;
    let mut mask: RingElement = RingElement::new(n);
    mask.set_all(&1);
    Ok(mask)
}

/// Returns X + ... + X^(N-1), whose product with X^d has a zero constant
/// coefficient exactly when d = 0.
pub fn build_equality_test_vector(context: &impl EncryptionContext) -> CompareResult<RingElement> {
    let mut mask: RingElement = build_test_vector(context)?;
    mask.set_coeff(0, 0);
    Ok(mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::izip;

    struct Context(usize);

    impl EncryptionContext for Context {
        fn ring_degree(&self) -> usize {
            self.0
        }
        fn cyclotomic_index(&self) -> usize {
            self.0 << 1
        }
        fn plaintext_modulus(&self) -> u64 {
            257
        }
    }

    /// Constant coefficient of X^d * mask in Z[X]/(X^n + 1), -n < d < n.
    fn constant_of_shift(mask: &RingElement, d: i64) -> i64 {
        let n: i64 = mask.n() as i64;
        // X^d * X^i contributes to X^0 when i = -d mod n, with sign -1 on wraparound.
        let i: i64 = (-d).rem_euclid(n);
        let sign: i64 = if d > 0 { -1 } else { 1 };
        sign * mask.coeff(i as usize)
    }

    #[test]
    fn test_vector_sign() {
        let n: usize = 16;
        let mask: RingElement = build_test_vector(&Context(n)).unwrap();
        assert_eq!(mask.0, vec![1; n]);
        (-(n as i64) + 1..n as i64).for_each(|d| {
            let want: i64 = if d > 0 { -1 } else { 1 };
            assert_eq!(constant_of_shift(&mask, d), want, "d={}", d);
        });
    }

    #[test]
    fn equality_test_vector() {
        let n: usize = 16;
        let mask: RingElement = build_equality_test_vector(&Context(n)).unwrap();
        izip!(mask.0.iter(), 0..n).for_each(|(c, i)| assert_eq!(*c, (i != 0) as i64));
        (-(n as i64) + 1..n as i64).for_each(|d| {
            let want: i64 = match d {
                0 => 0,
                d if d > 0 => -1,
                _ => 1,
            };
            assert_eq!(constant_of_shift(&mask, d), want, "d={}", d);
        });
    }
}
