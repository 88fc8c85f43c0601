use crate::source::Source;
use rand_distr::{Distribution, Normal};

/// Rounded gaussian truncated to [-bound, bound].
#[derive(Clone, Debug)]
pub struct Gaussian {
    normal: Normal<f64>,
    bound: f64,
}

impl Gaussian {
    /// Returns `None` if sigma is not finite or not positive.
    pub fn new(sigma: f64, bound: f64) -> Option<Self> {
        if !(sigma > 0.0) || !bound.is_finite() {
            return None;
        }
        Normal::new(0.0, sigma).ok().map(|normal| Self { normal, bound })
    }

    pub fn sigma(&self) -> f64 {
        self.normal.std_dev()
    }

    pub fn bound(&self) -> f64 {
        self.bound
    }

    #[inline(always)]
    pub fn sample(&self, source: &mut Source) -> i64 {
        loop {
            let x: f64 = self.normal.sample(source);
            if x.abs() <= self.bound {
                return x.round() as i64;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaussian_is_bounded() {
        let sigma: f64 = 3.2;
        let bound: f64 = 6.0 * sigma;
        let dist: Gaussian = Gaussian::new(sigma, bound).unwrap();
        let mut source: Source = Source::new([0u8; 32]);
        (0..10000).for_each(|_| assert!((dist.sample(&mut source) as f64).abs() <= bound.round()));
    }

    #[test]
    fn gaussian_rejects_invalid_sigma() {
        assert!(Gaussian::new(0.0, 1.0).is_none());
        assert!(Gaussian::new(-1.0, 1.0).is_none());
        assert!(Gaussian::new(f64::NAN, 1.0).is_none());
    }

    #[test]
    fn gaussian_std_close_to_sigma() {
        let sigma: f64 = 3.2;
        let dist: Gaussian = Gaussian::new(sigma, 6.0 * sigma).unwrap();
        let mut source: Source = Source::new([3u8; 32]);
        let k: usize = 20000;
        let var: f64 = (0..k)
            .map(|_| {
                let x: f64 = dist.sample(&mut source) as f64;
                x * x
            })
            .sum::<f64>()
            / k as f64;
        assert!((var.sqrt() - sigma).abs() < 0.2, "std={}", var.sqrt());
    }
}
