use crate::error::{RlweError, RlweResult};
use math::modulus::prime::{NTTFriendlyPrimesGenerator, Prime};
use math::ring::Ring;
use sampling::distributions::Gaussian;
use tracing::debug;

/// Unvalidated parameter set, see [Parameters::new].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParametersLiteral {
    /// log2 of the ring degree N.
    pub log_n: usize,
    /// Bit size of the ciphertext modulus q, an NTT-friendly prime below 2^log_q.
    pub log_q: usize,
    /// Plaintext modulus t = plaintext_base^plaintext_power.
    pub plaintext_base: u64,
    pub plaintext_power: u32,
    /// Gadget base 2^log_base2k used by relinearization and key switching.
    pub log_base2k: usize,
    /// Standard deviation of the error distribution.
    pub sigma: f64,
    /// Hamming weight of the ternary secret.
    pub xs: usize,
}

pub const TEST_PARAMS_N16: ParametersLiteral = ParametersLiteral {
    log_n: 4,
    log_q: 60,
    plaintext_base: 257,
    plaintext_power: 1,
    log_base2k: 8,
    sigma: 3.2,
    xs: 8,
};

pub const TEST_PARAMS_N32: ParametersLiteral = ParametersLiteral {
    log_n: 5,
    log_q: 60,
    plaintext_base: 257,
    plaintext_power: 1,
    log_base2k: 8,
    sigma: 3.2,
    xs: 16,
};

pub const DEFAULT_PARAMS: ParametersLiteral = ParametersLiteral {
    log_n: 6,
    log_q: 60,
    plaintext_base: 257,
    plaintext_power: 1,
    log_base2k: 6,
    sigma: 3.2,
    xs: 32,
};

#[derive(Debug)]
pub struct Parameters {
    log_n: usize,
    log_q: usize,
    plaintext_base: u64,
    plaintext_power: u32,
    plaintext_modulus: u64,
    log_base2k: usize,
    xe: Gaussian,
    xs: usize,
    ring: Ring<u64>,
}

impl Parameters {
    pub fn new(p: &ParametersLiteral) -> RlweResult<Self> {
        if !(1..=16).contains(&p.log_n) {
            return Err(RlweError::InvalidParameters(format!(
                "log_n={} not in [1, 16]",
                p.log_n
            )));
        }

        let n: usize = 1 << p.log_n;
        let nth_root: usize = n << 1;

        if !(p.log_n + 2..=61).contains(&p.log_q) {
            return Err(RlweError::InvalidParameters(format!(
                "log_q={} not in [{}, 61]",
                p.log_q,
                p.log_n + 2
            )));
        }

        if p.plaintext_base < 2 || p.plaintext_power == 0 {
            return Err(RlweError::InvalidParameters(format!(
                "plaintext modulus {}^{} must be at least 2",
                p.plaintext_base, p.plaintext_power
            )));
        }

        let plaintext_modulus: u64 = p
            .plaintext_base
            .checked_pow(p.plaintext_power)
            .filter(|t| *t < 1 << (p.log_q - 1))
            .ok_or_else(|| {
                RlweError::InvalidParameters(format!(
                    "plaintext modulus {}^{} must be smaller than 2^{}",
                    p.plaintext_base,
                    p.plaintext_power,
                    p.log_q - 1
                ))
            })?;

        if p.log_base2k == 0 || p.log_base2k > p.log_q {
            return Err(RlweError::InvalidParameters(format!(
                "log_base2k={} not in [1, log_q={}]",
                p.log_base2k, p.log_q
            )));
        }

        if p.xs == 0 || p.xs > n {
            return Err(RlweError::InvalidParameters(format!(
                "xs={} not in [1, n={}]",
                p.xs, n
            )));
        }

        let xe: Gaussian = Gaussian::new(p.sigma, 6.0 * p.sigma).ok_or_else(|| {
            RlweError::InvalidParameters(format!("sigma={} must be positive", p.sigma))
        })?;

        let prime: Prime = NTTFriendlyPrimesGenerator::new(p.log_q as u32, nth_root as u64)
            .next_downstream_prime()
            .ok_or(RlweError::NoNttPrime {
                bits: p.log_q,
                nth_root,
            })?;

        debug!(
            log_n = p.log_n,
            q = prime.q(),
            t = plaintext_modulus,
            log_base2k = p.log_base2k,
            "parameters ready"
        );

        Ok(Self {
            log_n: p.log_n,
            log_q: p.log_q,
            plaintext_base: p.plaintext_base,
            plaintext_power: p.plaintext_power,
            plaintext_modulus,
            log_base2k: p.log_base2k,
            xe,
            xs: p.xs,
            ring: Ring::new(n, prime),
        })
    }

    pub fn n(&self) -> usize {
        1 << self.log_n
    }

    pub fn log_n(&self) -> usize {
        self.log_n
    }

    /// Order m = 2N of the cyclotomic polynomial X^N + 1.
    pub fn cyclotomic_order(&self) -> usize {
        self.ring.cyclotomic_order()
    }

    pub fn log_q(&self) -> usize {
        self.log_q
    }

    pub fn q(&self) -> u64 {
        self.ring.modulus.q()
    }

    pub fn plaintext_base(&self) -> u64 {
        self.plaintext_base
    }

    pub fn plaintext_power(&self) -> u32 {
        self.plaintext_power
    }

    pub fn plaintext_modulus(&self) -> u64 {
        self.plaintext_modulus
    }

    pub fn log_base2k(&self) -> usize {
        self.log_base2k
    }

    /// Number of gadget rows, i.e. ceil(log_q / log_base2k).
    pub fn rows(&self) -> usize {
        self.ring.digits(self.log_base2k)
    }

    pub fn xe(&self) -> &Gaussian {
        &self.xe
    }

    pub fn xs(&self) -> usize {
        self.xs
    }

    pub fn ring(&self) -> &Ring<u64> {
        &self.ring
    }
}
