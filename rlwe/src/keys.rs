use crate::parameters::Parameters;
use fnv::FnvHashMap;
use math::poly::Poly;
use sampling::source::Source;
use std::sync::{Arc, PoisonError, RwLock};

/// Ternary secret s, stored mod q in the coefficient domain.
///
/// Owns its [PublicKey] (shared with every ciphertext encrypted under it)
/// and a private [Source] used to generate additional key material later on.
pub struct SecretKey {
    pub(crate) params: Arc<Parameters>,
    pub(crate) value: Poly<u64>,
    pub(crate) public_key: Arc<PublicKey>,
    pub(crate) source: Source,
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretKey")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl SecretKey {
    pub fn params(&self) -> &Arc<Parameters> {
        &self.params
    }

    pub fn public_key(&self) -> &Arc<PublicKey> {
        &self.public_key
    }

    /// Centered coefficients of s.
    pub fn to_i64(&self) -> Poly<i64> {
        self.params.ring().to_i64_centered(&self.value)
    }
}

/// Gadget encryption of s_in under s: row i encrypts 2^{i*log_base2k} * s_in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwitchingKey {
    pub rows: Vec<[Poly<u64>; 2]>,
}

impl SwitchingKey {
    pub fn rows(&self) -> usize {
        self.rows.len()
    }
}

/// Switching key from sigma(s) to s where sigma: X -> X^gal_el.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutomorphismKey {
    pub gal_el: usize,
    pub key: SwitchingKey,
}

/// Public encryption key (-a*s + t*e, a), together with the evaluation keys
/// published for this secret.
#[derive(Debug)]
pub struct PublicKey {
    params: Arc<Parameters>,
    value: [Poly<u64>; 2],
    relinearization_key: SwitchingKey,
    automorphism_keys: RwLock<FnvHashMap<usize, Arc<AutomorphismKey>>>,
}

impl PublicKey {
    pub(crate) fn new(params: Arc<Parameters>, value: [Poly<u64>; 2], relinearization_key: SwitchingKey) -> Self {
        Self {
            params,
            value,
            relinearization_key,
            automorphism_keys: RwLock::new(FnvHashMap::default()),
        }
    }

    pub fn params(&self) -> &Arc<Parameters> {
        &self.params
    }

    pub fn value(&self) -> &[Poly<u64>; 2] {
        &self.value
    }

    pub fn relinearization_key(&self) -> &SwitchingKey {
        &self.relinearization_key
    }

    pub fn has_automorphism_key(&self, gal_el: usize) -> bool {
        let gal_el: usize = gal_el % self.params.cyclotomic_order();
        self.automorphism_keys
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&gal_el)
    }

    pub fn automorphism_key(&self, gal_el: usize) -> Option<Arc<AutomorphismKey>> {
        let gal_el: usize = gal_el % self.params.cyclotomic_order();
        self.automorphism_keys
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&gal_el)
            .cloned()
    }

    /// Galois elements for which an automorphism key is installed, sorted.
    pub fn automorphism_gal_els(&self) -> Vec<usize> {
        let mut gal_els: Vec<usize> = self
            .automorphism_keys
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect();
        gal_els.sort_unstable();
        gal_els
    }

    /// Replaces any previous key for the same Galois element.
    pub(crate) fn insert_automorphism_key(&self, key: AutomorphismKey) {
        self.automorphism_keys
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.gal_el, Arc::new(key));
    }
}
