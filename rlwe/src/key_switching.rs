use crate::keys::SwitchingKey;
use crate::parameters::Parameters;
use itertools::izip;
use math::poly::Poly;
use math::ring::Ring;

/// Returns sum_i d_i * swk_i where d_i are the base-2^log_base2k digits of a.
///
/// If swk encrypts s_in under s, the result (r0, r1) satisfies
/// r0 + r1*s = a*s_in + t*e.
pub fn key_switch(params: &Parameters, a: &Poly<u64>, swk: &SwitchingKey) -> [Poly<u64>; 2] {
    let ring: &Ring<u64> = params.ring();
    let digits: Vec<Poly<u64>> = ring.decompose(a, params.log_base2k());

    assert!(
        swk.rows() >= digits.len(),
        "invalid switching key: rows={} < digits={}",
        swk.rows(),
        digits.len()
    );

    let mut r0: Poly<u64> = ring.new_poly();
    let mut r1: Poly<u64> = ring.new_poly();
    izip!(digits.iter(), swk.rows.iter()).for_each(|(d, row)| {
        ring.a_mul_b_add_into_d(d, &row[0], &mut r0);
        ring.a_mul_b_add_into_d(d, &row[1], &mut r1);
    });
    [r0, r1]
}

/// Folds the degree-2 component c2 of (c0, c1, c2) back into (c0, c1).
pub fn relinearize(params: &Parameters, c: &mut [Poly<u64>; 2], c2: &Poly<u64>, rlk: &SwitchingKey) {
    let ring: &Ring<u64> = params.ring();
    let [r0, r1] = key_switch(params, c2, rlk);
    ring.a_add_b_into_b(&r0, &mut c[0]);
    ring.a_add_b_into_b(&r1, &mut c[1]);
}
