use math::modulus::prime::{NTTFriendlyPrimesGenerator, Prime};
use math::poly::Poly;
use math::ring::Ring;
use sampling::source::Source;

#[test]
fn decomposition_recomposes() {
    let n: usize = 16;
    let prime: Prime = NTTFriendlyPrimesGenerator::new(60, 2 * n as u64)
        .next_downstream_prime()
        .unwrap();
    let ring: Ring<u64> = Ring::new(n, prime);
    let mut source: Source = Source::new([0u8; 32]);

    let mut a: Poly<u64> = ring.new_poly();
    ring.fill_uniform(&mut source, &mut a);

    [1usize, 7, 8, 17].iter().for_each(|&log_base| {
        let digits: Vec<Poly<u64>> = ring.decompose(&a, log_base);
        assert_eq!(digits.len(), ring.digits(log_base));

        let mut acc: Poly<u64> = ring.new_poly();
        digits.iter().enumerate().for_each(|(i, d)| {
            d.0.iter().for_each(|x| assert!(*x < 1 << log_base));
            let w: u64 = ring.modulus.pow(2, (i * log_base) as u64);
            let mut term: Poly<u64> = d.clone();
            ring.a_mul_b_scalar_into_a(w, &mut term);
            ring.a_add_b_into_b(&term, &mut acc);
        });
        assert_eq!(acc, a, "log_base={}", log_base);
    });
}

#[test]
fn sampling_supports() {
    let n: usize = 64;
    let prime: Prime = NTTFriendlyPrimesGenerator::new(40, 2 * n as u64)
        .next_downstream_prime()
        .unwrap();
    let ring: Ring<u64> = Ring::new(n, prime);
    let mut source: Source = Source::new([1u8; 32]);

    let mut a: Poly<u64> = ring.new_poly();
    ring.fill_ternary_prob(0.5, &mut source, &mut a);
    ring.to_i64_centered(&a)
        .0
        .iter()
        .for_each(|x| assert!((-1..=1).contains(x)));

    let gaussian = sampling::distributions::Gaussian::new(3.2, 19.2).unwrap();
    ring.fill_gaussian(&gaussian, &mut source, &mut a);
    ring.to_i64_centered(&a)
        .0
        .iter()
        .for_each(|x| assert!(x.abs() <= 19));
}
