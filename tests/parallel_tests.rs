#![cfg(feature = "parallel")]

use approx::assert_abs_diff_eq;
use gn_engine::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn parallel_matches_sequential() {
    for n in 1..=6 {
        let alg = make_algebra(n).unwrap();
        let mut rng = StdRng::seed_from_u64(n as u64);
        let mut random = || {
            let coeffs = (0..alg.blade_count()).map(|_| rng.gen_range(-1.0..1.0)).collect();
            Multivector::from_coeffs(&alg, coeffs).unwrap()
        };
        let a = random();
        let b = random();
        let seq = a.geometric_product(&b).unwrap();
        let par = a.geometric_product_par(&b).unwrap();
        assert_abs_diff_eq!(seq, par, epsilon = Scalar::EPSILON * 1e5);
    }
}

#[test]
fn parallel_vector_product_3d() {
    let a = multivector_from_vector(&[2.0, 3.0, 4.5]).unwrap();
    let b = multivector_from_vector(&[1.0, 1.0, 1.0]).unwrap();
    let c = a.geometric_product_par(&b).unwrap();
    assert_eq!(c.coeffs(), &[9.5, 0.0, 0.0, -1.0, 0.0, -2.5, -1.5, 0.0]);
}

#[test]
fn parallel_rejects_mismatch() {
    let a = multivector_from_vector(&[1.0]).unwrap();
    let b = multivector_from_vector(&[1.0, 2.0]).unwrap();
    assert!(matches!(
        a.geometric_product_par(&b),
        Err(GaError::DimensionMismatch { left: 1, right: 2 })
    ));
}
