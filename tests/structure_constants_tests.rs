use std::sync::Arc;

use approx::assert_abs_diff_eq;
use gn_engine::prelude::*;
use gn_engine::{make_algebra_with, StructureConstants};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_mv<A: BladeAlgebra>(alg: &Arc<A>, rng: &mut StdRng) -> Multivector<A> {
    let coeffs = (0..alg.blade_count()).map(|_| rng.gen_range(-1.0..1.0)).collect();
    Multivector::from_coeffs(alg, coeffs).unwrap()
}

#[test]
fn tables_mirror_the_algebra() {
    let alg = TabulatedAlgebra::new(3).unwrap();
    let sc = StructureConstants::from_algebra(&alg);
    assert_eq!(sc.dim(), 3);
    assert_eq!(sc.signs().dim(), (8, 8));
    for i in 0..8 {
        for j in 0..8 {
            let product = alg.resolve(i, j);
            assert_eq!(sc.targets()[[i, j]], product.index());
            assert_eq!(sc.signs()[[i, j]], product.sign().as_scalar());
        }
    }
}

#[test]
fn vector_product_3d() {
    let a = multivector_from_vector(&[2.0, 3.0, 4.5]).unwrap();
    let b = multivector_from_vector(&[1.0, 1.0, 1.0]).unwrap();
    let sc = StructureConstants::from_algebra(a.algebra().as_ref());

    let c = sc.product(&a, &b).unwrap();
    assert_eq!(c.coeffs(), &[9.5, 0.0, 0.0, -1.0, 0.0, -2.5, -1.5, 0.0]);
}

#[test]
fn matches_pairwise_product_bit_for_bit() {
    for n in 1..=5 {
        let alg = make_algebra(n).unwrap();
        let sc = StructureConstants::from_algebra(alg.as_ref());
        let mut rng = StdRng::seed_from_u64(n as u64);
        for _ in 0..5 {
            let a = random_mv(&alg, &mut rng);
            let b = random_mv(&alg, &mut rng);
            let pairwise = a.geometric_product(&b).unwrap();
            let masked = sc.product(&a, &b).unwrap();
            let same_bits = pairwise
                .coeffs()
                .iter()
                .zip(masked.coeffs())
                .all(|(x, y)| x.to_bits() == y.to_bits() || (*x == 0.0 && *y == 0.0));
            assert!(same_bits, "G_{n}: {pairwise:?} vs {masked:?}");
        }
    }
}

#[test]
fn works_over_direct_algebra() {
    let alg = make_algebra_with(AlgebraKind::Direct, 4).unwrap();
    let sc = StructureConstants::from_algebra(alg.as_ref());
    let mut rng = StdRng::seed_from_u64(5);
    let a = random_mv(&alg, &mut rng);
    let b = random_mv(&alg, &mut rng);
    assert_eq!(sc.product(&a, &b).unwrap(), a.geometric_product(&b).unwrap());
}

#[test]
fn masks_reduce_outer_product() {
    let alg = make_algebra(3).unwrap();
    let sc = StructureConstants::from_algebra(alg.as_ref());
    let mut rng = StdRng::seed_from_u64(11);
    let a = random_mv(&alg, &mut rng);
    let b = random_mv(&alg, &mut rng);

    let outer = StructureConstants::outer(a.coeffs(), b.coeffs());
    let product = a.geometric_product(&b).unwrap();
    for k in 0..8 {
        let reduced = (sc.mask(k) * &outer).sum();
        assert_abs_diff_eq!(reduced, product.coeffs()[k], epsilon = Scalar::EPSILON * 1e5);
    }
}

#[test]
fn every_pair_lands_in_exactly_one_mask() {
    let alg = TabulatedAlgebra::new(3).unwrap();
    let sc = StructureConstants::from_algebra(&alg);
    let total = (0..8).map(|k| sc.mask(k).mapv(Scalar::abs)).fold(
        ndarray::Array2::<Scalar>::zeros((8, 8)),
        |acc, m| acc + m,
    );
    assert!(total.iter().all(|&x| x == 1.0));
}

#[test]
fn rejects_foreign_dimension() {
    let sc = StructureConstants::from_algebra(&TabulatedAlgebra::new(2).unwrap());
    let a = multivector_from_vector(&[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(
        sc.product(&a, &a).unwrap_err(),
        GaError::DimensionMismatch { left: 2, right: 3 }
    );
}
