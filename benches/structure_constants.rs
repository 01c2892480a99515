// benches/structure_constants.rs
// Pairwise accumulation vs masked outer-product reduction on the same inputs.
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gn_engine::prelude::*;
use gn_engine::StructureConstants;

const BATCH_SIZE: usize = 100;

fn bench_structure_constants(c: &mut Criterion) {
    let alg = make_algebra(5).unwrap();
    let a = Multivector::from_coeffs(&alg, (0..32).map(|i| (i % 7) as Scalar).collect()).unwrap();
    let b = Multivector::from_coeffs(&alg, (0..32).map(|i| (i % 5) as Scalar).collect()).unwrap();
    let sc = StructureConstants::from_algebra(alg.as_ref());

    c.bench_function("G_5 pairwise product × 100 batch", |bencher| {
        bencher.iter(|| {
            for _ in 0..BATCH_SIZE {
                black_box(black_box(&a).geometric_product(black_box(&b)).unwrap());
            }
        })
    });

    c.bench_function("G_5 masked outer product × 100 batch", |bencher| {
        bencher.iter(|| {
            for _ in 0..BATCH_SIZE {
                black_box(sc.product(black_box(&a), black_box(&b)).unwrap());
            }
        })
    });
}

criterion_group!(structure_benches, bench_structure_constants);
criterion_main!(structure_benches);
