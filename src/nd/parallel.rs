//! Rayon-backed geometric product.
//!
//! Splits the outer loop over left-hand blades across threads. Each worker
//! accumulates into its own output vector and the partial vectors are summed
//! at the end, so the algebra is only ever read.

use std::sync::Arc;

use rayon::prelude::*;

use crate::error::Result;
use crate::nd::algebra::BladeAlgebra;
use crate::nd::multivector::Multivector;
use crate::nd::types::Scalar;

impl<A: BladeAlgebra> Multivector<A> {
    /// Geometric product computed across the rayon thread pool.
    ///
    /// Agrees with [`Multivector::geometric_product`] up to float rounding;
    /// partial sums are merged in an unspecified order.
    pub fn geometric_product_par(&self, other: &Self) -> Result<Self> {
        self.check_same_dim(other)?;
        let algebra = self.algebra();
        let m = algebra.blade_count();
        let b = other.coeffs();

        let out = self
            .coeffs()
            .par_iter()
            .enumerate()
            .fold(
                || vec![0.0 as Scalar; m],
                |mut acc, (i, &a)| {
                    for (j, &bj) in b.iter().enumerate() {
                        let product = algebra.resolve(i, j);
                        acc[product.index()] += a * bj * product.sign().as_scalar();
                    }
                    acc
                },
            )
            .reduce(
                || vec![0.0 as Scalar; m],
                |mut left, right| {
                    for (l, r) in left.iter_mut().zip(right) {
                        *l += r;
                    }
                    left
                },
            );
        Ok(Multivector::from_parts(Arc::clone(algebra), out))
    }
}
