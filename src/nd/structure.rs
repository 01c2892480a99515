//! Structure constants and the masked outer-product form of the geometric product.
//!
//! Instead of scattering each pair `(i, j)` into its output blade, the
//! product is written per output blade `k` as
//!
//! ```text
//! out[k] = Σ_{(i,j) : target[i][j] = k}  sign[i][j] · (a ⊗ b)[i][j]
//! ```
//!
//! i.e. a reduction of the outer product `a ⊗ b` under the mask of pairs
//! landing on `k`. Terms are summed in row-major pair order, the same order
//! [`Multivector::geometric_product`] uses, so both give identical floats.

use std::sync::Arc;

use ndarray::{Array2, ArrayView1, Axis};

use crate::error::{GaError, Result};
use crate::nd::algebra::BladeAlgebra;
use crate::nd::multivector::Multivector;
use crate::nd::types::Scalar;

/// Structure constants of G_n laid out as dense arrays.
#[derive(Debug, Clone)]
pub struct StructureConstants {
    n: usize,
    /// `signs[[i, j]]` is ±1, the sign of blade `i` times blade `j`.
    signs: Array2<Scalar>,
    /// `targets[[i, j]]` is the blade that product lands on.
    targets: Array2<usize>,
    /// For each output blade, the pairs mapping onto it in row-major order.
    by_target: Vec<Vec<(usize, usize)>>,
}

impl StructureConstants {
    /// Tabulate every blade product of `algebra`.
    pub fn from_algebra<A: BladeAlgebra + ?Sized>(algebra: &A) -> Self {
        let n = algebra.dim();
        let m = algebra.blade_count();
        let mut signs = Array2::<Scalar>::zeros((m, m));
        let mut targets = Array2::<usize>::zeros((m, m));
        let mut by_target = vec![Vec::with_capacity(m); m];
        for i in 0..m {
            for j in 0..m {
                let product = algebra.resolve(i, j);
                signs[[i, j]] = product.sign().as_scalar();
                targets[[i, j]] = product.index();
                by_target[product.index()].push((i, j));
            }
        }
        tracing::debug!(n, blades = m, "built structure constants");
        Self {
            n,
            signs,
            targets,
            by_target,
        }
    }

    pub fn dim(&self) -> usize {
        self.n
    }

    pub fn signs(&self) -> &Array2<Scalar> {
        &self.signs
    }

    pub fn targets(&self) -> &Array2<usize> {
        &self.targets
    }

    /// Signed mask of the pairs landing on blade `k`: `sign[i][j]` where
    /// `target[i][j] == k`, zero elsewhere.
    pub fn mask(&self, k: usize) -> Array2<Scalar> {
        let mut mask = Array2::<Scalar>::zeros(self.signs.raw_dim());
        ndarray::Zip::from(&mut mask)
            .and(&self.signs)
            .and(&self.targets)
            .for_each(|out, &sign, &target| {
                if target == k {
                    *out = sign;
                }
            });
        mask
    }

    /// Outer product `a ⊗ b` of two coefficient vectors.
    pub fn outer(a: &[Scalar], b: &[Scalar]) -> Array2<Scalar> {
        let col = ArrayView1::from(a).insert_axis(Axis(1));
        let row = ArrayView1::from(b).insert_axis(Axis(0));
        &col * &row
    }

    /// Geometric product as a masked reduction of `a ⊗ b`.
    pub fn product<A: BladeAlgebra>(
        &self,
        a: &Multivector<A>,
        b: &Multivector<A>,
    ) -> Result<Multivector<A>> {
        a.check_same_dim(b)?;
        if a.dim() != self.n {
            return Err(GaError::DimensionMismatch {
                left: self.n,
                right: a.dim(),
            });
        }
        let signed = Self::outer(a.coeffs(), b.coeffs()) * &self.signs;
        let out = self
            .by_target
            .iter()
            .map(|pairs| {
                pairs
                    .iter()
                    .fold(0.0 as Scalar, |acc, &(i, j)| acc + signed[[i, j]])
            })
            .collect();
        Ok(Multivector::from_parts(Arc::clone(a.algebra()), out))
    }
}
