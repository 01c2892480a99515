//! Structure-constant table for N dimensions.
//!
//! Builds, once per algebra, the 2ⁿ×2ⁿ table of basis-blade products that
//! backs [`TabulatedAlgebra`](crate::nd::algebra::TabulatedAlgebra).

use crate::nd::bits::reordering_swaps;
use crate::nd::blade::{BladeProduct, Sign};

/// Build the geometric-product table for G_n.
///
/// Returns a `Vec` of length `(2ⁿ)*(2ⁿ)`, indexed by `i*m + j`.
pub fn make_gp_table(n: usize) -> Vec<BladeProduct> {
    let m = 1 << n;
    let mut table = Vec::with_capacity(m * m);
    for i in 0..m {
        for j in 0..m {
            table.push(sign_and_index(i, j));
        }
    }
    tracing::debug!(n, blades = m, entries = table.len(), "built geometric product table");
    table
}

/// Resulting blade is `i ^ j`; the sign comes from the swap count of the
/// basis vectors of `j` past those of `i`, read straight off the bitmasks.
#[inline]
fn sign_and_index(i: usize, j: usize) -> BladeProduct {
    let swaps = reordering_swaps(i, j) as usize;
    BladeProduct::new(i ^ j, Sign::from_swaps(swaps))
}
