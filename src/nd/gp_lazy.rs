// src/nd/gp_lazy.rs
//! On-the-fly basis-blade product without a table.

use crate::nd::bits::{count_transpositions, set_bits};
use crate::nd::blade::{BladeProduct, Sign};

/// Product of blades `i * j`, derived from scratch on every call.
///
/// The resulting blade is `i ^ j`. The sign is the parity of the
/// transpositions needed to sort the basis vectors of `i` followed by those
/// of `j`; pairs that cancel still count, since each vector travels past
/// everything between its two occurrences before annihilating.
#[inline]
pub fn gp_blades(i: usize, j: usize) -> BladeProduct {
    let swaps = count_transpositions(&set_bits(i), &set_bits(j));
    BladeProduct::new(i ^ j, Sign::from_swaps(swaps))
}
