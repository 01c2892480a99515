// src/nd/bits.rs
//! Bit-level combinatorics on blade indices.
//!
//! A blade index is a bitmask: bit `k` set means basis vector `e_(k+1)`
//! participates in the blade.

/// Grade of a blade: the number of basis vectors it contains.
#[inline(always)]
pub fn grade(mask: usize) -> usize {
    mask.count_ones() as usize
}

/// Positions of the set bits of `mask`, in ascending order.
#[inline]
pub fn set_bits(mask: usize) -> Vec<usize> {
    let mut out = Vec::with_capacity(grade(mask));
    let mut rest = mask;
    while rest != 0 {
        out.push(rest.trailing_zeros() as usize);
        rest &= rest - 1;
    }
    out
}

/// Number of adjacent transpositions used to sort `first ++ second`.
///
/// Both inputs must be sorted ascending. Each element `x` of `second` is
/// inserted into the unmodified `first`, costing one transposition per
/// element of `first` strictly greater than `x`. The total is not always the
/// minimal number of swaps, but its parity always matches a full sort, and
/// only the parity is meaningful to callers.
pub fn count_transpositions<T: Ord>(first: &[T], second: &[T]) -> usize {
    second
        .iter()
        .map(|x| first.len() - first.partition_point(|y| y <= x))
        .sum()
}

/// Same count as [`count_transpositions`] for the set bits of two masks,
/// computed without materializing the position lists.
///
/// For every basis vector in `i`, counts the basis vectors of `j` with a
/// lower label that it has to be moved past.
#[inline]
pub fn reordering_swaps(i: usize, j: usize) -> u32 {
    let mut swaps = 0u32;
    let mut rest = i;
    while rest != 0 {
        let bit = rest.trailing_zeros();
        let lower = j & ((1usize << bit) - 1);
        swaps += lower.count_ones();
        rest &= rest - 1;
    }
    swaps
}
