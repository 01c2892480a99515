// src/nd/types.rs
//! Scalar type and dimension limits shared by every G_n algebra.

#[cfg(feature = "f32")]
pub type Scalar = f32;
#[cfg(not(feature = "f32"))]
pub type Scalar = f64;

/// Largest n for which a structure-constant table is built.
///
/// The table holds 4ⁿ entries, so n < 10 keeps it around a million entries.
pub const MAX_TABULATED_DIM: usize = 9;

/// Largest n accepted by the on-the-fly algebra (2ⁿ coefficients per multivector).
pub const MAX_DIRECT_DIM: usize = 16;

/// Default absolute tolerance used by approximate multivector equality.
#[cfg(feature = "f32")]
pub const DEFAULT_EPSILON: Scalar = 1e-5;
#[cfg(not(feature = "f32"))]
pub const DEFAULT_EPSILON: Scalar = 1e-9;

/// Number of basis blades in G_n.
#[inline(always)]
pub const fn blade_count(n: usize) -> usize {
    1 << n
}
