//! N-dimensional GA support: blade algebras, multivectors, products.

pub mod algebra;
pub mod bits;
pub mod blade;
pub mod gp;
pub mod gp_lazy;
pub mod multivector;
pub mod structure;
pub mod types;

#[cfg(feature = "parallel")]
pub mod parallel;
