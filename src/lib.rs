//! # GnEngine Quickstart
//!
//! ```rust
//! use gn_engine::prelude::*;
//!
//! // Multiply two vectors of R³ in G_3
//! let a = multivector_from_vector(&[2.0, 3.0, 4.5]).unwrap();
//! let b = multivector_from_vector(&[1.0, 1.0, 1.0]).unwrap();
//! let ab = a.geometric_product(&b).unwrap();
//!
//! // scalar part is the dot product, the bivector part the wedge
//! assert_eq!(ab.coeffs(), &[9.5, 0.0, 0.0, -1.0, 0.0, -2.5, -1.5, 0.0]);
//! assert_eq!(ab.get("e1e3").unwrap(), -2.5);
//! ```
//!
#![doc = include_str!("../README.md")]

pub mod error;
pub mod prelude;

// N-dimensional GA support
pub mod nd;

// --- Public API exports ---

pub use error::{GaError, Result};

pub use nd::algebra::{
    make_algebra, make_algebra_with, Algebra, AlgebraKind, BladeAlgebra, DirectAlgebra,
    TabulatedAlgebra,
};
pub use nd::bits::count_transpositions;
pub use nd::blade::{blade_label, parse_blade_label, BladeKey, BladeProduct, Sign};
pub use nd::multivector::{
    add, geometric_product, multivector_from_sparse, multivector_from_vector, scale, Multivector,
};
pub use nd::structure::StructureConstants;
pub use nd::types::Scalar;
