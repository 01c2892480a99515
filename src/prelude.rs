// src/prelude.rs
//! The “everything” import for GnEngine.
//!
//! Brings you the most commonly used types and functions with one glob:
//! ```rust
//! use gn_engine::prelude::*;
//! ```

// core data types
pub use crate::error::{GaError, Result};
pub use crate::nd::algebra::{Algebra, AlgebraKind, BladeAlgebra, DirectAlgebra, TabulatedAlgebra};
pub use crate::nd::blade::{BladeKey, BladeProduct, Sign};
pub use crate::nd::multivector::Multivector;
pub use crate::nd::types::Scalar;

// construction and products
pub use crate::nd::algebra::make_algebra;
pub use crate::nd::multivector::{
    add, geometric_product, multivector_from_sparse, multivector_from_vector, scale,
};
