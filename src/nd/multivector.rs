//! N-dimensional multivectors and geometric product.
//!
//! A multivector in G_n has 2ⁿ components, one for each basis blade, stored
//! densely in blade-index order: `coeffs[0]` is the scalar part and
//! `coeffs[(1<<n)-1]` the pseudoscalar. Multivectors are values: every
//! operation returns a new one and leaves its operands untouched.

use std::fmt;
use std::ops::{Mul, Neg};
use std::sync::Arc;

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{GaError, Result};
use crate::nd::algebra::{make_algebra, Algebra, BladeAlgebra};
use crate::nd::bits::grade;
use crate::nd::blade::{blade_label, BladeKey};
use crate::nd::types::{Scalar, DEFAULT_EPSILON};

/// A multivector over a shared blade algebra.
pub struct Multivector<A: BladeAlgebra = Algebra> {
    algebra: Arc<A>,
    /// Raw components `[c_0, c_1, …, c_{2ⁿ-1}]`
    coeffs: Vec<Scalar>,
}

impl<A: BladeAlgebra> Multivector<A> {
    /// Assemble without validation; `coeffs.len()` must already be 2ⁿ.
    pub(crate) fn from_parts(algebra: Arc<A>, coeffs: Vec<Scalar>) -> Self {
        debug_assert_eq!(coeffs.len(), algebra.blade_count());
        Self { algebra, coeffs }
    }

    /// The zero multivector (all components zero).
    pub fn zero(algebra: &Arc<A>) -> Self {
        Self::from_parts(Arc::clone(algebra), vec![0.0; algebra.blade_count()])
    }

    /// A pure scalar.
    pub fn scalar(algebra: &Arc<A>, value: Scalar) -> Self {
        let mut mv = Self::zero(algebra);
        mv.coeffs[0] = value;
        mv
    }

    /// Construct from a raw component vector of length exactly 2ⁿ.
    pub fn from_coeffs(algebra: &Arc<A>, coeffs: Vec<Scalar>) -> Result<Self> {
        let expected = algebra.blade_count();
        if coeffs.len() != expected {
            return Err(GaError::ShapeMismatch {
                expected,
                actual: coeffs.len(),
            });
        }
        Ok(Self::from_parts(Arc::clone(algebra), coeffs))
    }

    /// Embed a vector of Rⁿ: component `k` lands on blade `e_(k+1)`, index `2ᵏ`.
    pub fn from_vector(algebra: &Arc<A>, v: &[Scalar]) -> Result<Self> {
        if v.is_empty() {
            return Err(GaError::ZeroDimension);
        }
        if v.len() != algebra.dim() {
            return Err(GaError::DimensionMismatch {
                left: algebra.dim(),
                right: v.len(),
            });
        }
        let mut mv = Self::zero(algebra);
        for (k, &x) in v.iter().enumerate() {
            mv.coeffs[1 << k] = x;
        }
        Ok(mv)
    }

    /// Construct from `(blade, coefficient)` pairs; unlisted blades are zero.
    ///
    /// Keys are canonical labels (`"1"`, `"e1e3"`) or raw indices. When a
    /// blade is listed more than once, the last value wins.
    pub fn from_sparse<K, I>(algebra: &Arc<A>, entries: I) -> Result<Self>
    where
        K: Into<BladeKey>,
        I: IntoIterator<Item = (K, Scalar)>,
    {
        let n = algebra.dim();
        let mut mv = Self::zero(algebra);
        for (key, value) in entries {
            let index = key.into().to_index(n)?;
            mv.coeffs[index] = value;
        }
        Ok(mv)
    }

    /// A single basis blade scaled by `coeff`.
    pub fn basis_blade(algebra: &Arc<A>, key: impl Into<BladeKey>, coeff: Scalar) -> Result<Self> {
        Self::from_sparse(algebra, [(key.into(), coeff)])
    }

    /// Construct the blade spanned by the given factor vectors.
    ///
    /// There is no algorithm behind this path yet; it always fails with
    /// [`GaError::NotImplemented`] instead of quietly returning zero.
    pub fn from_blade(_algebra: &Arc<A>, _factors: &[&[Scalar]]) -> Result<Self> {
        Err(GaError::NotImplemented("blade construction from factor vectors"))
    }

    /// The algebra this multivector lives in.
    pub fn algebra(&self) -> &Arc<A> {
        &self.algebra
    }

    /// Dimension n of the underlying vector space.
    pub fn dim(&self) -> usize {
        self.algebra.dim()
    }

    /// Coefficients in blade-index order.
    pub fn coeffs(&self) -> &[Scalar] {
        &self.coeffs
    }

    pub fn into_coeffs(self) -> Vec<Scalar> {
        self.coeffs
    }

    /// Coefficient of one blade.
    pub fn get(&self, key: impl Into<BladeKey>) -> Result<Scalar> {
        let index = key.into().to_index(self.dim())?;
        Ok(self.coeffs[index])
    }

    /// Grade-0 component.
    pub fn scalar_part(&self) -> Scalar {
        self.coeffs[0]
    }

    /// Keep only the blades of grade `k`.
    pub fn grade_part(&self, k: usize) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .map(|(i, &c)| if grade(i) == k { c } else { 0.0 })
            .collect();
        Self::from_parts(Arc::clone(&self.algebra), coeffs)
    }

    /// Fail with [`GaError::DimensionMismatch`] unless both share a dimension.
    pub fn check_same_dim(&self, other: &Self) -> Result<()> {
        if self.dim() != other.dim() {
            return Err(GaError::DimensionMismatch {
                left: self.dim(),
                right: other.dim(),
            });
        }
        Ok(())
    }

    /// `self + other`
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// `self - other`
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Multiply every coefficient by `s`.
    pub fn scale(&self, s: Scalar) -> Self {
        let coeffs = self.coeffs.iter().map(|&c| c * s).collect();
        Self::from_parts(Arc::clone(&self.algebra), coeffs)
    }

    fn zip_with(&self, other: &Self, f: impl Fn(Scalar, Scalar) -> Scalar) -> Result<Self> {
        self.check_same_dim(other)?;
        let coeffs = self
            .coeffs
            .iter()
            .zip(&other.coeffs)
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Self::from_parts(Arc::clone(&self.algebra), coeffs))
    }

    /// Geometric product `self * other`.
    ///
    /// Visits all 4ⁿ blade pairs `(i, j)` in row-major order and accumulates
    /// `a_i · b_j · sign` into the blade the algebra resolves them to.
    pub fn geometric_product(&self, other: &Self) -> Result<Self> {
        self.check_same_dim(other)?;
        let m = self.coeffs.len();
        let mut out = vec![0.0 as Scalar; m];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in other.coeffs.iter().enumerate() {
                let product = self.algebra.resolve(i, j);
                out[product.index()] += a * b * product.sign().as_scalar();
            }
        }
        Ok(Self::from_parts(Arc::clone(&self.algebra), out))
    }

    /// Equality within an absolute tolerance, reporting a dimension mismatch
    /// as an error instead of as inequality.
    pub fn eq_within(&self, other: &Self, tol: Scalar) -> Result<bool> {
        self.check_same_dim(other)?;
        Ok(self
            .coeffs
            .iter()
            .zip(&other.coeffs)
            .all(|(a, b)| (a - b).abs() <= tol))
    }

    /// True when every coefficient is within `eps` of zero.
    pub fn is_zero(&self, eps: Scalar) -> bool {
        self.coeffs.iter().all(|c| c.abs() <= eps)
    }
}

/// Shared algebra for `v.len()`, then [`Multivector::from_vector`].
pub fn multivector_from_vector(v: &[Scalar]) -> Result<Multivector> {
    if v.is_empty() {
        return Err(GaError::ZeroDimension);
    }
    Multivector::from_vector(&make_algebra(v.len())?, v)
}

/// Shared algebra for `n`, then [`Multivector::from_sparse`].
pub fn multivector_from_sparse<K, I>(n: usize, entries: I) -> Result<Multivector>
where
    K: Into<BladeKey>,
    I: IntoIterator<Item = (K, Scalar)>,
{
    Multivector::from_sparse(&make_algebra(n)?, entries)
}

/// `a + b`
pub fn add<A: BladeAlgebra>(a: &Multivector<A>, b: &Multivector<A>) -> Result<Multivector<A>> {
    a.add(b)
}

/// `a · s`
pub fn scale<A: BladeAlgebra>(a: &Multivector<A>, s: Scalar) -> Multivector<A> {
    a.scale(s)
}

/// `a * b`
pub fn geometric_product<A: BladeAlgebra>(
    a: &Multivector<A>,
    b: &Multivector<A>,
) -> Result<Multivector<A>> {
    a.geometric_product(b)
}

impl<A: BladeAlgebra> Clone for Multivector<A> {
    fn clone(&self) -> Self {
        Self::from_parts(Arc::clone(&self.algebra), self.coeffs.clone())
    }
}

impl<A: BladeAlgebra> PartialEq for Multivector<A> {
    fn eq(&self, other: &Self) -> bool {
        self.dim() == other.dim() && self.coeffs == other.coeffs
    }
}

impl<A: BladeAlgebra> AbsDiffEq for Multivector<A> {
    type Epsilon = Scalar;

    fn default_epsilon() -> Self::Epsilon {
        DEFAULT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.dim() == other.dim()
            && self
                .coeffs
                .iter()
                .zip(&other.coeffs)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<A: BladeAlgebra> RelativeEq for Multivector<A> {
    fn default_max_relative() -> Self::Epsilon {
        Scalar::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Scalar, max_relative: Scalar) -> bool {
        self.dim() == other.dim()
            && self
                .coeffs
                .iter()
                .zip(&other.coeffs)
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<A: BladeAlgebra> Mul<Scalar> for &Multivector<A> {
    type Output = Multivector<A>;
    fn mul(self, s: Scalar) -> Multivector<A> {
        self.scale(s)
    }
}

impl<A: BladeAlgebra> Neg for &Multivector<A> {
    type Output = Multivector<A>;
    fn neg(self) -> Multivector<A> {
        self.scale(-1.0)
    }
}

impl<A: BladeAlgebra> fmt::Debug for Multivector<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Multivector")
            .field("n", &self.dim())
            .field("coeffs", &self.coeffs)
            .finish()
    }
}

/// Writes the nonzero terms as a signed sum, e.g. `2 + 3e1 - 5e1e2e3`.
impl<A: BladeAlgebra> fmt::Display for Multivector<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, &c) in self.coeffs.iter().enumerate() {
            if c == 0.0 {
                continue;
            }
            let magnitude = if first {
                if c < 0.0 {
                    write!(f, "-")?;
                }
                c.abs()
            } else {
                write!(f, "{}", if c < 0.0 { " - " } else { " + " })?;
                c.abs()
            };
            if i == 0 {
                write!(f, "{magnitude}")?;
            } else if magnitude == 1.0 {
                write!(f, "{}", blade_label(i))?;
            } else {
                write!(f, "{magnitude}{}", blade_label(i))?;
            }
            first = false;
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
