// src/nd/algebra.rs
//! Blade algebras: resolve the product of two basis blades of G_n.
//!
//! Two realizations share one product rule:
//! - [`TabulatedAlgebra`] precomputes all 4ⁿ blade products at construction
//!   and answers each pair with a table read.
//! - [`DirectAlgebra`] keeps nothing but `n` and rederives every pair.
//!
//! They agree exactly on every pair; pick by memory budget and by how many
//! products will be computed in the algebra.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{GaError, Result};
use crate::nd::blade::BladeProduct;
use crate::nd::gp::make_gp_table;
use crate::nd::gp_lazy::gp_blades;
use crate::nd::types::{blade_count, MAX_DIRECT_DIM, MAX_TABULATED_DIM};

/// Product rule for the basis blades of G_n.
pub trait BladeAlgebra: fmt::Debug + Send + Sync {
    /// Dimension n of the underlying vector space.
    fn dim(&self) -> usize;

    /// Number of basis blades, 2ⁿ.
    fn blade_count(&self) -> usize {
        blade_count(self.dim())
    }

    /// Product of basis blades `i * j`. Both must be below `blade_count()`.
    fn resolve(&self, i: usize, j: usize) -> BladeProduct;
}

fn check_dim(n: usize, max: usize) -> Result<()> {
    if n == 0 {
        return Err(GaError::ZeroDimension);
    }
    if n > max {
        return Err(GaError::DimensionTooLarge { requested: n, max });
    }
    Ok(())
}

/// Algebra backed by a precomputed structure-constant table.
#[derive(Clone)]
pub struct TabulatedAlgebra {
    n: usize,
    /// `table[i * 2ⁿ + j]` is the product of blades `i` and `j`.
    table: Vec<BladeProduct>,
}

impl TabulatedAlgebra {
    /// Build the table for G_n. Fails for n == 0 or n > [`MAX_TABULATED_DIM`].
    pub fn new(n: usize) -> Result<Self> {
        check_dim(n, MAX_TABULATED_DIM)?;
        Ok(Self {
            n,
            table: make_gp_table(n),
        })
    }

    /// The full table, row-major over the left operand.
    pub fn table(&self) -> &[BladeProduct] {
        &self.table
    }

    /// Products of blade `i` with every blade, in right-operand order.
    pub fn row(&self, i: usize) -> &[BladeProduct] {
        let m = self.blade_count();
        &self.table[i * m..(i + 1) * m]
    }
}

impl BladeAlgebra for TabulatedAlgebra {
    fn dim(&self) -> usize {
        self.n
    }

    #[inline(always)]
    fn resolve(&self, i: usize, j: usize) -> BladeProduct {
        self.table[(i << self.n) | j]
    }
}

impl fmt::Debug for TabulatedAlgebra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabulatedAlgebra")
            .field("n", &self.n)
            .field("entries", &self.table.len())
            .finish()
    }
}

impl PartialEq for TabulatedAlgebra {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n
    }
}

impl Eq for TabulatedAlgebra {}

/// Algebra that computes every blade product on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectAlgebra {
    n: usize,
}

impl DirectAlgebra {
    /// Fails for n == 0 or n > [`MAX_DIRECT_DIM`].
    pub fn new(n: usize) -> Result<Self> {
        check_dim(n, MAX_DIRECT_DIM)?;
        Ok(Self { n })
    }
}

impl BladeAlgebra for DirectAlgebra {
    fn dim(&self) -> usize {
        self.n
    }

    #[inline]
    fn resolve(&self, i: usize, j: usize) -> BladeProduct {
        gp_blades(i, j)
    }
}

/// Which realization backs an [`Algebra`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgebraKind {
    Tabulated,
    Direct,
}

impl AlgebraKind {
    /// Largest dimension this realization accepts.
    pub fn max_dim(self) -> usize {
        match self {
            AlgebraKind::Tabulated => MAX_TABULATED_DIM,
            AlgebraKind::Direct => MAX_DIRECT_DIM,
        }
    }
}

/// Either realization behind one type, for callers choosing at run time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Algebra {
    Tabulated(TabulatedAlgebra),
    Direct(DirectAlgebra),
}

impl Algebra {
    pub fn new(kind: AlgebraKind, n: usize) -> Result<Self> {
        match kind {
            AlgebraKind::Tabulated => Self::tabulated(n),
            AlgebraKind::Direct => Self::direct(n),
        }
    }

    pub fn tabulated(n: usize) -> Result<Self> {
        TabulatedAlgebra::new(n).map(Algebra::Tabulated)
    }

    pub fn direct(n: usize) -> Result<Self> {
        DirectAlgebra::new(n).map(Algebra::Direct)
    }

    pub fn kind(&self) -> AlgebraKind {
        match self {
            Algebra::Tabulated(_) => AlgebraKind::Tabulated,
            Algebra::Direct(_) => AlgebraKind::Direct,
        }
    }
}

impl BladeAlgebra for Algebra {
    fn dim(&self) -> usize {
        match self {
            Algebra::Tabulated(alg) => alg.dim(),
            Algebra::Direct(alg) => alg.dim(),
        }
    }

    #[inline]
    fn resolve(&self, i: usize, j: usize) -> BladeProduct {
        match self {
            Algebra::Tabulated(alg) => alg.resolve(i, j),
            Algebra::Direct(alg) => alg.resolve(i, j),
        }
    }
}

/// One shared algebra per (kind, n), built on first request.
///
/// Each slot has its own lock, so building one table never blocks lookups
/// of another dimension or kind.
type Slot = Arc<Mutex<Option<Arc<Algebra>>>>;

struct Registry {
    tabulated: Vec<Slot>,
    direct: Vec<Slot>,
}

static REGISTRY: Mutex<Registry> = parking_lot::const_mutex(Registry {
    tabulated: Vec::new(),
    direct: Vec::new(),
});

fn registry_slot(kind: AlgebraKind, n: usize) -> Slot {
    let mut registry = REGISTRY.lock();
    let slots = match kind {
        AlgebraKind::Tabulated => &mut registry.tabulated,
        AlgebraKind::Direct => &mut registry.direct,
    };
    if slots.len() <= n {
        slots.resize_with(n + 1, Slot::default);
    }
    Arc::clone(&slots[n])
}

/// Shared tabulated algebra for G_n.
///
/// Every call with the same `n` returns the same instance, so its table is
/// built once and read by every multivector of that dimension.
pub fn make_algebra(n: usize) -> Result<Arc<Algebra>> {
    make_algebra_with(AlgebraKind::Tabulated, n)
}

/// Shared algebra of the given realization for G_n.
pub fn make_algebra_with(kind: AlgebraKind, n: usize) -> Result<Arc<Algebra>> {
    check_dim(n, kind.max_dim())?;

    if let Some(alg) = registry_slot(kind, n).lock().as_ref() {
        tracing::trace!(?kind, n, "reusing shared algebra");
        return Ok(Arc::clone(alg));
    }

    // Built unlocked; if another caller won the race, its instance is kept.
    let built = Arc::new(Algebra::new(kind, n)?);
    let slot = registry_slot(kind, n);
    let mut slot = slot.lock();
    Ok(Arc::clone(slot.get_or_insert(built)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nd::blade::Sign;

    #[test]
    fn rejects_bad_dimensions() {
        assert_eq!(TabulatedAlgebra::new(0).unwrap_err(), GaError::ZeroDimension);
        assert_eq!(
            TabulatedAlgebra::new(10).unwrap_err(),
            GaError::DimensionTooLarge { requested: 10, max: 9 }
        );
        assert!(DirectAlgebra::new(10).is_ok());
        assert!(matches!(
            DirectAlgebra::new(MAX_DIRECT_DIM + 1),
            Err(GaError::DimensionTooLarge { .. })
        ));
    }

    #[test]
    fn row_matches_resolve() {
        let alg = TabulatedAlgebra::new(3).unwrap();
        assert_eq!(alg.table().len(), 64);
        for (j, &entry) in alg.row(5).iter().enumerate() {
            assert_eq!(entry, alg.resolve(5, j));
        }
    }

    #[test]
    fn registry_shares_instances() {
        let a = make_algebra(4).unwrap();
        let b = make_algebra(4).unwrap();
        assert!(Arc::ptr_eq(&a, &b));

        let d = make_algebra_with(AlgebraKind::Direct, 4).unwrap();
        assert!(!Arc::ptr_eq(&a, &d));
        assert_eq!(d.kind(), AlgebraKind::Direct);
    }

    #[test]
    fn concurrent_requests_share_one_instance() {
        let algebras: Vec<Arc<Algebra>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|t| {
                    scope.spawn(move || {
                        let kind = if t % 2 == 0 {
                            AlgebraKind::Tabulated
                        } else {
                            AlgebraKind::Direct
                        };
                        (make_algebra_with(kind, 7).unwrap(), make_algebra(6).unwrap())
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| {
                    let (a, b) = h.join().unwrap();
                    [a, b]
                })
                .collect()
        });
        let shared_6 = make_algebra(6).unwrap();
        let shared_7 = make_algebra(7).unwrap();
        let direct_7 = make_algebra_with(AlgebraKind::Direct, 7).unwrap();
        for alg in &algebras {
            let expected = match (alg.kind(), alg.dim()) {
                (AlgebraKind::Tabulated, 6) => &shared_6,
                (AlgebraKind::Tabulated, 7) => &shared_7,
                _ => &direct_7,
            };
            assert!(Arc::ptr_eq(alg, expected));
        }
    }

    #[test]
    fn pseudoscalar_squares_to_minus_one_in_g3() {
        let alg = Algebra::direct(3).unwrap();
        assert_eq!(alg.resolve(7, 7), BladeProduct::Scalar(Sign::Neg));
    }
}
