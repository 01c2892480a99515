// src/nd/blade.rs
//! Basis blades: product results and canonical labels.
//!
//! Labels are `"1"` for the scalar blade, otherwise `e<k>` tokens in strictly
//! increasing order, e.g. `"e1e3e4"` for blade index `0b1101`.

use std::fmt;
use std::ops::Mul;

use crate::error::{GaError, Result};
use crate::nd::types::{Scalar, MAX_DIRECT_DIM};

/// Sign of a basis-blade product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Pos,
    Neg,
}

impl Sign {
    /// `Pos` for an even number of transpositions, `Neg` for an odd one.
    #[inline(always)]
    pub fn from_swaps(swaps: usize) -> Self {
        if swaps & 1 == 0 {
            Sign::Pos
        } else {
            Sign::Neg
        }
    }

    #[inline(always)]
    pub fn as_scalar(self) -> Scalar {
        match self {
            Sign::Pos => 1.0,
            Sign::Neg => -1.0,
        }
    }

    #[inline(always)]
    pub fn flip(self) -> Self {
        match self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;
    fn mul(self, rhs: Sign) -> Sign {
        if self == rhs {
            Sign::Pos
        } else {
            Sign::Neg
        }
    }
}

/// Result of multiplying two basis blades.
///
/// The scalar outcome gets its own variant so that "collapsed to 1" never
/// has to be told apart from a numeric index by a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BladeProduct {
    /// Every basis vector cancelled: the product is `±1`.
    Scalar(Sign),
    /// The product is `±e_index`, with `index != 0`.
    Blade { index: usize, sign: Sign },
}

impl BladeProduct {
    /// Tag a resulting blade index and sign.
    #[inline(always)]
    pub fn new(index: usize, sign: Sign) -> Self {
        if index == 0 {
            BladeProduct::Scalar(sign)
        } else {
            BladeProduct::Blade { index, sign }
        }
    }

    /// Index of the resulting blade (0 for the scalar).
    #[inline(always)]
    pub fn index(self) -> usize {
        match self {
            BladeProduct::Scalar(_) => 0,
            BladeProduct::Blade { index, .. } => index,
        }
    }

    #[inline(always)]
    pub fn sign(self) -> Sign {
        match self {
            BladeProduct::Scalar(sign) | BladeProduct::Blade { sign, .. } => sign,
        }
    }

    #[inline(always)]
    pub fn is_scalar(self) -> bool {
        matches!(self, BladeProduct::Scalar(_))
    }
}

/// Key addressing one basis blade: either a canonical label or a raw index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BladeKey {
    Label(String),
    Index(usize),
}

impl BladeKey {
    /// Resolve to a blade index valid in G_n.
    pub fn to_index(&self, n: usize) -> Result<usize> {
        check_label_dim(n)?;
        match self {
            BladeKey::Label(label) => parse_blade_label(label, n),
            BladeKey::Index(index) if *index < (1usize << n) => Ok(*index),
            BladeKey::Index(index) => Err(GaError::format(
                index.to_string(),
                format!("index out of range for G_{n} (must be below {})", 1usize << n),
            )),
        }
    }
}

impl From<&str> for BladeKey {
    fn from(label: &str) -> Self {
        BladeKey::Label(label.to_owned())
    }
}

impl From<String> for BladeKey {
    fn from(label: String) -> Self {
        BladeKey::Label(label)
    }
}

impl From<usize> for BladeKey {
    fn from(index: usize) -> Self {
        BladeKey::Index(index)
    }
}

impl fmt::Display for BladeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BladeKey::Label(label) => f.write_str(label),
            BladeKey::Index(index) => write!(f, "#{index}"),
        }
    }
}

/// Blade indices are only defined for dimensions an algebra can have.
fn check_label_dim(n: usize) -> Result<()> {
    if n > MAX_DIRECT_DIM {
        return Err(GaError::DimensionTooLarge {
            requested: n,
            max: MAX_DIRECT_DIM,
        });
    }
    Ok(())
}

/// Parse a canonical blade label into its index in G_n.
///
/// ```
/// use gn_engine::nd::blade::parse_blade_label;
///
/// assert_eq!(parse_blade_label("1", 3).unwrap(), 0);
/// assert_eq!(parse_blade_label("e1e3", 3).unwrap(), 0b101);
/// assert!(parse_blade_label("e3e1", 3).is_err());
/// ```
pub fn parse_blade_label(label: &str, n: usize) -> Result<usize> {
    check_label_dim(n)?;
    if label == "1" {
        return Ok(0);
    }
    if label.is_empty() {
        return Err(GaError::format(label, "empty label"));
    }

    let mut mask = 0usize;
    let mut last = 0usize;
    let mut rest = label;
    while !rest.is_empty() {
        rest = rest
            .strip_prefix('e')
            .ok_or_else(|| GaError::format(label, "expected 'e' before each basis vector"))?;
        let digits = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        let (number, tail) = rest.split_at(digits);
        if number.is_empty() {
            return Err(GaError::format(label, "missing basis vector number"));
        }
        if number.starts_with('0') {
            return Err(GaError::format(label, format!("basis vector 'e{number}' is not canonical")));
        }
        let k: usize = number
            .parse()
            .map_err(|_| GaError::format(label, format!("basis vector 'e{number}' is out of range")))?;
        if k > n {
            return Err(GaError::format(
                label,
                format!("basis vector e{k} does not exist in G_{n}"),
            ));
        }
        if k <= last {
            return Err(GaError::format(
                label,
                "basis vectors must appear once each in increasing order",
            ));
        }
        mask |= 1 << (k - 1);
        last = k;
        rest = tail;
    }
    Ok(mask)
}

/// Canonical label of a blade index: `"1"`, `"e2"`, `"e1e2e3"`, ...
pub fn blade_label(index: usize) -> String {
    if index == 0 {
        return "1".to_string();
    }
    crate::nd::bits::set_bits(index)
        .into_iter()
        .map(|bit| format!("e{}", bit + 1))
        .collect()
}
