//! Heterogeneous sort weights.
//!
//! A [`SortWeight`] wraps one of several value domains so records keyed by
//! different kinds of value can share one comparison protocol. Weights are
//! only ever ordered against weights of the same variant; lists compare
//! element by element under the same rule. Comparing mismatched variants is a
//! caller bug: the `try_*` methods report it as [`InvalidComparison`], and the
//! `==` / `<` operators panic.

use std::cmp::Ordering;
use std::fmt;

use ordinal_key_util::sort::try_insertion_sort_by;

use crate::error::InvalidComparison;
use crate::ordinal::OrdinalKey;

#[derive(Debug, Clone)]
pub enum SortWeight {
    Int(i64),
    Double(f64),
    Text(String),
    Ordinal(OrdinalKey),
    List(Vec<SortWeight>),
}

/// Variant tag of a [`SortWeight`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightKind {
    Int,
    Double,
    Text,
    Ordinal,
    List,
}

impl fmt::Display for WeightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WeightKind::Int => "int",
            WeightKind::Double => "double",
            WeightKind::Text => "text",
            WeightKind::Ordinal => "ordinal",
            WeightKind::List => "list",
        };
        f.write_str(name)
    }
}

impl SortWeight {
    pub fn from_int(value: i64) -> Self {
        SortWeight::Int(value)
    }

    pub fn from_double(value: f64) -> Self {
        SortWeight::Double(value)
    }

    pub fn from_text(value: impl Into<String>) -> Self {
        SortWeight::Text(value.into())
    }

    pub fn from_ordinal(value: OrdinalKey) -> Self {
        SortWeight::Ordinal(value)
    }

    pub fn from_list(items: Vec<SortWeight>) -> Self {
        SortWeight::List(items)
    }

    pub fn kind(&self) -> WeightKind {
        match self {
            SortWeight::Int(_) => WeightKind::Int,
            SortWeight::Double(_) => WeightKind::Double,
            SortWeight::Text(_) => WeightKind::Text,
            SortWeight::Ordinal(_) => WeightKind::Ordinal,
            SortWeight::List(_) => WeightKind::List,
        }
    }

    /// Payload equality for two weights of the same variant.
    pub fn try_eq(&self, other: &Self) -> Result<bool, InvalidComparison> {
        match (self, other) {
            (SortWeight::Int(a), SortWeight::Int(b)) => Ok(a == b),
            (SortWeight::Double(a), SortWeight::Double(b)) => Ok(a == b),
            (SortWeight::Text(a), SortWeight::Text(b)) => Ok(a == b),
            (SortWeight::Ordinal(a), SortWeight::Ordinal(b)) => Ok(a == b),
            (SortWeight::List(a), SortWeight::List(b)) => {
                if a.len() != b.len() {
                    return Ok(false);
                }
                for (x, y) in a.iter().zip(b) {
                    if !x.try_eq(y)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            _ => Err(self.mismatch(other)),
        }
    }

    /// Natural ordering for two weights of the same variant.
    ///
    /// Returns `Ok(None)` when two doubles are unordered (NaN). Lists step past
    /// an unordered element pair just as they do an equal one, so a later pair
    /// still decides the order or reports a mismatch.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use ordinal_key::SortWeight;
    ///
    /// let a = SortWeight::from_list(vec![1i64.into(), 2i64.into()]);
    /// let b = SortWeight::from_list(vec![1i64.into(), 3i64.into()]);
    /// assert_eq!(a.try_cmp(&b).unwrap(), Some(Ordering::Less));
    ///
    /// let text = SortWeight::from_text("1");
    /// assert!(text.try_cmp(&SortWeight::from_int(1)).is_err());
    /// ```
    pub fn try_cmp(&self, other: &Self) -> Result<Option<Ordering>, InvalidComparison> {
        match (self, other) {
            (SortWeight::Int(a), SortWeight::Int(b)) => Ok(Some(a.cmp(b))),
            (SortWeight::Double(a), SortWeight::Double(b)) => Ok(a.partial_cmp(b)),
            (SortWeight::Text(a), SortWeight::Text(b)) => Ok(Some(a.cmp(b))),
            (SortWeight::Ordinal(a), SortWeight::Ordinal(b)) => Ok(Some(a.cmp(b))),
            (SortWeight::List(a), SortWeight::List(b)) => {
                for (x, y) in a.iter().zip(b) {
                    match x.try_cmp(y)? {
                        Some(Ordering::Equal) | None => continue,
                        decided => return Ok(decided),
                    }
                }
                Ok(Some(a.len().cmp(&b.len())))
            }
            _ => Err(self.mismatch(other)),
        }
    }

    pub fn try_lt(&self, other: &Self) -> Result<bool, InvalidComparison> {
        Ok(self.try_cmp(other)? == Some(Ordering::Less))
    }

    fn mismatch(&self, other: &Self) -> InvalidComparison {
        InvalidComparison {
            lhs: self.kind(),
            rhs: other.kind(),
            lhs_desc: self.to_string(),
            rhs_desc: other.to_string(),
        }
    }
}

fn fail_loud(err: InvalidComparison) -> ! {
    tracing::error!(lhs = %err.lhs, rhs = %err.rhs, "{err}");
    panic!("{err}");
}

/// # Panics
///
/// Panics when the two weights hold different variants.
impl PartialEq for SortWeight {
    fn eq(&self, other: &Self) -> bool {
        match self.try_eq(other) {
            Ok(equal) => equal,
            Err(err) => fail_loud(err),
        }
    }
}

/// # Panics
///
/// Panics when the two weights hold different variants.
impl PartialOrd for SortWeight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.try_cmp(other) {
            Ok(ordering) => ordering,
            Err(err) => fail_loud(err),
        }
    }
}

impl fmt::Display for SortWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortWeight::Int(i) => write!(f, "{i}"),
            SortWeight::Double(d) => write!(f, "{d:?}"),
            SortWeight::Text(s) => write!(f, "\"{s}\""),
            SortWeight::Ordinal(o) => write!(f, "{o}"),
            SortWeight::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl From<i64> for SortWeight {
    fn from(value: i64) -> Self {
        SortWeight::Int(value)
    }
}

impl From<f64> for SortWeight {
    fn from(value: f64) -> Self {
        SortWeight::Double(value)
    }
}

impl From<&str> for SortWeight {
    fn from(value: &str) -> Self {
        SortWeight::Text(value.to_string())
    }
}

impl From<String> for SortWeight {
    fn from(value: String) -> Self {
        SortWeight::Text(value)
    }
}

impl From<OrdinalKey> for SortWeight {
    fn from(value: OrdinalKey) -> Self {
        SortWeight::Ordinal(value)
    }
}

impl From<Vec<SortWeight>> for SortWeight {
    fn from(items: Vec<SortWeight>) -> Self {
        SortWeight::List(items)
    }
}

/// Stable in-place sort of same-variant weights.
///
/// Unordered pairs (NaN doubles) are left where they are. The first
/// mismatched pair aborts the sort and is returned instead of panicking.
///
/// # Examples
///
/// ```
/// use ordinal_key::{sort_weights, SortWeight};
///
/// let mut weights = vec![SortWeight::from_text("b"), SortWeight::from_text("a")];
/// sort_weights(&mut weights).unwrap();
/// assert_eq!(weights[0].to_string(), "\"a\"");
///
/// let mut mixed = vec![SortWeight::from_text("b"), SortWeight::from_int(1)];
/// assert!(sort_weights(&mut mixed).is_err());
/// ```
pub fn sort_weights(weights: &mut [SortWeight]) -> Result<(), InvalidComparison> {
    try_insertion_sort_by(weights, |a, b| {
        Ok(a.try_cmp(b)?.unwrap_or(Ordering::Equal))
    })
}
