//! Dense order-maintenance keys.
//!
//! An [`OrdinalKey`] is a non-empty sequence of signed digits, ordered
//! lexicographically with a strict prefix sorting first. New keys can always
//! be placed before, after, or between existing keys without touching them,
//! at the cost of keys growing by at most one digit per insertion.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, OrdinalError};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<i64>")]
pub struct OrdinalKey {
    digits: Vec<i64>,
}

impl OrdinalKey {
    /// The canonical starting position, `(0)`.
    pub fn initial() -> Self {
        Self { digits: vec![0] }
    }

    /// Build a key from raw digits, most significant first.
    pub fn from_digits(digits: Vec<i64>) -> Result<Self, DecodeError> {
        if digits.is_empty() {
            return Err(DecodeError::EmptySequence);
        }
        Ok(Self { digits })
    }

    pub fn digits(&self) -> &[i64] {
        &self.digits
    }

    pub fn into_digits(self) -> Vec<i64> {
        self.digits
    }

    /// Number of digits. Never zero.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always `false`: a key has at least one digit.
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn leading_digit(&self) -> i64 {
        self.digits[0]
    }

    /// A single-digit key one step below this key's leading digit.
    ///
    /// # Panics
    ///
    /// Panics if the leading digit is `i64::MIN`. Use [`try_before`](Self::try_before)
    /// to handle that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordinal_key::OrdinalKey;
    ///
    /// let k = OrdinalKey::from_digits(vec![3, 7]).unwrap();
    /// let b = OrdinalKey::before(&k);
    /// assert_eq!(b.digits(), &[2]);
    /// assert!(b < k);
    /// ```
    pub fn before(&self) -> Self {
        match self.try_before() {
            Ok(key) => key,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_before(&self) -> Result<Self, OrdinalError> {
        let digit = self
            .leading_digit()
            .checked_sub(1)
            .ok_or(OrdinalError::DigitOverflow)?;
        Ok(Self { digits: vec![digit] })
    }

    /// A single-digit key one step above this key's leading digit.
    ///
    /// # Panics
    ///
    /// Panics if the leading digit is `i64::MAX`.
    pub fn after(&self) -> Self {
        match self.try_after() {
            Ok(key) => key,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_after(&self) -> Result<Self, OrdinalError> {
        let digit = self
            .leading_digit()
            .checked_add(1)
            .ok_or(OrdinalError::DigitOverflow)?;
        Ok(Self { digits: vec![digit] })
    }

    /// A key strictly between `lower` and `upper`.
    ///
    /// The longer bound is reused with its last digit nudged toward the other
    /// bound; for equal lengths a trailing `1` is appended to `lower`. Other
    /// keys never need to be renumbered.
    ///
    /// # Panics
    ///
    /// Panics unless `lower < upper`, or on digit overflow. See
    /// [`try_between`](Self::try_between) for the fallible form.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordinal_key::OrdinalKey;
    ///
    /// let a = OrdinalKey::initial();
    /// let b = a.after();
    /// let m = OrdinalKey::between(&a, &b);
    /// assert_eq!(m.digits(), &[0, 1]);
    /// assert!(a < m && m < b);
    /// ```
    pub fn between(lower: &Self, upper: &Self) -> Self {
        match Self::try_between(lower, upper) {
            Ok(key) => key,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_between(lower: &Self, upper: &Self) -> Result<Self, OrdinalError> {
        if lower >= upper {
            return Err(OrdinalError::InvalidBounds {
                lower: lower.to_string(),
                upper: upper.to_string(),
            });
        }

        let (len1, len2) = (lower.len(), upper.len());
        let digits = if len1 > len2 {
            tracing::trace!(%lower, %upper, "between: bumping tail of lower");
            Self::with_last(&lower.digits, i64::checked_add)?
        } else if len1 < len2 {
            tracing::trace!(%lower, %upper, "between: dropping tail of upper");
            Self::with_last(&upper.digits, i64::checked_sub)?
        } else {
            tracing::trace!(%lower, %upper, "between: extending lower");
            let mut digits = Vec::with_capacity(len1 + 1);
            digits.extend_from_slice(&lower.digits);
            digits.push(1);
            digits
        };

        Ok(Self { digits })
    }

    fn with_last(
        digits: &[i64],
        step: fn(i64, i64) -> Option<i64>,
    ) -> Result<Vec<i64>, OrdinalError> {
        let mut out = digits.to_vec();
        if let Some(last) = out.last_mut() {
            *last = step(*last, 1).ok_or(OrdinalError::DigitOverflow)?;
        }
        Ok(out)
    }
}

impl Default for OrdinalKey {
    fn default() -> Self {
        Self::initial()
    }
}

impl TryFrom<Vec<i64>> for OrdinalKey {
    type Error = DecodeError;

    fn try_from(digits: Vec<i64>) -> Result<Self, Self::Error> {
        Self::from_digits(digits)
    }
}

impl From<OrdinalKey> for Vec<i64> {
    fn from(key: OrdinalKey) -> Self {
        key.digits
    }
}

impl fmt::Display for OrdinalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, digit) in self.digits.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{digit}")?;
        }
        f.write_str(")")
    }
}
