use thiserror::Error;

use crate::sort_weight::WeightKind;

/// Failure to read an [`OrdinalKey`](crate::OrdinalKey) back from its persisted form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("encoded ordinal is empty")]
    EmptyInput,
    #[error("ordinal must have at least one digit")]
    EmptySequence,
    #[error("malformed ordinal encoding: {0}")]
    Malformed(String),
}

/// Failure to construct a new key relative to existing ones.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrdinalError {
    #[error("lower bound {lower} is not below upper bound {upper}")]
    InvalidBounds { lower: String, upper: String },
    #[error("ordinal digit overflow")]
    DigitOverflow,
}

/// Two sort weights of different variants were compared.
///
/// Ordering across variants is never meaningful, so this always indicates a
/// programming error at the call site.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot compare mismatched elements: {lhs_desc} ({lhs}) and {rhs_desc} ({rhs})")]
pub struct InvalidComparison {
    pub lhs: WeightKind,
    pub rhs: WeightKind,
    pub lhs_desc: String,
    pub rhs_desc: String,
}
