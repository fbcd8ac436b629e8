//! Order-maintenance keys and sort weights.
//!
//! [`OrdinalKey`] assigns each item in a list a position that never has to be
//! renumbered: a fresh key can always be minted before, after, or between
//! existing keys. [`SortWeight`] lets integers, doubles, text, ordinal keys and
//! nested lists of weights share one comparison protocol, as long as only
//! weights of the same variant are compared.
//!
//! # Example
//!
//! ```
//! use ordinal_key::{OrdinalKey, SortWeight};
//!
//! let first = OrdinalKey::initial();
//! let last = first.after();
//! let middle = OrdinalKey::between(&first, &last);
//! assert!(first < middle && middle < last);
//!
//! // Persist and restore.
//! let stored = middle.encode();
//! assert_eq!(stored, "[0,1]");
//! assert_eq!(OrdinalKey::decode(&stored).unwrap(), middle);
//!
//! // Weights of the same variant compare by payload.
//! assert!(SortWeight::from(first) < SortWeight::from(middle));
//! ```

pub mod codec;
pub mod error;
pub mod ordinal;
pub mod sort_weight;

pub use codec::EncodeOptions;
pub use error::{DecodeError, InvalidComparison, OrdinalError};
pub use ordinal::OrdinalKey;
pub use sort_weight::{sort_weights, SortWeight, WeightKind};
