//! Persisted textual form of [`OrdinalKey`].
//!
//! A key is stored as a JSON array of its digits, e.g. `[0,1]`.

use std::str::FromStr;

use ordinal_key_util::json::{from_json_str, to_json_string, JsonError, OutputFormatting};

use crate::error::DecodeError;
use crate::ordinal::OrdinalKey;

/// Options for [`OrdinalKey::encode_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Indent the digit array over multiple lines. Default is `false`.
    pub pretty: bool,
}

impl From<EncodeOptions> for OutputFormatting {
    fn from(options: EncodeOptions) -> Self {
        OutputFormatting {
            pretty: options.pretty,
        }
    }
}

impl OrdinalKey {
    /// Compact persisted form of this key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordinal_key::OrdinalKey;
    ///
    /// let k = OrdinalKey::initial().after().after();
    /// assert_eq!(k.encode(), "[2]");
    /// assert_eq!(OrdinalKey::decode(&k.encode()).unwrap(), k);
    /// ```
    pub fn encode(&self) -> String {
        self.encode_with(EncodeOptions::default())
    }

    pub fn encode_with(&self, options: EncodeOptions) -> String {
        match to_json_string(self.digits(), options.into()) {
            Ok(text) => text,
            // A slice of i64 always serializes.
            Err(err) => unreachable!("ordinal digits failed to serialize: {err}"),
        }
    }

    /// Parse a key from its persisted form.
    ///
    /// Whitespace inside the array is accepted, so both compact and pretty
    /// encodings decode to the same key.
    pub fn decode(text: &str) -> Result<Self, DecodeError> {
        let digits: Vec<i64> = from_json_str(text).map_err(|err| {
            let err = match err {
                JsonError::EmptyInput => DecodeError::EmptyInput,
                JsonError::Serde(e) => DecodeError::Malformed(e.to_string()),
            };
            tracing::debug!(len = text.len(), error = %err, "rejected encoded ordinal");
            err
        })?;
        Self::from_digits(digits).inspect_err(|err| {
            tracing::debug!(len = text.len(), error = %err, "rejected encoded ordinal");
        })
    }
}

impl FromStr for OrdinalKey {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}
