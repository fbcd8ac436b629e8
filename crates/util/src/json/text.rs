use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Output formatting for [`to_json_string`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputFormatting {
    /// Emit indented, multi-line JSON. Default is compact.
    pub pretty: bool,
}

impl OutputFormatting {
    /// Compact single-line output.
    pub const COMPACT: Self = Self { pretty: false };

    /// Indented multi-line output.
    pub const PRETTY: Self = Self { pretty: true };
}

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("input is empty")]
    EmptyInput,
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// Serialize a value into a JSON string.
///
/// # Examples
///
/// ```
/// use ordinal_key_util::json::{to_json_string, OutputFormatting};
///
/// let text = to_json_string(&vec![1, 2, 3], OutputFormatting::default()).unwrap();
/// assert_eq!(text, "[1,2,3]");
/// ```
pub fn to_json_string<T>(value: &T, formatting: OutputFormatting) -> Result<String, JsonError>
where
    T: Serialize + ?Sized,
{
    let text = if formatting.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

/// Deserialize a value from a JSON string.
///
/// Blank input is rejected up front with [`JsonError::EmptyInput`] so callers
/// can tell "nothing was stored" apart from "something malformed was stored".
///
/// # Examples
///
/// ```
/// use ordinal_key_util::json::from_json_str;
///
/// let digits: Vec<i64> = from_json_str("[0, -1, 7]").unwrap();
/// assert_eq!(digits, vec![0, -1, 7]);
/// assert!(from_json_str::<Vec<i64>>("").is_err());
/// ```
pub fn from_json_str<T>(text: &str) -> Result<T, JsonError>
where
    T: DeserializeOwned,
{
    if text.trim().is_empty() {
        return Err(JsonError::EmptyInput);
    }
    Ok(serde_json::from_str(text)?)
}
