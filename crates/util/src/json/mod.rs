//! JSON text encoding utilities.
//!
//! Thin, option-driven wrappers over `serde_json` used wherever a value needs
//! a persisted textual form.

mod text;

pub use text::{from_json_str, to_json_string, JsonError, OutputFormatting};
