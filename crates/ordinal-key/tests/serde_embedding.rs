mod common;

use ordinal_key::OrdinalKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Row {
    title: String,
    position: OrdinalKey,
}

#[test]
fn key_embeds_as_bare_array() {
    let row = Row {
        title: "groceries".to_string(),
        position: OrdinalKey::from_digits(vec![0, 1]).unwrap(),
    };
    let text = serde_json::to_string(&row).unwrap();
    assert_eq!(text, r#"{"title":"groceries","position":[0,1]}"#);

    let back: Row = serde_json::from_str(&text).unwrap();
    assert_eq!(back, row);
}

#[test]
fn empty_embedded_key_is_rejected() {
    let res = serde_json::from_str::<Row>(r#"{"title":"x","position":[]}"#);
    let err = res.unwrap_err().to_string();
    assert!(err.contains("at least one digit"), "{err}");
}
