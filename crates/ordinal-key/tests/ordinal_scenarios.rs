mod common;

use ordinal_key::{DecodeError, EncodeOptions, OrdinalError, OrdinalKey};

#[test]
fn initial_after_between_roundtrip() {
    let a = OrdinalKey::initial();
    assert_eq!(a.digits(), &[0]);

    let b = OrdinalKey::after(&a);
    assert_eq!(b.digits(), &[1]);

    let m = OrdinalKey::between(&a, &b);
    assert!(a < m);
    assert!(m < b);

    let encoded = m.encode();
    let reencoded = OrdinalKey::decode(&encoded).unwrap().encode();
    assert_eq!(reencoded, encoded);
}

#[test]
fn after_after_initial_roundtrip() {
    let k = OrdinalKey::initial().after().after();
    assert_eq!(k.digits(), &[2]);
    assert_eq!(OrdinalKey::decode(&k.encode()).unwrap(), k);
}

#[test]
fn before_walks_toward_negative() {
    let mut k = OrdinalKey::initial();
    for expected in (-10..0).rev() {
        let next = k.before();
        assert!(next < k);
        assert_eq!(next.digits(), &[expected]);
        k = next;
    }
}

#[test]
fn repeated_insertion_at_front_of_gap() {
    // Keep inserting right after `lower`.
    let lower = OrdinalKey::from_digits(vec![3]).unwrap();
    let mut upper = OrdinalKey::from_digits(vec![4]).unwrap();
    let mut seen = vec![lower.clone(), upper.clone()];

    for _ in 0..100 {
        let m = OrdinalKey::between(&lower, &upper);
        assert!(lower < m && m < upper, "{lower} < {m} < {upper}");
        seen.push(m.clone());
        upper = m;
    }

    let mut sorted = seen.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), seen.len());
}

#[test]
fn repeated_insertion_at_back_of_gap() {
    // Keep inserting right before `upper`.
    let mut lower = OrdinalKey::from_digits(vec![3]).unwrap();
    let upper = OrdinalKey::from_digits(vec![4]).unwrap();

    for i in 0..100 {
        let m = OrdinalKey::between(&lower, &upper);
        assert!(lower < m && m < upper, "{lower} < {m} < {upper}");
        assert!(m.len() <= i + 2);
        lower = m;
    }
}

#[test]
fn list_reordering_never_renumbers() {
    // Simulate a list where items are inserted at arbitrary gaps.
    let mut keys = vec![OrdinalKey::initial()];
    for step in 0..60usize {
        let at = (step * 7) % (keys.len() + 1);
        let key = if at == 0 {
            keys[0].before()
        } else if at == keys.len() {
            keys[keys.len() - 1].after()
        } else {
            OrdinalKey::between(&keys[at - 1], &keys[at])
        };
        let snapshot = keys.clone();
        keys.insert(at, key);

        assert!(keys.windows(2).all(|w| w[0] < w[1]));
        for old in &snapshot {
            assert!(keys.contains(old));
        }
    }
}

#[test]
fn between_rejects_unordered_bounds() {
    let a = OrdinalKey::from_digits(vec![1, 2]).unwrap();
    let b = OrdinalKey::from_digits(vec![1]).unwrap();
    assert_eq!(
        OrdinalKey::try_between(&a, &b),
        Err(OrdinalError::InvalidBounds {
            lower: "(1, 2)".to_string(),
            upper: "(1)".to_string(),
        })
    );
}

#[test]
fn decode_failures_never_default() {
    for bad in ["", "   ", "[]", "[x]", "[1,", "{}", "\"[1]\"", "[1, null]", "[1, [2]]"] {
        let res = OrdinalKey::decode(bad);
        assert!(res.is_err(), "{bad:?} decoded to {res:?}");
    }
    assert_eq!(OrdinalKey::decode(""), Err(DecodeError::EmptyInput));
}

#[test]
fn pretty_and_compact_forms_agree() {
    let k = OrdinalKey::from_digits(vec![-1, 0, 7]).unwrap();
    let pretty = k.encode_with(EncodeOptions { pretty: true });
    assert_ne!(pretty, k.encode());
    assert_eq!(OrdinalKey::decode(&pretty).unwrap(), k);
}

#[test]
fn display_form() {
    let k = OrdinalKey::from_digits(vec![0, -2, 5]).unwrap();
    assert_eq!(format!("{k}"), "(0, -2, 5)");
}
