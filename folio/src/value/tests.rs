use std::collections::BTreeMap;

use crate::value::*;

use similar_asserts::assert_eq;

#[test]
fn test_truthiness() {
    assert!(!Value::NONE.is_true());
    assert!(!Value::from(false).is_true());
    assert!(!Value::from(0).is_true());
    assert!(!Value::from(0.0).is_true());
    assert!(!Value::from(f64::NAN).is_true());
    assert!(!Value::from("").is_true());
    assert!(!Value::from(Vec::<Value>::new()).is_true());

    assert!(Value::from(true).is_true());
    assert!(Value::from(-1).is_true());
    assert!(Value::from("0").is_true());
    assert!(Value::from(vec![0]).is_true());
    assert!(Value::from_map(ValueMap::default()).is_true());
}

#[test]
fn test_display() {
    assert_eq!(Value::NONE.to_string(), "");
    assert_eq!(Value::from(true).to_string(), "true");
    assert_eq!(Value::from(42u64).to_string(), "42");
    assert_eq!(Value::from(-7).to_string(), "-7");
    assert_eq!(Value::from(2.0).to_string(), "2");
    assert_eq!(Value::from(2.5).to_string(), "2.5");
    assert_eq!(Value::from("AE").to_string(), "AE");
    assert_eq!(Value::from(vec!["AE", "C4D"]).to_string(), "AE,C4D");
    assert_eq!(
        Value::from(vec![Value::from(1), Value::NONE, Value::from(3)]).to_string(),
        "1,,3"
    );
    let record: Value = [("a", 1)].into_iter().collect();
    assert_eq!(record.to_string(), "[object]");
}

#[test]
fn test_kinds() {
    assert_eq!(Value::NONE.kind(), ValueKind::None);
    assert_eq!(Value::from(1u8).kind(), ValueKind::Number);
    assert_eq!(Value::from(1.5f32).kind(), ValueKind::Number);
    assert_eq!(Value::from('x').kind(), ValueKind::String);
    assert_eq!(Value::from(vec![1]).kind(), ValueKind::Seq);
    assert_eq!(Value::from(Some("x")).kind(), ValueKind::String);
    assert_eq!(Value::from(None::<&str>).kind(), ValueKind::None);
    assert_eq!(ValueKind::Seq.to_string(), "sequence");
}

#[test]
fn test_printable() {
    assert!(Value::from("x").is_printable());
    assert!(Value::from(1).is_printable());
    assert!(!Value::from(true).is_printable());
    assert!(!Value::NONE.is_printable());
    assert!(!Value::from(vec!["x"]).is_printable());
}

#[test]
fn test_number_equality() {
    assert_eq!(Value::from(1u64), Value::from(1i64));
    assert_eq!(Value::from(1), Value::from(1.0));
    assert_ne!(Value::from(1), Value::from("1"));
    assert_ne!(Value::from(f64::NAN), Value::from(f64::NAN));
}

#[test]
fn test_field_lookup() {
    let mut map = BTreeMap::new();
    map.insert("label", Value::from("a"));
    let record = Value::from(map);
    assert_eq!(record.get_field("label"), Some(&Value::from("a")));
    assert_eq!(record.get_field("missing"), None);

    let seq = Value::from(vec!["x", "y"]);
    assert_eq!(seq.get_field("1"), Some(&Value::from("y")));
    assert_eq!(seq.get_field("2"), None);
    assert_eq!(seq.get_field("label"), None);
    assert_eq!(seq.get_attr("0"), None);

    assert_eq!(Value::from("label").get_field("label"), None);
}

#[test]
fn test_merge() {
    let base: Value = [("title", "Demo"), ("category", "vfx")].into_iter().collect();
    let extra: Value = [("category", "Visual Effects")].into_iter().collect();
    let merged = base.merge(&extra);
    assert_eq!(merged.get_attr("title"), Some(&Value::from("Demo")));
    assert_eq!(merged.get_attr("category"), Some(&Value::from("Visual Effects")));
    assert_eq!(Value::NONE.merge(&extra).len(), Some(1));
}

#[test]
fn test_serialize_roundtrip_json() {
    let value: Value = serde_json::from_str(
        r#"{"id": 3, "tools": ["AE", "C4D"], "visible": true, "ratio": 1.5, "poster": null}"#,
    )
    .unwrap();
    assert_eq!(value.get_attr("id").and_then(|x| x.as_i64()), Some(3));
    assert_eq!(value.get_attr("tools").and_then(|x| x.len()), Some(2));
    assert_eq!(value.get_attr("poster"), Some(&Value::NONE));

    let back = serde_json::to_value(&value).unwrap();
    assert_eq!(
        back,
        serde_json::json!({"id": 3, "tools": ["AE", "C4D"], "visible": true, "ratio": 1.5, "poster": null})
    );
}

#[test]
fn test_from_serialize() {
    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Item {
        display_title: &'static str,
        year: u32,
        kind: Kind,
    }

    #[derive(serde::Serialize)]
    enum Kind {
        Vfx,
        Other(u8),
    }

    let value = Value::from_serialize(&vec![
        Item {
            display_title: "Neon",
            year: 2023,
            kind: Kind::Vfx,
        },
        Item {
            display_title: "Drift",
            year: 2024,
            kind: Kind::Other(2),
        },
    ]);
    let items = value.as_slice().unwrap();
    assert_eq!(items[0].get_attr("displayTitle"), Some(&Value::from("Neon")));
    assert_eq!(items[0].get_attr("kind"), Some(&Value::from("Vfx")));
    assert_eq!(
        items[1].get_attr("kind").and_then(|x| x.get_attr("Other")),
        Some(&Value::from(2))
    );
}

#[test]
fn test_serialize_keys() {
    let mut map = BTreeMap::new();
    map.insert(1, "one");
    map.insert(2, "two");
    let value = Value::from_serialize(&map);
    assert_eq!(value.get_attr("2"), Some(&Value::from("two")));

    let mut bad = BTreeMap::new();
    bad.insert((1, 2), "pair");
    let err = Value::try_from_serialize(&bad).unwrap_err();
    assert_eq!(err.kind(), crate::ErrorKind::NonKey);
    assert!(Value::from_serialize(&bad).is_none());
}
