#![no_main]
use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use serde::Serialize;

#[derive(Debug, Serialize, Arbitrary)]
#[serde(untagged)]
enum Value {
    None,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

fuzz_target!(|data: (&str, BTreeMap<String, Value>)| {
    let (source, record) = data;

    let offset = folio::machinery::tokenize(source).fold(0, |offset, (_, span)| {
        assert_eq!(span.start_offset, offset);
        span.end_offset
    });
    assert_eq!(offset, source.len());

    let rv = folio::render(source, &record);
    if !source.contains("{{") {
        assert_eq!(rv, source);
    }
});
