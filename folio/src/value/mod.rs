//! Provides a dynamic value type abstraction.
//!
//! Template records are arbitrary JSON-shaped data.  This module gives them
//! a static shape: a [`Value`] is one of a handful of kinds (see
//! [`ValueKind`]) and the renderer's truthiness and stringification rules
//! are explicit functions over those kinds ([`Value::is_true`] and the
//! [`Display`](std::fmt::Display) implementation).
//!
//! # Basic Value Conversions
//!
//! Values are typically created via the [`From`] trait:
//!
//! ```
//! # use folio::value::Value;
//! let int_value = Value::from(42);
//! let none_value = Value::from(());
//! let true_value = Value::from(true);
//! let tools = Value::from(vec!["AE", "C4D"]);
//! ```
//!
//! Or via the [`FromIterator`] trait:
//!
//! ```
//! # use folio::value::Value;
//! // collection into a sequence
//! let value: Value = (1..10).into_iter().collect();
//!
//! // collection into a record
//! let value: Value = [("title", "Demo")].into_iter().collect();
//! ```
//!
//! # Serde Conversions
//!
//! Anything implementing [`Serialize`](serde::Serialize) can be turned into a
//! value with [`Value::from_serialize`].  This is what
//! [`Template::render`](crate::Template::render) does with its context.
//!
//! ```
//! # use folio::value::Value;
//! let value = Value::from_serialize(&[1, 2, 3]);
//! ```
//!
//! Values also implement [`Deserialize`](serde::Deserialize) so a data file
//! can be loaded straight into a record:
//!
//! ```
//! # use folio::value::Value;
//! let value: Value = serde_json::from_str(r#"{"title": "Demo"}"#).unwrap();
//! assert_eq!(value.get_attr("title").and_then(|x| x.as_str()), Some("Demo"));
//! ```
//!
//! # Memory Management
//!
//! Values are immutable objects which are internally reference counted which
//! means they can be copied relatively cheaply.
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use crate::utils::{write_js_number, JoinWith};

mod deserialize;
mod serialize;

#[cfg(test)]
mod tests;

/// The map type used for records.
#[cfg(not(feature = "preserve_order"))]
pub type ValueMap = BTreeMap<Arc<str>, Value>;

/// The map type used for records.
#[cfg(feature = "preserve_order")]
pub type ValueMap = indexmap::IndexMap<Arc<str>, Value>;

#[inline(always)]
pub(crate) fn value_map_with_capacity(capacity: usize) -> ValueMap {
    #[cfg(not(feature = "preserve_order"))]
    {
        let _ = capacity;
        ValueMap::new()
    }
    #[cfg(feature = "preserve_order")]
    {
        ValueMap::with_capacity(crate::utils::untrusted_size_hint(capacity))
    }
}

/// Describes the kind of value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValueKind {
    /// The value is the none singleton ([`()`])
    None,
    /// The value is a [`bool`]
    Bool,
    /// The value is a number of a supported type.
    Number,
    /// The value is a string.
    String,
    /// The value is an array of other values.
    Seq,
    /// The value is a key/value mapping.
    Map,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            ValueKind::None => "none",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Seq => "sequence",
            ValueKind::Map => "map",
        })
    }
}

#[derive(Clone)]
pub(crate) enum ValueRepr {
    None,
    Bool(bool),
    U64(u64),
    I64(i64),
    F64(f64),
    String(Arc<str>),
    Seq(Arc<Vec<Value>>),
    Map(Arc<ValueMap>),
}

impl fmt::Debug for ValueRepr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueRepr::None => f.write_str("none"),
            ValueRepr::Bool(val) => fmt::Debug::fmt(val, f),
            ValueRepr::U64(val) => fmt::Debug::fmt(val, f),
            ValueRepr::I64(val) => fmt::Debug::fmt(val, f),
            ValueRepr::F64(val) => fmt::Debug::fmt(val, f),
            ValueRepr::String(val) => fmt::Debug::fmt(val, f),
            ValueRepr::Seq(val) => f.debug_list().entries(val.iter()).finish(),
            ValueRepr::Map(val) => f.debug_map().entries(val.iter()).finish(),
        }
    }
}

/// Represents a dynamically typed value in the template engine.
#[derive(Clone)]
pub struct Value(pub(crate) ValueRepr);

impl Default for Value {
    fn default() -> Value {
        Value::NONE
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

/// Formats the value the way it appears in rendered output.
///
/// Integral floats lose their fraction (`3.0` prints as `3`), `none`
/// prints as nothing, sequences print their items separated by commas.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ValueRepr::None => Ok(()),
            ValueRepr::Bool(val) => val.fmt(f),
            ValueRepr::U64(val) => val.fmt(f),
            ValueRepr::I64(val) => val.fmt(f),
            ValueRepr::F64(val) => write_js_number(f, *val),
            ValueRepr::String(val) => f.write_str(val),
            ValueRepr::Seq(val) => write!(f, "{}", JoinWith(val.iter(), ",")),
            ValueRepr::Map(_) => f.write_str("[object]"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (ValueRepr::None, ValueRepr::None) => true,
            (ValueRepr::Bool(a), ValueRepr::Bool(b)) => a == b,
            (ValueRepr::String(a), ValueRepr::String(b)) => a == b,
            (ValueRepr::Seq(a), ValueRepr::Seq(b)) => a == b,
            (ValueRepr::Map(a), ValueRepr::Map(b)) => a == b,
            (a, b) => match (number_repr(a), number_repr(b)) {
                (Some(a), Some(b)) => a.partial_cmp(&b) == Some(Ordering::Equal),
                _ => false,
            },
        }
    }
}

enum Number {
    Int(i128),
    Float(f64),
}

fn number_repr(repr: &ValueRepr) -> Option<Number> {
    match *repr {
        ValueRepr::U64(val) => Some(Number::Int(val as i128)),
        ValueRepr::I64(val) => Some(Number::Int(val as i128)),
        ValueRepr::F64(val) => Some(Number::Float(val)),
        _ => None,
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.partial_cmp(b),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(b),
            (Number::Int(a), Number::Float(b)) => (*a as f64).partial_cmp(b),
            (Number::Float(a), Number::Int(b)) => a.partial_cmp(&(*b as f64)),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl Value {
    /// The `none` value.
    pub const NONE: Value = Value(ValueRepr::None);

    /// Creates a record value from a map.
    pub fn from_map(map: ValueMap) -> Value {
        Value(ValueRepr::Map(Arc::new(map)))
    }

    /// Returns the kind of the value.
    pub fn kind(&self) -> ValueKind {
        match self.0 {
            ValueRepr::None => ValueKind::None,
            ValueRepr::Bool(_) => ValueKind::Bool,
            ValueRepr::U64(_) | ValueRepr::I64(_) | ValueRepr::F64(_) => ValueKind::Number,
            ValueRepr::String(_) => ValueKind::String,
            ValueRepr::Seq(_) => ValueKind::Seq,
            ValueRepr::Map(_) => ValueKind::Map,
        }
    }

    /// Is this value considered true?
    ///
    /// `none`, `false`, zero, NaN, the empty string and the empty sequence
    /// are false.  Everything else, including an empty map, is true.
    pub fn is_true(&self) -> bool {
        match self.0 {
            ValueRepr::None => false,
            ValueRepr::Bool(val) => val,
            ValueRepr::U64(x) => x != 0,
            ValueRepr::I64(x) => x != 0,
            ValueRepr::F64(x) => x != 0.0 && !x.is_nan(),
            ValueRepr::String(ref x) => !x.is_empty(),
            ValueRepr::Seq(ref x) => !x.is_empty(),
            ValueRepr::Map(_) => true,
        }
    }

    /// Returns `true` if this value is `none`.
    pub fn is_none(&self) -> bool {
        matches!(self.0, ValueRepr::None)
    }

    /// Returns `true` if the value is a number.
    pub fn is_number(&self) -> bool {
        matches!(self.kind(), ValueKind::Number)
    }

    /// Returns `true` if the value can stand in for a plain `{{name}}` marker.
    ///
    /// Only strings and numbers qualify.
    pub fn is_printable(&self) -> bool {
        matches!(self.kind(), ValueKind::String | ValueKind::Number)
    }

    /// Returns `true` for values that are not containers.
    pub fn is_scalar(&self) -> bool {
        !matches!(self.kind(), ValueKind::Seq | ValueKind::Map)
    }

    /// If the value is a string, return it.
    pub fn as_str(&self) -> Option<&str> {
        match &self.0 {
            ValueRepr::String(ref s) => Some(s as &str),
            _ => None,
        }
    }

    /// If the value is a bool, return it.
    pub fn as_bool(&self) -> Option<bool> {
        match self.0 {
            ValueRepr::Bool(val) => Some(val),
            _ => None,
        }
    }

    /// If the value is an integer that fits an `i64`, return it.
    pub fn as_i64(&self) -> Option<i64> {
        match self.0 {
            ValueRepr::I64(val) => Some(val),
            ValueRepr::U64(val) => i64::try_from(val).ok(),
            _ => None,
        }
    }

    /// If the value is a number, return it as float.
    pub fn as_f64(&self) -> Option<f64> {
        match self.0 {
            ValueRepr::I64(val) => Some(val as f64),
            ValueRepr::U64(val) => Some(val as f64),
            ValueRepr::F64(val) => Some(val),
            _ => None,
        }
    }

    /// If the value is a sequence, return its items.
    pub fn as_slice(&self) -> Option<&[Value]> {
        match &self.0 {
            ValueRepr::Seq(ref items) => Some(&items[..]),
            _ => None,
        }
    }

    /// If the value is a record, return its map.
    pub fn as_map(&self) -> Option<&ValueMap> {
        match &self.0 {
            ValueRepr::Map(ref map) => Some(map),
            _ => None,
        }
    }

    /// Returns the length of a string, sequence or map.
    pub fn len(&self) -> Option<usize> {
        match &self.0 {
            ValueRepr::String(ref s) => Some(s.chars().count()),
            ValueRepr::Seq(ref items) => Some(items.len()),
            ValueRepr::Map(ref map) => Some(map.len()),
            _ => None,
        }
    }

    /// Looks up a key of a record.
    ///
    /// Values other than records have no attributes.
    pub fn get_attr(&self, key: &str) -> Option<&Value> {
        match &self.0 {
            ValueRepr::Map(ref map) => map.get(key),
            _ => None,
        }
    }

    /// Looks up an item of a sequence by index.
    pub fn get_item_by_index(&self, idx: usize) -> Option<&Value> {
        match &self.0 {
            ValueRepr::Seq(ref items) => items.get(idx),
            _ => None,
        }
    }

    /// Looks up a field of a loop item.
    ///
    /// Records are looked up by key, sequences by a numeric field name.
    pub(crate) fn get_field(&self, name: &str) -> Option<&Value> {
        match &self.0 {
            ValueRepr::Map(_) => self.get_attr(name),
            ValueRepr::Seq(_) => name
                .parse::<usize>()
                .ok()
                .and_then(|idx| self.get_item_by_index(idx)),
            _ => None,
        }
    }

    /// Returns a new record with the keys of `other` layered over this one.
    ///
    /// If this value is not a record, the result only holds the keys of
    /// `other`.  Non-record values of `other` are ignored.
    pub fn merge(&self, other: &Value) -> Value {
        let mut rv = self.as_map().cloned().unwrap_or_default();
        if let Some(map) = other.as_map() {
            rv.extend(map.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        Value::from_map(rv)
    }
}

macro_rules! value_from {
    ($src:ty, $dst:ident) => {
        impl From<$src> for Value {
            #[inline(always)]
            fn from(val: $src) -> Self {
                Value(ValueRepr::$dst(val as _))
            }
        }
    };
}

value_from!(bool, Bool);
value_from!(u8, U64);
value_from!(u16, U64);
value_from!(u32, U64);
value_from!(u64, U64);
value_from!(usize, U64);
value_from!(i8, I64);
value_from!(i16, I64);
value_from!(i32, I64);
value_from!(i64, I64);
value_from!(isize, I64);
value_from!(f32, F64);
value_from!(f64, F64);

impl From<()> for Value {
    #[inline(always)]
    fn from(_: ()) -> Self {
        Value::NONE
    }
}

impl<'a> From<&'a str> for Value {
    #[inline(always)]
    fn from(val: &'a str) -> Self {
        Value(ValueRepr::String(Arc::from(val)))
    }
}

impl From<String> for Value {
    #[inline(always)]
    fn from(val: String) -> Self {
        Value(ValueRepr::String(Arc::from(val)))
    }
}

impl From<Arc<str>> for Value {
    #[inline(always)]
    fn from(val: Arc<str>) -> Self {
        Value(ValueRepr::String(val))
    }
}

impl From<char> for Value {
    #[inline(always)]
    fn from(val: char) -> Self {
        Value::from(val.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(val: Option<T>) -> Self {
        match val {
            Some(val) => val.into(),
            None => Value::NONE,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(val: Vec<T>) -> Self {
        val.into_iter().collect()
    }
}

impl<K: Into<Arc<str>>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(val: BTreeMap<K, V>) -> Self {
        val.into_iter().collect()
    }
}

impl<K: Into<Arc<str>>, V: Into<Value>> From<HashMap<K, V>> for Value {
    fn from(val: HashMap<K, V>) -> Self {
        val.into_iter().collect()
    }
}

impl<V: Into<Value>> FromIterator<V> for Value {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Value(ValueRepr::Seq(Arc::new(
            iter.into_iter().map(Into::into).collect(),
        )))
    }
}

impl<K: Into<Arc<str>>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Value::from_map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
