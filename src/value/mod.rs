// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Tagged value model flowing between units.
//!
//! Every unit consumes and produces a [`Value`]. Besides the JSON-like
//! primitives and containers, the variant carries the kinds of values an
//! inference or numeric stage tends to emit: boxed numeric scalars,
//! homogeneous numeric arrays, and opaque handles that can only be rendered
//! as text. The [`serialize`] module maps all of them onto a transport-safe
//! tree without ever failing.

pub mod serialize;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

pub use serialize::{serialize_result, to_transport};

/// String-keyed mapping of values. Used for structured unit outputs and fan-in inputs.
pub type Map = BTreeMap<String, Value>;

/// A node's declared configuration mapping.
pub type Params = Map;

/// A value produced or consumed by a unit.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(Map),
    /// Numeric scalar outside the primitive set, e.g. an `f32` score.
    Scalar(Scalar),
    /// Homogeneous numeric array, e.g. an embedding.
    Array(NumericArray),
    /// Anything else; only its textual rendering survives serialization.
    Opaque(Opaque),
}

/// Boxed numeric scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    I32(i32),
    U32(u32),
    U64(u64),
    F32(f32),
}

/// Homogeneous numeric array.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericArray {
    I64(Vec<i64>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

impl NumericArray {
    pub fn len(&self) -> usize {
        match self {
            NumericArray::I64(v) => v.len(),
            NumericArray::F32(v) => v.len(),
            NumericArray::F64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Display-only handle to a value the engine knows nothing about.
#[derive(Clone)]
pub struct Opaque {
    type_name: &'static str,
    inner: Arc<dyn fmt::Display + Send + Sync>,
}

impl Opaque {
    pub fn new<T>(inner: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Self {
            type_name: std::any::type_name::<T>(),
            inner: Arc::new(inner),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The wrapped value's rendering, or its type name when its `Display`
    /// implementation reports an error.
    pub fn render(&self) -> String {
        use std::fmt::Write;

        let mut rendered = String::new();
        match write!(rendered, "{}", self.inner) {
            Ok(()) => rendered,
            Err(_) => self.type_name.to_string(),
        }
    }
}

impl fmt::Display for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opaque")
            .field("type_name", &self.type_name)
            .field("rendered", &self.render())
            .finish()
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name && self.render() == other.render()
    }
}

impl Value {
    /// An empty structured value; what a start-of-branch unit receives.
    pub fn empty_map() -> Self {
        Value::Map(Map::new())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Numeric view of any integer, float or boxed scalar.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Scalar(Scalar::I32(i)) => Some(f64::from(*i)),
            Value::Scalar(Scalar::U32(u)) => Some(f64::from(*u)),
            Value::Scalar(Scalar::U64(u)) => Some(*u as f64),
            Value::Scalar(Scalar::F32(f)) => Some(f64::from(*f)),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Map lookup; `None` for non-map values.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|m| m.get(key))
    }

    /// Whether this is an empty map, empty list, empty string or null.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Map(m) => m.is_empty(),
            Value::Array(a) => a.is_empty(),
            _ => false,
        }
    }

    /// Textual rendering: strings as-is, everything else as compact JSON of
    /// its transport form.
    pub fn render(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Opaque(o) => o.render(),
            other => to_transport(other).to_string(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<usize> for Value {
    fn from(u: usize) -> Self {
        match i64::try_from(u) {
            Ok(i) => Value::Int(i),
            Err(_) => Value::Scalar(Scalar::U64(u as u64)),
        }
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<Map> for Value {
    fn from(m: Map) -> Self {
        Value::Map(m)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Scalar(Scalar::U64(u))
                } else {
                    // serde_json numbers are always representable as f64
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => {
                Value::Map(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

/// Build a [`Map`] from string keys, mostly for units assembling small outputs.
pub fn map_of<I, K, V>(entries: I) -> Value
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    Value::Map(
        entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect(),
    )
}
