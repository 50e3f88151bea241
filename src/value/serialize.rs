// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Conversion of values into a transport-safe JSON tree.
//!
//! Containers are walked recursively. Scalars outside the primitive set are
//! handled in order: boxed numerics unwrap to their primitive, homogeneous
//! numeric arrays become plain sequences, anything else falls back to its
//! string rendering. Non-finite floats have no JSON form and are rendered as
//! strings as well, so the conversion is total.

use serde_json::{Map as JsonMap, Number};

use super::{NumericArray, Scalar, Value};
use crate::engine::ExecutionResult;

/// Convert a single value into its transport form.
pub fn to_transport(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(i) => serde_json::Value::from(*i),
        Value::Float(f) => float(*f),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::List(items) => serde_json::Value::Array(items.iter().map(to_transport).collect()),
        Value::Map(map) => serde_json::Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), to_transport(v)))
                .collect::<JsonMap<_, _>>(),
        ),
        Value::Scalar(scalar) => unbox(*scalar),
        Value::Array(array) => sequence(array),
        Value::Opaque(opaque) => serde_json::Value::String(opaque.render()),
    }
}

/// Convert a whole run's results into an object keyed by node id.
pub fn serialize_result(result: &ExecutionResult) -> serde_json::Value {
    serde_json::Value::Object(
        result
            .iter()
            .map(|(node_id, value)| (node_id.clone(), to_transport(value)))
            .collect::<JsonMap<_, _>>(),
    )
}

fn float(f: f64) -> serde_json::Value {
    match Number::from_f64(f) {
        Some(n) => serde_json::Value::Number(n),
        None => serde_json::Value::String(f.to_string()),
    }
}

fn unbox(scalar: Scalar) -> serde_json::Value {
    match scalar {
        Scalar::I32(i) => serde_json::Value::from(i),
        Scalar::U32(u) => serde_json::Value::from(u),
        Scalar::U64(u) => serde_json::Value::from(u),
        Scalar::F32(f) => float(f64::from(f)),
    }
}

fn sequence(array: &NumericArray) -> serde_json::Value {
    let items = match array {
        NumericArray::I64(v) => v.iter().map(|i| serde_json::Value::from(*i)).collect(),
        NumericArray::F32(v) => v.iter().map(|f| float(f64::from(*f))).collect(),
        NumericArray::F64(v) => v.iter().map(|f| float(*f)).collect(),
    };
    serde_json::Value::Array(items)
}
