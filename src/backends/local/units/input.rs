// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Input units: turn params (or an upstream value) into a normalized shape
//! at the start of a branch.

use async_trait::async_trait;

use crate::backends::local::text::{extract_text, param_text};
use crate::errors::UnitError;
use crate::traits::Unit;
use crate::value::{map_of, Params, Value};

/// `{text}` from a string input, a map's `text`, or the `text` param.
pub struct PlainTextInput;

#[async_trait]
impl Unit for PlainTextInput {
    async fn invoke(&self, input: Value, params: &Params) -> Result<Value, UnitError> {
        Ok(map_of([("text", extract_text(&input, params))]))
    }

    fn name(&self) -> &str {
        "plain_text"
    }
}

/// `{question, context}` from a non-empty map input, otherwise from params.
pub struct QaInput;

#[async_trait]
impl Unit for QaInput {
    async fn invoke(&self, input: Value, params: &Params) -> Result<Value, UnitError> {
        let field = |key: &str| match &input {
            Value::Map(map) if !map.is_empty() => map.get(key).map(Value::render),
            _ => param_text(params, key),
        };

        Ok(map_of([
            ("question", field("question").unwrap_or_default()),
            ("context", field("context").unwrap_or_default()),
        ]))
    }

    fn name(&self) -> &str {
        "qa_input"
    }
}

/// `{text, labels}` for zero-shot classification.
///
/// Labels come from the input map when it has them, otherwise from params.
/// A comma-separated string is split and trimmed; any other non-list value
/// becomes a single label.
pub struct ZeroShotInput;

fn normalize_labels(labels: Option<&Value>) -> Value {
    match labels {
        None => Value::List(Vec::new()),
        Some(Value::String(joined)) => Value::List(
            joined
                .split(',')
                .map(|label| Value::from(label.trim()))
                .collect(),
        ),
        Some(list @ Value::List(_)) => list.clone(),
        Some(other) => Value::List(vec![Value::from(other.render())]),
    }
}

#[async_trait]
impl Unit for ZeroShotInput {
    async fn invoke(&self, input: Value, params: &Params) -> Result<Value, UnitError> {
        let text = extract_text(&input, params);
        let labels = normalize_labels(input.get("labels").or_else(|| params.get("labels")));

        Ok(map_of([("text", Value::from(text)), ("labels", labels)]))
    }

    fn name(&self) -> &str {
        "zero_shot_input"
    }
}

/// Returns the `text` param as given, or the input when there is none.
pub struct Echo;

#[async_trait]
impl Unit for Echo {
    async fn invoke(&self, input: Value, params: &Params) -> Result<Value, UnitError> {
        Ok(params.get("text").cloned().unwrap_or(input))
    }

    fn name(&self) -> &str {
        "echo"
    }
}
