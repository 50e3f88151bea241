// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::errors::UnitError;
use crate::traits::Unit;
use crate::value::{to_transport, Params, Value};

/// Renders its input as a JSON string, pretty-printed unless `pretty` is
/// false (or `indent` is `0`/`false`/null).
pub struct JsonOutput;

fn pretty(params: &Params) -> bool {
    if let Some(pretty) = params.get("pretty").and_then(Value::as_bool) {
        return pretty;
    }
    match params.get("indent") {
        None => true,
        Some(Value::Null) | Some(Value::Bool(false)) | Some(Value::Int(0)) => false,
        Some(_) => true,
    }
}

#[async_trait]
impl Unit for JsonOutput {
    async fn invoke(&self, input: Value, params: &Params) -> Result<Value, UnitError> {
        let transport = to_transport(&input);
        let rendered = if pretty(params) {
            serde_json::to_string_pretty(&transport)
        } else {
            serde_json::to_string(&transport)
        }
        .map_err(|e| UnitError::failed(self.name(), e.to_string()))?;

        Ok(Value::from(rendered))
    }

    fn name(&self) -> &str {
        "json_output"
    }
}
