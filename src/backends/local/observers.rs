// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Built-in observers. Both hand the inner unit's value or failure back
//! untouched and only add a log line.

use std::time::Instant;

use async_trait::async_trait;

use crate::backends::local::text::count_tokens;
use crate::errors::UnitError;
use crate::observability::messages::{unit::*, StructuredLog};
use crate::traits::{Observer, Unit};
use crate::value::{to_transport, Params, Value};

/// Logs how long the inner unit took.
pub struct RuntimeLogger;

#[async_trait]
impl Observer for RuntimeLogger {
    async fn observe(
        &self,
        input: Value,
        inner: &dyn Unit,
        params: &Params,
    ) -> Result<Value, UnitError> {
        let start = Instant::now();
        let result = inner.invoke(input, params).await;

        match &result {
            Ok(_) => UnitRuntime {
                unit: inner.name(),
                duration: start.elapsed(),
            }
            .log(),
            Err(error) => UnitFailed {
                unit: inner.name(),
                error,
            }
            .log(),
        }

        result
    }

    fn name(&self) -> &'static str {
        "runtime_logger"
    }
}

/// Serialized byte size and whitespace token count of a value.
pub fn footprint(value: &Value) -> (usize, usize) {
    (to_transport(value).to_string().len(), count_tokens(&value.render()))
}

/// Logs the size of the inner unit's input and output.
pub struct ResourceLogger;

#[async_trait]
impl Observer for ResourceLogger {
    async fn observe(
        &self,
        input: Value,
        inner: &dyn Unit,
        params: &Params,
    ) -> Result<Value, UnitError> {
        let (input_bytes, input_tokens) = footprint(&input);
        let output = inner.invoke(input, params).await?;
        let (output_bytes, output_tokens) = footprint(&output);

        UnitResources {
            unit: inner.name(),
            input_bytes,
            input_tokens,
            output_bytes,
            output_tokens,
        }
        .log();

        Ok(output)
    }

    fn name(&self) -> &'static str {
        "resource_logger"
    }
}
