// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::errors::UnitError;
use crate::value::{Params, Value};

/// An executable step: one entry point taking the merged input and the
/// node's params.
#[async_trait]
pub trait Unit: Send + Sync {
    async fn invoke(&self, input: Value, params: &Params) -> Result<Value, UnitError>;

    fn name(&self) -> &str;
}
