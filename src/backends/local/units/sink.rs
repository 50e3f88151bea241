// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::errors::UnitError;
use crate::traits::Unit;
use crate::value::{Params, Value};

/// Terminal unit that records whatever reaches it. At a fan-in point that is
/// the map of predecessor outputs keyed by predecessor id.
pub struct Join;

#[async_trait]
impl Unit for Join {
    async fn invoke(&self, input: Value, _params: &Params) -> Result<Value, UnitError> {
        Ok(input)
    }

    fn name(&self) -> &str {
        "join"
    }
}
