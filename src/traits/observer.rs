// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::errors::UnitError;
use crate::traits::Unit;
use crate::value::{Params, Value};

/// Cross-cutting wrapper around an inner unit (timing, resource logging, ...).
///
/// An observer typically invokes `inner` exactly once and returns its result
/// unchanged. Failures from `inner` must propagate as-is unless the observer
/// deliberately translates them.
#[async_trait]
pub trait Observer: Send + Sync {
    async fn observe(
        &self,
        input: Value,
        inner: &dyn Unit,
        params: &Params,
    ) -> Result<Value, UnitError>;

    fn name(&self) -> &'static str;
}
