// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::{ResolutionError, UnitError};
use crate::registry::UnitRegistry;
use crate::traits::{Observer, Unit};
use crate::value::{Params, Value};

/// A unit wrapped by one observer. Invoking it hands the input and the inner
/// unit to the observer.
pub struct ObservedUnit {
    observer: Arc<dyn Observer>,
    inner: Arc<dyn Unit>,
}

impl ObservedUnit {
    pub fn new(observer: Arc<dyn Observer>, inner: Arc<dyn Unit>) -> Self {
        Self { observer, inner }
    }
}

#[async_trait]
impl Unit for ObservedUnit {
    async fn invoke(&self, input: Value, params: &Params) -> Result<Value, UnitError> {
        self.observer
            .observe(input, self.inner.as_ref(), params)
            .await
    }

    /// Name of the innermost unit, so log lines identify the real work.
    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// Wrap `base` with the named observers.
///
/// The first name sits closest to `base`; the last one is outermost and runs
/// first on the way in and last on the way out.
pub fn decorate<S: AsRef<str>>(
    registry: &UnitRegistry,
    base: Arc<dyn Unit>,
    names: &[S],
) -> Result<Arc<dyn Unit>, ResolutionError> {
    names.iter().try_fold(base, |current, name| {
        let observer = registry.resolve_observer(name.as_ref())?;
        Ok(Arc::new(ObservedUnit::new(observer, current)) as Arc<dyn Unit>)
    })
}
