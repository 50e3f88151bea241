// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::errors::UnitError;
use crate::traits::{Observer, Unit};
use crate::value::{Params, Value};

/// Returns its input unchanged.
pub struct StubUnit {
    name: String,
}

impl StubUnit {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl Unit for StubUnit {
    async fn invoke(&self, input: Value, _params: &Params) -> Result<Value, UnitError> {
        Ok(input)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Always fails with [`UnitError::Failed`].
pub struct FailingUnit {
    name: String,
    message: String,
}

impl FailingUnit {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

#[async_trait]
impl Unit for FailingUnit {
    async fn invoke(&self, _input: Value, _params: &Params) -> Result<Value, UnitError> {
        Err(UnitError::failed(&self.name, &self.message))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Shared, ordered record of what ran.
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    pub fn push(&self, event: impl Into<String>) {
        self.0.lock().unwrap().push(event.into());
    }

    pub fn events(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// Echoes its input and records its name on every invocation.
pub struct RecordingUnit {
    name: String,
    log: EventLog,
}

impl RecordingUnit {
    pub fn new(name: impl Into<String>, log: EventLog) -> Self {
        Self {
            name: name.into(),
            log,
        }
    }
}

#[async_trait]
impl Unit for RecordingUnit {
    async fn invoke(&self, input: Value, _params: &Params) -> Result<Value, UnitError> {
        self.log.push(self.name.clone());
        Ok(input)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Records `<tag>-before` and `<tag>-after` around the inner unit.
pub struct RecordingObserver {
    tag: &'static str,
    log: EventLog,
}

impl RecordingObserver {
    pub fn new(tag: &'static str, log: EventLog) -> Self {
        Self { tag, log }
    }
}

#[async_trait]
impl Observer for RecordingObserver {
    async fn observe(
        &self,
        input: Value,
        inner: &dyn Unit,
        params: &Params,
    ) -> Result<Value, UnitError> {
        self.log.push(format!("{}-before", self.tag));
        let result = inner.invoke(input, params).await;
        self.log.push(format!("{}-after", self.tag));
        result
    }

    fn name(&self) -> &'static str {
        self.tag
    }
}

/// Calls straight through.
pub struct PassThroughObserver;

#[async_trait]
impl Observer for PassThroughObserver {
    async fn observe(
        &self,
        input: Value,
        inner: &dyn Unit,
        params: &Params,
    ) -> Result<Value, UnitError> {
        inner.invoke(input, params).await
    }

    fn name(&self) -> &'static str {
        "pass_through"
    }
}

/// Factory that counts how many instances it has built.
#[derive(Default)]
pub struct CountingFactory {
    pub calls: Arc<AtomicUsize>,
}

impl CountingFactory {
    pub fn factory(&self) -> impl Fn() -> Result<StubUnit, UnitError> + Send + Sync + 'static {
        let calls = self.calls.clone();
        move || {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(StubUnit::new("counted"))
        }
    }
}
