// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! `text_task`: one physical unit serving several logical model names.
//!
//! The `task` param picks the operation. A list input is processed item by
//! item and yields a list; any other input is reduced to its text first.

use async_trait::async_trait;

use crate::backends::local::units::transform::{token_counts, word_frequencies, CaseMode};
use crate::errors::UnitError;
use crate::traits::Unit;
use crate::value::{Params, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Case(CaseMode),
    Reverse,
    TokenCount,
    WordFrequency,
}

impl Task {
    fn parse(task: &str) -> Option<Self> {
        match task {
            "reverse" => Some(Task::Reverse),
            "token_count" => Some(Task::TokenCount),
            "word_frequency" => Some(Task::WordFrequency),
            other => CaseMode::parse(other).map(Task::Case),
        }
    }

    fn run(self, text: &str) -> Value {
        match self {
            Task::Case(mode) => Value::from(mode.apply(text)),
            Task::Reverse => Value::from(text.chars().rev().collect::<String>()),
            Task::TokenCount => token_counts(text),
            Task::WordFrequency => word_frequencies(text),
        }
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other
            .get("text")
            .map(Value::render)
            .unwrap_or_else(|| other.render()),
    }
}

pub struct TextTask;

#[async_trait]
impl Unit for TextTask {
    async fn invoke(&self, input: Value, params: &Params) -> Result<Value, UnitError> {
        let task = params
            .get("task")
            .and_then(Value::as_str)
            .ok_or_else(|| UnitError::invalid_param(self.name(), "task", "a string is required"))?;
        let task = Task::parse(task).ok_or_else(|| {
            UnitError::invalid_param(self.name(), "task", format!("unsupported task '{}'", task))
        })?;

        Ok(match &input {
            Value::List(items) => Value::List(items.iter().map(|item| task.run(&text_of(item))).collect()),
            Value::Map(map) if map.is_empty() => {
                let text = params.get("text").map(Value::render).unwrap_or_default();
                task.run(&text)
            }
            other => task.run(&text_of(other)),
        })
    }

    fn name(&self) -> &str {
        "text_task"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::map_of;

    fn params(task: &str) -> Params {
        [("task".to_string(), Value::from(task))].into()
    }

    #[tokio::test]
    async fn test_dispatch() {
        struct TestCase {
            task: &'static str,
            input: Value,
            expected: Value,
        }

        let test_cases = vec![
            TestCase {
                task: "upper",
                input: map_of([("text", "shout")]),
                expected: Value::from("SHOUT"),
            },
            TestCase {
                task: "reverse",
                input: Value::from("abc"),
                expected: Value::from("cba"),
            },
            TestCase {
                task: "token_count",
                input: Value::from("a b"),
                expected: map_of([("char_count", 3usize), ("word_count", 2), ("line_count", 1)]),
            },
            TestCase {
                task: "reverse",
                input: Value::List(vec![Value::from("ab"), map_of([("text", "cd")])]),
                expected: Value::List(vec![Value::from("ba"), Value::from("dc")]),
            },
        ];

        for test_case in test_cases {
            let output = TextTask
                .invoke(test_case.input, &params(test_case.task))
                .await
                .unwrap();
            assert_eq!(output, test_case.expected, "task '{}'", test_case.task);
        }
    }

    #[tokio::test]
    async fn test_source_node_reads_text_param() {
        let mut p = params("lower");
        p.insert("text".to_string(), Value::from("QUIET"));
        let output = TextTask.invoke(Value::empty_map(), &p).await.unwrap();
        assert_eq!(output, Value::from("quiet"));
    }

    #[tokio::test]
    async fn test_unknown_task() {
        let error = TextTask
            .invoke(Value::from("x"), &params("sentiment-analysis"))
            .await
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "invalid parameter 'task' for 'text_task': unsupported task 'sentiment-analysis'"
        );
    }
}
