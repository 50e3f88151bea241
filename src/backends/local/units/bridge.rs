// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Bridge units reshape one stage's structured output into the `{text}`
//! input the next text stage expects.

use async_trait::async_trait;

use crate::errors::UnitError;
use crate::traits::Unit;
use crate::value::{map_of, Params, Value};

fn text(text: impl Into<String>) -> Value {
    map_of([("text", text.into())])
}

fn require_input<'a>(unit: &str, input: &'a Value) -> Result<&'a Value, UnitError> {
    match input {
        Value::Null => Err(UnitError::invalid_input(unit, "input is null")),
        other => Ok(other),
    }
}

/// Truthy string field: present and non-empty.
fn non_empty<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|field| !field.is_empty())
}

pub struct FromQa;

#[async_trait]
impl Unit for FromQa {
    async fn invoke(&self, input: Value, _params: &Params) -> Result<Value, UnitError> {
        Ok(match &input {
            Value::Map(_) => match non_empty(&input, "answer") {
                Some(answer) => text(format!("The customer issue is: {}", answer.render())),
                None => text("No answer found."),
            },
            _ => text("Invalid QA output format."),
        })
    }

    fn name(&self) -> &str {
        "from_qa"
    }
}

/// Joins token `word`s into a sentence, gluing `##` subwords onto the
/// previous word.
pub struct FromNer;

#[async_trait]
impl Unit for FromNer {
    async fn invoke(&self, input: Value, _params: &Params) -> Result<Value, UnitError> {
        let tokens = require_input(self.name(), &input)?
            .as_list()
            .ok_or_else(|| UnitError::invalid_input(self.name(), "expected a list of tokens"))?;

        let mut words: Vec<String> = Vec::with_capacity(tokens.len());
        for token in tokens {
            let word = token.get("word").map(Value::render).unwrap_or_default();
            if let (Some(subword), Some(previous)) = (word.strip_prefix("##"), words.last_mut()) {
                previous.push_str(subword);
                continue;
            }
            words.push(word);
        }

        let sentence = words.join(" ").replace(" .", ".").replace(" ,", ",");
        Ok(text(sentence))
    }

    fn name(&self) -> &str {
        "from_ner"
    }
}

pub struct FromSentiment;

#[async_trait]
impl Unit for FromSentiment {
    async fn invoke(&self, input: Value, _params: &Params) -> Result<Value, UnitError> {
        let Some(predictions) = input.as_list() else {
            return Ok(text("[bridge.from_sentiment] Error: input is not a list"));
        };

        Ok(match predictions.first() {
            None => text("No sentiment detected."),
            Some(first @ Value::Map(_)) => {
                let label = first
                    .get("label")
                    .map(Value::render)
                    .unwrap_or_default()
                    .to_lowercase();
                text(format!("The sentiment of the user is {}.", label))
            }
            Some(_) => text("[bridge.from_sentiment] Error: First item in list is not a dict"),
        })
    }

    fn name(&self) -> &str {
        "from_sentiment"
    }
}

/// `summary_text`, else `text`, else the whole input rendered.
pub struct FromSummarization;

#[async_trait]
impl Unit for FromSummarization {
    async fn invoke(&self, input: Value, _params: &Params) -> Result<Value, UnitError> {
        let input = require_input(self.name(), &input)?;
        let summary = match input {
            Value::Map(_) => non_empty(input, "summary_text")
                .or_else(|| non_empty(input, "text"))
                .unwrap_or(input)
                .render(),
            other => other.render(),
        };
        Ok(text(summary))
    }

    fn name(&self) -> &str {
        "from_summarization"
    }
}

pub struct FromTranslation;

fn translation_text(item: &Value) -> String {
    item.get("translation_text")
        .map(Value::render)
        .unwrap_or_else(|| item.render())
}

#[async_trait]
impl Unit for FromTranslation {
    async fn invoke(&self, input: Value, _params: &Params) -> Result<Value, UnitError> {
        Ok(match &input {
            Value::List(items) => text(
                items
                    .iter()
                    .map(translation_text)
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            other => text(translation_text(other)),
        })
    }

    fn name(&self) -> &str {
        "from_translation"
    }
}

/// The label with the highest score; the first one wins a tie.
pub struct FromZeroShot;

#[async_trait]
impl Unit for FromZeroShot {
    async fn invoke(&self, input: Value, _params: &Params) -> Result<Value, UnitError> {
        let input = require_input(self.name(), &input)?;
        let labels = input.get("labels").and_then(Value::as_list).unwrap_or(&[]);
        let scores = input.get("scores").and_then(Value::as_list).unwrap_or(&[]);
        if labels.is_empty() || scores.is_empty() {
            return Err(UnitError::invalid_input(
                self.name(),
                "'labels' and 'scores' must both be non-empty",
            ));
        }

        let mut best: Option<(usize, f64)> = None;
        for (index, score) in scores.iter().enumerate() {
            let score = score.as_f64().ok_or_else(|| {
                UnitError::invalid_input(self.name(), format!("score {} is not numeric", index))
            })?;
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((index, score));
            }
        }

        let label = best
            .and_then(|(index, _)| labels.get(index))
            .ok_or_else(|| UnitError::invalid_input(self.name(), "no label for the best score"))?;
        Ok(text(label.render()))
    }

    fn name(&self) -> &str {
        "from_zero_shot"
    }
}
