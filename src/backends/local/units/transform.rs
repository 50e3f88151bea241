// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Text transformation and analysis units.
//!
//! Each unit reads its text with [`extract_text`], so it accepts a plain
//! string from upstream, a `{text}` map, or a `text` param.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::backends::local::text::{capitalize, count_tokens, extract_text};
use crate::errors::UnitError;
use crate::traits::Unit;
use crate::value::{map_of, Map, Params, Value};

const SMALL_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

/// Case conversion, selected by the `mode` param.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    Upper,
    Lower,
    /// Every word capitalized.
    Proper,
    /// Like `Proper`, but small words after the first stay lowercase.
    Title,
}

impl CaseMode {
    pub fn parse(mode: &str) -> Option<Self> {
        match mode {
            "upper" => Some(CaseMode::Upper),
            "lower" => Some(CaseMode::Lower),
            "proper" => Some(CaseMode::Proper),
            "title" => Some(CaseMode::Title),
            _ => None,
        }
    }

    pub fn apply(self, text: &str) -> String {
        match self {
            CaseMode::Upper => text.to_uppercase(),
            CaseMode::Lower => text.to_lowercase(),
            CaseMode::Proper => text
                .split_whitespace()
                .map(capitalize)
                .collect::<Vec<_>>()
                .join(" "),
            CaseMode::Title => text
                .split_whitespace()
                .enumerate()
                .map(|(i, word)| {
                    let lower = word.to_lowercase();
                    if i > 0 && SMALL_WORDS.contains(&lower.as_str()) {
                        lower
                    } else {
                        capitalize(word)
                    }
                })
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

pub struct TextCase;

#[async_trait]
impl Unit for TextCase {
    async fn invoke(&self, input: Value, params: &Params) -> Result<Value, UnitError> {
        let mode = params
            .get("mode")
            .and_then(Value::as_str)
            .ok_or_else(|| UnitError::invalid_param(self.name(), "mode", "a string is required"))?;
        let mode = CaseMode::parse(mode).ok_or_else(|| {
            UnitError::invalid_param(
                self.name(),
                "mode",
                format!("unknown case mode '{}'", mode),
            )
        })?;

        Ok(Value::from(mode.apply(&extract_text(&input, params))))
    }

    fn name(&self) -> &str {
        "text_case"
    }
}

pub struct ReverseText;

#[async_trait]
impl Unit for ReverseText {
    async fn invoke(&self, input: Value, params: &Params) -> Result<Value, UnitError> {
        let reversed: String = extract_text(&input, params).chars().rev().collect();
        Ok(Value::from(reversed))
    }

    fn name(&self) -> &str {
        "reverse_text"
    }
}

/// `{char_count, word_count, line_count}`; an empty text still has one line.
pub struct TokenCounter;

pub fn token_counts(text: &str) -> Value {
    map_of([
        ("char_count", text.chars().count()),
        ("word_count", count_tokens(text)),
        ("line_count", text.lines().count().max(1)),
    ])
}

#[async_trait]
impl Unit for TokenCounter {
    async fn invoke(&self, input: Value, params: &Params) -> Result<Value, UnitError> {
        Ok(token_counts(&extract_text(&input, params)))
    }

    fn name(&self) -> &str {
        "token_counter"
    }
}

/// Lowercased alphanumeric word -> occurrence count, sorted by word.
pub struct WordFrequency;

pub fn word_frequencies(text: &str) -> Value {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for word in text.split_whitespace() {
        let normalized: String = word
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        if !normalized.is_empty() {
            *counts.entry(normalized).or_insert(0) += 1;
        }
    }

    Value::Map(
        counts
            .into_iter()
            .map(|(word, count)| (word, Value::from(count)))
            .collect::<Map>(),
    )
}

#[async_trait]
impl Unit for WordFrequency {
    async fn invoke(&self, input: Value, params: &Params) -> Result<Value, UnitError> {
        Ok(word_frequencies(&extract_text(&input, params)))
    }

    fn name(&self) -> &str {
        "word_frequency"
    }
}
