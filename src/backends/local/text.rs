// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Text helpers shared by the built-in units.

use crate::value::{Params, Value};

/// Pull the working text out of a unit's input.
///
/// A string input is the text. A map input contributes its `text` entry.
/// Otherwise the node's `text` param is used, and failing that the empty
/// string. Non-string values are rendered.
pub fn extract_text(input: &Value, params: &Params) -> String {
    if let Value::String(text) = input {
        return text.clone();
    }
    if let Some(text) = input.get("text") {
        return text.render();
    }
    params.get("text").map(Value::render).unwrap_or_default()
}

/// A param rendered as text, if present.
pub fn param_text(params: &Params, key: &str) -> Option<String> {
    params.get(key).map(Value::render)
}

/// Whitespace token count.
pub fn count_tokens(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}
