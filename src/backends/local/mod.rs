// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! In-process units and observers, and the table that registers them.
//!
//! | category | names |
//! |----------|-------|
//! | input    | `plain_text`, `qa_input`, `zero_shot_input`, `echo` (+ aliases `fill_mask_input`, `summarization_input`, `text2text_input`) |
//! | unit     | `text_case`, `reverse_text`, `token_counter`, `word_frequency` |
//! | model    | `text_task` (+ alias `pipeline_runner`) |
//! | bridge   | `from_qa`, `from_ner`, `from_sentiment`, `from_summarization`, `from_translation`, `from_zero_shot` |
//! | output   | `json_output` |
//! | sink     | `join` |
//! | observer | `runtime_logger`, `resource_logger` |

pub mod observers;
pub mod text;
pub mod units;

pub use observers::{ResourceLogger, RuntimeLogger};

use crate::registry::{Category, UnitRegistry};
use units::*;

/// Logical input names served by `plain_text`.
const PLAIN_TEXT_ALIASES: &[&str] = &["fill_mask_input", "summarization_input", "text2text_input"];

/// Register every built-in unit, observer and alias.
pub fn register_builtins(registry: &mut UnitRegistry) {
    registry.register_unit(Category::Input, "plain_text", || Ok(PlainTextInput));
    registry.register_unit(Category::Input, "qa_input", || Ok(QaInput));
    registry.register_unit(Category::Input, "zero_shot_input", || Ok(ZeroShotInput));
    registry.register_unit(Category::Input, "echo", || Ok(Echo));

    registry.register_unit(Category::Unit, "text_case", || Ok(TextCase));
    registry.register_unit(Category::Unit, "reverse_text", || Ok(ReverseText));
    registry.register_unit(Category::Unit, "token_counter", || Ok(TokenCounter));
    registry.register_unit(Category::Unit, "word_frequency", || Ok(WordFrequency));

    registry.register_unit(Category::Model, "text_task", || Ok(TextTask));

    registry.register_unit(Category::Bridge, "from_qa", || Ok(FromQa));
    registry.register_unit(Category::Bridge, "from_ner", || Ok(FromNer));
    registry.register_unit(Category::Bridge, "from_sentiment", || Ok(FromSentiment));
    registry.register_unit(Category::Bridge, "from_summarization", || Ok(FromSummarization));
    registry.register_unit(Category::Bridge, "from_translation", || Ok(FromTranslation));
    registry.register_unit(Category::Bridge, "from_zero_shot", || Ok(FromZeroShot));

    registry.register_unit(Category::Output, "json_output", || Ok(JsonOutput));
    registry.register_unit(Category::Sink, "join", || Ok(Join));

    registry.register_observer("runtime_logger", || Ok(RuntimeLogger));
    registry.register_observer("resource_logger", || Ok(ResourceLogger));

    let plain_text = Category::Input.locator("plain_text");
    for alias in PLAIN_TEXT_ALIASES {
        registry.alias(Category::Input, *alias, plain_text.clone());
    }
    registry.alias(
        Category::Model,
        "pipeline_runner",
        Category::Model.locator("text_task"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{map_of, Params, Value};

    #[test]
    fn test_every_builtin_resolves() {
        let registry = UnitRegistry::with_builtins();

        let test_cases = vec![
            ("input", "plain_text", "plain_text"),
            ("input", "qa_input", "qa_input"),
            ("input", "zero_shot_input", "zero_shot_input"),
            ("input", "echo", "echo"),
            ("input", "fill_mask_input", "plain_text"),
            ("input", "summarization_input", "plain_text"),
            ("input", "text2text_input", "plain_text"),
            ("unit", "text_case", "text_case"),
            ("unit", "reverse_text", "reverse_text"),
            ("unit", "token_counter", "token_counter"),
            ("unit", "word_frequency", "word_frequency"),
            ("model", "text_task", "text_task"),
            ("model", "pipeline_runner", "text_task"),
            ("bridge", "from_qa", "from_qa"),
            ("bridge", "from_ner", "from_ner"),
            ("bridge", "from_sentiment", "from_sentiment"),
            ("bridge", "from_summarization", "from_summarization"),
            ("bridge", "from_translation", "from_translation"),
            ("bridge", "from_zero_shot", "from_zero_shot"),
            ("output", "json_output", "json_output"),
            ("sink", "join", "join"),
        ];

        for (category, name, expected) in test_cases {
            let unit = registry
                .resolve(category, name)
                .unwrap_or_else(|e| panic!("{}/{} failed: {}", category, name, e));
            assert_eq!(unit.name(), expected, "{}/{}", category, name);
        }

        for name in ["runtime_logger", "resource_logger"] {
            assert_eq!(registry.resolve_observer(name).unwrap().name(), name);
        }
        assert_eq!(
            registry.resolve_observer("runtime_logger").unwrap().name(),
            registry.resolve_observer("runtime_logger").unwrap().name()
        );
    }

    #[test]
    fn test_evaluator_spelling_reaches_observers() {
        let registry = UnitRegistry::with_builtins();
        assert!(registry.is_registered("evaluator".parse().unwrap(), "runtime_logger"));
    }

    #[tokio::test]
    async fn test_alias_shares_behaviour() {
        let registry = UnitRegistry::with_builtins();
        let params: Params = [("text".to_string(), Value::from("shared"))].into();

        for name in PLAIN_TEXT_ALIASES {
            let unit = registry.resolve("input", name).unwrap();
            let output = unit.invoke(Value::empty_map(), &params).await.unwrap();
            assert_eq!(output, map_of([("text", "shared")]), "alias '{}'", name);
        }
    }
}
