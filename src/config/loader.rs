// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::consts::DEFAULT_LOG_FILTER;
use crate::registry::Category;

/// Engine-wide settings.
///
/// Typically loaded from a YAML or TOML file next to the binary. Every
/// field is optional.
///
/// # Example
/// ```yaml
/// log_filter: "pipegraph=debug"
/// cache_resolved: true
/// aliases:
///   model:
///     hf_pipeline_runner: "units::model::text_task"
///   input:
///     question_input: "units::input::qa_input"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EngineSettings {
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(default = "default_cache_resolved")]
    pub cache_resolved: bool,
    /// category -> logical name -> canonical locator
    #[serde(default)]
    pub aliases: BTreeMap<String, BTreeMap<String, String>>,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

fn default_cache_resolved() -> bool {
    true
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            cache_resolved: default_cache_resolved(),
            aliases: BTreeMap::new(),
        }
    }
}

impl EngineSettings {
    /// Alias table with categories parsed; fails on an unknown category.
    pub fn parsed_aliases(&self) -> Result<Vec<(Category, String, String)>, LoadError> {
        let mut parsed = Vec::new();
        for (category, table) in &self.aliases {
            let category: Category = category.parse().map_err(|_| LoadError::UnknownCategory {
                category: category.clone(),
            })?;
            for (name, locator) in table {
                parsed.push((category, name.clone(), locator.clone()));
            }
        }
        Ok(parsed)
    }
}

/// Failure loading settings or a request document from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML in '{path}': {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid TOML in '{path}': {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid JSON in '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported file extension for '{path}'")]
    UnsupportedFormat { path: String },

    #[error("Unknown category '{category}' in alias table")]
    UnknownCategory { category: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Format {
    Json,
    Yaml,
    Toml,
}

fn format_of(path: &Path) -> Option<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Some(Format::Json),
        Some("yaml") | Some("yml") => Some(Format::Yaml),
        Some("toml") => Some(Format::Toml),
        _ => None,
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Load engine settings from a `.yaml`/`.yml` or `.toml` file.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<EngineSettings, LoadError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let settings: EngineSettings = match format_of(path) {
        Some(Format::Yaml) => {
            serde_yaml::from_str(&read(path)?).map_err(|source| LoadError::Yaml {
                path: display,
                source,
            })?
        }
        Some(Format::Toml) => toml::from_str(&read(path)?).map_err(|source| LoadError::Toml {
            path: display,
            source,
        })?,
        _ => return Err(LoadError::UnsupportedFormat { path: display }),
    };

    // Surface a bad alias category at load time rather than on first resolve.
    settings.parsed_aliases()?;
    Ok(settings)
}

/// Load a pipeline request document from a `.json` or `.yaml`/`.yml` file.
///
/// The document is returned untyped; request validation happens at the
/// runner so a missing `nodes`/`edges` field is reported the same way
/// regardless of where the request came from.
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<serde_json::Value, LoadError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    match format_of(path) {
        Some(Format::Json) => serde_json::from_str(&read(path)?).map_err(|source| LoadError::Json {
            path: display,
            source,
        }),
        Some(Format::Yaml) => serde_yaml::from_str(&read(path)?).map_err(|source| LoadError::Yaml {
            path: display,
            source,
        }),
        _ => Err(LoadError::UnsupportedFormat { path: display }),
    }
}
