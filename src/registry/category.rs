// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::str::FromStr;

/// Fixed set of node categories a unit can be registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Input,
    Unit,
    Model,
    Bridge,
    Output,
    Sink,
    Observer,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Input,
        Category::Unit,
        Category::Model,
        Category::Bridge,
        Category::Output,
        Category::Sink,
        Category::Observer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Input => "input",
            Category::Unit => "unit",
            Category::Model => "model",
            Category::Bridge => "bridge",
            Category::Output => "output",
            Category::Sink => "sink",
            Category::Observer => "observer",
        }
    }

    /// Base namespace unaliased names are joined onto to form a locator.
    pub fn namespace(&self) -> &'static str {
        match self {
            Category::Input => "units::input",
            Category::Unit => "units::unit",
            Category::Model => "units::model",
            Category::Bridge => "units::bridge",
            Category::Output => "units::output",
            Category::Sink => "units::sink",
            Category::Observer => "observers",
        }
    }

    pub fn locator(&self, name: &str) -> String {
        format!("{}::{}", self.namespace(), name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(Category::Input),
            "unit" => Ok(Category::Unit),
            "model" => Ok(Category::Model),
            "bridge" => Ok(Category::Bridge),
            "output" => Ok(Category::Output),
            "sink" => Ok(Category::Sink),
            "observer" | "evaluator" => Ok(Category::Observer),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}
