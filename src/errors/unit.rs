// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Failure raised by a unit or observer implementation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// The input value does not have the shape the unit expects.
    #[error("invalid input for '{unit}': {reason}")]
    InvalidInput { unit: String, reason: String },

    /// A parameter is missing or has the wrong type.
    #[error("invalid parameter '{param}' for '{unit}': {reason}")]
    InvalidParam {
        unit: String,
        param: String,
        reason: String,
    },

    /// Any other failure inside the unit.
    #[error("{unit} failed: {message}")]
    Failed { unit: String, message: String },
}

impl UnitError {
    pub fn invalid_input(unit: impl Into<String>, reason: impl Into<String>) -> Self {
        UnitError::InvalidInput {
            unit: unit.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_param(
        unit: impl Into<String>,
        param: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        UnitError::InvalidParam {
            unit: unit.into(),
            param: param.into(),
            reason: reason.into(),
        }
    }

    pub fn failed(unit: impl Into<String>, message: impl Into<String>) -> Self {
        UnitError::Failed {
            unit: unit.into(),
            message: message.into(),
        }
    }
}
