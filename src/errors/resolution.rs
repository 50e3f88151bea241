// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use super::UnitError;

/// Unit or observer resolution failed.
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// The category is not one of the fixed set; no lookup was attempted.
    #[error("Unknown module type: '{category}'")]
    UnknownCategory { category: String },

    /// Lookup of the locator failed.
    #[error("Module load failed: {locator}")]
    Lookup {
        locator: String,
        #[source]
        cause: LookupFailure,
    },
}

impl ResolutionError {
    pub fn locator(&self) -> Option<&str> {
        match self {
            ResolutionError::UnknownCategory { .. } => None,
            ResolutionError::Lookup { locator, .. } => Some(locator),
        }
    }
}

/// Underlying cause of a failed lookup.
#[derive(Error, Debug)]
pub enum LookupFailure {
    #[error("no implementation registered")]
    NotRegistered,

    #[error("registered implementation is {found}, expected {expected}")]
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("factory failed: {0}")]
    Factory(#[source] UnitError),
}
