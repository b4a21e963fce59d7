/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use thiserror::Error;

/// Configuration validation failures.
///
/// All of these are raised before any reference file is touched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unknown citation style '{0}'")]
    UnknownStyle(String),

    #[error("unknown numbering style '{0}'")]
    UnknownNumbering(String),

    #[error("unknown sort order '{0}'")]
    UnknownSortOrder(String),

    #[error("unknown sort direction '{0}'")]
    UnknownSortDirection(String),

    #[error("unknown font family '{0}'")]
    UnknownFontFamily(String),

    #[error("unknown position mode '{0}'")]
    UnknownPositionMode(String),

    #[error("unknown input format '{0}'")]
    UnknownInputFormat(String),

    #[error("invalid value for {option}: {message}")]
    InvalidValue {
        option: &'static str,
        message: String,
    },

    #[error("cannot load configuration from {path}: {message}")]
    Load { path: String, message: String },
}
