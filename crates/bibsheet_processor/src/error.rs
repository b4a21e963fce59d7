/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use bibsheet_core::ConfigError;
use bibsheet_core::InputFormat;
use std::path::PathBuf;
use thiserror::Error;

/// Terminal failure of a processing run.
///
/// A run either succeeds with its output list or fails with exactly one of
/// these. Malformed individual entries are not errors; see
/// [`crate::parser::EntryParseError`].
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("invalid reference file path '{}': {reason}", .path.display())]
    InvalidPath { path: PathBuf, reason: String },

    #[error("unsupported reference format: {0}")]
    UnsupportedFormat(String),

    #[error("no valid references found ({skipped} entries skipped)")]
    EmptyResult { skipped: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ProcessorError {
    pub(crate) fn invalid_path(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ProcessorError::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported_extension(path: &std::path::Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!("'.{e}'"))
            .unwrap_or_else(|| "no extension".to_string());
        ProcessorError::UnsupportedFormat(format!(
            "cannot infer format from {ext}; expected one of {}",
            supported_formats()
        ))
    }
}

fn supported_formats() -> String {
    InputFormat::ALL
        .iter()
        .filter(|f| **f != InputFormat::Auto)
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_distinct() {
        let empty = ProcessorError::EmptyResult { skipped: 2 }.to_string();
        let path = ProcessorError::invalid_path("refs.bib", "file not found").to_string();
        assert_eq!(empty, "no valid references found (2 entries skipped)");
        assert_eq!(path, "invalid reference file path 'refs.bib': file not found");
    }

    #[test]
    fn test_unsupported_extension_lists_formats() {
        let err = ProcessorError::unsupported_extension(std::path::Path::new("refs.docx"));
        assert_eq!(
            err.to_string(),
            "unsupported reference format: cannot infer format from '.docx'; expected one of bibtex, ris, csl-json, endnote"
        );
    }

    #[test]
    fn test_config_errors_pass_through() {
        let err: ProcessorError = ConfigError::UnknownStyle("turabian".into()).into();
        assert_eq!(err.to_string(), "unknown citation style 'turabian'");
    }
}
