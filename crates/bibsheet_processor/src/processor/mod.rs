/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The bibsheet pipeline.
//!
//! One run reads one reference file and produces one ordered list of
//! `(marker, text)` pairs:
//!
//! ```text
//! path check -> format detection -> read -> parse -> normalize -> sort -> number + format
//! ```
//!
//! Malformed entries are skipped and counted; every other failure ends the
//! run with a single [`ProcessorError`].

pub mod numbering;
pub mod sorting;


use std::path::Path;

use bibsheet_core::{ConfigOptions, FormattingConfig, InputFormat, Reference, StyleId};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::ProcessorError;
use crate::io::{detect_format, read_reference_file, validate_path};
use crate::normalize::normalize;
use crate::parser::parser_for;
use crate::style::formatter;
use crate::values::RenderOptions;

use self::numbering::marker;
use self::sorting::Sorter;

/// One formatted reference, ready for layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedEntry {
    /// Citation key of the source entry.
    pub id: String,
    pub marker: String,
    pub text: String,
}

/// The output of a successful run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedReferences {
    pub entries: Vec<ProcessedEntry>,
    /// Entries skipped as malformed, across parsing and normalization.
    pub skipped: usize,
    /// Stable identity of this output block; see [`group_id`].
    pub group_id: String,
}

/// The bibsheet processor.
///
/// Holds one validated configuration and runs the pipeline against it.
#[derive(Debug, Clone, Default)]
pub struct Processor {
    pub config: FormattingConfig,
}

impl Processor {
    pub fn new(config: FormattingConfig) -> Self {
        Self { config }
    }

    /// Validate raw options and build a processor. Unknown style or
    /// numbering ids fail here, before any file is touched.
    pub fn from_options(options: ConfigOptions) -> Result<Self, ProcessorError> {
        Ok(Self::new(FormattingConfig::try_from(options)?))
    }

    /// Run the whole pipeline against the configured reference file.
    pub fn process_file(&self) -> Result<ProcessedReferences, ProcessorError> {
        let path = self.config.reference_file_path.as_path();
        validate_path(path)?;
        let format = detect_format(path, self.config.input_format)?;
        tracing::debug!(path = %path.display(), %format, "reading reference file");
        let input = read_reference_file(path)?;
        self.process_str(&input, format)
    }

    /// Run the pipeline on text already in memory. `format` must be concrete.
    pub fn process_str(
        &self,
        input: &str,
        format: InputFormat,
    ) -> Result<ProcessedReferences, ProcessorError> {
        let parser = parser_for(format).ok_or_else(|| {
            ProcessorError::UnsupportedFormat(format!("'{format}' is not a concrete input format"))
        })?;

        let parsed = parser.parse(input);
        tracing::debug!(entries = parsed.entries.len(), skipped = parsed.skipped(), "parsed");
        let parse_skipped = parsed.skipped();

        let normalized = normalize(parsed.entries);
        let skipped = parse_skipped + normalized.dropped.len();
        if normalized.references.is_empty() {
            return Err(ProcessorError::EmptyResult { skipped });
        }
        if skipped > 0 {
            tracing::warn!("{skipped} entries skipped");
        }

        let entries = self.format_references(&normalized.references);
        tracing::debug!(
            entries = entries.len(),
            style = %self.config.style,
            numbering = %self.config.numbering_style,
            "formatted"
        );

        Ok(ProcessedReferences {
            entries,
            skipped,
            group_id: group_id(&self.config.reference_file_path, self.config.style),
        })
    }

    /// Sort, number and format normalized references.
    pub fn format_references(&self, references: &[Reference]) -> Vec<ProcessedEntry> {
        let sorted = Sorter::new(&self.config.sort).sort_references(references.iter().collect());
        let style = formatter(self.config.style);
        let names = style.name_options();
        let options = RenderOptions {
            names: &names,
            no_date_term: style.no_date_term(),
            no_author_text: &self.config.no_author_text,
        };

        sorted
            .into_iter()
            .enumerate()
            .map(|(i, reference)| ProcessedEntry {
                id: reference.raw_id.clone(),
                marker: marker(i + 1, self.config.numbering_style),
                text: style.format_with(reference, &options),
            })
            .collect()
    }
}

/// Deterministic identity for an output block: `references-` followed by
/// the first 12 hex digits of SHA-256 over the file path and style id.
pub fn group_id(path: &Path, style: StyleId) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.to_string_lossy().as_bytes());
    hasher.update([0u8]);
    hasher.update(style.as_str().as_bytes());
    let digest = hex::encode(hasher.finalize());
    format!("references-{}", &digest[..12])
}
