/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fs;
use std::path::Path;

use bibsheet_core::InputFormat;

use crate::ProcessorError;

/// Check that `path` names a readable, non-empty file.
pub fn validate_path(path: &Path) -> Result<(), ProcessorError> {
    if path.as_os_str().is_empty() {
        return Err(ProcessorError::invalid_path(path, "no reference file given"));
    }
    let metadata = fs::metadata(path).map_err(|e| ProcessorError::invalid_path(path, e.to_string()))?;
    if !metadata.is_file() {
        return Err(ProcessorError::invalid_path(path, "not a regular file"));
    }
    if metadata.len() == 0 {
        return Err(ProcessorError::invalid_path(path, "file is empty"));
    }
    Ok(())
}

/// Resolve the parser to use. An explicit choice wins; `Auto` looks at the
/// file extension.
pub fn detect_format(path: &Path, declared: InputFormat) -> Result<InputFormat, ProcessorError> {
    if declared != InputFormat::Auto {
        return Ok(declared);
    }
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "bib" | "bibtex" => Ok(InputFormat::Bibtex),
        "ris" => Ok(InputFormat::Ris),
        "json" => Ok(InputFormat::CslJson),
        "enw" | "endnote" => Ok(InputFormat::Endnote),
        _ => Err(ProcessorError::unsupported_extension(path)),
    }
}

/// Read the whole file as text. Invalid UTF-8 is replaced, not rejected.
pub fn read_reference_file(path: &Path) -> Result<String, ProcessorError> {
    let bytes = fs::read(path).map_err(|e| ProcessorError::invalid_path(path, e.to_string()))?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(path = %path.display(), "reference file is not valid UTF-8; decoding lossily");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    // Strip a UTF-8 byte order mark, common in EndNote and RIS exports.
    Ok(match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    })
}
