/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Data model and style tables for bibsheet.
//!
//! This crate holds everything that is declarative: the canonical
//! [`Reference`] record, the validated [`FormattingConfig`], the template
//! language styles are written in, and the embedded templates for the nine
//! supported styles. The pipeline that reads, normalizes and renders
//! references lives in `bibsheet_processor`.

pub mod embedded;
pub mod error;
pub mod macros;
pub mod options;
pub mod reference;
pub mod template;

pub use error::ConfigError;
pub use options::{
    ConfigOptions, FontFamily, FormattingConfig, InputFormat, LayoutConfig, NumberingStyle,
    PositionMode, SortConfig, SortDirection, SortOrder, StyleId,
};
pub use reference::{EntryType, Person, RawValue, Reference};
pub use template::TemplateComponent;
