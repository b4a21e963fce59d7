/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! bibsheet processor
//!
//! Reads a reference file (BibTeX, RIS, CSL-JSON or EndNote), normalizes
//! its entries into [`Reference`]s, sorts and numbers them, and renders
//! each one in one of nine citation styles. [`layout::LayoutPlan`] turns
//! the result into positioned lines for drawing.
//!
//! # Example
//!
//! ```rust
//! use bibsheet_processor::{FormattingConfig, InputFormat, Processor, StyleId};
//!
//! let bib = "@book{kuhn1962, author={Thomas S. Kuhn}, \
//!            title={The Structure of Scientific Revolutions}, \
//!            publisher={University of Chicago Press}, year={1962}}";
//!
//! let processor = Processor::new(FormattingConfig {
//!     style: StyleId::Apa,
//!     ..Default::default()
//! });
//! let output = processor.process_str(bib, InputFormat::Bibtex).unwrap();
//!
//! assert_eq!(output.entries[0].marker, "[1]");
//! assert_eq!(
//!     output.entries[0].text,
//!     "Kuhn, T. S. (1962). The structure of scientific revolutions. University of Chicago Press."
//! );
//! ```

pub mod error;
pub mod io;
pub mod layout;
pub mod names;
pub mod normalize;
pub mod parser;
pub mod processor;
pub mod render;
pub mod style;
pub mod values;

pub use bibsheet_core::{
    ConfigOptions, EntryType, FormattingConfig, InputFormat, NumberingStyle, Person, Reference,
    SortOrder, StyleId,
};
pub use error::ProcessorError;
pub use layout::{Canvas, LayoutPlan};
pub use parser::{EntryParseError, FormatParser, ParseOutcome, RawEntry};
pub use processor::{ProcessedEntry, ProcessedReferences, Processor};
pub use style::{formatter, Formatter};
