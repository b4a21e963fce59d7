/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Formatting configuration.
//!
//! [`ConfigOptions`] is the flat, loosely typed option set as it arrives from
//! a config file or the command line. [`FormattingConfig`] is the validated,
//! immutable snapshot one pipeline run works from.

pub mod contributors;
pub mod layout;

pub use contributors::{
    AndOptions, ContributorConfig, DelimiterPrecedesLast, DisplayAsSort, ShortenListOptions,
};
pub use layout::{FontFamily, PositionMode};

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

crate::str_enum! {
    /// The supported citation styles.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub enum StyleId {
        #[default]
        Apa = "apa" | "apa7",
        Mla = "mla",
        Chicago = "chicago",
        Harvard = "harvard",
        Ieee = "ieee",
        Vancouver = "vancouver",
        Ama = "ama",
        Acs = "acs",
        Nature = "nature",
    }
}

crate::str_enum! {
    /// Marker styles for the numbered list.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub enum NumberingStyle {
        /// `[1]`
        #[default]
        Numeric = "numeric",
        /// `1.`
        NumericDot = "numeric_dot" | "numeric-dot",
        /// `(1)`
        NumericParen = "numeric_paren" | "numeric-paren",
        /// `a.` ... `z.`, `aa.`
        Alphabetic = "alphabetic" | "alpha",
        /// `i.`, `ii.`
        Roman = "roman",
        /// `*`, `†`, `‡` ...
        Symbols = "symbols",
        /// `•`
        Bullet = "bullet",
        None = "none",
    }
}

crate::str_enum! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub enum SortOrder {
        #[default]
        Appearance = "appearance",
        Author = "author",
        Year = "year",
        Title = "title",
    }
}

crate::str_enum! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub enum SortDirection {
        Ascending = "ascending" | "asc",
        #[default]
        Descending = "descending" | "desc",
    }
}

crate::str_enum! {
    /// Reference file formats. `Auto` picks one from the file extension.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub enum InputFormat {
        #[default]
        Auto = "auto",
        Bibtex = "bibtex" | "bib",
        Ris = "ris",
        CslJson = "csl-json" | "csl_json" | "json",
        Endnote = "endnote" | "enw",
    }
}

/// The raw option set, as read from a config file or the command line.
///
/// Every field is optional; unset fields take the defaults of
/// [`FormattingConfig`].
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOptions {
    pub reference_file_path: Option<String>,
    pub input_format: Option<String>,
    pub style: Option<String>,
    pub numbering_style: Option<String>,
    pub sort_order: Option<String>,
    pub year_order: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub line_spacing: Option<f64>,
    pub hanging_indent: Option<bool>,
    pub indent_size: Option<f64>,
    pub max_width: Option<f64>,
    pub show_title: Option<bool>,
    pub title_text: Option<String>,
    pub background_box: Option<bool>,
    pub box_padding: Option<f64>,
    pub position_mode: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub update_existing: Option<bool>,
    pub no_author_text: Option<String>,
}

impl ConfigOptions {
    /// Load options from a YAML or JSON file, chosen by extension.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let load_err = |message: String| ConfigError::Load {
            path: path.display().to_string(),
            message,
        };
        let content = std::fs::read_to_string(path).map_err(|e| load_err(e.to_string()))?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

        match ext {
            "json" => serde_json::from_str(&content).map_err(|e| load_err(e.to_string())),
            _ => serde_yaml::from_str(&content).map_err(|e| load_err(e.to_string())),
        }
    }

    /// Overlay `other` on top of `self`; set fields in `other` win.
    pub fn merge(&mut self, other: &ConfigOptions) {
        crate::merge_options!(
            self,
            other,
            reference_file_path,
            input_format,
            style,
            numbering_style,
            sort_order,
            year_order,
            font_family,
            font_size,
            line_spacing,
            hanging_indent,
            indent_size,
            max_width,
            show_title,
            title_text,
            background_box,
            box_padding,
            position_mode,
            x,
            y,
            update_existing,
            no_author_text,
        );
    }
}

/// Sort settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortConfig {
    pub order: SortOrder,
    /// Direction for `SortOrder::Year`; newest first unless set.
    pub year_order: SortDirection,
}

/// Settings consumed by the layout planner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutConfig {
    pub font_family: FontFamily,
    pub font_size: f64,
    pub line_spacing: f64,
    pub hanging_indent: bool,
    pub indent_size: f64,
    pub max_width: f64,
    pub show_title: bool,
    pub title_text: String,
    pub background_box: bool,
    pub box_padding: f64,
    pub position_mode: PositionMode,
    pub x: f64,
    pub y: f64,
    pub update_existing: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            font_family: FontFamily::Serif,
            font_size: 11.0,
            line_spacing: 1.3,
            hanging_indent: true,
            indent_size: 20.0,
            max_width: 600.0,
            show_title: true,
            title_text: "References".to_string(),
            background_box: true,
            box_padding: 15.0,
            position_mode: PositionMode::Custom,
            x: 100.0,
            y: 100.0,
            update_existing: false,
        }
    }
}

/// The validated configuration snapshot for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormattingConfig {
    pub reference_file_path: PathBuf,
    pub input_format: InputFormat,
    pub style: StyleId,
    pub numbering_style: NumberingStyle,
    pub sort: SortConfig,
    pub layout: LayoutConfig,
    /// Text rendered in place of an empty author list; empty omits it.
    pub no_author_text: String,
}

impl TryFrom<ConfigOptions> for FormattingConfig {
    type Error = ConfigError;

    fn try_from(options: ConfigOptions) -> Result<Self, Self::Error> {
        let defaults = LayoutConfig::default();

        let style = parse_id(options.style, StyleId::from_id, ConfigError::UnknownStyle)?;
        let numbering_style = parse_id(
            options.numbering_style,
            NumberingStyle::from_id,
            ConfigError::UnknownNumbering,
        )?;
        let order = parse_id(
            options.sort_order,
            SortOrder::from_id,
            ConfigError::UnknownSortOrder,
        )?;
        let year_order = parse_id(
            options.year_order,
            SortDirection::from_id,
            ConfigError::UnknownSortDirection,
        )?;
        let input_format = parse_id(
            options.input_format,
            InputFormat::from_id,
            ConfigError::UnknownInputFormat,
        )?;
        let font_family = parse_id(
            options.font_family,
            FontFamily::from_id,
            ConfigError::UnknownFontFamily,
        )?;
        let position_mode = parse_id(
            options.position_mode,
            PositionMode::from_id,
            ConfigError::UnknownPositionMode,
        )?;

        let layout = LayoutConfig {
            font_family,
            font_size: positive("font_size", options.font_size, defaults.font_size)?,
            line_spacing: positive("line_spacing", options.line_spacing, defaults.line_spacing)?,
            hanging_indent: options.hanging_indent.unwrap_or(defaults.hanging_indent),
            indent_size: non_negative("indent_size", options.indent_size, defaults.indent_size)?,
            max_width: positive("max_width", options.max_width, defaults.max_width)?,
            show_title: options.show_title.unwrap_or(defaults.show_title),
            title_text: options.title_text.unwrap_or(defaults.title_text),
            background_box: options.background_box.unwrap_or(defaults.background_box),
            box_padding: non_negative("box_padding", options.box_padding, defaults.box_padding)?,
            position_mode,
            x: finite("x", options.x, defaults.x)?,
            y: finite("y", options.y, defaults.y)?,
            update_existing: options.update_existing.unwrap_or(defaults.update_existing),
        };

        Ok(FormattingConfig {
            reference_file_path: options
                .reference_file_path
                .map(PathBuf::from)
                .unwrap_or_default(),
            input_format,
            style,
            numbering_style,
            sort: SortConfig { order, year_order },
            layout,
            no_author_text: options.no_author_text.unwrap_or_default(),
        })
    }
}

fn parse_id<T: Default>(
    value: Option<String>,
    lookup: impl Fn(&str) -> Option<T>,
    unknown: impl Fn(String) -> ConfigError,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(T::default()),
        Some(id) => lookup(&id).ok_or_else(|| unknown(id)),
    }
}

fn finite(option: &'static str, value: Option<f64>, default: f64) -> Result<f64, ConfigError> {
    let value = value.unwrap_or(default);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::InvalidValue {
            option,
            message: format!("{value} is not a finite number"),
        })
    }
}

fn positive(option: &'static str, value: Option<f64>, default: f64) -> Result<f64, ConfigError> {
    let value = finite(option, value, default)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidValue {
            option,
            message: format!("must be positive, got {value}"),
        })
    }
}

fn non_negative(
    option: &'static str,
    value: Option<f64>,
    default: f64,
) -> Result<f64, ConfigError> {
    let value = finite(option, value, default)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidValue {
            option,
            message: format!("must not be negative, got {value}"),
        })
    }
}
