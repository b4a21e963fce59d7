/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Layout planning for a rendered reference list.
//!
//! The plan is geometry only: where each wrapped line sits, how large the
//! optional title and background box are, and which earlier block (if any)
//! it replaces. Drawing it into a host document is the caller's job.
//!
//! Text width is estimated at `0.6 × font_size` per character.

use bibsheet_core::{FormattingConfig, LayoutConfig, PositionMode};
use serde::Serialize;

use crate::processor::ProcessedReferences;

/// Distance kept from the canvas edge by the anchored position modes.
pub const EDGE_MARGIN: f64 = 50.0;

const CHAR_WIDTH_RATIO: f64 = 0.6;

/// The drawing area the block is positioned in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One line of text; `y` is the top of the line box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLine {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub bold: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutPlan {
    pub group_id: String,
    /// Set when an existing block with this id should be replaced in place.
    pub replace_existing: Option<String>,
    /// CSS font stack for every line.
    pub font_family: &'static str,
    /// Top-left corner of the text.
    pub origin: Point,
    pub line_height: f64,
    pub title: Option<TextLine>,
    pub lines: Vec<TextLine>,
    pub background: Option<Rect>,
}

impl LayoutPlan {
    pub fn build(output: &ProcessedReferences, config: &FormattingConfig, canvas: Canvas) -> Self {
        let layout = &config.layout;
        let line_height = layout.font_size * layout.line_spacing;
        let char_width = layout.font_size * CHAR_WIDTH_RATIO;

        // Lines relative to the origin: (x offset, text).
        let mut body: Vec<(f64, String)> = Vec::new();
        for entry in &output.entries {
            body.extend(wrap_entry(&entry.marker, &entry.text, layout, char_width));
        }

        let line_count = body.len() + usize::from(layout.show_title);
        let padding = if layout.background_box {
            layout.box_padding
        } else {
            0.0
        };
        let block_width = layout.max_width + 2.0 * padding;
        let block_height = line_count as f64 * line_height + 2.0 * padding;
        let origin = match layout.position_mode {
            PositionMode::Custom => Point {
                x: layout.x,
                y: layout.y,
            },
            mode => {
                let corner = anchor(mode, canvas, block_width, block_height);
                Point {
                    x: corner.x + padding,
                    y: corner.y + padding,
                }
            }
        };

        let mut row = 0usize;
        let title = layout.show_title.then(|| {
            row += 1;
            TextLine {
                text: layout.title_text.clone(),
                x: origin.x,
                y: origin.y,
                font_size: layout.font_size + 2.0,
                bold: true,
            }
        });

        let lines = body
            .into_iter()
            .enumerate()
            .map(|(i, (offset, text))| TextLine {
                text,
                x: origin.x + offset,
                y: origin.y + (row + i) as f64 * line_height,
                font_size: layout.font_size,
                bold: false,
            })
            .collect();

        let background = layout.background_box.then(|| Rect {
            x: origin.x - padding,
            y: origin.y - padding,
            width: block_width,
            height: block_height,
        });

        tracing::debug!(lines = line_count, x = origin.x, y = origin.y, "layout planned");

        LayoutPlan {
            group_id: output.group_id.clone(),
            replace_existing: layout.update_existing.then(|| output.group_id.clone()),
            font_family: layout.font_family.css_stack(),
            origin,
            line_height,
            title,
            lines,
            background,
        }
    }
}

/// Top-left corner of a block of the given size for an anchored mode.
fn anchor(mode: PositionMode, canvas: Canvas, width: f64, height: f64) -> Point {
    let left = EDGE_MARGIN;
    let center_x = (canvas.width - width) / 2.0;
    let right = canvas.width - width - EDGE_MARGIN;
    let top = EDGE_MARGIN;
    let bottom = canvas.height - height - EDGE_MARGIN;
    let (x, y) = match mode {
        PositionMode::Center => (center_x, (canvas.height - height) / 2.0),
        PositionMode::TopLeft => (left, top),
        PositionMode::TopCenter => (center_x, top),
        PositionMode::TopRight => (right, top),
        PositionMode::BottomLeft => (left, bottom),
        PositionMode::BottomCenter => (center_x, bottom),
        PositionMode::BottomRight | PositionMode::Custom => (right, bottom),
    };
    Point { x, y }
}

/// Wrap one entry into lines with their x offsets.
///
/// The marker leads the first line. With a hanging indent, continuation
/// lines start at `indent_size`, or past the marker when it is wider.
fn wrap_entry(
    marker: &str,
    text: &str,
    layout: &LayoutConfig,
    char_width: f64,
) -> Vec<(f64, String)> {
    let lead = if marker.is_empty() {
        String::new()
    } else {
        format!("{marker} ")
    };
    let indent = if layout.hanging_indent {
        layout
            .indent_size
            .max(lead.chars().count() as f64 * char_width)
    } else {
        0.0
    };
    let first_chars = chars_in(layout.max_width, char_width);
    let rest_chars = chars_in(layout.max_width - indent, char_width);

    let mut lines: Vec<(f64, String)> = Vec::new();
    let mut current = lead.trim_end().to_string();
    let mut limit = first_chars;
    for word in text.split_whitespace() {
        let needed =
            current.chars().count() + usize::from(!current.is_empty()) + word.chars().count();
        if !current.is_empty() && needed > limit {
            let offset = if lines.is_empty() { 0.0 } else { indent };
            lines.push((offset, std::mem::take(&mut current)));
            limit = rest_chars;
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        let offset = if lines.is_empty() { 0.0 } else { indent };
        lines.push((offset, current));
    }
    lines
}

fn chars_in(width: f64, char_width: f64) -> usize {
    ((width / char_width).floor() as usize).max(1)
}
