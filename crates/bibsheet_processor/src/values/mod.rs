/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Value extraction for template components.
//!
//! Each component kind knows which field of a [`Reference`] it reads and how
//! to turn it into display text. A component with nothing to show returns
//! `None`, which suppresses it (and its affixes) entirely.

pub mod contributor;
pub mod date;
pub mod list;
pub mod number;
pub mod title;
pub mod variable;

use bibsheet_core::options::ContributorConfig;
use bibsheet_core::template::TemplateComponent;
use bibsheet_core::Reference;

pub use contributor::{format_names, format_single_name, initialize};

/// Options for rendering one reference.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    /// Name-list rules of the active style.
    pub names: &'a ContributorConfig,
    /// Shown in the date slot when the reference has no date at all.
    pub no_date_term: Option<&'a str>,
    /// Shown in the author slot when the reference has no authors. Empty
    /// suppresses the slot.
    pub no_author_text: &'a str,
}

/// Trait for extracting values from template components.
pub trait ComponentValues {
    fn values(&self, reference: &Reference, options: &RenderOptions<'_>) -> Option<String>;
}

impl ComponentValues for TemplateComponent {
    fn values(&self, reference: &Reference, options: &RenderOptions<'_>) -> Option<String> {
        match self {
            TemplateComponent::Contributor(c) => c.values(reference, options),
            TemplateComponent::Date(d) => d.values(reference, options),
            TemplateComponent::Title(t) => t.values(reference, options),
            TemplateComponent::Number(n) => n.values(reference, options),
            TemplateComponent::Variable(v) => v.values(reference, options),
            TemplateComponent::List(l) => l.values(reference, options),
        }
    }
}

/// A trimmed, non-empty copy of an optional field.
pub(crate) fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
