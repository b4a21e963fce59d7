/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::sync::LazyLock;

use bibsheet_core::template::{NumberVariable, TemplateNumber};
use bibsheet_core::Reference;
use regex::Regex;

use crate::values::{non_empty, ComponentValues, RenderOptions};

static RANGE_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*(?:-+|–|—)\s*").expect("dash pattern is valid"));

impl ComponentValues for TemplateNumber {
    fn values(&self, reference: &Reference, _options: &RenderOptions<'_>) -> Option<String> {
        match self.number {
            NumberVariable::Volume => non_empty(reference.volume.as_deref()),
            NumberVariable::Issue => non_empty(reference.issue.as_deref()),
            NumberVariable::Pages => non_empty(reference.pages.as_deref()).map(|p| page_range(&p)),
        }
    }
}

/// Collapse any dash run between page numbers to a single hyphen.
pub fn page_range(pages: &str) -> String {
    RANGE_DASH.replace_all(pages, "-").into_owned()
}
