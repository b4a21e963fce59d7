/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use bibsheet_core::template::TemplateList;
use bibsheet_core::Reference;

use crate::render::render_component;
use crate::values::{ComponentValues, RenderOptions};

impl ComponentValues for TemplateList {
    fn values(&self, reference: &Reference, options: &RenderOptions<'_>) -> Option<String> {
        // Each child carries its own rendering; empty children drop out
        // along with their delimiter.
        let values: Vec<String> = self
            .items
            .iter()
            .filter_map(|item| {
                let value = item.values(reference, options)?;
                let rendered = render_component(item, &value);
                (!rendered.is_empty()).then_some(rendered)
            })
            .collect();

        if values.is_empty() {
            return None;
        }
        Some(values.join(&self.delimiter))
    }
}
