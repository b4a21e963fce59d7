/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use bibsheet_core::template::{TemplateTitle, TitleType};
use bibsheet_core::Reference;

use crate::values::{non_empty, ComponentValues, RenderOptions};

impl ComponentValues for TemplateTitle {
    fn values(&self, reference: &Reference, _options: &RenderOptions<'_>) -> Option<String> {
        match self.title {
            TitleType::Primary => non_empty(Some(reference.title.as_str())),
            TitleType::Container => non_empty(reference.container_title.as_deref()),
        }
    }
}
