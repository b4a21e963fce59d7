/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use bibsheet_core::template::{SimpleVariable, TemplateVariable};
use bibsheet_core::Reference;

use crate::values::{non_empty, ComponentValues, RenderOptions};

impl ComponentValues for TemplateVariable {
    fn values(&self, reference: &Reference, _options: &RenderOptions<'_>) -> Option<String> {
        match self.variable {
            SimpleVariable::Publisher => non_empty(reference.publisher.as_deref()),
            SimpleVariable::Doi => non_empty(reference.doi.as_deref()),
        }
    }
}
