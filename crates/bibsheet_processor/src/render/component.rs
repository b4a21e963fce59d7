/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use bibsheet_core::template::{TemplateComponent, WrapPunctuation};

use super::case::apply_text_case;

/// Render a single component around its extracted value.
///
/// An empty value renders as nothing, affixes included.
pub fn render_component(component: &TemplateComponent, value: &str) -> String {
    if value.trim().is_empty() {
        return String::new();
    }
    let rendering = component.rendering();

    // Order of application:
    // 1. Text case
    // 2. Inner affixes
    // 3. Quotes
    // 4. Wrap
    // 5. Outer affixes
    let mut output = match rendering.text_case {
        Some(case) => apply_text_case(value, case),
        None => value.to_string(),
    };

    let inner_prefix = rendering.inner_prefix.as_deref().unwrap_or_default();
    let inner_suffix = rendering.inner_suffix.as_deref().unwrap_or_default();
    if !inner_prefix.is_empty() || !inner_suffix.is_empty() {
        output = format!("{inner_prefix}{output}{inner_suffix}");
    }

    if rendering.quote == Some(true) {
        output = format!("\"{output}\"");
    }

    output = match rendering.wrap.unwrap_or_default() {
        WrapPunctuation::Parentheses => format!("({output})"),
        WrapPunctuation::SingleQuotes => format!("'{output}'"),
        WrapPunctuation::None => output,
    };

    let prefix = rendering.prefix.as_deref().unwrap_or_default();
    let suffix = rendering.suffix.as_deref().unwrap_or_default();
    format!("{prefix}{output}{suffix}")
}
