/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Template components for bibsheet styles.
//!
//! A style is a table of templates, one per coarse entry type. Each template
//! is a list of simple, typed instructions that the processor interprets:
//! pick a value from the reference, then decorate it with casing, quotes,
//! wrapping punctuation and affixes. A component whose value is missing
//! renders as nothing at all, affixes included.

/// Rendering instructions applied to template components.
///
/// The processor applies them in a fixed order: text case, inner affixes,
/// quotes, wrap, outer affixes.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Rendering {
    pub text_case: Option<TextCase>,
    /// Wrap in straight double quotes (after inner affixes, so punctuation
    /// placed in `inner_suffix` lands inside the quotes).
    pub quote: Option<bool>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub inner_prefix: Option<String>,
    pub inner_suffix: Option<String>,
    pub wrap: Option<WrapPunctuation>,
}

/// Punctuation to wrap a component in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WrapPunctuation {
    Parentheses,
    SingleQuotes,
    #[default]
    None,
}

/// Case transformation for title-like values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCase {
    /// Only the first word (and the first word after a colon) is capitalised.
    Sentence,
    /// Headline style: every major word is capitalised.
    Title,
}

/// A template component - the building blocks of bibliography templates.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateComponent {
    Contributor(TemplateContributor),
    Date(TemplateDate),
    Title(TemplateTitle),
    Number(TemplateNumber),
    Variable(TemplateVariable),
    List(TemplateList),
}

impl TemplateComponent {
    /// Get the rendering options for this component.
    pub fn rendering(&self) -> &Rendering {
        match self {
            TemplateComponent::Contributor(c) => &c.rendering,
            TemplateComponent::Date(d) => &d.rendering,
            TemplateComponent::Title(t) => &t.rendering,
            TemplateComponent::Number(n) => &n.rendering,
            TemplateComponent::Variable(v) => &v.rendering,
            TemplateComponent::List(l) => &l.rendering,
        }
    }
}

/// The author list of the reference.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TemplateContributor {
    pub rendering: Rendering,
}

/// The publication date.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateDate {
    pub form: DateForm,
    pub rendering: Rendering,
}

/// Date rendering forms.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DateForm {
    #[default]
    Year,
    /// Year followed by the month when one is known ("2023 Mar").
    YearMonth,
}

/// A title component.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateTitle {
    pub title: TitleType,
    pub rendering: Rendering,
}

/// Types of titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleType {
    /// The title of the cited work.
    Primary,
    /// Journal, book or proceedings title containing the cited work.
    Container,
}

/// A number component (volume, issue, pages).
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateNumber {
    pub number: NumberVariable,
    pub rendering: Rendering,
}

/// Number variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberVariable {
    Volume,
    Issue,
    Pages,
}

/// A simple string variable.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateVariable {
    pub variable: SimpleVariable,
    pub rendering: Rendering,
}

/// Simple string variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleVariable {
    Publisher,
    Doi,
}

/// A list component for grouping multiple items with a delimiter.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateList {
    pub items: Vec<TemplateComponent>,
    pub delimiter: String,
    pub rendering: Rendering,
}
