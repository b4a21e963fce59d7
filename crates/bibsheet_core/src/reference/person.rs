/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use serde::Serialize;
use std::fmt;

/// A structured personal (or corporate) name.
///
/// At least one part is non-empty. A name that could not be split is stored
/// entirely in `family` with an empty `given`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Person {
    pub given: String,
    pub family: String,
}

impl Person {
    pub fn new(family: impl Into<String>, given: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            given: given.into(),
        }
    }

    /// A single unstructured name, e.g. an organisation.
    pub fn literal(name: impl Into<String>) -> Self {
        Self {
            family: name.into(),
            given: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.given.is_empty() && self.family.is_empty()
    }

    /// The family name, or the given name for given-only entries.
    pub fn family_or_given(&self) -> &str {
        if self.family.is_empty() {
            &self.given
        } else {
            &self.family
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.given.is_empty(), self.family.is_empty()) {
            (true, _) => f.write_str(&self.family),
            (false, true) => f.write_str(&self.given),
            (false, false) => write!(f, "{} {}", self.given, self.family),
        }
    }
}
