/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Declarative macros for the bibsheet crates.

/// Generates a string-backed enum with `as_str`, `from_id`, `ALL`, `Display`
/// and a string `Serialize` impl.
///
/// Each variant maps to one canonical id; extra accepted spellings follow the
/// id separated by `|`. Matching in `from_id` is ASCII case-insensitive and
/// ignores surrounding whitespace.
#[macro_export]
macro_rules! str_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $val:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            #[doc = "Returns the canonical id of this variant."]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $val, )+
                }
            }

            #[doc = "Looks a variant up by its id or one of its aliases."]
            pub fn from_id(id: &str) -> Option<Self> {
                let id = id.trim();
                $(
                    if id.eq_ignore_ascii_case($val) $(|| id.eq_ignore_ascii_case($alias))* {
                        return Some(Self::$variant);
                    }
                )+
                None
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    }
}

/// Merges fields from a `source` struct into a mutable `target` if `source.field.is_some()`.
#[macro_export]
macro_rules! merge_options {
    ($target:expr, $source:expr, $($field:ident),+ $(,)?) => {
        $(
            if $source.$field.is_some() {
                $target.$field = $source.$field.clone();
            }
        )+
    };
}

// AST builder macros for the embedded styles and tests.
// These use a quasi-DSL to quickly stamp out TemplateComponents.

#[macro_export]
macro_rules! tc_contributor {
    ($($key:ident = $val:expr),* $(,)?) => {
        $crate::template::TemplateComponent::Contributor(
            $crate::template::TemplateContributor {
                rendering: $crate::template::Rendering {
                    $( $key: Some($val.into()), )*
                    ..Default::default()
                },
            }
        )
    };
}

#[macro_export]
macro_rules! tc_date {
    ($form:ident $(, $key:ident = $val:expr)* $(,)?) => {
        $crate::template::TemplateComponent::Date(
            $crate::template::TemplateDate {
                form: $crate::template::DateForm::$form,
                rendering: $crate::template::Rendering {
                    $( $key: Some($val.into()), )*
                    ..Default::default()
                },
            }
        )
    };
}

#[macro_export]
macro_rules! tc_title {
    ($title_type:ident $(, $key:ident = $val:expr)* $(,)?) => {
        $crate::template::TemplateComponent::Title(
            $crate::template::TemplateTitle {
                title: $crate::template::TitleType::$title_type,
                rendering: $crate::template::Rendering {
                    $( $key: Some($val.into()), )*
                    ..Default::default()
                },
            }
        )
    };
}

#[macro_export]
macro_rules! tc_number {
    ($num_var:ident $(, $key:ident = $val:expr)* $(,)?) => {
        $crate::template::TemplateComponent::Number(
            $crate::template::TemplateNumber {
                number: $crate::template::NumberVariable::$num_var,
                rendering: $crate::template::Rendering {
                    $( $key: Some($val.into()), )*
                    ..Default::default()
                },
            }
        )
    };
}

#[macro_export]
macro_rules! tc_variable {
    ($var:ident $(, $key:ident = $val:expr)* $(,)?) => {
        $crate::template::TemplateComponent::Variable(
            $crate::template::TemplateVariable {
                variable: $crate::template::SimpleVariable::$var,
                rendering: $crate::template::Rendering {
                    $( $key: Some($val.into()), )*
                    ..Default::default()
                },
            }
        )
    };
}

/// Groups components; empty children are dropped before joining with the delimiter.
#[macro_export]
macro_rules! tc_list {
    ([$($item:expr),* $(,)?], $delimiter:expr $(, $key:ident = $val:expr)* $(,)?) => {
        $crate::template::TemplateComponent::List(
            $crate::template::TemplateList {
                items: vec![$($item),*],
                delimiter: $delimiter.to_string(),
                rendering: $crate::template::Rendering {
                    $( $key: Some($val.into()), )*
                    ..Default::default()
                },
            }
        )
    };
}

// Reference builder macros for tests and fixtures.

/// Builds a journal article `Reference` with a single structured-name author.
///
/// # Examples
/// ```
/// let r = bibsheet_core::ref_article!("s1", "Smith", "Jane", 2020, "A Title");
/// assert_eq!(r.year, Some(2020));
/// ```
#[macro_export]
macro_rules! ref_article {
    ($id:expr, $family:expr, $given:expr, $year:expr, $title:expr) => {
        $crate::reference::Reference {
            raw_id: $id.to_string(),
            entry_type: $crate::reference::EntryType::Article,
            authors: vec![$crate::reference::Person::new($family, $given)],
            title: $title.to_string(),
            year: Some($year),
            ..Default::default()
        }
    };
}

/// Builds a book `Reference` with a single structured-name author.
#[macro_export]
macro_rules! ref_book {
    ($id:expr, $family:expr, $given:expr, $year:expr, $title:expr) => {
        $crate::reference::Reference {
            raw_id: $id.to_string(),
            entry_type: $crate::reference::EntryType::Book,
            authors: vec![$crate::reference::Person::new($family, $given)],
            title: $title.to_string(),
            year: Some($year),
            ..Default::default()
        }
    };
}
