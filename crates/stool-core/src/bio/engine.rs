//! Placeholder substitution and whitespace normalization for bios.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::BioError;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// The fields the bio form collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BioField {
    Name,
    Role,
    Interests,
    Achievements,
    Location,
    Contact,
}

impl BioField {
    pub const ALL: [BioField; 6] = [
        BioField::Name,
        BioField::Role,
        BioField::Interests,
        BioField::Achievements,
        BioField::Location,
        BioField::Contact,
    ];

    /// Placeholder key used inside templates.
    pub fn key(&self) -> &'static str {
        match self {
            BioField::Name => "name",
            BioField::Role => "role",
            BioField::Interests => "interests",
            BioField::Achievements => "achievements",
            BioField::Location => "location",
            BioField::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BioField::Name => "Name",
            BioField::Role => "Role/Title",
            BioField::Interests => "Interests",
            BioField::Achievements => "Achievements",
            BioField::Location => "Location",
            BioField::Contact => "Contact/Links",
        }
    }

    /// Sample input shown next to the field.
    pub fn example(&self) -> &'static str {
        match self {
            BioField::Name => "John Doe",
            BioField::Role => "Software Engineer | Student",
            BioField::Interests => "AI, Web Development, Photography",
            BioField::Achievements => "Award winner | Published author",
            BioField::Location => "San Francisco, CA",
            BioField::Contact => "📧 email@example.com | 🔗 portfolio.com",
        }
    }
}

impl fmt::Display for BioField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BioField {
    type Err = BioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BioField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| BioError::UnknownField(s.to_string()))
    }
}

/// Field name to user-entered value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateFieldSet {
    values: BTreeMap<String, String>,
}

impl TemplateFieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every [`BioField`] present with an empty value, the state of a fresh form.
    pub fn with_known_fields() -> Self {
        let mut set = Self::new();
        for field in BioField::ALL {
            set.set(field.key(), "");
        }
        set
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn set_field(&mut self, field: BioField, value: impl Into<String>) {
        self.set(field.key(), value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// If `text` starts with a placeholder for a key in this set, returns the
    /// key's value and the byte length of the placeholder.
    fn match_placeholder(&self, text: &str) -> Option<(&str, usize)> {
        let inner = text.strip_prefix(OPEN)?;
        let end = inner.find(CLOSE)?;
        let value = self.get(&inner[..end])?;
        Some((value, OPEN.len() + end + CLOSE.len()))
    }
}

impl<K, V> FromIterator<(K, V)> for TemplateFieldSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, value) in iter {
            set.set(key, value);
        }
        set
    }
}

/// Render `template` with `fields` and normalize the result.
///
/// Values are inserted verbatim: a value that itself looks like a
/// placeholder is never expanded. Placeholders naming keys that are not in
/// `fields` stay in the output as written.
pub fn render(fields: &TemplateFieldSet, template: &str) -> String {
    normalize_whitespace(&substitute(fields, template))
}

fn substitute(fields: &TemplateFieldSet, template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];
        match fields.match_placeholder(candidate) {
            Some((value, token_len)) => {
                out.push_str(value.trim());
                rest = &candidate[token_len..];
            }
            None => {
                // Step over a single brace so "{{{name}}}" still finds "{{name}}".
                out.push('{');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn normalize_whitespace(text: &str) -> String {
    let kept: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    kept.join("\n")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Length as counted by the platforms' text inputs (UTF-16 code units).
pub fn char_count(text: &str) -> usize {
    text.encode_utf16().count()
}
