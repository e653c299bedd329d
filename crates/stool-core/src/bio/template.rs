use serde::{Deserialize, Serialize};

use crate::error::BioError;

pub const DEFAULT_TEMPLATE_ID: &str = "professional";

/// A named bio layout with `{{field}}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BioTemplate {
    pub id: String,
    pub name: String,
    pub template: String,
}

impl BioTemplate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            template: template.into(),
        }
    }
}

pub fn builtin_templates() -> Vec<BioTemplate> {
    vec![
        BioTemplate::new(
            "professional",
            "Professional",
            "{{name}} | {{role}} 💼\n{{achievements}}\n📍 {{location}}\n{{contact}}",
        ),
        BioTemplate::new(
            "creative",
            "Creative",
            "✨ {{name}} ✨\n🎨 {{role}}\n🌟 {{interests}}\n🌍 {{location}}\n📱 {{contact}}",
        ),
        BioTemplate::new(
            "minimal",
            "Minimal",
            "{{name}} • {{role}}\n{{interests}}\n{{contact}}",
        ),
        BioTemplate::new(
            "student",
            "Student",
            "📚 {{name}}\n🎓 {{role}}\n💡 {{interests}}\n🏆 {{achievements}}\n📍 {{location}}",
        ),
    ]
}

/// Ordered set of selectable templates.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<BioTemplate>,
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self {
            templates: builtin_templates(),
        }
    }
}

impl TemplateCatalog {
    /// Built-in templates plus `custom` ones. A custom template whose id
    /// matches a built-in replaces it in place; new ids are appended.
    pub fn with_custom(custom: &[BioTemplate]) -> Self {
        let mut catalog = Self::default();
        for template in custom {
            match catalog.templates.iter_mut().find(|t| t.id == template.id) {
                Some(existing) => *existing = template.clone(),
                None => catalog.templates.push(template.clone()),
            }
        }
        catalog
    }

    pub fn templates(&self) -> &[BioTemplate] {
        &self.templates
    }

    pub fn ids(&self) -> Vec<String> {
        self.templates.iter().map(|t| t.id.clone()).collect()
    }

    pub fn find(&self, id: &str) -> Result<&BioTemplate, BioError> {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| BioError::UnknownTemplate {
                id: id.to_string(),
                available: self.ids(),
            })
    }
}
