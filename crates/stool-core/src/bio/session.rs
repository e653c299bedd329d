//! Bio form state and its derived view.

use serde::Serialize;

use super::engine::{BioField, TemplateFieldSet, render};
use super::limits::{CharacterReport, PlatformLimit, check_limits};
use super::template::TemplateCatalog;
use crate::clipboard::{ClipboardSink, copy_to_clipboard};
use crate::error::BioError;

/// Everything the user controls on the bio form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BioState {
    pub fields: TemplateFieldSet,
    pub template_id: String,
}

/// What the form shows for a given [`BioState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BioView {
    pub template_id: String,
    pub bio: String,
    pub report: CharacterReport,
}

pub fn recompute(
    state: &BioState,
    catalog: &TemplateCatalog,
    limits: &[PlatformLimit],
) -> Result<BioView, BioError> {
    let template = catalog.find(&state.template_id)?;
    let bio = render(&state.fields, &template.template);
    let report = check_limits(&bio, limits);
    Ok(BioView {
        template_id: template.id.clone(),
        bio,
        report,
    })
}

/// A bio form that keeps its view in sync with every edit.
pub struct BioSession {
    state: BioState,
    catalog: TemplateCatalog,
    limits: Vec<PlatformLimit>,
    view: BioView,
}

impl BioSession {
    pub fn new(
        catalog: TemplateCatalog,
        limits: Vec<PlatformLimit>,
        template_id: &str,
    ) -> Result<Self, BioError> {
        let state = BioState {
            fields: TemplateFieldSet::with_known_fields(),
            template_id: template_id.to_string(),
        };
        let view = recompute(&state, &catalog, &limits)?;
        Ok(Self {
            state,
            catalog,
            limits,
            view,
        })
    }

    pub fn state(&self) -> &BioState {
        &self.state
    }

    pub fn view(&self) -> &BioView {
        &self.view
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub fn set_field(&mut self, field: BioField, value: impl Into<String>) {
        self.state.fields.set_field(field, value);
        self.refresh();
    }

    /// Switch templates. An unknown id leaves the session untouched.
    pub fn select_template(&mut self, id: &str) -> Result<(), BioError> {
        self.catalog.find(id)?;
        self.state.template_id = id.to_string();
        self.refresh();
        Ok(())
    }

    /// Copy the current bio. Failures are logged, never raised.
    pub fn copy(&self, clipboard: &mut dyn ClipboardSink) -> bool {
        copy_to_clipboard(clipboard, &self.view.bio)
    }

    fn refresh(&mut self) {
        // The template id is validated on every path that changes it.
        if let Ok(view) = recompute(&self.state, &self.catalog, &self.limits) {
            self.view = view;
        }
    }
}
