//! Resume service: read a form document and project it.

use std::path::Path;

use crate::Result;
use crate::error::StorageError;
use crate::resume::{ResumeForm, ResumeTemplate, export_pdf, render_preview};

#[derive(Debug, Default)]
pub struct ResumeService;

impl ResumeService {
    pub fn new() -> Self {
        Self
    }

    pub async fn load_form(&self, path: &Path) -> Result<ResumeForm> {
        let document = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| StorageError::FileIo {
                path: path.to_string_lossy().to_string(),
                source,
            })?;
        Ok(ResumeForm::parse(&document)?)
    }

    /// Template from the command line if given, otherwise the form's own.
    pub fn template(&self, form: &ResumeForm, requested: Option<&str>) -> Result<ResumeTemplate> {
        match requested {
            Some(id) => Ok(id.parse::<ResumeTemplate>()?),
            None => Ok(form.template()?),
        }
    }

    pub fn preview(&self, form: &ResumeForm, requested: Option<&str>) -> Result<String> {
        let template = self.template(form, requested)?;
        Ok(render_preview(&form.to_resume(), template))
    }

    pub fn export_pdf(&self, form: &ResumeForm, requested: Option<&str>) -> Result<Vec<u8>> {
        let template = self.template(form, requested)?;
        export_pdf(&form.to_resume(), template)
    }

    /// An empty form document to fill in.
    pub fn blank_document(&self) -> Result<String> {
        Ok(ResumeForm::blank().to_document()?)
    }
}
