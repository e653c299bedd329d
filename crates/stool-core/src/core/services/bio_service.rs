//! Bio service: the bio form backed by the configured template catalog.

use crate::Result;
use crate::bio::{
    BioField, BioSession, BioTemplate, PlatformLimit, TemplateCatalog, default_limits,
};
use crate::clipboard::ClipboardSink;
use crate::storage::config::Config;

pub struct BioService {
    catalog: TemplateCatalog,
    limits: Vec<PlatformLimit>,
}

impl BioService {
    /// Built-in templates merged with the ones declared in `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            catalog: TemplateCatalog::with_custom(&config.bio.templates),
            limits: default_limits(),
        }
    }

    pub fn templates(&self) -> &[BioTemplate] {
        self.catalog.templates()
    }

    pub fn limits(&self) -> &[PlatformLimit] {
        &self.limits
    }

    /// A fresh, empty bio form using `template_id`.
    pub fn session(&self, template_id: &str) -> Result<BioSession> {
        let session = BioSession::new(self.catalog.clone(), self.limits.clone(), template_id)?;
        Ok(session)
    }

    /// Fill a form with `values` in one go. Later values for the same field win.
    pub fn compose<I, S>(&self, template_id: &str, values: I) -> Result<BioSession>
    where
        I: IntoIterator<Item = (BioField, S)>,
        S: Into<String>,
    {
        let mut session = self.session(template_id)?;
        for (field, value) in values {
            session.set_field(field, value);
        }
        log::debug!(
            "bio for template '{}' is {} characters",
            template_id,
            session.view().report.length
        );
        Ok(session)
    }

    /// Copy the session's bio; returns whether the clipboard accepted it.
    pub fn copy(&self, session: &BioSession, clipboard: &mut dyn ClipboardSink) -> bool {
        session.copy(clipboard)
    }
}
