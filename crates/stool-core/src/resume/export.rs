use super::model::ResumeData;
use super::preview::ResumeTemplate;
use crate::error::{AppError, CliError};

/// PDF rendering of a resume.
// TODO: render `render_preview` output through a PDF writer once one is chosen.
pub fn export_pdf(resume: &ResumeData, template: ResumeTemplate) -> Result<Vec<u8>, AppError> {
    log::debug!(
        "Generating {} PDF with data: {}",
        template.id(),
        serde_json::to_string(resume).unwrap_or_default()
    );
    Err(CliError::NotImplemented {
        command: "resume pdf".to_string(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_pdf_is_not_implemented() {
        let result = export_pdf(&ResumeData::new(), ResumeTemplate::Modern);
        assert!(matches!(
            result,
            Err(AppError::Cli(CliError::NotImplemented { .. }))
        ));
    }
}
