//! TOML snapshot of the resume form.
//!
//! A form document is applied to a fresh [`ResumeData`] through the same
//! add/update operations the interactive builder uses.

use serde::{Deserialize, Serialize};

use super::model::{EducationField, ExperienceField, PersonalField, PersonalInfo, ResumeData};
use super::preview::ResumeTemplate;
use crate::error::ResumeError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationForm {
    pub school: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl EducationForm {
    fn values(&self) -> [(EducationField, &str); 6] {
        [
            (EducationField::School, self.school.as_str()),
            (EducationField::Degree, self.degree.as_str()),
            (EducationField::Field, self.field.as_str()),
            (EducationField::StartDate, self.start_date.as_str()),
            (EducationField::EndDate, self.end_date.as_str()),
            (EducationField::Description, self.description.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceForm {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl ExperienceForm {
    fn values(&self) -> [(ExperienceField, &str); 5] {
        [
            (ExperienceField::Company, self.company.as_str()),
            (ExperienceField::Position, self.position.as_str()),
            (ExperienceField::StartDate, self.start_date.as_str()),
            (ExperienceField::EndDate, self.end_date.as_str()),
            (ExperienceField::Description, self.description.as_str()),
        ]
    }
}

// Plain values first: TOML cannot emit a value after a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeForm {
    pub template: String,
    /// Comma-separated, as typed into the skills box. Left empty, the
    /// box counts as untouched and the resume has no skills.
    pub skills: String,
    pub personal: PersonalInfo,
    pub education: Vec<EducationForm>,
    pub experience: Vec<ExperienceForm>,
}

impl ResumeForm {
    pub fn parse(document: &str) -> Result<Self, ResumeError> {
        toml::from_str(document).map_err(|e| ResumeError::FormParse {
            message: e.to_string(),
        })
    }

    /// A form with one empty entry per section, for users to fill in.
    pub fn blank() -> Self {
        Self {
            template: ResumeTemplate::default().id().to_string(),
            skills: String::new(),
            personal: PersonalInfo::default(),
            education: vec![EducationForm::default()],
            experience: vec![ExperienceForm::default()],
        }
    }

    pub fn to_document(&self) -> Result<String, ResumeError> {
        toml::to_string_pretty(self).map_err(|e| ResumeError::FormParse {
            message: format!("Failed to serialize form: {}", e),
        })
    }

    /// The chosen template; an empty value means the default.
    pub fn template(&self) -> Result<ResumeTemplate, ResumeError> {
        if self.template.trim().is_empty() {
            return Ok(ResumeTemplate::default());
        }
        self.template.parse()
    }

    pub fn to_resume(&self) -> ResumeData {
        let mut resume = ResumeData::new();

        let personal = [
            (PersonalField::FullName, &self.personal.full_name),
            (PersonalField::Email, &self.personal.email),
            (PersonalField::Phone, &self.personal.phone),
            (PersonalField::Location, &self.personal.location),
            (PersonalField::Summary, &self.personal.summary),
        ];
        for (field, value) in personal {
            resume.set_personal(field, value.as_str());
        }

        for entry in &self.education {
            let id = resume.add_education();
            for (field, value) in entry.values() {
                resume.update_education(&id, field, value);
            }
        }

        for entry in &self.experience {
            let id = resume.add_experience();
            for (field, value) in entry.values() {
                resume.update_experience(&id, field, value);
            }
        }

        if !self.skills.is_empty() {
            resume.set_skills(&self.skills);
        }
        resume
    }
}
