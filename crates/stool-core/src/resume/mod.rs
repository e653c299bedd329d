//! Resume builder: editable resume data and its plain-text preview.

pub mod export;
pub mod form;
pub mod model;
pub mod preview;

pub use export::export_pdf;
pub use form::{EducationForm, ExperienceForm, ResumeForm};
pub use model::{
    Education, EducationField, EntryId, Experience, ExperienceField, PersonalField, PersonalInfo,
    ResumeData, parse_skills,
};
pub use preview::{ResumeTemplate, render_preview};
