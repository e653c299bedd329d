//! Plain-text rendering of a resume.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::model::ResumeData;
use crate::error::ResumeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeTemplate {
    #[default]
    Modern,
    Classic,
    Minimal,
    Professional,
}

impl ResumeTemplate {
    pub const ALL: [ResumeTemplate; 4] = [
        ResumeTemplate::Modern,
        ResumeTemplate::Classic,
        ResumeTemplate::Minimal,
        ResumeTemplate::Professional,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ResumeTemplate::Modern => "modern",
            ResumeTemplate::Classic => "classic",
            ResumeTemplate::Minimal => "minimal",
            ResumeTemplate::Professional => "professional",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ResumeTemplate::Modern => "Modern",
            ResumeTemplate::Classic => "Classic",
            ResumeTemplate::Minimal => "Minimal",
            ResumeTemplate::Professional => "Professional",
        }
    }

    fn heading(&self, title: &str) -> String {
        match self {
            ResumeTemplate::Modern => format!("## {}", title),
            ResumeTemplate::Classic => {
                let upper = title.to_uppercase();
                let rule = "=".repeat(upper.chars().count());
                format!("{}\n{}", upper, rule)
            }
            ResumeTemplate::Minimal => title.to_string(),
            ResumeTemplate::Professional => {
                format!("{}\n{}", title, "-".repeat(title.chars().count()))
            }
        }
    }
}

impl FromStr for ResumeTemplate {
    type Err = ResumeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResumeTemplate::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ResumeError::UnknownTemplate(s.to_string()))
    }
}

fn push_line(out: &mut String, line: &str) {
    if !line.trim().is_empty() {
        out.push_str(line);
        out.push('\n');
    }
}

fn date_range(start: &str, end: &str) -> String {
    match (start.trim(), end.trim()) {
        ("", "") => String::new(),
        (start, end) => format!("{} - {}", start, end).trim().to_string(),
    }
}

fn degree_line(degree: &str, field: &str) -> String {
    match (degree.trim(), field.trim()) {
        (degree, "") => degree.to_string(),
        ("", field) => field.to_string(),
        (degree, field) => format!("{} in {}", degree, field),
    }
}

/// Project `resume` into a readable layout. Sections without content are
/// left out entirely.
pub fn render_preview(resume: &ResumeData, template: ResumeTemplate) -> String {
    let info = &resume.personal_info;
    let mut out = String::new();

    push_line(&mut out, &info.full_name);
    push_line(&mut out, &info.email);
    push_line(&mut out, &info.phone);
    push_line(&mut out, &info.location);

    let mut sections: Vec<String> = Vec::new();

    if !info.summary.is_empty() {
        sections.push(format!(
            "{}\n{}\n",
            template.heading("Professional Summary"),
            info.summary
        ));
    }

    if !resume.experience.is_empty() {
        let mut section = template.heading("Experience");
        section.push('\n');
        for exp in &resume.experience {
            section.push('\n');
            push_line(&mut section, &exp.position);
            push_line(&mut section, &exp.company);
            push_line(&mut section, &date_range(&exp.start_date, &exp.end_date));
            push_line(&mut section, &exp.description);
        }
        sections.push(section);
    }

    if !resume.education.is_empty() {
        let mut section = template.heading("Education");
        section.push('\n');
        for edu in &resume.education {
            section.push('\n');
            push_line(&mut section, &edu.school);
            push_line(&mut section, &degree_line(&edu.degree, &edu.field));
            push_line(&mut section, &date_range(&edu.start_date, &edu.end_date));
            push_line(&mut section, &edu.description);
        }
        sections.push(section);
    }

    if !resume.skills.is_empty() {
        sections.push(format!(
            "{}\n{}\n",
            template.heading("Skills"),
            resume.skills.join(" · ")
        ));
    }

    for section in sections {
        out.push('\n');
        out.push_str(&section);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::model::{EducationField, ExperienceField, PersonalField};

    fn sample() -> ResumeData {
        let mut resume = ResumeData::new();
        resume.set_personal(PersonalField::FullName, "Ada Lovelace");
        resume.set_personal(PersonalField::Email, "ada@example.com");
        let exp = resume.add_experience();
        resume.update_experience(&exp, ExperienceField::Position, "Analyst");
        resume.update_experience(&exp, ExperienceField::Company, "Analytical Engines");
        resume.update_experience(&exp, ExperienceField::StartDate, "1842-01-01");
        resume.update_experience(&exp, ExperienceField::EndDate, "1843-09-01");
        let edu = resume.add_education();
        resume.update_education(&edu, EducationField::School, "Home");
        resume.update_education(&edu, EducationField::Degree, "Tutoring");
        resume.update_education(&edu, EducationField::Field, "Mathematics");
        resume.set_skills("Mathematics, Translation");
        resume
    }

    #[test]
    fn test_empty_resume_renders_nothing() {
        assert_eq!(render_preview(&ResumeData::new(), ResumeTemplate::Modern), "");
    }

    #[test]
    fn test_preview_modern() {
        let preview = render_preview(&sample(), ResumeTemplate::Modern);
        let expected = "\
Ada Lovelace
ada@example.com

## Experience

Analyst
Analytical Engines
1842-01-01 - 1843-09-01

## Education

Home
Tutoring in Mathematics

## Skills
Mathematics · Translation
";
        assert_eq!(preview, expected);
    }

    #[test]
    fn test_blank_entry_lines_are_skipped() {
        let mut resume = ResumeData::new();
        resume.add_education();
        let preview = render_preview(&resume, ResumeTemplate::Minimal);
        assert_eq!(preview, "\nEducation\n\n");
    }

    #[test]
    fn test_cleared_skills_box_keeps_section() {
        let mut resume = ResumeData::new();
        resume.set_skills("");
        let preview = render_preview(&resume, ResumeTemplate::Minimal);
        assert_eq!(preview, "\nSkills\n\n");
    }

    #[test]
    fn test_summary_only_when_present() {
        let mut resume = sample();
        assert!(!render_preview(&resume, ResumeTemplate::Minimal).contains("Professional Summary"));
        resume.set_personal(PersonalField::Summary, "Writes programs for engines.");
        let preview = render_preview(&resume, ResumeTemplate::Minimal);
        assert!(preview.contains("Professional Summary\nWrites programs for engines.\n"));
    }

    #[test]
    fn test_classic_headings() {
        let preview = render_preview(&sample(), ResumeTemplate::Classic);
        assert!(preview.contains("EXPERIENCE\n==========\n"));
        assert!(preview.contains("SKILLS\n======\n"));
    }

    #[test]
    fn test_template_from_str() {
        assert_eq!(
            "Professional".parse::<ResumeTemplate>().unwrap(),
            ResumeTemplate::Professional
        );
        assert!(matches!(
            "fancy".parse::<ResumeTemplate>(),
            Err(ResumeError::UnknownTemplate(_))
        ));
    }
}
