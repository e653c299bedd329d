//! Resume data and the edits the builder form performs on it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ResumeError;

/// Opaque identifier of an education or experience entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(String);

impl EntryId {
    fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: EntryId,
    pub school: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: EntryId,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// Field names accept both `snake_case` and `camelCase` spellings.
fn normalize_field_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .collect::<String>()
        .to_lowercase()
}

macro_rules! field_enum {
    ($name:ident, $section:literal, { $($variant:ident => $key:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn key(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }
        }

        impl FromStr for $name {
            type Err = ResumeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalize_field_name(s);
                $name::ALL
                    .iter()
                    .copied()
                    .find(|f| normalize_field_name(f.key()) == wanted)
                    .ok_or_else(|| ResumeError::UnknownField {
                        section: $section.to_string(),
                        field: s.to_string(),
                    })
            }
        }
    };
}

field_enum!(PersonalField, "personal", {
    FullName => "full_name",
    Email => "email",
    Phone => "phone",
    Location => "location",
    Summary => "summary",
});

field_enum!(EducationField, "education", {
    School => "school",
    Degree => "degree",
    Field => "field",
    StartDate => "start_date",
    EndDate => "end_date",
    Description => "description",
});

field_enum!(ExperienceField, "experience", {
    Company => "company",
    Position => "position",
    StartDate => "start_date",
    EndDate => "end_date",
    Description => "description",
});

impl PersonalInfo {
    fn slot(&mut self, field: PersonalField) -> &mut String {
        match field {
            PersonalField::FullName => &mut self.full_name,
            PersonalField::Email => &mut self.email,
            PersonalField::Phone => &mut self.phone,
            PersonalField::Location => &mut self.location,
            PersonalField::Summary => &mut self.summary,
        }
    }
}

impl Education {
    fn blank() -> Self {
        Self {
            id: EntryId::generate(),
            school: String::new(),
            degree: String::new(),
            field: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        }
    }

    fn slot(&mut self, field: EducationField) -> &mut String {
        match field {
            EducationField::School => &mut self.school,
            EducationField::Degree => &mut self.degree,
            EducationField::Field => &mut self.field,
            EducationField::StartDate => &mut self.start_date,
            EducationField::EndDate => &mut self.end_date,
            EducationField::Description => &mut self.description,
        }
    }
}

impl Experience {
    fn blank() -> Self {
        Self {
            id: EntryId::generate(),
            company: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        }
    }

    fn slot(&mut self, field: ExperienceField) -> &mut String {
        match field {
            ExperienceField::Company => &mut self.company,
            ExperienceField::Position => &mut self.position,
            ExperienceField::StartDate => &mut self.start_date,
            ExperienceField::EndDate => &mut self.end_date,
            ExperienceField::Description => &mut self.description,
        }
    }
}

/// Split a comma-separated skill list, trimming each entry. Empty entries
/// are kept, so `"a,,b"` has three skills.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',').map(|skill| skill.trim().to_string()).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Vec<String>,
}

impl ResumeData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_personal(&mut self, field: PersonalField, value: impl Into<String>) {
        *self.personal_info.slot(field) = value.into();
    }

    /// Append an empty education entry and return its id.
    pub fn add_education(&mut self) -> EntryId {
        let entry = Education::blank();
        let id = entry.id.clone();
        self.education.push(entry);
        id
    }

    /// Returns false if no entry has `id`.
    pub fn update_education(
        &mut self,
        id: &EntryId,
        field: EducationField,
        value: impl Into<String>,
    ) -> bool {
        match self.education.iter_mut().find(|e| &e.id == id) {
            Some(entry) => {
                *entry.slot(field) = value.into();
                true
            }
            None => false,
        }
    }

    pub fn remove_education(&mut self, id: &EntryId) -> bool {
        let before = self.education.len();
        self.education.retain(|e| &e.id != id);
        self.education.len() != before
    }

    /// Append an empty experience entry and return its id.
    pub fn add_experience(&mut self) -> EntryId {
        let entry = Experience::blank();
        let id = entry.id.clone();
        self.experience.push(entry);
        id
    }

    /// Returns false if no entry has `id`.
    pub fn update_experience(
        &mut self,
        id: &EntryId,
        field: ExperienceField,
        value: impl Into<String>,
    ) -> bool {
        match self.experience.iter_mut().find(|e| &e.id == id) {
            Some(entry) => {
                *entry.slot(field) = value.into();
                true
            }
            None => false,
        }
    }

    pub fn remove_experience(&mut self, id: &EntryId) -> bool {
        let before = self.experience.len();
        self.experience.retain(|e| &e.id != id);
        self.experience.len() != before
    }

    pub fn set_skills(&mut self, raw: &str) {
        self.skills = parse_skills(raw);
    }

    /// The skills as they appear in the comma-separated input box.
    pub fn skills_input(&self) -> String {
        self.skills.join(", ")
    }
}
