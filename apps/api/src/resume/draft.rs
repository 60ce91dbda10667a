//! `apply_event(state, event) -> state` for the resume builder form.
//!
//! Every form interaction becomes a `ResumeEvent`; the reducer is pure and
//! returns the next draft. Events that address a missing list index are no-ops.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::resume::{Education, Experience, ResumeData, Skills};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    JobTitle,
    Email,
    Phone,
    Location,
    Linkedin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    Title,
    Company,
    Dates,
    Bullets,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    Degree,
    Institution,
    Dates,
    Notes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResumeEvent {
    SetContact {
        field: ContactField,
        value: String,
    },
    SetSummary {
        value: String,
    },
    AddExperience,
    UpdateExperience {
        index: usize,
        field: ExperienceField,
        value: String,
    },
    RemoveExperience {
        index: usize,
    },
    AddEducation,
    UpdateEducation {
        index: usize,
        field: EducationField,
        value: String,
    },
    RemoveEducation {
        index: usize,
    },
    SetSkills {
        #[serde(default)]
        technical: String,
        #[serde(default)]
        soft: String,
    },
    Reset,
}

pub fn apply_event(mut state: ResumeData, event: ResumeEvent) -> ResumeData {
    match event {
        ResumeEvent::SetContact { field, value } => {
            let slot = match field {
                ContactField::Name => &mut state.name,
                ContactField::JobTitle => &mut state.job_title,
                ContactField::Email => &mut state.email,
                ContactField::Phone => &mut state.phone,
                ContactField::Location => &mut state.location,
                ContactField::Linkedin => &mut state.linkedin,
            };
            *slot = value;
        }
        ResumeEvent::SetSummary { value } => state.summary = value,
        ResumeEvent::AddExperience => state.experience.push(Experience::default()),
        ResumeEvent::UpdateExperience {
            index,
            field,
            value,
        } => match state.experience.get_mut(index) {
            Some(entry) => match field {
                ExperienceField::Title => entry.title = value,
                ExperienceField::Company => entry.company = value,
                ExperienceField::Dates => entry.dates = value,
                ExperienceField::Bullets => entry.bullets = value,
            },
            None => debug!("Ignoring update to missing experience entry {index}"),
        },
        ResumeEvent::RemoveExperience { index } => {
            if index < state.experience.len() {
                state.experience.remove(index);
            } else {
                debug!("Ignoring removal of missing experience entry {index}");
            }
        }
        ResumeEvent::AddEducation => state.education.push(Education::default()),
        ResumeEvent::UpdateEducation {
            index,
            field,
            value,
        } => match state.education.get_mut(index) {
            Some(entry) => match field {
                EducationField::Degree => entry.degree = value,
                EducationField::Institution => entry.institution = value,
                EducationField::Dates => entry.dates = value,
                EducationField::Notes => {
                    entry.notes = if value.trim().is_empty() {
                        None
                    } else {
                        Some(value)
                    }
                }
            },
            None => debug!("Ignoring update to missing education entry {index}"),
        },
        ResumeEvent::RemoveEducation { index } => {
            if index < state.education.len() {
                state.education.remove(index);
            } else {
                debug!("Ignoring removal of missing education entry {index}");
            }
        }
        ResumeEvent::SetSkills { technical, soft } => state.skills = Skills { technical, soft },
        ResumeEvent::Reset => state = ResumeData::default(),
    }
    state
}
