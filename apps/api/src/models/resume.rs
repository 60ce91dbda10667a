use serde::{Deserialize, Serialize};

/// A resume draft as edited in the builder form. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    pub name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Skills,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub title: String,
    pub company: String,
    /// Free-form date range, e.g. "2021 - Present".
    pub dates: String,
    /// Newline-delimited bullet points.
    pub bullets: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub dates: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Comma-delimited free text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub technical: String,
    pub soft: String,
}

impl Experience {
    pub fn bullet_lines(&self) -> impl Iterator<Item = &str> {
        self.bullets
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }
}

impl Skills {
    pub fn technical_list(&self) -> Vec<&str> {
        split_csv(&self.technical)
    }
}

fn split_csv(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
