use serde::{Deserialize, Serialize};

/// Resume layout chosen in the builder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeTemplate {
    #[default]
    Professional,
    Classic,
    Modern,
    Minimal,
    Creative,
    /// Deliberately parser-hostile layout (tables, columns, graphics).
    Anti,
    /// Any identifier this service does not know about.
    #[serde(other)]
    Other,
}

impl ResumeTemplate {
    /// Score adjustment applied after all content bonuses.
    pub fn score_adjustment(self) -> i32 {
        match self {
            ResumeTemplate::Professional | ResumeTemplate::Classic => 5,
            ResumeTemplate::Anti => -10,
            _ => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResumeTemplate::Professional => "professional",
            ResumeTemplate::Classic => "classic",
            ResumeTemplate::Modern => "modern",
            ResumeTemplate::Minimal => "minimal",
            ResumeTemplate::Creative => "creative",
            ResumeTemplate::Anti => "anti",
            ResumeTemplate::Other => "other",
        }
    }
}
