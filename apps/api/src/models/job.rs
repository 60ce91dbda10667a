use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::{resolve_city, Coordinate};

/// A job advertisement as delivered by the posting store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub description: String,
    /// Explicit location; when absent the city table is consulted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<Coordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<DateTime<Utc>>,
}

impl JobPosting {
    /// Explicit coordinate if present, otherwise the city lookup (with remote fallback).
    pub fn resolved_coordinate(&self) -> Coordinate {
        self.coordinate
            .unwrap_or_else(|| resolve_city(&self.city))
    }
}
