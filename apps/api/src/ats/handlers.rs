use axum::Json;
use serde::Deserialize;
use tracing::debug;

use crate::ats::{score_resume, AtsReport, ResumeTemplate};
use crate::models::resume::ResumeData;

#[derive(Debug, Deserialize)]
pub struct AtsScoreRequest {
    #[serde(default)]
    pub resume: ResumeData,
    #[serde(default)]
    pub template: ResumeTemplate,
}

/// POST /api/v1/resumes/ats-score
///
/// Advisory only: every input produces a report.
pub async fn handle_ats_score(Json(req): Json<AtsScoreRequest>) -> Json<AtsReport> {
    let report = score_resume(&req.resume, req.template);
    debug!(
        "ATS score {} for template {}",
        report.score,
        req.template.as_str()
    );
    Json(report)
}
