use axum::Json;
use serde::{Deserialize, Serialize};

use crate::ats::{estimate_ats_score, ResumeTemplate};
use crate::models::resume::ResumeData;
use crate::resume::{apply_event, ResumeEvent};

#[derive(Debug, Deserialize)]
pub struct DraftEventRequest {
    #[serde(default)]
    pub state: ResumeData,
    pub event: ResumeEvent,
    /// Template the draft is previewed with; drives the live score.
    #[serde(default)]
    pub template: ResumeTemplate,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DraftEventResponse {
    pub state: ResumeData,
    pub ats_score: u32,
}

/// POST /api/v1/resumes/draft
///
/// Applies one form event to the supplied draft and returns the next draft
/// together with its ATS score, so the form can re-render both.
pub async fn handle_draft_event(Json(req): Json<DraftEventRequest>) -> Json<DraftEventResponse> {
    let state = apply_event(req.state, req.event);
    let ats_score = estimate_ats_score(&state, req.template);
    Json(DraftEventResponse { state, ats_score })
}
