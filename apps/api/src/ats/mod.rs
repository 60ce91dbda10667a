//! ATS score estimator: a deterministic completeness and keyword-strength
//! heuristic shown to job seekers while they edit a resume.

pub mod handlers;
pub mod scoring;
pub mod template;

pub use scoring::{estimate_ats_score, score_resume, AtsReport};
pub use template::ResumeTemplate;
