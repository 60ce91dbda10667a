//! Additive resume scoring heuristic.
//!
//! Algorithm:
//! 1. Start at 50.
//! 2. +5 when name, job title, email and summary are all filled in.
//! 3. +10 when the first experience entry has more than 30 characters of bullets.
//! 4. +5 when the first education entry names an institution.
//! 5. +2 per distinct action verb found in summary/bullets/skills, capped at +15.
//! 6. +2 per quantified figure (ASCII digits followed by `+ % x k` or whitespace), capped at +10.
//! 7. Template adjustment: +5 professional/classic, -10 anti.
//! 8. Clamp to 0..=100.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ats::template::ResumeTemplate;
use crate::models::resume::ResumeData;

const BASE_SCORE: i32 = 50;
const COMPLETENESS_BONUS: i32 = 5;
const EXPERIENCE_BONUS: i32 = 10;
const EDUCATION_BONUS: i32 = 5;
const POINTS_PER_HIT: i32 = 2;
const ACTION_VERB_CAP: i32 = 15;
const METRIC_CAP: i32 = 10;

/// Bullets must be longer than this (in characters) to earn the experience bonus.
const MIN_BULLET_CHARS: usize = 30;
const RECOMMENDED_TECH_SKILLS: usize = 5;
const RECOMMENDED_BULLETS: usize = 3;

const ACTION_VERBS: &[&str] = &[
    "managed",
    "developed",
    "achieved",
    "implemented",
    "led",
    "created",
    "optimized",
];

static METRIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+[+%xk\s]").unwrap());

/// Points awarded by one rule of the heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsRule {
    pub rule: String,
    pub points: i32,
    pub max_points: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsReport {
    pub score: u32, // 0 – 100
    pub template: ResumeTemplate,
    pub breakdown: Vec<AtsRule>,
    pub recommendations: Vec<String>,
}

/// Returns just the 0–100 score.
pub fn estimate_ats_score(resume: &ResumeData, template: ResumeTemplate) -> u32 {
    score_resume(resume, template).score
}

/// Scores a resume draft and explains where the points came from.
pub fn score_resume(resume: &ResumeData, template: ResumeTemplate) -> AtsReport {
    let mut breakdown = Vec::with_capacity(6);
    let mut recommendations = Vec::new();

    let missing_contact = missing_contact_fields(resume);
    breakdown.push(rule(
        "completeness",
        if missing_contact.is_empty() {
            COMPLETENESS_BONUS
        } else {
            recommendations.push(format!("Fill in your {}", missing_contact.join(", ")));
            0
        },
        COMPLETENESS_BONUS,
    ));

    let experience_points = match resume.experience.first() {
        Some(first) if first.bullets.chars().count() > MIN_BULLET_CHARS => {
            if first.bullet_lines().count() < RECOMMENDED_BULLETS {
                recommendations.push(format!(
                    "Add at least {RECOMMENDED_BULLETS} bullet points to your most recent role"
                ));
            }
            EXPERIENCE_BONUS
        }
        Some(_) => {
            recommendations
                .push("Describe your most recent role in more detail".to_string());
            0
        }
        None => {
            recommendations.push("Add at least one work experience entry".to_string());
            0
        }
    };
    breakdown.push(rule("experience", experience_points, EXPERIENCE_BONUS));

    let education_points = match resume.education.first() {
        Some(first) if !first.institution.is_empty() => EDUCATION_BONUS,
        _ => {
            recommendations.push("Add your education with the institution name".to_string());
            0
        }
    };
    breakdown.push(rule("education", education_points, EDUCATION_BONUS));

    let corpus = keyword_corpus(resume);

    let verbs_found: Vec<&str> = ACTION_VERBS
        .iter()
        .copied()
        .filter(|v| corpus.contains(v))
        .collect();
    let verb_points = capped(verbs_found.len(), ACTION_VERB_CAP);
    if verb_points < ACTION_VERB_CAP {
        let unused: Vec<&str> = ACTION_VERBS
            .iter()
            .copied()
            .filter(|v| !verbs_found.contains(v))
            .take(3)
            .collect();
        recommendations.push(format!(
            "Use strong action verbs such as: {}",
            unused.join(", ")
        ));
    }
    breakdown.push(rule("action_verbs", verb_points, ACTION_VERB_CAP));

    let metric_points = capped(METRIC_RE.find_iter(&corpus).count(), METRIC_CAP);
    if metric_points < METRIC_CAP {
        recommendations
            .push("Quantify achievements with numbers, e.g. 30%, 5x, 10k+".to_string());
    }
    breakdown.push(rule("quantified_metrics", metric_points, METRIC_CAP));

    let template_points = template.score_adjustment();
    if template_points < 0 {
        recommendations.push(format!(
            "The '{}' template is hard for ATS parsers to read; switch to professional or classic",
            template.as_str()
        ));
    }
    breakdown.push(rule("template", template_points, 5));

    if resume.skills.technical_list().len() < RECOMMENDED_TECH_SKILLS {
        recommendations.push(format!(
            "List at least {RECOMMENDED_TECH_SKILLS} technical skills"
        ));
    }

    let total: i32 = BASE_SCORE + breakdown.iter().map(|r| r.points).sum::<i32>();

    AtsReport {
        score: total.clamp(0, 100) as u32,
        template,
        breakdown,
        recommendations,
    }
}

fn rule(name: &str, points: i32, max_points: i32) -> AtsRule {
    AtsRule {
        rule: name.to_string(),
        points,
        max_points,
    }
}

fn capped(hits: usize, cap: i32) -> i32 {
    (hits as i32).saturating_mul(POINTS_PER_HIT).min(cap)
}

fn missing_contact_fields(resume: &ResumeData) -> Vec<&'static str> {
    [
        ("name", &resume.name),
        ("job title", &resume.job_title),
        ("email", &resume.email),
        ("summary", &resume.summary),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(label, _)| label)
    .collect()
}

/// Lowercased text searched for verbs and figures.
fn keyword_corpus(resume: &ResumeData) -> String {
    let bullets: Vec<&str> = resume
        .experience
        .iter()
        .map(|e| e.bullets.as_str())
        .collect();

    [
        resume.summary.as_str(),
        bullets.join(" ").as_str(),
        resume.skills.technical.as_str(),
        resume.skills.soft.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}
