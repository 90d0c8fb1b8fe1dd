//! Pluggable initial readiness score for a fresh analysis.
//!
//! Default: `HeuristicReadinessScorer` (pure, deterministic, no I/O).
//! `AppState` holds an `Arc<dyn ReadinessScorer>` so the formula can be swapped
//! without touching the orchestrator or the handlers.

use crate::models::analysis::ExtractedSkills;

const BASE_SCORE: u32 = 35;
const POINTS_PER_SKILL: u32 = 3;
const SKILL_POINTS_CAP: u32 = 30;
const COMPANY_BONUS: u32 = 10;
const ROLE_BONUS: u32 = 10;
const DETAILED_JD_BONUS: u32 = 15;
/// JDs longer than this many characters count as detailed.
pub const DETAILED_JD_CHARS: usize = 200;
pub const MAX_SCORE: u8 = 100;

/// Inputs to a readiness score.
pub struct ScoreInput<'a> {
    pub company: &'a str,
    pub role: &'a str,
    pub jd_text: &'a str,
    pub skills: &'a ExtractedSkills,
}

/// The scorer trait. Implementations must be pure: same input, same score.
pub trait ReadinessScorer: Send + Sync {
    fn score(&self, input: &ScoreInput<'_>) -> u8;

    /// Backend label, for logs.
    fn backend(&self) -> &'static str;
}

/// Additive heuristic:
/// 35 base, +3 per extracted skill (capped at 30), +10 company, +10 role,
/// +15 for a JD over 200 characters, clamped to 100.
pub struct HeuristicReadinessScorer;

impl ReadinessScorer for HeuristicReadinessScorer {
    fn score(&self, input: &ScoreInput<'_>) -> u8 {
        compute_readiness_score(input.company, input.role, input.jd_text, input.skills)
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

pub fn compute_readiness_score(
    company: &str,
    role: &str,
    jd_text: &str,
    skills: &ExtractedSkills,
) -> u8 {
    let skill_count = u32::try_from(skills.total_count()).unwrap_or(u32::MAX);
    let mut score = BASE_SCORE + skill_count.saturating_mul(POINTS_PER_SKILL).min(SKILL_POINTS_CAP);

    if !company.trim().is_empty() {
        score += COMPANY_BONUS;
    }
    if !role.trim().is_empty() {
        score += ROLE_BONUS;
    }
    if jd_text.chars().count() > DETAILED_JD_CHARS {
        score += DETAILED_JD_BONUS;
    }

    score.min(u32::from(MAX_SCORE)) as u8
}
