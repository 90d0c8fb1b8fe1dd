//! Builds one complete analysis record from company, role and JD text.

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::analysis::checklist::generate_checklist;
use crate::analysis::company::{generate_company_intel, generate_round_mapping};
use crate::analysis::plan::generate_plan;
use crate::analysis::questions::generate_questions;
use crate::analysis::readiness::{ReadinessScorer, ScoreInput};
use crate::analysis::skill_extractor::extract_skills;
use crate::migration::CURRENT_SCHEMA_VERSION;
use crate::models::analysis::AnalysisEntry;

/// Runs the analysis with the default heuristic scorer. The service always goes through
/// `run_analysis_with` and the scorer held in `AppState`.
#[cfg(test)]
pub fn run_analysis(company: &str, role: &str, jd_text: &str) -> AnalysisEntry {
    use crate::analysis::readiness::HeuristicReadinessScorer;

    run_analysis_with(&HeuristicReadinessScorer, company, role, jd_text)
}

/// Runs the full pipeline: extract → score → checklist → plan → questions → intel → rounds.
///
/// Everything except `id` and the timestamps is a pure function of the inputs.
pub fn run_analysis_with(
    scorer: &dyn ReadinessScorer,
    company: &str,
    role: &str,
    jd_text: &str,
) -> AnalysisEntry {
    let skills = extract_skills(jd_text);
    let score = scorer.score(&ScoreInput {
        company,
        role,
        jd_text,
        skills: &skills,
    });

    let checklist = generate_checklist(&skills);
    let plan = generate_plan(&skills);
    let questions = generate_questions(&skills);
    let company_intel = generate_company_intel(company);
    let round_mapping = generate_round_mapping(&company_intel, &skills);

    let now = Utc::now().to_rfc3339();
    let entry = AnalysisEntry {
        schema_version: CURRENT_SCHEMA_VERSION,
        id: Uuid::new_v4().to_string(),
        created_at: now.clone(),
        updated_at: now,
        company: company.to_string(),
        role: role.to_string(),
        jd_text: jd_text.to_string(),
        extracted_skills: skills,
        plan,
        checklist,
        questions,
        base_score: score,
        final_score: score,
        skill_confidence_map: BTreeMap::new(),
        company_intel: Some(company_intel),
        round_mapping: Some(round_mapping),
    };

    info!(
        entry_id = %entry.id,
        scorer = scorer.backend(),
        score,
        skills = entry.extracted_skills.total_count(),
        "Analysis complete"
    );

    entry
}
