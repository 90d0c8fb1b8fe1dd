// Analysis engine: skill extraction, readiness scoring, content generation,
// confidence toggles, text export and the history repository.
// Everything below `repository` and `handlers` is pure and synchronous.

pub mod checklist;
pub mod company;
pub mod confidence;
pub mod export;
pub mod handlers;
pub mod orchestrator;
pub mod plan;
pub mod questions;
pub mod readiness;
pub mod repository;
pub mod skill_extractor;

pub use orchestrator::run_analysis_with;
pub use repository::AnalysisRepository;

pub(crate) fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
