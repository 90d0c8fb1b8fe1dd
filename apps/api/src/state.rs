use std::sync::Arc;

use crate::analysis::readiness::ReadinessScorer;
use crate::analysis::AnalysisRepository;
use crate::config::Config;
use crate::gating::{ChecklistStore, ProofStore};
use crate::storage::KvStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub analyses: AnalysisRepository,
    pub checklist: ChecklistStore,
    pub proof: ProofStore,
    pub config: Config,
    /// Pluggable readiness scorer. Default: HeuristicReadinessScorer.
    pub scorer: Arc<dyn ReadinessScorer>,
}

impl AppState {
    /// Wires every repository onto one store, using the keys from config.
    pub fn new(store: Arc<dyn KvStore>, config: Config, scorer: Arc<dyn ReadinessScorer>) -> Self {
        Self {
            analyses: AnalysisRepository::new(store.clone(), config.history_key.clone()),
            checklist: ChecklistStore::new(store.clone(), config.checklist_key.clone()),
            proof: ProofStore::new(store, config.proof_key.clone()),
            config,
            scorer,
        }
    }
}
