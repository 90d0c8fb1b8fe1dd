use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::gating::checklist::{
    evaluate_gate, is_known_item, passed_count, ChecklistItem, ChecklistState, GateStatus,
    CHECKLIST_ITEMS,
};
use crate::gating::proof::{evaluate_ship, submission_text, ProofSubmission, ShipReadiness};
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistResponse {
    pub items: &'static [ChecklistItem],
    pub state: ChecklistState,
    pub passed: usize,
    pub total: usize,
    pub gate: GateStatus,
}

impl ChecklistResponse {
    fn from_state(state: ChecklistState) -> Self {
        Self {
            items: &CHECKLIST_ITEMS,
            passed: passed_count(&state),
            total: CHECKLIST_ITEMS.len(),
            gate: evaluate_gate(&state),
            state,
        }
    }
}

#[derive(Deserialize)]
pub struct SetItemRequest {
    pub checked: bool,
}

#[derive(Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipResponse {
    pub gate: GateStatus,
    pub passed: usize,
    pub total: usize,
    #[serde(flatten)]
    pub readiness: ShipReadiness,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofResponse {
    pub proof: ProofSubmission,
    pub pending_steps: Vec<&'static str>,
    #[serde(flatten)]
    pub readiness: ShipReadiness,
}

/// GET /api/v1/checklist
pub async fn handle_get_checklist(
    State(state): State<AppState>,
) -> Result<Json<ChecklistResponse>, AppError> {
    let checklist = state.checklist.load().await?;
    Ok(Json(ChecklistResponse::from_state(checklist)))
}

/// PUT /api/v1/checklist/items/:item_id
pub async fn handle_set_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    Json(req): Json<SetItemRequest>,
) -> Result<Json<ChecklistResponse>, AppError> {
    if !is_known_item(&item_id) {
        return Err(AppError::NotFound(format!("Checklist item {item_id} not found")));
    }
    let checklist = state.checklist.set_item(&item_id, req.checked).await?;
    Ok(Json(ChecklistResponse::from_state(checklist)))
}

/// POST /api/v1/checklist/reset
pub async fn handle_reset_checklist(
    State(state): State<AppState>,
    Json(req): Json<ResetRequest>,
) -> Result<StatusCode, AppError> {
    if !req.confirm {
        return Err(AppError::Validation(
            "Reset requires explicit confirmation (confirm: true)".to_string(),
        ));
    }
    state.checklist.reset().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/ship
pub async fn handle_ship_status(
    State(state): State<AppState>,
) -> Result<Json<ShipResponse>, AppError> {
    let checklist = state.checklist.load().await?;
    let proof = state.proof.load().await?;
    Ok(Json(ShipResponse {
        gate: evaluate_gate(&checklist),
        passed: passed_count(&checklist),
        total: CHECKLIST_ITEMS.len(),
        readiness: evaluate_ship(&proof, &checklist),
    }))
}

/// GET /api/v1/proof
pub async fn handle_get_proof(
    State(state): State<AppState>,
) -> Result<Json<ProofResponse>, AppError> {
    let checklist = state.checklist.load().await?;
    let proof = state.proof.load().await?;
    Ok(Json(proof_response(proof, &checklist)))
}

/// PUT /api/v1/proof
pub async fn handle_put_proof(
    State(state): State<AppState>,
    Json(proof): Json<ProofSubmission>,
) -> Result<Json<ProofResponse>, AppError> {
    state.proof.save(&proof).await?;
    let checklist = state.checklist.load().await?;
    let response = proof_response(proof, &checklist);
    info!(shipped = response.readiness.shipped, "Proof submission saved");
    Ok(Json(response))
}

/// GET /api/v1/proof/submission
pub async fn handle_get_submission(State(state): State<AppState>) -> Result<String, AppError> {
    let checklist = state.checklist.load().await?;
    let proof = state.proof.load().await?;
    submission_text(&proof, &checklist).ok_or_else(|| {
        AppError::Validation("Complete all requirements to produce the submission".to_string())
    })
}

fn proof_response(proof: ProofSubmission, checklist: &ChecklistState) -> ProofResponse {
    ProofResponse {
        pending_steps: proof.pending_steps(),
        readiness: evaluate_ship(&proof, checklist),
        proof,
    }
}
