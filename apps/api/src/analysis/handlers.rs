use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::analysis::export::{render_section, report_filename, ExportSection};
use crate::analysis::readiness::DETAILED_JD_CHARS;
use crate::analysis::run_analysis_with;
use crate::errors::AppError;
use crate::migration::normalize_entry;
use crate::models::analysis::{AnalysisEntry, Confidence};
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnalysisRequest {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub jd_text: String,
}

#[derive(Deserialize)]
pub struct ToggleRequest {
    pub skill: String,
    pub confidence: Confidence,
}

/// An entry as returned to clients: the stored record plus derived fields.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisView {
    #[serde(flatten)]
    pub entry: AnalysisEntry,
    pub action_next: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl From<AnalysisEntry> for AnalysisView {
    fn from(entry: AnalysisEntry) -> Self {
        let action_next = entry.weak_skills().into_iter().map(str::to_string).collect();
        Self {
            entry,
            action_next,
            warnings: Vec::new(),
        }
    }
}

/// Rejects an empty JD; returns warnings for inputs that are accepted but thin.
fn validate_request(req: &CreateAnalysisRequest) -> Result<Vec<String>, AppError> {
    let jd = req.jd_text.trim();
    if jd.is_empty() {
        return Err(AppError::Validation("jdText is required".to_string()));
    }

    let mut warnings = Vec::new();
    if jd.chars().count() < DETAILED_JD_CHARS {
        warnings.push(format!(
            "This JD is short (under {DETAILED_JD_CHARS} characters). Paste the full description for a better analysis."
        ));
    }
    Ok(warnings)
}

/// POST /api/v1/analyses
pub async fn handle_create_analysis(
    State(state): State<AppState>,
    Json(req): Json<CreateAnalysisRequest>,
) -> Result<(StatusCode, Json<AnalysisView>), AppError> {
    let warnings = validate_request(&req)?;

    let entry = run_analysis_with(
        state.scorer.as_ref(),
        req.company.trim(),
        req.role.trim(),
        &req.jd_text,
    );
    state.analyses.save(&entry).await?;

    let mut view = AnalysisView::from(entry);
    view.warnings = warnings;
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/analyses
pub async fn handle_list_analyses(
    State(state): State<AppState>,
) -> Result<Json<Vec<AnalysisView>>, AppError> {
    let history = state.analyses.list().await?;
    Ok(Json(history.into_iter().map(AnalysisView::from).collect()))
}

/// GET /api/v1/analyses/latest
pub async fn handle_latest_analysis(
    State(state): State<AppState>,
) -> Result<Json<AnalysisView>, AppError> {
    let entry = state
        .analyses
        .latest()
        .await?
        .ok_or_else(|| AppError::NotFound("No analyses yet".to_string()))?;
    Ok(Json(entry.into()))
}

/// GET /api/v1/analyses/:id
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AnalysisView>, AppError> {
    Ok(Json(find_entry(&state, &id).await?.into()))
}

/// DELETE /api/v1/analyses/:id
pub async fn handle_delete_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if !state.analyses.delete(&id).await? {
        return Err(AppError::NotFound(format!("Analysis {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/analyses/normalize
/// Upgrades an arbitrary stored record to the current schema without persisting it.
pub async fn handle_normalize(Json(raw): Json<Value>) -> Json<AnalysisEntry> {
    Json(normalize_entry(&raw))
}

/// POST /api/v1/analyses/:id/skills/toggle
pub async fn handle_toggle_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ToggleRequest>,
) -> Result<Json<AnalysisView>, AppError> {
    let entry = find_entry(&state, &id).await?;
    if !entry.extracted_skills.contains_skill(&req.skill) {
        return Err(AppError::Validation(format!(
            "Skill '{}' was not extracted for this analysis",
            req.skill
        )));
    }

    let updated = state
        .analyses
        .toggle_skill(&id, &req.skill, req.confidence)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Analysis {id} not found")))?;

    info!(
        entry_id = %id,
        skill = %req.skill,
        final_score = updated.final_score,
        "Skill confidence toggled"
    );
    Ok(Json(updated.into()))
}

/// GET /api/v1/analyses/:id/export/:section
pub async fn handle_export(
    State(state): State<AppState>,
    Path((id, section)): Path<(String, ExportSection)>,
) -> Result<Response, AppError> {
    let entry = find_entry(&state, &id).await?;
    let body = render_section(&entry, section);

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    if section == ExportSection::Report {
        let disposition = format!("attachment; filename=\"{}\"", report_filename(&entry));
        let value = HeaderValue::from_str(&disposition)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid filename header: {e}")))?;
        headers.insert(header::CONTENT_DISPOSITION, value);
    }

    Ok((headers, body).into_response())
}

async fn find_entry(state: &AppState, id: &str) -> Result<AnalysisEntry, AppError> {
    state
        .analyses
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Analysis {id} not found")))
}
