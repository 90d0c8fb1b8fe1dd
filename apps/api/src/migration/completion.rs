use std::collections::BTreeMap;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use crate::analysis::readiness::MAX_SCORE;
use crate::migration::CURRENT_SCHEMA_VERSION;
use crate::models::analysis::{AnalysisEntry, Confidence, ExtractedSkills, SkillCategory};

/// Decodes one field, treating absent, null and malformed alike.
fn field<T: DeserializeOwned>(raw: &Value, key: &str) -> Option<T> {
    raw.get(key)
        .filter(|v| !v.is_null())
        .and_then(|v| serde_json::from_value(v.clone()).ok())
}

/// Id for a record that was stored without one. Derived from the stored content, so
/// every read of the same record agrees on it until the record is written back.
pub fn content_id(raw: &Value) -> String {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, raw.to_string().as_bytes()).to_string()
}

/// Strings, or numbers rendered as strings (some old ids were timestamps).
fn text_field(raw: &Value, key: &str) -> Option<String> {
    match raw.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn score_field(raw: &Value, key: &str) -> Option<u8> {
    let n = raw.get(key)?.as_f64()?;
    Some(n.round().clamp(0.0, f64::from(MAX_SCORE)) as u8)
}

/// Each bucket is read on its own so one bad bucket does not drop the rest.
fn skills_field(raw: &Value) -> ExtractedSkills {
    let mut skills = ExtractedSkills::default();
    let Some(mapping) = raw.get("extractedSkills").and_then(Value::as_object) else {
        return skills;
    };

    for category in SkillCategory::ALL {
        if let Some(items) = mapping.get(category.key()).and_then(Value::as_array) {
            *skills.get_mut(category) = items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect();
        }
    }
    skills
}

/// Keeps only entries for extracted skills whose value is a known confidence level.
fn confidence_field(raw: &Value, skills: &ExtractedSkills) -> BTreeMap<String, Confidence> {
    raw.get("skillConfidenceMap")
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .filter(|(skill, _)| skills.contains_skill(skill))
                .filter_map(|(skill, level)| {
                    serde_json::from_value::<Confidence>(level.clone())
                        .ok()
                        .map(|c| (skill.clone(), c))
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Field-completion pass over a v2-shaped record.
///
/// Present, well-formed fields are copied as they are; anything missing gets its empty
/// default. `baseScore` falls back to a stray `readinessScore`, `finalScore` falls back
/// to `baseScore`.
pub fn complete_entry(raw: &Value) -> AnalysisEntry {
    let updated_at = text_field(raw, "updatedAt").unwrap_or_else(|| Utc::now().to_rfc3339());
    let created_at = text_field(raw, "createdAt").unwrap_or_else(|| updated_at.clone());
    let base_score = score_field(raw, "baseScore")
        .or_else(|| score_field(raw, "readinessScore"))
        .unwrap_or(0);
    let final_score = score_field(raw, "finalScore").unwrap_or(base_score);
    let extracted_skills = skills_field(raw);
    let skill_confidence_map = confidence_field(raw, &extracted_skills);

    AnalysisEntry {
        schema_version: CURRENT_SCHEMA_VERSION,
        id: text_field(raw, "id").unwrap_or_else(|| content_id(raw)),
        created_at,
        updated_at,
        company: text_field(raw, "company").unwrap_or_default(),
        role: text_field(raw, "role").unwrap_or_default(),
        jd_text: text_field(raw, "jdText").unwrap_or_default(),
        extracted_skills,
        plan: field(raw, "plan")
            .or_else(|| field(raw, "plan7Days"))
            .unwrap_or_default(),
        checklist: field(raw, "checklist").unwrap_or_default(),
        questions: field(raw, "questions").unwrap_or_default(),
        base_score,
        final_score,
        skill_confidence_map,
        company_intel: field(raw, "companyIntel"),
        round_mapping: field(raw, "roundMapping"),
    }
}
