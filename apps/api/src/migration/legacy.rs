use chrono::Utc;
use serde_json::{json, Map, Value};

use crate::migration::{CURRENT_SCHEMA_VERSION, SCHEMA_VERSION_FIELD};
use crate::models::analysis::{ExtractedSkills, SkillCategory};

/// Fields carried over from a v1 record without change.
const CARRIED_FIELDS: &[&str] = &[
    "id",
    "createdAt",
    "company",
    "role",
    "jdText",
    "checklist",
    "questions",
    "companyIntel",
    "roundMapping",
];

/// Maps a v1 category name to its bucket. Accepts the historical labels
/// ("Cloud/DevOps", "Core CS", ...) and the canonical keys, ignoring case.
/// Anything unrecognized lands in `other`.
pub fn category_for_legacy_name(name: &str) -> SkillCategory {
    let name = name.trim();
    SkillCategory::ALL
        .into_iter()
        .find(|c| c.label().eq_ignore_ascii_case(name) || c.key().eq_ignore_ascii_case(name))
        .unwrap_or(SkillCategory::Other)
}

/// Flattens a v1 `[{name, skills}]` list into the seven buckets, preserving order.
fn bucket_legacy_skills(list: &[Value]) -> ExtractedSkills {
    let mut skills = ExtractedSkills::default();

    for group in list {
        let name = group.get("name").and_then(Value::as_str).unwrap_or_default();
        let Some(items) = group.get("skills").and_then(Value::as_array) else {
            continue;
        };
        skills
            .get_mut(category_for_legacy_name(name))
            .extend(items.iter().filter_map(Value::as_str).map(str::to_string));
    }

    skills
}

fn present<'a>(raw: &'a Value, key: &str) -> Option<&'a Value> {
    raw.get(key).filter(|v| !v.is_null())
}

/// v1 → v2.
///
/// `readinessScore` becomes both `baseScore` and `finalScore` (0 when absent), the old
/// `plan` field is kept as `plan`, `updatedAt` is stamped if the record never had one.
pub fn migrate_v1_to_v2(raw: &Value) -> Value {
    let mut out = Map::new();

    for key in CARRIED_FIELDS {
        if let Some(v) = present(raw, key) {
            out.insert((*key).to_string(), v.clone());
        }
    }

    let skills = match raw.get("extractedSkills") {
        Some(Value::Array(list)) => bucket_legacy_skills(list),
        _ => ExtractedSkills::default(),
    };
    out.insert("extractedSkills".to_string(), json!(skills));

    let score = present(raw, "readinessScore")
        .cloned()
        .unwrap_or_else(|| json!(0));
    out.insert("baseScore".to_string(), score.clone());
    out.insert("finalScore".to_string(), score);

    out.insert(
        "skillConfidenceMap".to_string(),
        present(raw, "skillConfidenceMap")
            .cloned()
            .unwrap_or_else(|| json!({})),
    );

    out.insert(
        "updatedAt".to_string(),
        present(raw, "updatedAt")
            .cloned()
            .unwrap_or_else(|| json!(Utc::now().to_rfc3339())),
    );

    let plan = present(raw, "plan")
        .or_else(|| present(raw, "plan7Days"))
        .cloned()
        .unwrap_or_else(|| json!([]));
    out.insert("plan".to_string(), plan);

    out.insert(SCHEMA_VERSION_FIELD.to_string(), json!(CURRENT_SCHEMA_VERSION));

    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_historical_names_map_to_buckets() {
        assert_eq!(category_for_legacy_name("Core CS"), SkillCategory::CoreCs);
        assert_eq!(category_for_legacy_name("Languages"), SkillCategory::Languages);
        assert_eq!(category_for_legacy_name("Web"), SkillCategory::Web);
        assert_eq!(category_for_legacy_name("Data"), SkillCategory::Data);
        assert_eq!(category_for_legacy_name("Cloud/DevOps"), SkillCategory::Cloud);
        assert_eq!(category_for_legacy_name("Testing"), SkillCategory::Testing);
    }

    #[test]
    fn test_canonical_keys_and_case_are_accepted() {
        assert_eq!(category_for_legacy_name("coreCS"), SkillCategory::CoreCs);
        assert_eq!(category_for_legacy_name("cloud"), SkillCategory::Cloud);
        assert_eq!(category_for_legacy_name("  WEB "), SkillCategory::Web);
    }

    #[test]
    fn test_unknown_names_go_to_other() {
        assert_eq!(category_for_legacy_name("General"), SkillCategory::Other);
        assert_eq!(category_for_legacy_name("Soft Skills"), SkillCategory::Other);
        assert_eq!(category_for_legacy_name(""), SkillCategory::Other);
    }

    #[test]
    fn test_repeated_categories_concatenate_in_order() {
        let raw = json!({
            "extractedSkills": [
                {"name": "Web", "skills": ["React"]},
                {"name": "Misc", "skills": ["Figma"]},
                {"name": "Web", "skills": ["GraphQL"]},
                {"name": "Other Stuff", "skills": ["Jira"]}
            ]
        });
        let migrated = migrate_v1_to_v2(&raw);
        assert_eq!(migrated["extractedSkills"]["web"], json!(["React", "GraphQL"]));
        assert_eq!(migrated["extractedSkills"]["other"], json!(["Figma", "Jira"]));
    }

    #[test]
    fn test_malformed_groups_are_skipped() {
        let raw = json!({
            "extractedSkills": [
                {"name": "Web"},
                "React",
                {"name": "Data", "skills": ["SQL", 42, null]}
            ]
        });
        let migrated = migrate_v1_to_v2(&raw);
        assert_eq!(migrated["extractedSkills"]["web"], json!([]));
        assert_eq!(migrated["extractedSkills"]["data"], json!(["SQL"]));
    }

    #[test]
    fn test_scores_and_defaults() {
        let migrated = migrate_v1_to_v2(&json!({"extractedSkills": []}));
        assert_eq!(migrated["baseScore"], json!(0));
        assert_eq!(migrated["finalScore"], json!(0));
        assert_eq!(migrated["skillConfidenceMap"], json!({}));
        assert_eq!(migrated["plan"], json!([]));
        assert_eq!(migrated[SCHEMA_VERSION_FIELD], json!(CURRENT_SCHEMA_VERSION));
        assert!(migrated["updatedAt"].is_string());
    }

    #[test]
    fn test_existing_updated_at_and_confidence_are_kept() {
        let raw = json!({
            "extractedSkills": [],
            "updatedAt": "2024-05-01T00:00:00Z",
            "skillConfidenceMap": {"React": "practice"},
            "plan7Days": [{"day": "Day 1", "focus": "x", "tasks": []}]
        });
        let migrated = migrate_v1_to_v2(&raw);
        assert_eq!(migrated["updatedAt"], json!("2024-05-01T00:00:00Z"));
        assert_eq!(migrated["skillConfidenceMap"], json!({"React": "practice"}));
        assert_eq!(migrated["plan"][0]["day"], json!("Day 1"));
    }
}
