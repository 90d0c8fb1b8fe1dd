//! Schema migration for persisted analysis records.
//!
//! Records are a tagged union on `schemaVersion`. Each version transition is one
//! `Value -> Value` function; the final step decodes into the canonical
//! `AnalysisEntry`, filling anything missing with its empty default.
//!
//! Records written before the tag existed are classified by shape: an
//! `extractedSkills` list of `{name, skills}` objects is v1, anything else is v2.
//!
//! `normalize_entry` never fails and is idempotent:
//! `normalize(normalize(x)) == normalize(x)`.

pub mod completion;
pub mod legacy;

use serde_json::Value;
use tracing::debug;

use crate::models::analysis::AnalysisEntry;

pub const CURRENT_SCHEMA_VERSION: u32 = 2;
pub const SCHEMA_VERSION_FIELD: &str = "schemaVersion";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVersion {
    /// List-based `extractedSkills`, single `readinessScore`.
    V1,
    /// Seven-key `extractedSkills`, `baseScore`/`finalScore`.
    V2,
}

/// Explicit tag first; untagged records fall back to shape detection.
pub fn detect_version(raw: &Value) -> SchemaVersion {
    if let Some(tag) = raw.get(SCHEMA_VERSION_FIELD).and_then(Value::as_u64) {
        return if tag <= 1 {
            SchemaVersion::V1
        } else {
            SchemaVersion::V2
        };
    }

    match raw.get("extractedSkills") {
        Some(Value::Array(_)) => SchemaVersion::V1,
        _ => SchemaVersion::V2,
    }
}

/// Brings any stored record, of any version, to the canonical shape.
pub fn normalize_entry(raw: &Value) -> AnalysisEntry {
    match detect_version(raw) {
        SchemaVersion::V1 => {
            debug!("Migrating v1 analysis record");
            let mut migrated = legacy::migrate_v1_to_v2(raw);
            // The migrated value carries a fresh `updatedAt`; derive ids from the input.
            if let Some(fields) = migrated.as_object_mut() {
                if !matches!(fields.get("id"), Some(Value::String(_) | Value::Number(_))) {
                    fields.insert("id".to_string(), Value::String(completion::content_id(raw)));
                }
            }
            completion::complete_entry(&migrated)
        }
        SchemaVersion::V2 => completion::complete_entry(raw),
    }
}
