use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::gating::checklist::{is_checklist_complete, ChecklistState};

/// Manual build steps (id, label) that must all be confirmed before shipping.
pub const MANUAL_STEPS: [(&str, &str); 6] = [
    ("design", "Design System Foundation"),
    ("practice", "Practice Interface"),
    ("assessments", "Assessment Logic"),
    ("resources", "Resources & History"),
    ("profile", "Profile Management"),
    ("hardening", "Platform Hardening"),
];

const SUBMISSION_RULE: &str = "------------------------------------------";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProofSubmission {
    pub lovable_url: String,
    pub github_url: String,
    pub deployed_url: String,
    pub manual_steps: BTreeMap<String, bool>,
}

/// Absolute URL check. Relative paths and bare hosts are rejected.
pub fn is_valid_url(raw: &str) -> bool {
    Url::parse(raw.trim()).is_ok()
}

impl ProofSubmission {
    pub fn urls_valid(&self) -> bool {
        [&self.lovable_url, &self.github_url, &self.deployed_url]
            .into_iter()
            .all(|u| is_valid_url(u))
    }

    pub fn steps_complete(&self) -> bool {
        MANUAL_STEPS
            .iter()
            .all(|(id, _)| self.manual_steps.get(*id).copied().unwrap_or(false))
    }

    /// Ids of manual steps still unchecked, in display order.
    pub fn pending_steps(&self) -> Vec<&'static str> {
        MANUAL_STEPS
            .iter()
            .filter(|(id, _)| !self.manual_steps.get(*id).copied().unwrap_or(false))
            .map(|(id, _)| *id)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipReadiness {
    pub steps_complete: bool,
    pub checklist_passed: bool,
    pub urls_valid: bool,
    pub shipped: bool,
}

pub fn evaluate_ship(proof: &ProofSubmission, checklist: &ChecklistState) -> ShipReadiness {
    let steps_complete = proof.steps_complete();
    let checklist_passed = is_checklist_complete(checklist);
    let urls_valid = proof.urls_valid();
    ShipReadiness {
        steps_complete,
        checklist_passed,
        urls_valid,
        shipped: steps_complete && checklist_passed && urls_valid,
    }
}

/// Final submission text. `None` unless shipped.
pub fn submission_text(proof: &ProofSubmission, checklist: &ChecklistState) -> Option<String> {
    if !evaluate_ship(proof, checklist).shipped {
        return None;
    }

    Some(format!(
        "{SUBMISSION_RULE}\n\
         Placement Readiness Platform - Final Submission\n\
         \n\
         Lovable Project: {}\n\
         GitHub Repository: {}\n\
         Live Deployment: {}\n\
         \n\
         Core Capabilities:\n\
         - JD skill extraction (deterministic)\n\
         - Round mapping engine\n\
         - 7-day prep plan\n\
         - Interactive readiness scoring\n\
         - History persistence\n\
         {SUBMISSION_RULE}",
        proof.lovable_url.trim(),
        proof.github_url.trim(),
        proof.deployed_url.trim(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gating::checklist::all_checked;

    fn complete_proof() -> ProofSubmission {
        ProofSubmission {
            lovable_url: "https://lovable.dev/projects/abc".to_string(),
            github_url: "https://github.com/someone/prp".to_string(),
            deployed_url: "https://prp.example.com".to_string(),
            manual_steps: MANUAL_STEPS
                .iter()
                .map(|(id, _)| (id.to_string(), true))
                .collect(),
        }
    }

    #[test]
    fn test_url_validation() {
        assert!(is_valid_url("https://github.com/x/y"));
        assert!(is_valid_url("http://localhost:3000"));
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("github.com/x/y"));
        assert!(!is_valid_url("/relative/path"));
    }

    #[test]
    fn test_shipped_requires_all_three_conditions() {
        let proof = complete_proof();
        let checklist = all_checked();
        assert!(evaluate_ship(&proof, &checklist).shipped);

        let mut missing_step = proof.clone();
        missing_step.manual_steps.insert("hardening".to_string(), false);
        let status = evaluate_ship(&missing_step, &checklist);
        assert!(!status.steps_complete);
        assert!(!status.shipped);
        assert_eq!(missing_step.pending_steps(), vec!["hardening"]);

        let mut bad_url = proof.clone();
        bad_url.deployed_url = "not a url".to_string();
        assert!(!evaluate_ship(&bad_url, &checklist).shipped);

        let status = evaluate_ship(&proof, &ChecklistState::new());
        assert!(!status.checklist_passed);
        assert!(!status.shipped);
    }

    #[test]
    fn test_submission_text_only_when_shipped() {
        assert!(submission_text(&ProofSubmission::default(), &all_checked()).is_none());

        let text = submission_text(&complete_proof(), &all_checked()).unwrap();
        assert!(text.starts_with(SUBMISSION_RULE));
        assert!(text.contains("GitHub Repository: https://github.com/someone/prp"));
        assert!(text.contains("- 7-day prep plan"));
    }

    #[test]
    fn test_partial_json_decodes_with_defaults() {
        let proof: ProofSubmission =
            serde_json::from_str(r#"{"githubUrl": "https://github.com/a/b"}"#).unwrap();
        assert_eq!(proof.github_url, "https://github.com/a/b");
        assert!(proof.manual_steps.is_empty());
        assert_eq!(proof.pending_steps().len(), 6);
    }
}
