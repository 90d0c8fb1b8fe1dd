use std::collections::BTreeMap;

use serde::Serialize;

/// One verification item shown on the checklist page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub id: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
}

/// The ten items, in display order. Completion means every one of these is checked.
pub const CHECKLIST_ITEMS: [ChecklistItem; 10] = [
    ChecklistItem {
        id: "validate-jd",
        label: "JD required validation works",
        hint: "Submit an analysis with an empty JD and confirm it is rejected.",
    },
    ChecklistItem {
        id: "short-jd-warn",
        label: "Short JD warning shows for <200 chars",
        hint: "Submit a short JD and check the response carries a warning.",
    },
    ChecklistItem {
        id: "skill-grouping",
        label: "Skills extraction groups correctly",
        hint: "Verify skills land in the right categories (Web, Core CS, ...).",
    },
    ChecklistItem {
        id: "round-mapping",
        label: "Round mapping changes based on company + skills",
        hint: "Compare rounds for 'Amazon' against an unknown company.",
    },
    ChecklistItem {
        id: "score-deterministic",
        label: "Score calculation is deterministic",
        hint: "The same JD should produce the same base score.",
    },
    ChecklistItem {
        id: "score-toggle",
        label: "Skill toggles update score live",
        hint: "Toggle 'know'/'practice' and watch the final score change.",
    },
    ChecklistItem {
        id: "persist-refresh",
        label: "Changes persist after refresh",
        hint: "Fetch the entry again and check score and toggles remain.",
    },
    ChecklistItem {
        id: "history-save",
        label: "History saves and loads correctly",
        hint: "List analyses and check saved entries are there, newest first.",
    },
    ChecklistItem {
        id: "export-copy",
        label: "Export buttons copy the correct content",
        hint: "Export the plan and compare it with the entry.",
    },
    ChecklistItem {
        id: "no-console-errors",
        label: "No console errors on core pages",
        hint: "Check the service log for errors while exercising the API.",
    },
];

/// Item id → checked. Unknown ids are kept but never counted.
pub type ChecklistState = BTreeMap<String, bool>;

pub fn is_known_item(id: &str) -> bool {
    CHECKLIST_ITEMS.iter().any(|item| item.id == id)
}

pub fn passed_count(state: &ChecklistState) -> usize {
    CHECKLIST_ITEMS
        .iter()
        .filter(|item| state.get(item.id).copied().unwrap_or(false))
        .count()
}

pub fn is_checklist_complete(state: &ChecklistState) -> bool {
    passed_count(state) == CHECKLIST_ITEMS.len()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GateStatus {
    Locked,
    Unlocked,
}

pub fn evaluate_gate(state: &ChecklistState) -> GateStatus {
    if is_checklist_complete(state) {
        GateStatus::Unlocked
    } else {
        GateStatus::Locked
    }
}

#[cfg(test)]
pub(crate) fn all_checked() -> ChecklistState {
    CHECKLIST_ITEMS
        .iter()
        .map(|item| (item.id.to_string(), true))
        .collect()
}
