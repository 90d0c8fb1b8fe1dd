//! Incremental confidence toggles over a live score.
//!
//! Every toggle is a row in a fixed transition table. The score is never recomputed
//! from scratch: `final_score` only ever moves by the deltas below, clamped to 0..=100.

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::{debug, warn};

use crate::analysis::readiness::MAX_SCORE;
use crate::models::analysis::{AnalysisEntry, Confidence};

const TOGGLE_ON_DELTA: i32 = 2;
const SWITCH_DELTA: i32 = 4;

/// Outcome of one row of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: Option<Confidence>,
    pub delta: i32,
}

/// | current  | requested | next     | delta |
/// |----------|-----------|----------|-------|
/// | none     | know      | know     | +2    |
/// | none     | practice  | practice | -2    |
/// | know     | know      | none     | -2    |
/// | practice | practice  | none     | +2    |
/// | know     | practice  | practice | -4    |
/// | practice | know      | know     | +4    |
pub fn transition(current: Option<Confidence>, requested: Confidence) -> Transition {
    use Confidence::{Know, Practice};

    match (current, requested) {
        (None, Know) => Transition { next: Some(Know), delta: TOGGLE_ON_DELTA },
        (None, Practice) => Transition { next: Some(Practice), delta: -TOGGLE_ON_DELTA },
        (Some(Know), Know) => Transition { next: None, delta: -TOGGLE_ON_DELTA },
        (Some(Practice), Practice) => Transition { next: None, delta: TOGGLE_ON_DELTA },
        (Some(Know), Practice) => Transition { next: Some(Practice), delta: -SWITCH_DELTA },
        (Some(Practice), Know) => Transition { next: Some(Know), delta: SWITCH_DELTA },
    }
}

fn apply_delta(score: u8, delta: i32) -> u8 {
    (i32::from(score) + delta).clamp(0, i32::from(MAX_SCORE)) as u8
}

/// Live confidence state for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreAdjuster {
    confidence: BTreeMap<String, Confidence>,
    final_score: u8,
}

impl ScoreAdjuster {
    /// Fresh state: nothing marked, live score equal to the base score.
    #[cfg(test)]
    pub fn new(base_score: u8) -> Self {
        Self {
            confidence: BTreeMap::new(),
            final_score: base_score.min(MAX_SCORE),
        }
    }

    /// Resumes from what an entry has persisted.
    pub fn from_entry(entry: &AnalysisEntry) -> Self {
        Self {
            confidence: entry.skill_confidence_map.clone(),
            final_score: entry.final_score.min(MAX_SCORE),
        }
    }

    pub fn final_score(&self) -> u8 {
        self.final_score
    }

    pub fn status(&self, skill: &str) -> Option<Confidence> {
        self.confidence.get(skill).copied()
    }

    /// Applies one toggle and returns the table row that was used.
    pub fn toggle(&mut self, skill: &str, requested: Confidence) -> Transition {
        let step = transition(self.status(skill), requested);

        match step.next {
            Some(next) => {
                self.confidence.insert(skill.to_string(), next);
            }
            None => {
                self.confidence.remove(skill);
            }
        }
        self.final_score = apply_delta(self.final_score, step.delta);

        step
    }

    /// Writes score and map back together.
    pub fn apply_to(self, entry: &mut AnalysisEntry) {
        entry.final_score = self.final_score;
        entry.skill_confidence_map = self.confidence;
    }
}

/// Toggles `skill` on `entry` and returns the updated entry.
///
/// Skills that are not in `extracted_skills` leave the entry untouched.
pub fn toggle_skill(mut entry: AnalysisEntry, skill: &str, requested: Confidence) -> AnalysisEntry {
    if !entry.extracted_skills.contains_skill(skill) {
        warn!(entry_id = %entry.id, skill, "Ignoring toggle for skill not in analysis");
        return entry;
    }

    let mut adjuster = ScoreAdjuster::from_entry(&entry);
    let step = adjuster.toggle(skill, requested);
    debug!(
        entry_id = %entry.id,
        skill,
        delta = step.delta,
        score = adjuster.final_score(),
        "Applied confidence toggle"
    );

    adjuster.apply_to(&mut entry);
    entry.updated_at = Utc::now().to_rfc3339();
    entry
}
