use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::migration::CURRENT_SCHEMA_VERSION;

/// The seven fixed skill buckets, in the order every generator iterates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillCategory {
    #[serde(rename = "coreCS")]
    CoreCs,
    #[serde(rename = "languages")]
    Languages,
    #[serde(rename = "web")]
    Web,
    #[serde(rename = "data")]
    Data,
    #[serde(rename = "cloud")]
    Cloud,
    #[serde(rename = "testing")]
    Testing,
    #[serde(rename = "other")]
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 7] = [
        SkillCategory::CoreCs,
        SkillCategory::Languages,
        SkillCategory::Web,
        SkillCategory::Data,
        SkillCategory::Cloud,
        SkillCategory::Testing,
        SkillCategory::Other,
    ];

    /// Key used in the persisted `extractedSkills` mapping.
    pub fn key(&self) -> &'static str {
        match self {
            SkillCategory::CoreCs => "coreCS",
            SkillCategory::Languages => "languages",
            SkillCategory::Web => "web",
            SkillCategory::Data => "data",
            SkillCategory::Cloud => "cloud",
            SkillCategory::Testing => "testing",
            SkillCategory::Other => "other",
        }
    }

    /// Human-facing label, also the category name older records were written with.
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::CoreCs => "Core CS",
            SkillCategory::Languages => "Languages",
            SkillCategory::Web => "Web",
            SkillCategory::Data => "Data",
            SkillCategory::Cloud => "Cloud/DevOps",
            SkillCategory::Testing => "Testing",
            SkillCategory::Other => "Other",
        }
    }
}

/// Skills found in a JD, bucketed by category. Missing keys deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedSkills {
    #[serde(rename = "coreCS")]
    pub core_cs: Vec<String>,
    pub languages: Vec<String>,
    pub web: Vec<String>,
    pub data: Vec<String>,
    pub cloud: Vec<String>,
    pub testing: Vec<String>,
    pub other: Vec<String>,
}

impl ExtractedSkills {
    pub fn get(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::CoreCs => &self.core_cs,
            SkillCategory::Languages => &self.languages,
            SkillCategory::Web => &self.web,
            SkillCategory::Data => &self.data,
            SkillCategory::Cloud => &self.cloud,
            SkillCategory::Testing => &self.testing,
            SkillCategory::Other => &self.other,
        }
    }

    pub fn get_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::CoreCs => &mut self.core_cs,
            SkillCategory::Languages => &mut self.languages,
            SkillCategory::Web => &mut self.web,
            SkillCategory::Data => &mut self.data,
            SkillCategory::Cloud => &mut self.cloud,
            SkillCategory::Testing => &mut self.testing,
            SkillCategory::Other => &mut self.other,
        }
    }

    pub fn has(&self, category: SkillCategory) -> bool {
        !self.get(category).is_empty()
    }

    /// Every skill, category order first, then in-category order.
    pub fn iter_skills(&self) -> impl Iterator<Item = (SkillCategory, &str)> + '_ {
        SkillCategory::ALL
            .into_iter()
            .flat_map(move |c| self.get(c).iter().map(move |s| (c, s.as_str())))
    }

    pub fn total_count(&self) -> usize {
        SkillCategory::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    pub fn contains_skill(&self, skill: &str) -> bool {
        self.iter_skills().any(|(_, s)| s == skill)
    }
}

/// A user's self-assessment of one extracted skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Know,
    Practice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: String,
    pub focus: String,
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistRound {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanySize {
    Startup,
    #[serde(rename = "Mid-size")]
    MidSize,
    Enterprise,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyIntel {
    pub industry: String,
    pub size: CompanySize,
    pub hiring_focus: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundInfo {
    pub round_number: u8,
    pub name: String,
    pub desc: String,
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

/// Canonical persisted analysis record.
///
/// `base_score` is fixed at creation. Only `final_score`, `skill_confidence_map` and
/// `updated_at` change afterwards, through `analysis::confidence`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisEntry {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub company: String,
    pub role: String,
    pub jd_text: String,
    pub extracted_skills: ExtractedSkills,
    #[serde(alias = "plan7Days")]
    pub plan: Vec<DayPlan>,
    pub checklist: Vec<ChecklistRound>,
    pub questions: Vec<String>,
    pub base_score: u8,
    pub final_score: u8,
    pub skill_confidence_map: BTreeMap<String, Confidence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_intel: Option<CompanyIntel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_mapping: Option<Vec<RoundInfo>>,
}

impl AnalysisEntry {
    /// Up to three skills the user flagged for practice.
    pub fn weak_skills(&self) -> Vec<&str> {
        self.skill_confidence_map
            .iter()
            .filter(|(_, c)| **c == Confidence::Practice)
            .map(|(s, _)| s.as_str())
            .take(3)
            .collect()
    }
}
