//! Interview-round checklist, derived from which skill buckets are present.

use crate::analysis::owned;
use crate::models::analysis::{ChecklistRound, ExtractedSkills, SkillCategory};

const APTITUDE_TITLE: &str = "Round 1: Aptitude & Basics";
const APTITUDE_ITEMS: &[&str] = &[
    "Practice quantitative aptitude: percentages, ratios, profit and loss",
    "Solve logical reasoning sets: seating, blood relations, coding-decoding",
    "Work on verbal ability: reading comprehension, grammar, para jumbles",
    "Revise basic math: number systems, algebra, probability",
    "Run a timed drill of 60 questions in 60 minutes",
];

const DSA_TITLE: &str = "Round 2: DSA & Core CS";
const DSA_ITEMS: &[&str] = &[
    "Arrays, strings and hashing problems, easy to medium",
    "Implement linked lists, stacks and queues from scratch",
    "Tree and graph traversal with BFS and DFS",
    "Dynamic programming, both top-down and bottom-up",
    "Complexity analysis of common sorting and searching algorithms",
];
const CORE_CS_ITEMS: &[&str] = &[
    "OOP principles: encapsulation, inheritance, polymorphism, abstraction",
    "DBMS normalization, ACID properties, joins versus subqueries",
    "OS concepts: process scheduling, deadlocks, memory management",
];

const TECHNICAL_TITLE: &str = "Round 3: Technical Interview (Projects + Stack)";
const TECHNICAL_ITEMS: &[&str] = &[
    "Prepare a 2-minute walkthrough for every project on your resume",
    "Explain the architecture decisions and trade-offs in your projects",
    "Practice live coding in a shared editor or on a whiteboard",
    "Review system design basics: load balancing, caching, sharding",
    "Prepare STAR-format stories for technical problems you solved",
];
const WEB_ITEMS: &[&str] = &[
    "Review component lifecycle and state management patterns",
    "Explain REST versus GraphQL trade-offs with examples",
];
const DATA_ITEMS: &[&str] = &["Write complex SQL queries and explain how you would optimize them"];
const CLOUD_ITEMS: &[&str] = &["Explain a CI/CD pipeline setup and containerization basics"];

const HR_TITLE: &str = "Round 4: Managerial / HR";
const HR_ITEMS: &[&str] = &[
    "Prepare a structured 90-second 'Tell me about yourself'",
    "Research the company's values, products and recent news",
    "Pick genuine strengths and weaknesses with concrete examples",
    "Describe where you see yourself in 5 years",
    "Research market salary ranges for the role and location",
    "Prepare questions for the interviewer about team, growth and stack",
];

/// Four rounds: aptitude, DSA (plus Core CS when present), technical (plus stack
/// specific items for web, data, cloud in that order), HR.
pub fn generate_checklist(skills: &ExtractedSkills) -> Vec<ChecklistRound> {
    let mut dsa_items = owned(DSA_ITEMS);
    if skills.has(SkillCategory::CoreCs) {
        dsa_items.extend(owned(CORE_CS_ITEMS));
    }

    let mut technical_items = owned(TECHNICAL_ITEMS);
    for (category, extra) in [
        (SkillCategory::Web, WEB_ITEMS),
        (SkillCategory::Data, DATA_ITEMS),
        (SkillCategory::Cloud, CLOUD_ITEMS),
    ] {
        if skills.has(category) {
            technical_items.extend(owned(extra));
        }
    }

    vec![
        ChecklistRound {
            title: APTITUDE_TITLE.to_string(),
            items: owned(APTITUDE_ITEMS),
        },
        ChecklistRound {
            title: DSA_TITLE.to_string(),
            items: dsa_items,
        },
        ChecklistRound {
            title: TECHNICAL_TITLE.to_string(),
            items: technical_items,
        },
        ChecklistRound {
            title: HR_TITLE.to_string(),
            items: owned(HR_ITEMS),
        },
    ]
}
