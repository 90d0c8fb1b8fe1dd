//! Seven-day preparation plan.

use crate::analysis::owned;
use crate::models::analysis::{DayPlan, ExtractedSkills, SkillCategory};

struct DayTemplate {
    day: &'static str,
    focus: &'static str,
    tasks: &'static [&'static str],
}

const PLAN_SKELETON: [DayTemplate; 7] = [
    DayTemplate {
        day: "Day 1",
        focus: "Core CS Fundamentals",
        tasks: &[
            "Revise OOP concepts with small code examples",
            "Review OS: scheduling algorithms, memory, threads",
            "Practice 10 aptitude questions",
        ],
    },
    DayTemplate {
        day: "Day 2",
        focus: "Databases & Networking",
        tasks: &[
            "Study DBMS: normalization, transactions, indexing",
            "Networking basics: TCP/IP, HTTP, DNS",
            "Practice 10 aptitude questions",
        ],
    },
    DayTemplate {
        day: "Day 3",
        focus: "DSA: Arrays, Strings & Hashing",
        tasks: &[
            "Solve 5 array and string problems using sliding window and two pointers",
            "Solve 3 hashing problems",
            "Write down the time and space complexity of each solution",
        ],
    },
    DayTemplate {
        day: "Day 4",
        focus: "DSA: Trees, Graphs & DP",
        tasks: &[
            "Solve 3 tree and graph traversal problems",
            "Implement 2 dynamic programming problems",
            "Take a timed mock test: 3 problems in 90 minutes",
        ],
    },
    DayTemplate {
        day: "Day 5",
        focus: "Projects & Resume Alignment",
        tasks: &[
            "Update your resume to highlight skills named in the JD",
            "Prepare a 2-minute pitch for each project",
            "Collect metrics and impact for each project",
        ],
    },
    DayTemplate {
        day: "Day 6",
        focus: "Mock Interviews",
        tasks: &[
            "Practice behavioral answers in STAR format",
            "Do a mock technical interview with a peer or an online tool",
            "Record yourself answering and review for clarity",
        ],
    },
    DayTemplate {
        day: "Day 7",
        focus: "Revision & Weak Areas",
        tasks: &[
            "Revisit every problem you got wrong this week",
            "Quick pass over all core CS notes",
            "Rest and prepare mentally",
        ],
    },
];

const DAY_2: usize = 1;
const DAY_3: usize = 2;
const DAY_5: usize = 4;
const DAY_6: usize = 5;

/// Fixed skeleton plus additions, checked in this order: web, data, cloud, Python, Java.
pub fn generate_plan(skills: &ExtractedSkills) -> Vec<DayPlan> {
    let mut plan: Vec<DayPlan> = PLAN_SKELETON
        .iter()
        .map(|t| DayPlan {
            day: t.day.to_string(),
            focus: t.focus.to_string(),
            tasks: owned(t.tasks),
        })
        .collect();

    let mut add = |day: usize, task: &str| plan[day].tasks.push(task.to_string());

    if skills.has(SkillCategory::Web) {
        add(DAY_5, "Review frontend component patterns, hooks and state management");
        add(DAY_6, "Practice explaining your frontend architecture decisions");
    }
    if skills.has(SkillCategory::Data) {
        add(DAY_2, "Practice complex SQL joins, window functions and indexing");
    }
    if skills.has(SkillCategory::Cloud) {
        add(DAY_5, "Review Docker basics and CI/CD pipeline configuration");
    }
    if skills.contains_skill("Python") {
        add(DAY_3, "Solve today's problems in Python, aiming for idiomatic solutions");
    }
    if skills.contains_skill("Java") {
        add(DAY_3, "Review the Java collections framework and multithreading");
    }

    plan
}
