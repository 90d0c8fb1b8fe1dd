//! Plain-text renderings of an analysis, for copy/download by the client.

use serde::Deserialize;

use crate::models::analysis::{AnalysisEntry, Confidence, SkillCategory};

/// Which part of an analysis to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportSection {
    Plan,
    Checklist,
    Questions,
    Report,
}

pub fn render_section(entry: &AnalysisEntry, section: ExportSection) -> String {
    match section {
        ExportSection::Plan => render_plan(entry),
        ExportSection::Checklist => render_checklist(entry),
        ExportSection::Questions => render_questions(entry),
        ExportSection::Report => render_report(entry),
    }
}

/// Suggested download name for the full report.
pub fn report_filename(entry: &AnalysisEntry) -> String {
    let short: String = entry.id.chars().take(8).collect();
    format!("readiness-report-{short}.txt")
}

pub fn render_plan(entry: &AnalysisEntry) -> String {
    entry
        .plan
        .iter()
        .map(|d| {
            let tasks: Vec<String> = d.tasks.iter().map(|t| format!("- {t}")).collect();
            format!("{} ({}):\n{}", d.day, d.focus, tasks.join("\n"))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_checklist(entry: &AnalysisEntry) -> String {
    entry
        .checklist
        .iter()
        .map(|r| {
            let items: Vec<String> = r.items.iter().map(|i| format!("- [ ] {i}")).collect();
            format!("## {}\n{}", r.title, items.join("\n"))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_questions(entry: &AnalysisEntry) -> String {
    entry
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| format!("{}. {q}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

fn or_na(value: &str) -> &str {
    if value.trim().is_empty() {
        "N/A"
    } else {
        value
    }
}

fn status_marker(status: Option<&Confidence>) -> &'static str {
    match status {
        Some(Confidence::Know) => "[KNOW]",
        Some(Confidence::Practice) => "[PRACTICE]",
        None => "[ ]",
    }
}

/// Full report: header, live score, skills with confidence marks, plan, checklist,
/// questions.
pub fn render_report(entry: &AnalysisEntry) -> String {
    let date = entry.created_at.get(..10).unwrap_or(&entry.created_at);
    let mut lines = vec![
        "PLACEMENT READINESS REPORT".to_string(),
        "==========================".to_string(),
        format!("Role: {}", or_na(&entry.role)),
        format!("Company: {}", or_na(&entry.company)),
        format!("Date: {date}"),
        format!("Readiness Score: {}/100", entry.final_score),
        String::new(),
        "SKILLS ASSESSMENT".to_string(),
        "-----------------".to_string(),
    ];

    for category in SkillCategory::ALL {
        for skill in entry.extracted_skills.get(category) {
            let marker = status_marker(entry.skill_confidence_map.get(skill));
            lines.push(format!("{marker} {skill} ({})", category.label()));
        }
    }

    lines.extend([
        String::new(),
        "7-DAY PREPARATION PLAN".to_string(),
        "----------------------".to_string(),
    ]);
    for day in &entry.plan {
        lines.push(format!("{} ({}):", day.day, day.focus));
        lines.extend(day.tasks.iter().map(|t| format!("  - {t}")));
    }

    lines.extend([
        String::new(),
        "PREPARATION CHECKLIST".to_string(),
        "---------------------".to_string(),
    ]);
    for round in &entry.checklist {
        lines.push(format!("[{}]", round.title));
        lines.extend(round.items.iter().map(|i| format!("  [ ] {i}")));
    }

    lines.extend([
        String::new(),
        "LIKELY INTERVIEW QUESTIONS".to_string(),
        "--------------------------".to_string(),
    ]);
    lines.extend(
        entry
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| format!("{}. {q}", i + 1)),
    );

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::confidence::toggle_skill;
    use crate::analysis::orchestrator::run_analysis;

    fn sample() -> AnalysisEntry {
        run_analysis("Test Corp", "Dev", "We need React and Node.js skills.")
    }

    #[test]
    fn test_plan_text_lists_every_day() {
        let entry = sample();
        let text = render_plan(&entry);
        assert!(text.starts_with("Day 1 (Core CS Fundamentals):\n- "));
        assert_eq!(text.matches("\n\n").count(), 6);
    }

    #[test]
    fn test_checklist_text_uses_markdown_boxes() {
        let entry = sample();
        let text = render_checklist(&entry);
        assert!(text.starts_with("## Round 1: Aptitude & Basics\n- [ ] "));
        assert_eq!(text.matches("## ").count(), 4);
    }

    #[test]
    fn test_questions_are_numbered() {
        let entry = sample();
        let text = render_questions(&entry);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), entry.questions.len());
        assert!(lines[0].starts_with("1. "));
    }

    #[test]
    fn test_report_marks_confidence_and_live_score() {
        let entry = toggle_skill(sample(), "React", Confidence::Know);
        let entry = toggle_skill(entry, "Node.js", Confidence::Practice);
        let report = render_report(&entry);

        assert!(report.contains("Readiness Score: 61/100"));
        assert!(report.contains("[KNOW] React (Web)"));
        assert!(report.contains("[PRACTICE] Node.js (Web)"));
        assert!(report.contains("Company: Test Corp"));
        assert!(report.contains("LIKELY INTERVIEW QUESTIONS"));
    }

    #[test]
    fn test_report_blank_company_shows_na() {
        let entry = run_analysis("", "", "React");
        let report = render_report(&entry);
        assert!(report.contains("Company: N/A"));
        assert!(report.contains("Role: N/A"));
        assert!(report.contains("[ ] React (Web)"));
    }

    #[test]
    fn test_report_filename_uses_short_id() {
        let mut entry = sample();
        entry.id = "abcdef12-3456".to_string();
        assert_eq!(report_filename(&entry), "readiness-report-abcdef12.txt");
    }

    #[test]
    fn test_export_section_parses_lowercase() {
        let section: ExportSection = serde_json::from_str(r#""report""#).unwrap();
        assert_eq!(section, ExportSection::Report);
        assert_eq!(render_section(&sample(), ExportSection::Questions), render_questions(&sample()));
    }
}
