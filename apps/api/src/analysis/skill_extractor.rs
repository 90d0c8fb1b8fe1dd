//! Maps raw JD text onto the seven fixed skill buckets.
//!
//! Matching is pattern based and case-insensitive. Output order within a bucket is the
//! dictionary order below, never the order of appearance in the text, so the same JD
//! always produces the same result.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use tracing::{debug, error};

use crate::models::analysis::{ExtractedSkills, SkillCategory};

/// Assigned to `other` when no technical bucket matched anything.
pub const FALLBACK_SKILLS: &[&str] = &["Communication", "Problem solving", "Basic coding", "Projects"];

/// How a dictionary entry is matched against the text.
#[derive(Debug, Clone, Copy)]
enum Matcher {
    /// Plain substring. Only for long tokens that never occur inside other words.
    Literal(&'static str),
    /// Whole token. The character before must not be alphanumeric or `_`; the one after
    /// must not be a letter, `_`, `+` or `#`. So `C` does not fire on `C++`, `Java` does
    /// not fire on `JavaScript`, and versions still match (`C++17`, `Java8`).
    Word(&'static str),
    /// Hand-written expression for tokens with spelling variants.
    Pattern(&'static str),
}

struct SkillPattern {
    display: &'static str,
    matcher: Matcher,
}

const fn literal(display: &'static str) -> SkillPattern {
    SkillPattern {
        display,
        matcher: Matcher::Literal(display),
    }
}

const fn word(display: &'static str) -> SkillPattern {
    SkillPattern {
        display,
        matcher: Matcher::Word(display),
    }
}

const fn pattern(display: &'static str, expr: &'static str) -> SkillPattern {
    SkillPattern {
        display,
        matcher: Matcher::Pattern(expr),
    }
}

/// The skill dictionary, one ordered list per bucket.
const SKILL_DICTIONARY: &[(SkillCategory, &[SkillPattern])] = &[
    (
        SkillCategory::CoreCs,
        &[
            pattern("DSA", r"\bdsa\b|data structures"),
            pattern("OOP", r"\boops?\b|object[- ]oriented"),
            pattern("DBMS", r"\bdbms\b|database management"),
            pattern("OS", r"\bos\b|operating systems?"),
            pattern("Networks", r"\bnetworks?\b|\bnetworking\b"),
        ],
    ),
    (
        SkillCategory::Languages,
        &[
            word("Java"),
            word("Python"),
            word("JavaScript"),
            word("TypeScript"),
            word("C++"),
            word("C#"),
            pattern("Go", r"\bgolang\b|\bgo\b"),
            word("C"),
        ],
    ),
    (
        SkillCategory::Web,
        &[
            word("React"),
            pattern("Next.js", r"\bnext\.?js\b"),
            pattern("Node.js", r"\bnode\.?js\b"),
            word("Express"),
            word("REST"),
            literal("GraphQL"),
        ],
    ),
    (
        SkillCategory::Data,
        &[
            word("SQL"),
            literal("MongoDB"),
            pattern("PostgreSQL", r"\bpostgres(?:ql)?\b"),
            literal("MySQL"),
            word("Redis"),
        ],
    ),
    (
        SkillCategory::Cloud,
        &[
            word("AWS"),
            word("Azure"),
            word("GCP"),
            literal("Docker"),
            pattern("Kubernetes", r"kubernetes|\bk8s\b"),
            pattern("CI/CD", r"\bci\s*/\s*cd\b"),
            literal("Linux"),
        ],
    ),
    (
        SkillCategory::Testing,
        &[
            literal("Selenium"),
            literal("Cypress"),
            literal("Playwright"),
            word("JUnit"),
            pattern("PyTest", r"\bpy\.?test\b"),
        ],
    ),
    (
        SkillCategory::Other,
        &[
            word("Git"),
            word("Agile"),
            word("Scrum"),
            word("Jira"),
            word("Figma"),
        ],
    ),
];

/// Wraps an escaped token in explicit boundaries. The regex crate has no look-around,
/// so the boundary characters are consumed; only `is_match` is ever used.
fn word_expression(token: &str) -> String {
    format!(
        r"(?:^|[^a-zA-Z0-9_]){}(?:$|[^a-zA-Z_+#])",
        regex::escape(token)
    )
}

fn build_regex(matcher: Matcher) -> Option<Regex> {
    let expr = match matcher {
        Matcher::Literal(s) => regex::escape(s),
        Matcher::Word(s) => word_expression(s),
        Matcher::Pattern(p) => p.to_string(),
    };
    match RegexBuilder::new(&expr).case_insensitive(true).build() {
        Ok(re) => Some(re),
        Err(e) => {
            error!("Skipping invalid skill pattern {expr:?}: {e}");
            None
        }
    }
}

struct CompiledCategory {
    category: SkillCategory,
    skills: Vec<(&'static str, Regex)>,
}

static COMPILED: Lazy<Vec<CompiledCategory>> = Lazy::new(|| {
    SKILL_DICTIONARY
        .iter()
        .map(|(category, patterns)| CompiledCategory {
            category: *category,
            skills: patterns
                .iter()
                .filter_map(|p| build_regex(p.matcher).map(|re| (p.display, re)))
                .collect(),
        })
        .collect()
});

/// Extracts categorized skills from `jd_text`. Pure and deterministic.
pub fn extract_skills(jd_text: &str) -> ExtractedSkills {
    let mut skills = ExtractedSkills::default();

    for compiled in COMPILED.iter() {
        let bucket = skills.get_mut(compiled.category);
        for (display, re) in &compiled.skills {
            if re.is_match(jd_text) {
                bucket.push((*display).to_string());
            }
        }
    }

    if SkillCategory::ALL.iter().all(|c| !skills.has(*c)) {
        debug!("No skills matched; assigning fallback skill set");
        skills.other = FALLBACK_SKILLS.iter().map(|s| s.to_string()).collect();
    }

    skills
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JD: &str = "We are looking for a Software Engineer with strong skills in DSA, OOP, and DBMS. \
        Experience with React, Node.js, and REST APIs is preferred. \
        The candidate should know SQL, PostgreSQL, and have experience with Docker and AWS. \
        Knowledge of Python or Java is a plus. CI/CD experience and Linux proficiency are valued.";

    #[test]
    fn test_every_dictionary_pattern_compiles() {
        let total: usize = COMPILED.iter().map(|c| c.skills.len()).sum();
        let expected: usize = SKILL_DICTIONARY.iter().map(|(_, p)| p.len()).sum();
        assert_eq!(total, expected);
    }

    #[test]
    fn test_sample_jd_buckets() {
        let skills = extract_skills(SAMPLE_JD);
        assert_eq!(skills.core_cs, vec!["DSA", "OOP", "DBMS"]);
        assert_eq!(skills.languages, vec!["Java", "Python"]);
        assert_eq!(skills.web, vec!["React", "Node.js", "REST"]);
        assert_eq!(skills.data, vec!["SQL", "PostgreSQL"]);
        assert_eq!(skills.cloud, vec!["AWS", "Docker", "CI/CD", "Linux"]);
        assert!(skills.testing.is_empty());
        assert!(skills.other.is_empty());
    }

    #[test]
    fn test_output_uses_dictionary_order_not_text_order() {
        let skills = extract_skills("Node.js first, then React");
        assert_eq!(skills.web, vec!["React", "Node.js"]);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        assert_eq!(extract_skills(SAMPLE_JD), extract_skills(SAMPLE_JD));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let skills = extract_skills("react, KUBERNETES and graphql");
        assert_eq!(skills.web, vec!["React", "GraphQL"]);
        assert_eq!(skills.cloud, vec!["Kubernetes"]);
    }

    #[test]
    fn test_fallback_when_nothing_matches() {
        let skills = extract_skills("I am looking for a nice person who is kind.");
        assert_eq!(skills.total_count(), FALLBACK_SKILLS.len());
        assert_eq!(skills.other, FALLBACK_SKILLS);
    }

    #[test]
    fn test_fallback_on_empty_text() {
        let skills = extract_skills("");
        assert_eq!(skills.other, FALLBACK_SKILLS);
        assert_eq!(skills.total_count(), FALLBACK_SKILLS.len());
    }

    #[test]
    fn test_other_bucket_match_suppresses_fallback() {
        let skills = extract_skills("Comfortable with Git and Agile ceremonies");
        assert_eq!(skills.other, vec!["Git", "Agile"]);
    }

    #[test]
    fn test_single_letter_c_needs_word_boundary() {
        let skills = extract_skills("Clean code, scalable cloud services");
        assert!(!skills.languages.contains(&"C".to_string()));

        let skills = extract_skills("Strong C and C++ background");
        assert_eq!(skills.languages, vec!["C++", "C"]);
    }

    #[test]
    fn test_c_plus_plus_and_c_sharp_do_not_imply_c() {
        let skills = extract_skills("C++ and C# developers");
        assert_eq!(skills.languages, vec!["C++", "C#"]);
    }

    #[test]
    fn test_java_does_not_fire_on_javascript() {
        let skills = extract_skills("Senior JavaScript engineer");
        assert_eq!(skills.languages, vec!["JavaScript"]);
    }

    #[test]
    fn test_short_tokens_do_not_match_inside_words() {
        // "most" (os), "interest" (rest), "laws" (aws), "loop" (oop), "digit" (git), "going" (go)
        let skills = extract_skills("Most interest in laws, loop digits, going forward");
        assert_eq!(skills.total_count(), FALLBACK_SKILLS.len());
        assert_eq!(skills.other, FALLBACK_SKILLS);
    }

    #[test]
    fn test_sql_does_not_fire_inside_product_names() {
        let skills = extract_skills("MySQL and NoSQL stores");
        assert_eq!(skills.data, vec!["MySQL"]);
    }

    #[test]
    fn test_spelling_variants() {
        let skills = extract_skills("nodejs, Golang, k8s, postgres, pytest, object-oriented design");
        assert_eq!(skills.web, vec!["Node.js"]);
        assert_eq!(skills.languages, vec!["Go"]);
        assert_eq!(skills.cloud, vec!["Kubernetes"]);
        assert_eq!(skills.data, vec!["PostgreSQL"]);
        assert_eq!(skills.testing, vec!["PyTest"]);
        assert_eq!(skills.core_cs, vec!["OOP"]);
    }

    #[test]
    fn test_plain_networks_counts_as_core_cs() {
        let skills = extract_skills("Fundamentals: DSA, OOP, DBMS, OS, Networks");
        assert_eq!(skills.core_cs, vec!["DSA", "OOP", "DBMS", "OS", "Networks"]);

        let skills = extract_skills("Computer networking knowledge");
        assert_eq!(skills.core_cs, vec!["Networks"]);
    }

    #[test]
    fn test_versioned_tokens_match() {
        let skills = extract_skills("Modern C++17 and Java8 experience");
        assert_eq!(skills.languages, vec!["Java", "C++"]);
    }

    #[test]
    fn test_leading_digit_still_blocks_word_match() {
        let skills = extract_skills("Model 3Java and 2C++ builds");
        assert!(skills.languages.is_empty());
    }
}
