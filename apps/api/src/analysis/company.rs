//! Company heuristics: size tier, industry and interview round mapping.
//!
//! Heuristic only: the company name is matched against fixed name lists, there is
//! no external lookup.

use crate::models::analysis::{CompanyIntel, CompanySize, ExtractedSkills, RoundInfo, SkillCategory};

const ENTERPRISE_NAMES: &[&str] = &[
    "google",
    "microsoft",
    "amazon",
    "meta",
    "apple",
    "netflix",
    "adobe",
    "salesforce",
    "oracle",
    "ibm",
    "cisco",
    "intel",
    "infosys",
    "tcs",
    "wipro",
    "accenture",
    "cognizant",
    "capgemini",
    "deloitte",
    "jpmorgan",
    "goldman sachs",
    "morgan stanley",
];

const MID_SIZE_NAMES: &[&str] = &[
    "uber",
    "airbnb",
    "stripe",
    "coinbase",
    "spotify",
    "shopify",
    "atlassian",
    "slack",
    "zoom",
    "dropbox",
    "box",
    "reddit",
    "twitter",
    "snapchat",
    "pinterest",
];

/// Enterprise names that are IT services and consulting houses.
const IT_SERVICES_NAMES: &[&str] = &["infosys", "tcs", "wipro", "accenture", "cognizant"];
/// Enterprise names that are banks.
const FINTECH_NAMES: &[&str] = &["jpmorgan", "goldman", "morgan"];

fn matches_any(name: &str, list: &[&str]) -> bool {
    list.iter().any(|candidate| name.contains(candidate))
}

/// Enterprise list first, then mid-size; first hit wins, no hit means Startup.
pub fn generate_company_intel(company: &str) -> CompanyIntel {
    let name = company.to_lowercase();

    if matches_any(&name, ENTERPRISE_NAMES) {
        let industry = if matches_any(&name, IT_SERVICES_NAMES) {
            "IT Services & Consulting"
        } else if matches_any(&name, FINTECH_NAMES) {
            "FinTech / Banking"
        } else {
            "Big Tech / Product"
        };
        return CompanyIntel {
            industry: industry.to_string(),
            size: CompanySize::Enterprise,
            hiring_focus: "Strong DSA fundamentals, scalable system design and core CS concepts."
                .to_string(),
        };
    }

    if matches_any(&name, MID_SIZE_NAMES) {
        return CompanyIntel {
            industry: "High-Growth Product".to_string(),
            size: CompanySize::MidSize,
            hiring_focus: "A balance of DSA, system design and product engineering skills."
                .to_string(),
        };
    }

    CompanyIntel {
        industry: "Internet / Startup".to_string(),
        size: CompanySize::Startup,
        hiring_focus: "Practical problem solving and depth in the specific tech stack."
            .to_string(),
    }
}

fn round(round_number: u8, name: &str, desc: &str) -> RoundInfo {
    RoundInfo {
        round_number,
        name: name.to_string(),
        desc: desc.to_string(),
    }
}

/// Enterprise: fixed four rounds. Everyone else: three rounds, with the first two
/// descriptions depending on whether the JD has a web stack.
pub fn generate_round_mapping(intel: &CompanyIntel, skills: &ExtractedSkills) -> Vec<RoundInfo> {
    if intel.size == CompanySize::Enterprise {
        return vec![
            round(
                1,
                "Online Assessment",
                "60-90 minute coding test on DSA (arrays, strings, DP) plus aptitude.",
            ),
            round(
                2,
                "Technical Round 1",
                "Live coding on trees and graphs plus core CS (OS, DBMS) concepts.",
            ),
            round(
                3,
                "Technical Round 2",
                "System design basics and a project deep dive. Expect 'Why this DB?' questions.",
            ),
            round(
                4,
                "HR / Managerial",
                "Behavioral fit, 'Why this company?' and culture alignment.",
            ),
        ];
    }

    let has_web = skills.has(SkillCategory::Web);
    let (screening, deep_dive) = if has_web {
        (
            "Build a small web app or fix bugs in an existing repository.",
            "Pair programming: extend your take-home with a feature and discuss state management.",
        )
    } else {
        (
            "Practical coding task or rapid-fire technical questions.",
            "Live problem solving on practical problems, not only puzzle-style questions.",
        )
    };

    vec![
        round(1, "Screening / Take-home", screening),
        round(2, "Technical Deep Dive", deep_dive),
        round(
            3,
            "Culture & Engineering Manager",
            "Past projects, team conflict resolution and product sense.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enterprise_big_tech() {
        let intel = generate_company_intel("Google India");
        assert_eq!(intel.size, CompanySize::Enterprise);
        assert_eq!(intel.industry, "Big Tech / Product");
    }

    #[test]
    fn test_enterprise_it_services_branch() {
        let intel = generate_company_intel("TCS Digital");
        assert_eq!(intel.size, CompanySize::Enterprise);
        assert_eq!(intel.industry, "IT Services & Consulting");
    }

    #[test]
    fn test_enterprise_fintech_branch() {
        let intel = generate_company_intel("Goldman Sachs");
        assert_eq!(intel.size, CompanySize::Enterprise);
        assert_eq!(intel.industry, "FinTech / Banking");
    }

    #[test]
    fn test_mid_size_match_is_case_insensitive() {
        let intel = generate_company_intel("STRIPE");
        assert_eq!(intel.size, CompanySize::MidSize);
        assert_eq!(intel.industry, "High-Growth Product");
    }

    #[test]
    fn test_enterprise_list_wins_over_mid_size() {
        // contains both "amazon" and "box"
        let intel = generate_company_intel("Amazon Box Services");
        assert_eq!(intel.size, CompanySize::Enterprise);
    }

    #[test]
    fn test_unknown_and_blank_default_to_startup() {
        assert_eq!(generate_company_intel("Tiny Labs").size, CompanySize::Startup);
        assert_eq!(generate_company_intel("").size, CompanySize::Startup);
    }

    #[test]
    fn test_enterprise_round_mapping_is_fixed_four_rounds() {
        let intel = generate_company_intel("Microsoft");
        for skills in [
            ExtractedSkills::default(),
            ExtractedSkills {
                web: vec!["React".to_string()],
                ..Default::default()
            },
        ] {
            let rounds = generate_round_mapping(&intel, &skills);
            let names: Vec<&str> = rounds.iter().map(|r| r.name.as_str()).collect();
            assert_eq!(
                names,
                vec![
                    "Online Assessment",
                    "Technical Round 1",
                    "Technical Round 2",
                    "HR / Managerial"
                ]
            );
            let numbers: Vec<u8> = rounds.iter().map(|r| r.round_number).collect();
            assert_eq!(numbers, vec![1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_startup_without_web_uses_generic_variant() {
        let intel = generate_company_intel("Tiny Labs");
        let rounds = generate_round_mapping(&intel, &ExtractedSkills::default());
        assert_eq!(rounds.len(), 3);
        assert!(rounds[0].desc.starts_with("Practical coding task"));
        assert!(rounds[1].desc.starts_with("Live problem solving"));
    }

    #[test]
    fn test_mid_size_with_web_uses_web_variant() {
        let intel = generate_company_intel("Spotify");
        let skills = ExtractedSkills {
            web: vec!["React".to_string()],
            ..Default::default()
        };
        let rounds = generate_round_mapping(&intel, &skills);
        assert_eq!(rounds.len(), 3);
        assert!(rounds[0].desc.contains("web app"));
        assert!(rounds[1].desc.starts_with("Pair programming"));
        assert_eq!(rounds[2].name, "Culture & Engineering Manager");
    }
}
