//! Likely interview questions, keyed by exact skill display name.

use crate::models::analysis::ExtractedSkills;

pub const MAX_QUESTIONS: usize = 10;

const QUESTION_BANK: &[(&str, &[&str])] = &[
    (
        "DSA",
        &[
            "How would you optimize search in a sorted dataset?",
            "Explain the difference between BFS and DFS with use cases.",
            "What is the time complexity of quicksort and when does it degrade?",
            "How would you detect a cycle in a linked list?",
        ],
    ),
    (
        "OOP",
        &[
            "Explain polymorphism with a real-world example.",
            "What is the difference between an abstract class and an interface?",
        ],
    ),
    (
        "DBMS",
        &[
            "What are the ACID properties and why do they matter?",
            "Explain normalization up to 3NF with an example.",
        ],
    ),
    (
        "OS",
        &[
            "Explain process versus thread and when you would use each.",
            "What is a deadlock and how can it be prevented?",
        ],
    ),
    (
        "Networks",
        &[
            "Walk through the TCP three-way handshake.",
            "What happens when you type a URL into the browser?",
        ],
    ),
    (
        "Java",
        &[
            "How does garbage collection work in Java?",
            "What is the difference between HashMap and ConcurrentHashMap?",
        ],
    ),
    (
        "Python",
        &[
            "What are decorators and where would you use them?",
            "Compare a list comprehension with a generator expression.",
        ],
    ),
    (
        "JavaScript",
        &[
            "Explain closures with an example.",
            "What is the difference between var, let and const?",
        ],
    ),
    (
        "TypeScript",
        &[
            "How do generics work in TypeScript and when would you use them?",
            "When would you choose a type alias over an interface?",
        ],
    ),
    (
        "React",
        &[
            "Compare the state management options in React and when to use each.",
            "How do hooks differ from class lifecycle methods?",
            "How does the virtual DOM work and why is it efficient?",
        ],
    ),
    (
        "Node.js",
        &[
            "Explain the Node.js event loop.",
            "How do you handle errors in async/await code?",
        ],
    ),
    (
        "REST",
        &[
            "What are the REST constraints and how do they differ from RPC?",
            "Explain HTTP status codes 200, 201, 400, 401, 403, 404 and 500.",
        ],
    ),
    (
        "GraphQL",
        &[
            "What are the advantages of GraphQL over REST?",
            "Explain resolvers and schemas in GraphQL.",
        ],
    ),
    (
        "SQL",
        &[
            "How do indexes improve query performance, and when do they hurt?",
            "Write a query to find the second highest salary in a table.",
        ],
    ),
    (
        "MongoDB",
        &[
            "When would you choose MongoDB over a relational database?",
            "Explain aggregation pipelines in MongoDB.",
        ],
    ),
    (
        "AWS",
        &[
            "Compare EC2, Lambda and ECS.",
            "How would you design a highly available architecture on AWS?",
        ],
    ),
    (
        "Docker",
        &[
            "What is the difference between a Docker image and a container?",
            "How do you keep production Docker images small?",
        ],
    ),
    (
        "Kubernetes",
        &["What is a Kubernetes pod and how does it relate to containers?"],
    ),
];

const GENERAL_QUESTIONS: &[&str] = &[
    "Tell me about a challenging project and how you solved the problems in it.",
    "How do you stay up to date with new technologies?",
    "Describe your approach to writing clean, maintainable code.",
    "How do you handle tight deadlines on a project?",
    "What is your debugging process when something breaks?",
];

fn bank_for(skill: &str) -> &'static [&'static str] {
    QUESTION_BANK
        .iter()
        .find(|(name, _)| *name == skill)
        .map(|(_, questions)| *questions)
        .unwrap_or(&[])
}

/// Bank questions for every skill (category order, then in-category order), padded with
/// general questions when short, truncated to ten.
pub fn generate_questions(skills: &ExtractedSkills) -> Vec<String> {
    let mut questions: Vec<String> = skills
        .iter_skills()
        .flat_map(|(_, skill)| bank_for(skill).iter())
        .map(|q| q.to_string())
        .collect();

    for general in GENERAL_QUESTIONS {
        if questions.len() >= MAX_QUESTIONS {
            break;
        }
        if !questions.iter().any(|q| q == general) {
            questions.push(general.to_string());
        }
    }

    questions.truncate(MAX_QUESTIONS);
    questions
}
