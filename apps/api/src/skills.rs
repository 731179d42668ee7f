//! Skill vocabulary matching — the tagging primitive behind job
//! normalization and resume parsing.
//!
//! Matching is deliberately dumb: case-insensitive substring containment
//! against a fixed, ordered vocabulary. Output order is vocabulary order,
//! never input-position order, and labels are unique by construction.

/// Sentinel skill attached to a job when no vocabulary label matches.
pub const FALLBACK_SKILL: &str = "Software Development";

/// A job record carries at most this many skill labels.
pub const MAX_SKILLS_PER_JOB: usize = 6;

/// Labels recognized when tagging job postings (titles + descriptions).
const JOB_SKILL_VOCABULARY: &[&str] = &[
    "Python",
    "Java",
    "JavaScript",
    "TypeScript",
    "SQL",
    "React",
    "Angular",
    "Vue",
    "Node",
    "NodeJS",
    "SpringBoot",
    "Django",
    "Flask",
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "Machine Learning",
    "Deep Learning",
    "AI",
    "TensorFlow",
    "PyTorch",
    "HTML",
    "CSS",
    "MongoDB",
    "MySQL",
    "PostgreSQL",
    "Redis",
    "Kafka",
    "REST API",
    "GraphQL",
    "Git",
    "Linux",
    "DSA",
    "C++",
    "C#",
    "Kotlin",
    "Swift",
    "Android",
    "iOS",
    "Flutter",
    "Dart",
];

/// Broader label set used when parsing uploaded resumes. Resumes mention
/// tooling (BI, design, data) that job postings rarely lead with.
const RESUME_SKILL_VOCABULARY: &[&str] = &[
    "Python",
    "Java",
    "SQL",
    "React",
    "SpringBoot",
    "Machine Learning",
    "AWS",
    "HTML",
    "CSS",
    "JavaScript",
    "C++",
    "Django",
    "Flask",
    "NodeJS",
    "Power BI",
    "Excel",
    "TensorFlow",
    "Docker",
    "Kubernetes",
    "Git",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "TypeScript",
    "Angular",
    "Vue",
    "Kotlin",
    "Swift",
    "Go",
    "Rust",
    "PyTorch",
    "Pandas",
    "NumPy",
    "Scikit-learn",
    "Hadoop",
    "Spark",
    "Tableau",
    "Linux",
    "Bash",
    "REST API",
    "GraphQL",
    "Redis",
    "Elasticsearch",
    "Figma",
    "Flutter",
];

/// Returns every job-vocabulary label contained in `text`.
///
/// Pure and context-free: an empty result is a valid answer, the caller
/// decides whether a fallback applies.
pub fn tag_skills(text: &str) -> Vec<String> {
    match_vocabulary(text, JOB_SKILL_VOCABULARY)
}

/// Skill list for a job posting: tagged labels capped at
/// [`MAX_SKILLS_PER_JOB`], or the [`FALLBACK_SKILL`] sentinel when nothing
/// matched.
pub fn derive_job_skills(text: &str) -> Vec<String> {
    let mut skills = tag_skills(text);
    if skills.is_empty() {
        skills.push(FALLBACK_SKILL.to_string());
    }
    skills.truncate(MAX_SKILLS_PER_JOB);
    skills
}

/// Returns every resume-vocabulary label contained in `text`. No cap, no
/// sentinel — an empty resume yields an empty skill list.
pub fn extract_resume_skills(text: &str) -> Vec<String> {
    match_vocabulary(text, RESUME_SKILL_VOCABULARY)
}

/// Uppercases the first character and lowercases the rest, for displaying
/// provider tags and matched skills consistently.
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn match_vocabulary(text: &str, vocabulary: &[&str]) -> Vec<String> {
    let haystack = text.to_lowercase();
    vocabulary
        .iter()
        .filter(|label| haystack.contains(&label.to_lowercase()))
        .map(|label| label.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagging_is_case_insensitive() {
        let skills = tag_skills("Senior PYTHON developer with docker experience");
        assert!(skills.contains(&"Python".to_string()));
        assert!(skills.contains(&"Docker".to_string()));
    }

    #[test]
    fn test_output_preserves_vocabulary_order() {
        // Input mentions Docker before Python; vocabulary lists Python first.
        let skills = tag_skills("Docker then Python");
        assert_eq!(skills, vec!["Python", "Docker"]);
    }

    #[test]
    fn test_no_duplicate_labels() {
        let skills = tag_skills("python Python PYTHON python");
        assert_eq!(skills.iter().filter(|s| *s == "Python").count(), 1);
    }

    #[test]
    fn test_every_label_is_substring_of_input() {
        let input = "Rust and Java and Kafka on AWS with Kubernetes";
        let lowered = input.to_lowercase();
        for skill in tag_skills(input) {
            assert!(lowered.contains(&skill.to_lowercase()), "{skill} not in input");
        }
    }

    #[test]
    fn test_empty_input_yields_empty_tags() {
        assert!(tag_skills("").is_empty());
    }

    #[test]
    fn test_derive_job_skills_caps_at_six() {
        let text = "Python Java JavaScript TypeScript SQL React Angular Vue Docker";
        let skills = derive_job_skills(text);
        assert_eq!(skills.len(), MAX_SKILLS_PER_JOB);
    }

    #[test]
    fn test_derive_job_skills_falls_back_to_sentinel() {
        let skills = derive_job_skills("gardener wanted, no experience needed");
        assert_eq!(skills, vec![FALLBACK_SKILL.to_string()]);
    }

    #[test]
    fn test_resume_vocabulary_covers_analytics_tools() {
        let skills = extract_resume_skills("Built dashboards in Tableau and Power BI using Pandas");
        assert_eq!(skills, vec!["Power BI", "Pandas", "Tableau"]);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("python"), "Python");
        assert_eq!(capitalize("SQL"), "Sql");
        assert_eq!(capitalize(""), "");
    }
}
