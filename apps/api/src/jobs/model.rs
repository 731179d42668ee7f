use serde::{Deserialize, Serialize};

/// Descriptions longer than this are cut and suffixed with an ellipsis.
pub const DESCRIPTION_LIMIT: usize = 200;

/// A normalized job listing. Every source adapter produces this shape;
/// every field is always present, with sentinels standing in for unknowns
/// ("Competitive" salary, "#" link).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    /// At most 6 labels, in vocabulary order, unique within one record.
    pub skills: Vec<String>,
    pub salary: String,
    #[serde(rename = "email")]
    pub contact_email: String,
    pub link: String,
    pub description: String,
    pub responsibilities: Vec<String>,
}

impl JobRecord {
    /// Case-insensitive identity of a listing. No two catalog records share
    /// the same key.
    pub fn dedup_key(&self) -> (String, String) {
        (self.title.to_lowercase(), self.company.to_lowercase())
    }
}

/// Truncates free text to [`DESCRIPTION_LIMIT`] characters, marking the cut
/// with an ellipsis. Counts chars, not bytes, so multi-byte text never
/// splits mid-character.
pub fn truncate_description(text: &str) -> String {
    if text.chars().count() > DESCRIPTION_LIMIT {
        let cut: String = text.chars().take(DESCRIPTION_LIMIT).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_key_is_case_insensitive() {
        let a = sample("Java Developer", "Infosys");
        let b = sample("JAVA DEVELOPER", "infosys");
        assert_eq!(a.dedup_key(), b.dedup_key());
    }

    #[test]
    fn test_short_description_untouched() {
        assert_eq!(truncate_description("short"), "short");
    }

    #[test]
    fn test_long_description_truncated_with_marker() {
        let long = "x".repeat(300);
        let truncated = truncate_description(&long);
        assert_eq!(truncated.chars().count(), DESCRIPTION_LIMIT + 3);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        let long = "₹".repeat(250);
        let truncated = truncate_description(&long);
        assert_eq!(truncated.chars().count(), DESCRIPTION_LIMIT + 3);
    }

    fn sample(title: &str, company: &str) -> JobRecord {
        JobRecord {
            title: title.to_string(),
            company: company.to_string(),
            location: "Bangalore".to_string(),
            skills: vec!["Java".to_string()],
            salary: "Competitive".to_string(),
            contact_email: "careers@example.com".to_string(),
            link: "#".to_string(),
            description: String::new(),
            responsibilities: Vec::new(),
        }
    }
}
