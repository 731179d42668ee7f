//! RemoteOK feed adapter — the secondary live source, filtered to
//! remote roles open to Indian applicants.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{FetchError, JobSource, USER_AGENT};
use crate::jobs::model::{truncate_description, JobRecord};
use crate::skills::{capitalize, tag_skills, FALLBACK_SKILL, MAX_SKILLS_PER_JOB};

/// RemoteOK public JSON feed.
pub const FEED_URL: &str = "https://remoteok.com/api";

const TIMEOUT: Duration = Duration::from_secs(10);
const MAX_RESULTS: usize = 15;
const MAX_PROVIDER_TAGS: usize = 5;
const LOCATION: &str = "Remote (India Eligible)";
const CONTACT_EMAIL: &str = "apply@remoteok.com";

pub struct RemoteOkSource {
    client: Client,
    endpoint: String,
}

impl RemoteOkSource {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(TIMEOUT)
                .user_agent(USER_AGENT)
                .build()
                .expect("failed to build HTTP client"),
            endpoint,
        }
    }
}

#[async_trait]
impl JobSource for RemoteOkSource {
    fn name(&self) -> &'static str {
        "remoteok"
    }

    async fn fetch(&self) -> Result<Vec<JobRecord>, FetchError> {
        let response = self.client.get(&self.endpoint).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body: Value = response.json().await?;
        parse_feed(&body)
    }
}

/// Maps the RemoteOK feed to normalized records. The first array element is
/// feed metadata and is skipped; at most the next [`MAX_RESULTS`] postings
/// are taken.
pub(crate) fn parse_feed(body: &Value) -> Result<Vec<JobRecord>, FetchError> {
    let items = body
        .as_array()
        .ok_or_else(|| FetchError::Malformed("expected a JSON array".to_string()))?;

    Ok(items
        .iter()
        .skip(1)
        .take(MAX_RESULTS)
        .map(map_posting)
        .collect())
}

fn map_posting(item: &Value) -> JobRecord {
    let title = str_field(item, "position").unwrap_or("Remote Developer");
    let company = str_field(item, "company").unwrap_or("Remote Company");
    let description = str_field(item, "description").unwrap_or("");

    JobRecord {
        title: title.to_string(),
        company: company.to_string(),
        location: LOCATION.to_string(),
        skills: derive_skills(item, title, description),
        salary: str_field(item, "salary")
            .filter(|s| !s.is_empty())
            .unwrap_or("Competitive")
            .to_string(),
        contact_email: CONTACT_EMAIL.to_string(),
        link: str_field(item, "url").unwrap_or("#").to_string(),
        description: truncate_description(description),
        responsibilities: Vec::new(),
    }
}

/// Vocabulary tags first; when the posting text matches nothing, fall back
/// to the board's own tags (capitalized, first 5), then the sentinel label.
fn derive_skills(item: &Value, title: &str, description: &str) -> Vec<String> {
    let mut skills = tag_skills(&format!("{title} {description}"));
    skills.truncate(MAX_SKILLS_PER_JOB);
    if !skills.is_empty() {
        return skills;
    }

    let tagged: Vec<String> = item
        .get("tags")
        .and_then(Value::as_array)
        .map(|tags| {
            tags.iter()
                .filter_map(Value::as_str)
                .take(MAX_PROVIDER_TAGS)
                .map(capitalize)
                .collect()
        })
        .unwrap_or_default();

    if tagged.is_empty() {
        vec![FALLBACK_SKILL.to_string()]
    } else {
        tagged
    }
}

fn str_field<'a>(item: &'a Value, key: &str) -> Option<&'a str> {
    item.get(key).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_element_is_skipped_as_metadata() {
        let body = json!([
            {"legal": "feed terms"},
            {"position": "Backend Engineer", "company": "Acme", "description": "Python and Kafka"}
        ]);
        let records = parse_feed(&body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Backend Engineer");
    }

    #[test]
    fn test_at_most_fifteen_postings_processed() {
        let mut items = vec![json!({"legal": "meta"})];
        for i in 0..30 {
            items.push(json!({"position": format!("Role {i}"), "company": "Acme"}));
        }
        let records = parse_feed(&Value::Array(items)).unwrap();
        assert_eq!(records.len(), MAX_RESULTS);
    }

    #[test]
    fn test_location_is_hardcoded() {
        let body = json!([{}, {"position": "Dev", "location": "Berlin"}]);
        let records = parse_feed(&body).unwrap();
        assert_eq!(records[0].location, "Remote (India Eligible)");
    }

    #[test]
    fn test_provider_tags_used_when_text_matches_nothing() {
        let body = json!([
            {},
            {
                "position": "Growth Hacker",
                "description": "move metrics",
                "tags": ["golang", "devops", "saas", "b2b", "crm", "extra"]
            }
        ]);
        let records = parse_feed(&body).unwrap();
        assert_eq!(
            records[0].skills,
            vec!["Golang", "Devops", "Saas", "B2b", "Crm"]
        );
    }

    #[test]
    fn test_sentinel_when_no_text_match_and_no_tags() {
        let body = json!([{}, {"position": "Growth Hacker", "description": "move metrics"}]);
        let records = parse_feed(&body).unwrap();
        assert_eq!(records[0].skills, vec![FALLBACK_SKILL.to_string()]);
    }

    #[test]
    fn test_non_array_body_is_malformed() {
        let err = parse_feed(&json!({"error": "down"})).unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn test_missing_salary_is_competitive() {
        let body = json!([{}, {"position": "Dev", "salary": ""}]);
        let records = parse_feed(&body).unwrap();
        assert_eq!(records[0].salary, "Competitive");
    }
}
