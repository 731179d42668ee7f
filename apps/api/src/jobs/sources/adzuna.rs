//! Adzuna India search adapter — the primary live source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{FetchError, JobSource, USER_AGENT};
use crate::jobs::model::{truncate_description, JobRecord};
use crate::skills::derive_job_skills;

/// Adzuna job-search endpoint for India, page 1.
pub const SEARCH_URL: &str = "https://api.adzuna.com/v1/api/jobs/in/search/1";

const TIMEOUT: Duration = Duration::from_secs(8);
const RESULTS_PER_PAGE: &str = "20";
const DEFAULT_QUERY: &str = "software developer";
const DEFAULT_REGION: &str = "India";
const CONTACT_EMAIL: &str = "careers@company.com";

pub struct AdzunaSource {
    client: Client,
    endpoint: String,
    app_id: String,
    app_key: String,
}

impl AdzunaSource {
    pub fn new(endpoint: String, app_id: String, app_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(TIMEOUT)
                .user_agent(USER_AGENT)
                .build()
                .expect("failed to build HTTP client"),
            endpoint,
            app_id,
            app_key,
        }
    }
}

#[async_trait]
impl JobSource for AdzunaSource {
    fn name(&self) -> &'static str {
        "adzuna"
    }

    async fn fetch(&self) -> Result<Vec<JobRecord>, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("app_id", self.app_id.as_str()),
                ("app_key", self.app_key.as_str()),
                ("results_per_page", RESULTS_PER_PAGE),
                ("what", DEFAULT_QUERY),
                ("where", DEFAULT_REGION),
                ("content-type", "application/json"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body: Value = response.json().await?;
        Ok(parse_results(&body))
    }
}

/// Maps the Adzuna response body to normalized records. Missing fields get
/// per-field defaults rather than dropping the listing.
pub(crate) fn parse_results(body: &Value) -> Vec<JobRecord> {
    let Some(results) = body.get("results").and_then(Value::as_array) else {
        return Vec::new();
    };
    results.iter().map(map_result).collect()
}

fn map_result(item: &Value) -> JobRecord {
    let title = str_field(item, "title").unwrap_or("Software Developer");
    let company = item
        .pointer("/company/display_name")
        .and_then(Value::as_str)
        .unwrap_or("Indian Company");
    let location = item
        .pointer("/location/display_name")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_REGION);
    let description = str_field(item, "description").unwrap_or("");

    JobRecord {
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        skills: derive_job_skills(&format!("{title} {description}")),
        salary: format_salary(num_field(item, "salary_min"), num_field(item, "salary_max")),
        contact_email: CONTACT_EMAIL.to_string(),
        link: str_field(item, "redirect_url").unwrap_or("#").to_string(),
        description: truncate_description(description),
        responsibilities: Vec::new(),
    }
}

/// Renders a yearly salary range. Zero bounds count as absent, matching the
/// provider's habit of sending 0 for undisclosed salaries.
pub(crate) fn format_salary(min: Option<f64>, max: Option<f64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!(
            "₹{} – ₹{} / year",
            group_thousands(min as u64),
            group_thousands(max as u64)
        ),
        (Some(min), None) => format!("₹{}+ / year", group_thousands(min as u64)),
        _ => "Competitive".to_string(),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

fn str_field<'a>(item: &'a Value, key: &str) -> Option<&'a str> {
    item.get(key).and_then(Value::as_str)
}

fn num_field(item: &Value, key: &str) -> Option<f64> {
    item.get(key).and_then(Value::as_f64).filter(|v| *v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_salary_range_both_bounds() {
        assert_eq!(
            format_salary(Some(600_000.0), Some(1_200_000.0)),
            "₹600,000 – ₹1,200,000 / year"
        );
    }

    #[test]
    fn test_salary_lower_bound_only() {
        assert_eq!(format_salary(Some(500_000.0), None), "₹500,000+ / year");
    }

    #[test]
    fn test_salary_unknown_is_competitive() {
        assert_eq!(format_salary(None, None), "Competitive");
    }

    #[test]
    fn test_zero_salary_treated_as_absent() {
        let item = json!({"title": "Dev", "salary_min": 0, "salary_max": 0});
        assert_eq!(num_field(&item, "salary_min"), None);
        assert_eq!(num_field(&item, "salary_max"), None);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(2_500_000), "2,500,000");
    }

    #[test]
    fn test_parse_results_maps_provider_fields() {
        let body = json!({
            "results": [{
                "title": "Rust Engineer",
                "company": {"display_name": "Acme Systems"},
                "location": {"display_name": "Pune"},
                "description": "Build backend services in Rust with Docker and AWS.",
                "salary_min": 900000,
                "salary_max": 1800000,
                "redirect_url": "https://example.com/job/1"
            }]
        });

        let records = parse_results(&body);
        assert_eq!(records.len(), 1);
        let job = &records[0];
        assert_eq!(job.title, "Rust Engineer");
        assert_eq!(job.company, "Acme Systems");
        assert_eq!(job.location, "Pune");
        assert_eq!(job.link, "https://example.com/job/1");
        assert_eq!(job.salary, "₹900,000 – ₹1,800,000 / year");
        assert!(job.skills.contains(&"Docker".to_string()));
        assert!(job.responsibilities.is_empty());
    }

    #[test]
    fn test_parse_results_applies_defaults() {
        let body = json!({"results": [{}]});
        let records = parse_results(&body);
        let job = &records[0];
        assert_eq!(job.title, "Software Developer");
        assert_eq!(job.company, "Indian Company");
        assert_eq!(job.location, "India");
        assert_eq!(job.salary, "Competitive");
        assert_eq!(job.link, "#");
        assert_eq!(job.contact_email, "careers@company.com");
    }

    #[test]
    fn test_parse_results_without_results_key() {
        assert!(parse_results(&json!({"count": 0})).is_empty());
    }

    #[test]
    fn test_long_description_is_truncated() {
        let body = json!({"results": [{"description": "d".repeat(400)}]});
        let records = parse_results(&body);
        assert!(records[0].description.ends_with("..."));
        assert_eq!(records[0].description.chars().count(), 203);
    }
}
