//! Aggregate statistics over the job catalog: trending titles, hiring
//! companies, in-demand skills, and the dashboard rollup.

use axum::{extract::State, Json};
use serde::Serialize;
use std::collections::HashMap;

use crate::jobs::model::JobRecord;
use crate::state::AppState;

const TOP_N: usize = 5;
const RECENT_COUNT: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct TitleCount {
    pub title: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyCount {
    pub name: String,
    pub jobs: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendsReport {
    pub trending_jobs: Vec<TitleCount>,
    pub hiring_companies: Vec<CompanyCount>,
    pub demanding_skills: Vec<SkillCount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickStats {
    pub total_jobs: usize,
    pub top_skill: String,
    pub top_company: String,
    pub top_role: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentJob {
    pub title: String,
    pub company: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub quick_stats: QuickStats,
    pub trending_jobs: Vec<TitleCount>,
    pub hiring_companies: Vec<CompanyCount>,
    pub demanding_skills: Vec<SkillCount>,
    pub recent_jobs: Vec<RecentJob>,
}

struct Frequencies {
    titles: HashMap<String, usize>,
    companies: HashMap<String, usize>,
    skills: HashMap<String, usize>,
}

fn count_frequencies(catalog: &[JobRecord]) -> Frequencies {
    let mut freq = Frequencies {
        titles: HashMap::new(),
        companies: HashMap::new(),
        skills: HashMap::new(),
    };
    for job in catalog {
        *freq.titles.entry(job.title.clone()).or_default() += 1;
        *freq.companies.entry(job.company.clone()).or_default() += 1;
        for skill in &job.skills {
            *freq.skills.entry(skill.clone()).or_default() += 1;
        }
    }
    freq
}

/// Top entries by count. Ties break alphabetically so output is stable.
fn top_n(counts: &HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> =
        counts.iter().map(|(k, v)| (k.clone(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(TOP_N);
    entries
}

fn most_frequent(counts: &HashMap<String, usize>) -> String {
    top_n(counts)
        .into_iter()
        .next()
        .map(|(value, _)| value)
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn compute_trends(catalog: &[JobRecord]) -> TrendsReport {
    let freq = count_frequencies(catalog);
    TrendsReport {
        trending_jobs: top_n(&freq.titles)
            .into_iter()
            .map(|(title, count)| TitleCount { title, count })
            .collect(),
        hiring_companies: top_n(&freq.companies)
            .into_iter()
            .map(|(name, jobs)| CompanyCount { name, jobs })
            .collect(),
        demanding_skills: top_n(&freq.skills)
            .into_iter()
            .map(|(skill, count)| SkillCount { skill, count })
            .collect(),
    }
}

pub fn compute_dashboard(catalog: &[JobRecord]) -> Dashboard {
    let freq = count_frequencies(catalog);
    let trends = compute_trends(catalog);
    Dashboard {
        quick_stats: QuickStats {
            total_jobs: catalog.len(),
            top_skill: most_frequent(&freq.skills),
            top_company: most_frequent(&freq.companies),
            top_role: most_frequent(&freq.titles),
        },
        trending_jobs: trends.trending_jobs,
        hiring_companies: trends.hiring_companies,
        demanding_skills: trends.demanding_skills,
        recent_jobs: catalog
            .iter()
            .take(RECENT_COUNT)
            .map(|job| RecentJob {
                title: job.title.clone(),
                company: job.company.clone(),
                location: job.location.clone(),
            })
            .collect(),
    }
}

/// GET /api/v1/trends
pub async fn handle_trends(State(state): State<AppState>) -> Json<TrendsReport> {
    let catalog = state.catalog.get().await;
    Json(compute_trends(&catalog))
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(State(state): State<AppState>) -> Json<Dashboard> {
    let catalog = state.catalog.get().await;
    Json(compute_dashboard(&catalog))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str, company: &str, skills: &[&str]) -> JobRecord {
        JobRecord {
            title: title.to_string(),
            company: company.to_string(),
            location: "Chennai".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            salary: "Competitive".to_string(),
            contact_email: "jobs@example.com".to_string(),
            link: "#".to_string(),
            description: String::new(),
            responsibilities: Vec::new(),
        }
    }

    #[test]
    fn test_top_title_counts_duplicates() {
        let catalog = vec![
            job("A", "X", &["Java"]),
            job("A", "Y", &["SQL"]),
            job("B", "Z", &["Java"]),
        ];
        let dashboard = compute_dashboard(&catalog);
        assert_eq!(dashboard.quick_stats.top_role, "A");
        assert_eq!(dashboard.trending_jobs[0].title, "A");
        assert_eq!(dashboard.trending_jobs[0].count, 2);
    }

    #[test]
    fn test_skill_counts_span_jobs() {
        let catalog = vec![
            job("A", "X", &["Java", "SQL"]),
            job("B", "Y", &["Java"]),
        ];
        let trends = compute_trends(&catalog);
        assert_eq!(trends.demanding_skills[0].skill, "Java");
        assert_eq!(trends.demanding_skills[0].count, 2);
    }

    #[test]
    fn test_top_lists_capped_at_five() {
        let catalog: Vec<JobRecord> = (0..8)
            .map(|i| job(&format!("T{i}"), &format!("C{i}"), &["Python"]))
            .collect();
        let trends = compute_trends(&catalog);
        assert_eq!(trends.trending_jobs.len(), TOP_N);
        assert_eq!(trends.hiring_companies.len(), TOP_N);
    }

    #[test]
    fn test_empty_catalog_yields_na_stats() {
        let dashboard = compute_dashboard(&[]);
        assert_eq!(dashboard.quick_stats.total_jobs, 0);
        assert_eq!(dashboard.quick_stats.top_skill, "N/A");
        assert_eq!(dashboard.quick_stats.top_company, "N/A");
        assert_eq!(dashboard.quick_stats.top_role, "N/A");
        assert!(dashboard.recent_jobs.is_empty());
    }

    #[test]
    fn test_recent_jobs_are_first_five() {
        let catalog: Vec<JobRecord> = (0..7)
            .map(|i| job(&format!("T{i}"), "C", &["Python"]))
            .collect();
        let dashboard = compute_dashboard(&catalog);
        assert_eq!(dashboard.recent_jobs.len(), RECENT_COUNT);
        assert_eq!(dashboard.recent_jobs[0].title, "T0");
        assert_eq!(dashboard.recent_jobs[4].title, "T4");
    }
}
