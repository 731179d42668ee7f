//! Static career-path lookup: maps a single skill to the career tracks
//! that list it among their required skills.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::skills::capitalize;

struct CareerTrack {
    career: &'static str,
    required_skills: &'static [&'static str],
}

const CAREER_TRACKS: &[CareerTrack] = &[
    CareerTrack {
        career: "Software Engineer",
        required_skills: &["Java", "C++", "Python", "DSA", "OOP", "Git", "System Design"],
    },
    CareerTrack {
        career: "Backend Developer",
        required_skills: &[
            "Java", "Python", "NodeJS", "SpringBoot", "Django", "REST API", "MySQL", "MongoDB",
        ],
    },
    CareerTrack {
        career: "Frontend Developer",
        required_skills: &["HTML", "CSS", "JavaScript", "React", "Vue", "Angular", "UI Design"],
    },
    CareerTrack {
        career: "Full Stack Developer",
        required_skills: &["JavaScript", "React", "NodeJS", "SQL", "APIs", "MongoDB"],
    },
    CareerTrack {
        career: "Data Analyst",
        required_skills: &["SQL", "Excel", "Power BI", "Python", "Tableau"],
    },
    CareerTrack {
        career: "Data Scientist",
        required_skills: &["Python", "R", "Machine Learning", "Statistics", "Pandas", "Numpy"],
    },
    CareerTrack {
        career: "Machine Learning Engineer",
        required_skills: &["Python", "Deep Learning", "TensorFlow", "Scikit-learn", "PyTorch"],
    },
    CareerTrack {
        career: "AI Engineer",
        required_skills: &["Python", "Deep Learning", "NLP", "LLMs", "TensorFlow"],
    },
    CareerTrack {
        career: "Mobile Developer",
        required_skills: &[
            "Java", "Kotlin", "Swift", "Android", "Flutter", "React Native", "Android Studio",
        ],
    },
    CareerTrack {
        career: "DevOps Engineer",
        required_skills: &["Docker", "Kubernetes", "AWS", "CI/CD", "Linux", "Jenkins"],
    },
    CareerTrack {
        career: "Cyber Security Engineer",
        required_skills: &["Networking", "Ethical Hacking", "Linux", "Security Tools", "Python"],
    },
    CareerTrack {
        career: "Cloud Engineer",
        required_skills: &["AWS", "Azure", "Cloud Computing", "Linux", "GCP"],
    },
    CareerTrack {
        career: "Game Developer",
        required_skills: &["Unity", "C#", "C++", "Game Physics", "Unreal Engine"],
    },
    CareerTrack {
        career: "Web Developer",
        required_skills: &["HTML", "CSS", "JavaScript", "Hosting", "PHP"],
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct CareerPath {
    pub career: String,
    /// Duplicate of `career`, kept for frontend display compatibility.
    pub role: String,
    pub required_skills: Vec<String>,
    /// Up to two suggested skills to learn next (excluding the queried one).
    pub learn: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CareerResponse {
    pub skill: String,
    pub career_paths: Vec<CareerPath>,
}

/// Career tracks whose required skills include `skill`, case-insensitively.
/// Falls back to a generic Software Engineer suggestion on no match.
pub fn career_paths(skill: &str) -> CareerResponse {
    let query = skill.trim().to_lowercase();

    let matched: Vec<CareerPath> = CAREER_TRACKS
        .iter()
        .filter(|track| {
            track
                .required_skills
                .iter()
                .any(|s| s.to_lowercase() == query)
        })
        .map(|track| {
            let learn: Vec<&str> = track
                .required_skills
                .iter()
                .filter(|s| s.to_lowercase() != query)
                .take(2)
                .copied()
                .collect();
            CareerPath {
                career: track.career.to_string(),
                role: track.career.to_string(),
                required_skills: track.required_skills.iter().map(|s| s.to_string()).collect(),
                learn: learn.join(", "),
            }
        })
        .collect();

    if matched.is_empty() {
        return CareerResponse {
            skill: query,
            career_paths: vec![CareerPath {
                career: "Software Engineer".to_string(),
                role: "Software Engineer".to_string(),
                required_skills: vec![
                    "Problem Solving".to_string(),
                    "DSA".to_string(),
                    "OOP".to_string(),
                    "Git".to_string(),
                ],
                learn: "Problem Solving".to_string(),
            }],
        };
    }

    CareerResponse {
        skill: capitalize(&query),
        career_paths: matched,
    }
}

#[derive(Debug, Deserialize)]
pub struct CareerRequest {
    pub skill: String,
}

/// POST /api/v1/career
pub async fn handle_career_paths(
    Json(req): Json<CareerRequest>,
) -> Result<Json<CareerResponse>, AppError> {
    if req.skill.trim().is_empty() {
        return Err(AppError::Validation(
            "Please provide a 'skill' in the JSON body".to_string(),
        ));
    }
    Ok(Json(career_paths(&req.skill)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_matches_multiple_tracks() {
        let response = career_paths("Java");
        let careers: Vec<_> = response
            .career_paths
            .iter()
            .map(|p| p.career.as_str())
            .collect();
        assert!(careers.contains(&"Software Engineer"));
        assert!(careers.contains(&"Backend Developer"));
        assert!(careers.contains(&"Mobile Developer"));
        assert_eq!(response.skill, "Java");
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_trims() {
        let response = career_paths("  dOcKeR ");
        assert_eq!(response.career_paths.len(), 1);
        assert_eq!(response.career_paths[0].career, "DevOps Engineer");
    }

    #[test]
    fn test_learn_excludes_queried_skill() {
        let response = career_paths("Docker");
        let path = &response.career_paths[0];
        assert_eq!(path.learn, "Kubernetes, AWS");
        assert!(!path.learn.contains("Docker"));
    }

    #[test]
    fn test_unknown_skill_gets_default_suggestion() {
        let response = career_paths("underwater basket weaving");
        assert_eq!(response.career_paths.len(), 1);
        assert_eq!(response.career_paths[0].career, "Software Engineer");
        assert_eq!(response.career_paths[0].learn, "Problem Solving");
        assert_eq!(response.skill, "underwater basket weaving");
    }

    #[test]
    fn test_role_mirrors_career() {
        for path in career_paths("Python").career_paths {
            assert_eq!(path.career, path.role);
        }
    }
}
