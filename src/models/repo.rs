use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a repository's metadata, fetched once per analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryProfile {
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub watchers_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Size in kilobytes, as reported by the API.
    pub size: u64,
    pub license: Option<License>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct License {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contributor {
    pub login: String,
    pub contributions: u64,
}

/// Entry from the issues listing. GitHub returns pull requests in the same
/// listing, marked by the `pull_request` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueEntry {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub pull_request: Option<PullRequestMarker>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestMarker {
    #[serde(default)]
    pub url: Option<String>,
}

impl IssueEntry {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestEntry {
    pub number: u64,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_accepts_github_payload() {
        let payload = json!({
            "full_name": "rust-lang/rust",
            "description": "Empowering everyone",
            "html_url": "https://github.com/rust-lang/rust",
            "stargazers_count": 90000,
            "forks_count": 12000,
            "watchers_count": 90000,
            "created_at": "2010-06-16T20:39:03Z",
            "updated_at": "2024-01-02T10:00:00Z",
            "size": 250000,
            "license": {"key": "mit", "name": "MIT License"},
            "language": "Rust",
            "open_issues_count": 9000
        });

        let profile: RepositoryProfile = serde_json::from_value(payload).unwrap();
        assert_eq!(profile.full_name, "rust-lang/rust");
        assert_eq!(profile.license.unwrap().name, "MIT License");
        assert_eq!(profile.language.as_deref(), Some("Rust"));
    }

    #[test]
    fn test_profile_tolerates_missing_optionals() {
        let payload = json!({
            "full_name": "someone/scratch",
            "html_url": "https://github.com/someone/scratch",
            "stargazers_count": 0,
            "forks_count": 0,
            "watchers_count": 0,
            "created_at": "2023-05-01T00:00:00Z",
            "updated_at": "2023-05-01T00:00:00Z",
            "size": 12,
            "description": null,
            "license": null,
            "language": null
        });

        let profile: RepositoryProfile = serde_json::from_value(payload).unwrap();
        assert!(profile.description.is_none());
        assert!(profile.license.is_none());
        assert!(profile.language.is_none());
    }

    #[test]
    fn test_issue_entry_pull_request_marker() {
        let issue: IssueEntry = serde_json::from_value(json!({
            "number": 7,
            "title": "plain issue"
        }))
        .unwrap();
        assert!(!issue.is_pull_request());

        let pr: IssueEntry = serde_json::from_value(json!({
            "number": 8,
            "title": "actually a PR",
            "pull_request": {"url": "https://api.github.com/repos/o/r/pulls/8"}
        }))
        .unwrap();
        assert!(pr.is_pull_request());
    }
}
