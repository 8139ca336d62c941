use std::fmt;
use std::str::FromStr;

use tokio::time::{sleep, Duration};

use crate::error::{Error, Result};
use crate::github::GitHubClient;
use crate::models::RepositoryProfile;
use crate::report::ComparisonTable;

/// An `owner/repo` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl FromStr for RepoId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() => Ok(Self {
                owner: owner.to_string(),
                repo: repo.to_string(),
            }),
            _ => Err(Error::InvalidRepoSpec(s.to_string())),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

pub struct RepoComparator {
    client: GitHubClient,
    delay: Duration,
}

impl RepoComparator {
    pub fn new(client: GitHubClient, delay_ms: u64) -> Self {
        Self {
            client,
            delay: Duration::from_millis(delay_ms),
        }
    }

    /// Fetches each profile in turn, pausing between requests to stay under
    /// the informal rate limit. Repositories whose fetch fails are skipped;
    /// if every fetch fails the comparison errors out.
    pub async fn compare(&self, repos: &[RepoId]) -> Result<ComparisonTable> {
        let mut profiles = Vec::with_capacity(repos.len());

        for id in repos {
            match self.client.get_repo(&id.owner, &id.repo).await {
                Ok(profile) => {
                    profiles.push(profile);
                    sleep(self.delay).await;
                }
                Err(err) => tracing::warn!("skipping {}: {}", id, err),
            }
        }

        build_table(profiles)
    }
}

/// Turns the surviving profiles into a table; a wholly-empty working set is
/// the comparator's one fatal case.
fn build_table(profiles: Vec<RepositoryProfile>) -> Result<ComparisonTable> {
    if profiles.is_empty() {
        return Err(Error::NoComparisonData);
    }
    Ok(ComparisonTable::from_profiles(profiles))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_id_parses_owner_and_repo() {
        let id: RepoId = "rust-lang/cargo".parse().unwrap();
        assert_eq!(id.owner, "rust-lang");
        assert_eq!(id.repo, "cargo");
        assert_eq!(id.to_string(), "rust-lang/cargo");
    }

    #[test]
    fn test_repo_id_rejects_malformed_specs() {
        assert!("no-slash".parse::<RepoId>().is_err());
        assert!("/repo".parse::<RepoId>().is_err());
        assert!("owner/".parse::<RepoId>().is_err());
    }

    fn profile(full_name: &str, stars: u64) -> RepositoryProfile {
        RepositoryProfile {
            full_name: full_name.to_string(),
            description: None,
            html_url: format!("https://github.com/{}", full_name),
            stargazers_count: stars,
            forks_count: 0,
            watchers_count: stars,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
            size: 10,
            license: None,
            language: None,
        }
    }

    #[test]
    fn test_all_fetches_failed_yields_no_data_error() {
        let err = build_table(Vec::new()).unwrap_err();
        assert!(matches!(err, Error::NoComparisonData));
        assert_eq!(err.to_string(), "no repository data found");
    }

    #[test]
    fn test_surviving_profiles_build_sorted_table() {
        let table = build_table(vec![profile("a/low", 5), profile("b/high", 50)]).unwrap();
        let names: Vec<_> = table.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b/high", "a/low"]);
    }
}
