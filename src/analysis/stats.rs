use indexmap::IndexMap;
use serde::Serialize;

use crate::models::{CommitRecord, IssueEntry};

/// One language's slice of the repository, derived from the byte map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageShare {
    pub name: String,
    pub bytes: u64,
    pub percentage: f64,
}

/// Percentage share per language, descending by byte count. The sort is
/// stable, so equal counts keep the order the API returned them in.
pub fn language_shares(languages: &IndexMap<String, u64>) -> Vec<LanguageShare> {
    let total: u64 = languages.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut shares: Vec<LanguageShare> = languages
        .iter()
        .map(|(name, &bytes)| LanguageShare {
            name: name.clone(),
            bytes,
            percentage: bytes as f64 / total as f64 * 100.0,
        })
        .collect();

    shares.sort_by(|a, b| b.bytes.cmp(&a.bytes));
    shares
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorActivity {
    pub login: String,
    pub commits: u64,
}

/// Commit counts per author login, descending. Commits without an account
/// attribution are left out. Ties keep first-seen order; the underlying
/// listing order is not guaranteed stable by the API.
pub fn author_histogram(commits: &[CommitRecord]) -> Vec<AuthorActivity> {
    let mut counts: IndexMap<String, u64> = IndexMap::new();
    for record in commits {
        if let Some(author) = &record.author {
            *counts.entry(author.login.clone()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<AuthorActivity> = counts
        .into_iter()
        .map(|(login, commits)| AuthorActivity { login, commits })
        .collect();
    ranked.sort_by(|a, b| b.commits.cmp(&a.commits));
    ranked
}

/// Open-issue count, excluding entries the API marks as pull requests.
pub fn open_issue_count(issues: &[IssueEntry]) -> usize {
    issues.iter().filter(|issue| !issue.is_pull_request()).count()
}
