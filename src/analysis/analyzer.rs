use indexmap::IndexMap;

use crate::analysis::stats;
use crate::error::{Error, Result};
use crate::github::{FetchOutcome, GitHubClient};
use crate::models::{CommitRecord, Contributor, IssueEntry, PullRequestEntry, RepositoryProfile};
use crate::report::{
    ContributorBoard, Overview, RankedContributor, RecentActivity, RepoReport,
};

const TOP_CONTRIBUTORS: usize = 10;
const TOP_COMMIT_AUTHORS: usize = 5;

pub struct RepoAnalyzer {
    client: GitHubClient,
    recent_days: i64,
}

impl RepoAnalyzer {
    pub fn new(client: GitHubClient, recent_days: i64) -> Self {
        Self {
            client,
            recent_days,
        }
    }

    /// Runs every fetch for one repository and assembles the report. Only the
    /// profile fetch is fatal; each other fetch degrades its own section.
    pub async fn analyze(&self, owner: &str, repo: &str) -> Result<RepoReport> {
        let profile = self
            .client
            .get_repo(owner, repo)
            .await
            .map_err(|source| Error::RepoUnavailable {
                repo: format!("{}/{}", owner, repo),
                source: Box::new(source),
            })?;

        let languages = FetchOutcome::of("languages", self.client.get_languages(owner, repo).await);
        let contributors = FetchOutcome::of(
            "contributors",
            self.client.get_contributors(owner, repo).await,
        );
        let commits = FetchOutcome::of(
            "recent commits",
            self.client
                .get_recent_commits(owner, repo, self.recent_days)
                .await,
        );
        let issues = FetchOutcome::of("issues", self.client.get_open_issues(owner, repo).await);
        let pulls = FetchOutcome::of("pull requests", self.client.get_open_pulls(owner, repo).await);

        Ok(build_report(
            &profile,
            languages,
            contributors,
            commits,
            issues,
            pulls,
            self.recent_days,
        ))
    }
}

/// Pure report assembly over already-fetched data.
pub fn build_report(
    profile: &RepositoryProfile,
    languages: FetchOutcome<IndexMap<String, u64>>,
    contributors: FetchOutcome<Vec<Contributor>>,
    commits: FetchOutcome<Vec<CommitRecord>>,
    issues: FetchOutcome<Vec<IssueEntry>>,
    pulls: FetchOutcome<Vec<PullRequestEntry>>,
    recent_days: i64,
) -> RepoReport {
    RepoReport {
        overview: Overview::from(profile),
        languages: languages.map(|map| stats::language_shares(&map)).into(),
        contributors: contributors.map(contributor_board).into(),
        activity: commits
            .map(|commits| RecentActivity {
                window_days: recent_days,
                commit_count: commits.len(),
                top_authors: stats::author_histogram(&commits)
                    .into_iter()
                    .take(TOP_COMMIT_AUTHORS)
                    .collect(),
            })
            .into(),
        open_issues: issues.map(|issues| stats::open_issue_count(&issues)).into(),
        open_pulls: pulls.map(|pulls| pulls.len()).into(),
    }
}

fn contributor_board(contributors: Vec<Contributor>) -> ContributorBoard {
    let total = contributors.len();
    let top: Vec<RankedContributor> = contributors
        .into_iter()
        .take(TOP_CONTRIBUTORS)
        .enumerate()
        .map(|(i, c)| RankedContributor {
            rank: i + 1,
            login: c.login,
            contributions: c.contributions,
        })
        .collect();

    ContributorBoard {
        total,
        more: total.saturating_sub(TOP_CONTRIBUTORS),
        top,
    }
}
