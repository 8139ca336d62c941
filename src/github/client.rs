use chrono::{Duration, Utc};
use indexmap::IndexMap;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::models::{CommitRecord, Contributor, IssueEntry, PullRequestEntry, RepositoryProfile};

const COMMITS_PER_PAGE: u32 = 100;

pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: Option<&str>) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("gitalyze/0.1"),
        );
        if let Some(token) = token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: "https://api.github.com".to_string(),
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).query(query).send().await?;

        if !response.status().is_success() {
            return Err(Error::Api {
                status: response.status(),
                resource: path.to_string(),
            });
        }

        Ok(response.json().await?)
    }

    pub async fn get_repo(&self, owner: &str, repo: &str) -> Result<RepositoryProfile> {
        tracing::info!("Fetching repository: {}/{}", owner, repo);
        self.get(&format!("/repos/{}/{}", owner, repo), &[]).await
    }

    pub async fn get_contributors(&self, owner: &str, repo: &str) -> Result<Vec<Contributor>> {
        self.get(&format!("/repos/{}/{}/contributors", owner, repo), &[])
            .await
    }

    /// Language byte counts, in the order the API reports them. `IndexMap`
    /// keeps that order so equal byte counts render deterministically.
    pub async fn get_languages(&self, owner: &str, repo: &str) -> Result<IndexMap<String, u64>> {
        self.get(&format!("/repos/{}/{}/languages", owner, repo), &[])
            .await
    }

    /// Commits from the trailing `days` window. Single page of at most 100
    /// results; very active repositories will report fewer commits than the
    /// window actually contains.
    pub async fn get_recent_commits(
        &self,
        owner: &str,
        repo: &str,
        days: i64,
    ) -> Result<Vec<CommitRecord>> {
        let since = since_timestamp(days)?;
        self.get(
            &format!("/repos/{}/{}/commits", owner, repo),
            &[
                ("since", since),
                ("per_page", COMMITS_PER_PAGE.to_string()),
            ],
        )
        .await
    }

    pub async fn get_open_issues(&self, owner: &str, repo: &str) -> Result<Vec<IssueEntry>> {
        self.get(&format!("/repos/{}/{}/issues", owner, repo), &[])
            .await
    }

    pub async fn get_open_pulls(&self, owner: &str, repo: &str) -> Result<Vec<PullRequestEntry>> {
        self.get(&format!("/repos/{}/{}/pulls", owner, repo), &[])
            .await
    }
}

/// ISO-8601 `since` bound for the commit listing. A window too large for the
/// datetime range is a configuration error, not a panic.
fn since_timestamp(days: i64) -> Result<String> {
    let window = Duration::try_days(days)
        .ok_or_else(|| Error::Config(format!("recent-commit window out of range: {} days", days)))?;
    let since = Utc::now()
        .checked_sub_signed(window)
        .ok_or_else(|| Error::Config(format!("recent-commit window out of range: {} days", days)))?;
    Ok(since.to_rfc3339())
}
