use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analysis::stats::{AuthorActivity, LanguageShare};
use crate::github::FetchOutcome;
use crate::models::RepositoryProfile;

use super::format::group_thousands;

const SEPARATOR_WIDTH: usize = 50;

/// A report section backed by a non-fatal fetch. `Unavailable` means the
/// fetch failed, which renders differently from data that is simply empty.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section<T> {
    Ready(T),
    Unavailable { reason: String },
}

impl<T> From<FetchOutcome<T>> for Section<T> {
    fn from(outcome: FetchOutcome<T>) -> Self {
        match outcome {
            FetchOutcome::Retrieved(value) => Section::Ready(value),
            FetchOutcome::Unavailable(reason) => Section::Unavailable { reason },
        }
    }
}

/// Everything the analyzer derived for one repository, decoupled from how it
/// is displayed.
#[derive(Debug, Clone, Serialize)]
pub struct RepoReport {
    pub overview: Overview,
    pub languages: Section<Vec<LanguageShare>>,
    pub contributors: Section<ContributorBoard>,
    pub activity: Section<RecentActivity>,
    pub open_issues: Section<usize>,
    pub open_pulls: Section<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub size_kb: u64,
    pub license: Option<String>,
}

impl From<&RepositoryProfile> for Overview {
    fn from(profile: &RepositoryProfile) -> Self {
        Self {
            full_name: profile.full_name.clone(),
            description: profile.description.clone(),
            html_url: profile.html_url.clone(),
            stars: profile.stargazers_count,
            forks: profile.forks_count,
            watchers: profile.watchers_count,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
            size_kb: profile.size,
            license: profile.license.as_ref().map(|l| l.name.clone()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContributorBoard {
    pub total: usize,
    pub top: Vec<RankedContributor>,
    /// Contributors beyond the displayed top slice.
    pub more: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedContributor {
    pub rank: usize,
    pub login: String,
    pub contributions: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentActivity {
    pub window_days: i64,
    pub commit_count: usize,
    pub top_authors: Vec<AuthorActivity>,
}

impl RepoReport {
    pub fn render_text(&self) -> String {
        let rule = "=".repeat(SEPARATOR_WIDTH);
        let mut out = String::new();

        out.push_str(&format!(
            "Analyzing repository: {}\n{}\n",
            self.overview.full_name, rule
        ));
        self.render_overview(&mut out);

        out.push_str(&format!("\n{}\n", rule));
        self.render_languages(&mut out);

        out.push_str(&format!("\n{}\n", rule));
        self.render_contributors(&mut out);

        out.push_str(&format!("\n{}\n", rule));
        self.render_activity(&mut out);

        out.push('\n');
        self.render_open_counts(&mut out);

        out.push_str(&format!("\n{}\nAnalysis complete!\n", rule));
        out
    }

    fn render_overview(&self, out: &mut String) {
        let o = &self.overview;
        out.push_str(&format!("Repository: {}\n", o.full_name));
        out.push_str(&format!(
            "Description: {}\n",
            o.description.as_deref().unwrap_or("No description")
        ));
        out.push_str(&format!("URL: {}\n", o.html_url));
        out.push_str(&format!("Stars: {}\n", group_thousands(o.stars)));
        out.push_str(&format!("Forks: {}\n", group_thousands(o.forks)));
        out.push_str(&format!("Watchers: {}\n", group_thousands(o.watchers)));
        out.push_str(&format!("Created: {}\n", o.created_at.format("%Y-%m-%d")));
        out.push_str(&format!(
            "Last Updated: {}\n",
            o.updated_at.format("%Y-%m-%d")
        ));
        out.push_str(&format!("Size: {} KB\n", group_thousands(o.size_kb)));
        if let Some(ref license) = o.license {
            out.push_str(&format!("License: {}\n", license));
        }
    }

    fn render_languages(&self, out: &mut String) {
        out.push_str("Programming Languages:\n");
        match &self.languages {
            Section::Ready(shares) if shares.is_empty() => {
                out.push_str("   (none detected)\n");
            }
            Section::Ready(shares) => {
                for share in shares {
                    out.push_str(&format!(
                        "   {}: {:.1}% ({} bytes)\n",
                        share.name,
                        share.percentage,
                        group_thousands(share.bytes)
                    ));
                }
            }
            Section::Unavailable { reason } => {
                out.push_str(&format!("   (unavailable: {})\n", reason));
            }
        }
    }

    fn render_contributors(&self, out: &mut String) {
        match &self.contributors {
            Section::Ready(board) => {
                out.push_str(&format!("Contributors ({} total):\n", board.total));
                for ranked in &board.top {
                    out.push_str(&format!(
                        "   {}. {}: {} contributions\n",
                        ranked.rank, ranked.login, ranked.contributions
                    ));
                }
                if board.more > 0 {
                    out.push_str(&format!(
                        "   ... and {} more contributors\n",
                        board.more
                    ));
                }
            }
            Section::Unavailable { reason } => {
                out.push_str(&format!("Contributors:\n   (unavailable: {})\n", reason));
            }
        }
    }

    fn render_activity(&self, out: &mut String) {
        match &self.activity {
            Section::Ready(activity) => {
                out.push_str(&format!(
                    "Recent Activity (Last {} days): {} commits\n",
                    activity.window_days, activity.commit_count
                ));
                if !activity.top_authors.is_empty() {
                    out.push_str("   Most active contributors:\n");
                    for author in &activity.top_authors {
                        out.push_str(&format!(
                            "   - {}: {} commits\n",
                            author.login, author.commits
                        ));
                    }
                }
            }
            Section::Unavailable { reason } => {
                out.push_str(&format!("Recent Activity:\n   (unavailable: {})\n", reason));
            }
        }
    }

    fn render_open_counts(&self, out: &mut String) {
        match &self.open_issues {
            Section::Ready(count) => out.push_str(&format!("Open Issues: {}\n", count)),
            Section::Unavailable { reason } => {
                out.push_str(&format!("Open Issues: (unavailable: {})\n", reason))
            }
        }
        match &self.open_pulls {
            Section::Ready(count) => out.push_str(&format!("Open Pull Requests: {}\n", count)),
            Section::Unavailable { reason } => {
                out.push_str(&format!("Open Pull Requests: (unavailable: {})\n", reason))
            }
        }
    }
}
