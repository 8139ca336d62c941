use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("GitHub API returned {status} for {resource}")]
    Api {
        status: reqwest::StatusCode,
        resource: String,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to fetch repository information for {repo}")]
    RepoUnavailable {
        repo: String,
        #[source]
        source: Box<Error>,
    },

    #[error("no repository data found")]
    NoComparisonData,

    #[error("invalid repository spec '{0}', expected owner/repo")]
    InvalidRepoSpec(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for non-2xx API responses, as opposed to transport-level failures.
    pub fn is_status(&self) -> bool {
        matches!(self, Error::Api { .. })
    }
}
