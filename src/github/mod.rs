pub mod client;
pub mod outcome;

pub use client::GitHubClient;
pub use outcome::FetchOutcome;
