pub mod analyzer;
pub mod comparator;
pub mod stats;

pub use analyzer::RepoAnalyzer;
pub use comparator::{RepoComparator, RepoId};
