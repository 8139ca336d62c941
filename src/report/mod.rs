pub mod comparison;
pub mod format;
pub mod repo_report;

pub use comparison::{ComparisonRow, ComparisonTable};
pub use repo_report::{
    ContributorBoard, Overview, RankedContributor, RecentActivity, RepoReport, Section,
};
