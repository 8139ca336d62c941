pub mod commit;
pub mod repo;

pub use commit::*;
pub use repo::*;
