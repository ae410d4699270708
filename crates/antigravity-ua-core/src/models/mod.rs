pub mod outcome;
pub mod version;

pub use outcome::UpdateOutcome;
pub use version::{VersionSource, VersionToken};
