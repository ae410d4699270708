//! # Antigravity UA Core
//!
//! Keeps the `antigravity/<version>` token embedded in the upstream
//! User-Agent constant in step with the latest vendor release.
//!
//! ```text
//! antigravity-ua-core/src/
//! ├── models/      # VersionToken, VersionSource, UpdateOutcome
//! ├── modules/     # extractor, current file reader, resolver, patcher
//! ├── fetch/       # PageFetcher seam + headless Chromium renderer
//! └── updater.rs   # one sync run, start to finish
//! ```

#![cfg_attr(test, allow(clippy::panic, clippy::print_stdout))]

pub mod error;
pub mod fetch;
pub mod models;
pub mod modules;
pub mod updater;

// Re-export commonly used types
pub use error::{Stage, UpdateError, UpdateResult};
pub use fetch::{default_page_fetcher, LiveFetchConfig, PageFetcher};
pub use models::{UpdateOutcome, VersionSource, VersionToken};
pub use modules::current::{read_current, TrackedFile, DEFAULT_TRACKED_FILE};
pub use updater::{run, SyncMode, SyncReport, SyncRequest};
