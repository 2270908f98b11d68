//! Data-access layer for a GitHub-backed script library.
//!
//! Fetches a user's repositories from the GitHub REST API, enriches each
//! with README-derived metadata (including an embedded
//! `<!-- INSTALL_COMMAND: ... -->` directive), and serves the result with
//! bounded staleness through a 24-hour on-disk cache. The presentation
//! layer consumes [`Script`] records and the closed [`ShelfError`]
//! taxonomy; it never sees a partially populated record.
//!
//! The entry point is [`FetchCoordinator::load`]: cache first, then a
//! rate-limit probe, then one of two aggregation strategies
//! ([`FetchStrategy`]), then a conditional cache write.

pub mod aggregator;
pub mod cache;
pub mod coordinator;
pub mod error;
pub mod github;
pub mod script;
pub mod settings;

pub use aggregator::FetchStrategy;
pub use cache::CacheStore;
pub use coordinator::{FetchCoordinator, LoadResult};
pub use error::{Result, ShelfError};
pub use github::{GitHubClient, RateLimitStatus, RepoHost, is_valid_token};
pub use script::Script;
pub use settings::{Settings, SettingsStore, SettingsUpdate};
