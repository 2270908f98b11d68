// GitHub API module.
// Client, wire types, token validation, and README handling for the subset
// of the REST API the script library consumes.

pub mod client;
pub mod readme;
pub mod token;
pub mod types;

pub use client::GitHubClient;
pub use token::is_valid_token;
pub use types::{RateLimitStatus, Repository};

use crate::error::Result;

/// The hosting-API capabilities the fetch pipeline needs. Implemented by
/// [`GitHubClient`]; tests substitute an in-memory host.
pub trait RepoHost {
    /// Probe the remaining request quota. Never cached by callers.
    fn rate_limit(&self) -> impl Future<Output = Result<RateLimitStatus>>;

    /// List a user's repositories, most recently updated first, one page of
    /// up to 100.
    fn list_repos(&self, username: &str) -> impl Future<Output = Result<Vec<Repository>>>;

    /// Fetch a single repository by owner and name.
    fn get_repo(&self, owner: &str, name: &str) -> impl Future<Output = Result<Repository>>;

    /// Fetch a repository's README as decoded text.
    fn get_readme(&self, owner: &str, name: &str) -> impl Future<Output = Result<String>>;
}
