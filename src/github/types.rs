// GitHub API response types.
// Defines structs for deserializing the subset of the REST API this crate
// consumes.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A repository as returned by `/repos/{owner}/{repo}` and the
/// `/users/{username}/repos` listing. Nullable upstream fields stay `Option`
/// here; defaulting happens when the domain record is built.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub html_url: String,
}

/// Body of `/repos/{owner}/{repo}/readme` (the JSON endpoint variant).
#[derive(Debug, Clone, Deserialize)]
pub struct ReadmeResponse {
    pub content: String,
    pub encoding: String,
}

/// Body of `/rate_limit`.
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitResponse {
    pub resources: RateLimitResources,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitResources {
    pub core: RateLimitCore,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitCore {
    pub limit: u64,
    pub remaining: u64,
    /// Epoch seconds at which the quota resets.
    pub reset: i64,
}

/// Interpreted quota state. Ephemeral: recomputed on every probe, never
/// cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitStatus {
    pub remaining: u64,
    pub total: u64,
    pub reset_at: DateTime<Utc>,
}

impl From<RateLimitResponse> for RateLimitStatus {
    fn from(response: RateLimitResponse) -> Self {
        let core = response.resources.core;
        Self {
            remaining: core.remaining,
            total: core.limit,
            reset_at: DateTime::from_timestamp(core.reset, 0).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_response_converts_reset_to_instant() {
        let body = r#"{
            "resources": {
                "core": { "limit": 5000, "used": 1, "remaining": 4999, "reset": 1700000000 }
            }
        }"#;
        let response: RateLimitResponse = serde_json::from_str(body).unwrap();
        let status = RateLimitStatus::from(response);
        assert_eq!(status.remaining, 4999);
        assert_eq!(status.total, 5000);
        assert_eq!(status.reset_at.timestamp(), 1_700_000_000);
    }

    #[test]
    fn repository_tolerates_null_fields() {
        let body = r#"{
            "id": 42,
            "name": "PingGather",
            "description": null,
            "language": null,
            "stargazers_count": 7,
            "html_url": "https://github.com/mrdatawolf/PingGather"
        }"#;
        let repo: Repository = serde_json::from_str(body).unwrap();
        assert!(repo.description.is_none());
        assert!(repo.language.is_none());
    }
}
