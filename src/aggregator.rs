// Repository aggregation strategies.
// Fans out per-repository fetch and enrichment over a RepoHost, tolerating
// per-item failure where the strategy allows it.

use futures::future::join_all;
use tracing::warn;

use crate::error::{Result, ShelfError};
use crate::github::{RepoHost, Repository};
use crate::script::Script;

/// How the set of repositories is determined. Selected by configuration and
/// validated once at coordinator construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStrategy {
    /// Everything a user owns, from the listing endpoint.
    OwnerListing { username: String },
    /// An explicit, ordered list of repository names under one owner.
    NamedList { owner: String, names: Vec<String> },
}

impl FetchStrategy {
    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            FetchStrategy::OwnerListing { username } => {
                if username.trim().is_empty() {
                    return Err(ShelfError::Configuration(
                        "GitHub username not configured".to_string(),
                    ));
                }
            }
            FetchStrategy::NamedList { owner, names } => {
                if owner.trim().is_empty() {
                    return Err(ShelfError::Configuration(
                        "repository owner not configured".to_string(),
                    ));
                }
                if names.is_empty() {
                    return Err(ShelfError::Configuration(
                        "repository names not configured".to_string(),
                    ));
                }
                if names.iter().any(|n| n.trim().is_empty()) {
                    return Err(ShelfError::Configuration(
                        "repository names must be non-empty".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Run the configured strategy against a host.
pub async fn fetch_scripts<H: RepoHost>(host: &H, strategy: &FetchStrategy) -> Result<Vec<Script>> {
    match strategy {
        FetchStrategy::OwnerListing { username } => fetch_by_owner(host, username).await,
        FetchStrategy::NamedList { owner, names } => fetch_by_names(host, owner, names).await,
    }
}

/// List a user's repositories and enrich each with its README. Enrichment is
/// best-effort per repository: a failure defaults that record's README
/// fields, it never drops the record or aborts the batch.
async fn fetch_by_owner<H: RepoHost>(host: &H, username: &str) -> Result<Vec<Script>> {
    let repos = host.list_repos(username).await?;
    let scripts = join_all(
        repos
            .into_iter()
            .map(|repo| enrich(host, username, repo)),
    )
    .await;
    Ok(scripts)
}

/// Fetch an explicit list of repositories. Soft per-item failures are
/// filtered out; a systemic failure aborts the whole batch, first failure in
/// list order winning. Already-settled sibling results are discarded.
async fn fetch_by_names<H: RepoHost>(
    host: &H,
    owner: &str,
    names: &[String],
) -> Result<Vec<Script>> {
    let results = join_all(names.iter().map(|name| fetch_named(host, owner, name))).await;

    let mut scripts = Vec::with_capacity(results.len());
    for result in results {
        if let Some(script) = result? {
            scripts.push(script);
        }
    }
    Ok(scripts)
}

async fn fetch_named<H: RepoHost>(host: &H, owner: &str, name: &str) -> Result<Option<Script>> {
    let repo = match host.get_repo(owner, name).await {
        Ok(repo) => repo,
        Err(err) if err.is_systemic() => return Err(err),
        Err(err) => {
            warn!(repo = name, error = %err, "skipping repository");
            return Ok(None);
        }
    };
    Ok(Some(enrich(host, owner, repo).await))
}

/// Attach README-derived metadata to a fetched repository. Retrieval or
/// decode failure is absorbed: the record keeps its placeholder defaults.
async fn enrich<H: RepoHost>(host: &H, owner: &str, repo: Repository) -> Script {
    let readme = match host.get_readme(owner, &repo.name).await {
        Ok(text) => text,
        Err(err) => {
            warn!(repo = %repo.name, error = %err, "failed to fetch readme");
            String::new()
        }
    };
    Script::from_repository(repo, readme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_listing_requires_username() {
        let strategy = FetchStrategy::OwnerListing {
            username: "  ".to_string(),
        };
        assert!(matches!(
            strategy.validate(),
            Err(ShelfError::Configuration(_))
        ));
        let strategy = FetchStrategy::OwnerListing {
            username: "mrdatawolf".to_string(),
        };
        assert!(strategy.validate().is_ok());
    }

    #[test]
    fn named_list_requires_owner_and_names() {
        let empty_names = FetchStrategy::NamedList {
            owner: "mrdatawolf".to_string(),
            names: vec![],
        };
        assert!(matches!(
            empty_names.validate(),
            Err(ShelfError::Configuration(_))
        ));

        let blank_name = FetchStrategy::NamedList {
            owner: "mrdatawolf".to_string(),
            names: vec!["PingGather".to_string(), String::new()],
        };
        assert!(matches!(
            blank_name.validate(),
            Err(ShelfError::Configuration(_))
        ));

        let ok = FetchStrategy::NamedList {
            owner: "mrdatawolf".to_string(),
            names: vec!["PingGather".to_string()],
        };
        assert!(ok.validate().is_ok());
    }
}
