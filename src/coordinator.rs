// Top-level fetch coordination.
// Cache first, then the quota gate, then the configured aggregation
// strategy, then a conditional cache write. Auth failures clear the stored
// credential before propagating.

use crate::aggregator::{FetchStrategy, fetch_scripts};
use crate::cache::CacheStore;
use crate::error::{Result, ShelfError};
use crate::github::{GitHubClient, RepoHost};
use crate::script::Script;
use crate::settings::SettingsStore;

/// Outcome of a successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    pub scripts: Vec<Script>,
    pub from_cache: bool,
}

#[derive(Debug)]
pub struct FetchCoordinator {
    strategy: FetchStrategy,
    cache: CacheStore,
    settings: SettingsStore,
}

impl FetchCoordinator {
    /// Build a coordinator over a validated strategy. Misconfiguration
    /// (empty username, empty name list) is rejected here, once, rather
    /// than surfacing mid-fetch.
    pub fn new(
        strategy: FetchStrategy,
        cache: CacheStore,
        settings: SettingsStore,
    ) -> Result<Self> {
        strategy.validate()?;
        Ok(Self {
            strategy,
            cache,
            settings,
        })
    }

    /// Load scripts against the real GitHub API.
    pub async fn load(&self, token: Option<&str>, force_refresh: bool) -> Result<LoadResult> {
        match GitHubClient::new(token) {
            Ok(client) => self.load_with(&client, force_refresh).await,
            Err(err) => Err(self.scrub_credential(err)),
        }
    }

    /// Load scripts against any host. This is the full state machine:
    /// cache check (skipped when forced), quota gate, aggregation, and the
    /// conditional cache write.
    pub async fn load_with<H: RepoHost>(&self, host: &H, force_refresh: bool) -> Result<LoadResult> {
        self.run(host, force_refresh)
            .await
            .map_err(|err| self.scrub_credential(err))
    }

    async fn run<H: RepoHost>(&self, host: &H, force_refresh: bool) -> Result<LoadResult> {
        if !force_refresh {
            if let Some(scripts) = self.cache.read() {
                return Ok(LoadResult {
                    scripts,
                    from_cache: true,
                });
            }
        }

        let quota = host.rate_limit().await?;
        if quota.remaining == 0 {
            return Err(ShelfError::RateLimitExceeded {
                reset_at: Some(quota.reset_at),
            });
        }

        let scripts = fetch_scripts(host, &self.strategy).await?;

        // A forced refresh is never written back: a refresh that finds
        // nothing must not poison the cache with emptiness.
        if !force_refresh && !scripts.is_empty() {
            self.cache.write(&scripts);
        }

        Ok(LoadResult {
            scripts,
            from_cache: false,
        })
    }

    /// A rejected credential is cleared from settings so the user is
    /// prompted to re-authenticate instead of replaying a dead token.
    fn scrub_credential(&self, err: ShelfError) -> ShelfError {
        if matches!(
            err,
            ShelfError::InvalidToken | ShelfError::InvalidTokenFormat
        ) {
            self.settings.clear_token();
        }
        err
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }
}
