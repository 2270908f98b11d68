// Filesystem locations for the crate's persistent state.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "";
const ORGANIZATION: &str = "";
const APPLICATION: &str = "script-shelf";

/// Base cache directory (~/.cache/script-shelf on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the cached scripts entry.
pub fn scripts_cache_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("scripts.json"))
}

/// Path to the persisted settings entry (config dir, not cache: it must
/// survive cache cleanup).
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.config_dir().join("settings.json"))
}
