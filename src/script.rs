// The script domain record served to the presentation layer.
// Every field is always populated: absence upstream becomes an explicit
// default here, never an Option leaking out.

use serde::{Deserialize, Serialize};

use crate::github::Repository;
use crate::github::readme::extract_install_command;

pub const NO_DESCRIPTION: &str = "No description available";
pub const NO_README: &str = "# No README available";
pub const NO_INSTALL_COMMAND: &str = "No install command specified";
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// An immutable snapshot of one repository, enriched with README metadata.
/// Serialized with the camelCase field names the cache file has always used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub language: String,
    pub stars: u64,
    pub readme: String,
    pub install_command: String,
    pub url: String,
}

impl Script {
    /// Build a script from a fetched repository and its (possibly empty)
    /// README text, applying the placeholder defaults.
    pub fn from_repository(repo: Repository, readme: String) -> Self {
        let install_command = extract_install_command(&readme)
            .unwrap_or_else(|| NO_INSTALL_COMMAND.to_string());

        Self {
            id: repo.id,
            name: repo.name,
            description: repo
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            language: repo
                .language
                .map(|l| l.to_lowercase())
                .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string()),
            stars: repo.stargazers_count,
            readme: if readme.is_empty() {
                NO_README.to_string()
            } else {
                readme
            },
            install_command,
            url: repo.html_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> Repository {
        Repository {
            id: 1,
            name: "CoreSetup".to_string(),
            description: Some("Workstation bootstrap".to_string()),
            language: Some("PowerShell".to_string()),
            stargazers_count: 3,
            html_url: "https://github.com/mrdatawolf/CoreSetup".to_string(),
        }
    }

    #[test]
    fn populates_all_fields_from_upstream_data() {
        let readme = "# CoreSetup\n<!-- INSTALL_COMMAND: irm example.com/setup | iex -->";
        let script = Script::from_repository(repo(), readme.to_string());
        assert_eq!(script.description, "Workstation bootstrap");
        assert_eq!(script.language, "powershell");
        assert_eq!(script.install_command, "irm example.com/setup | iex");
        assert_eq!(script.readme, readme);
    }

    #[test]
    fn defaults_absent_fields() {
        let mut bare = repo();
        bare.description = None;
        bare.language = None;
        let script = Script::from_repository(bare, String::new());
        assert_eq!(script.description, NO_DESCRIPTION);
        assert_eq!(script.language, UNKNOWN_LANGUAGE);
        assert_eq!(script.readme, NO_README);
        assert_eq!(script.install_command, NO_INSTALL_COMMAND);
    }

    #[test]
    fn empty_description_counts_as_absent() {
        let mut bare = repo();
        bare.description = Some(String::new());
        let script = Script::from_repository(bare, "# readme".to_string());
        assert_eq!(script.description, NO_DESCRIPTION);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let script = Script::from_repository(repo(), String::new());
        let json = serde_json::to_value(&script).unwrap();
        assert!(json.get("installCommand").is_some());
        assert!(json.get("install_command").is_none());
    }
}
