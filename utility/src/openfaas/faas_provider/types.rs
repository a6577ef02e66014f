use serde::{Deserialize, Serialize};

/// ProviderInfo provides information about the configured provider
#[derive(Serialize, Deserialize, PartialEq, Clone, Default, Debug)]
pub struct ProviderInfo {
    #[serde(rename = "provider")]
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: VersionInfo,
    #[serde(default)]
    pub orchestration: String,
}

/// VersionInfo provides the commit message, sha and release version number
#[derive(Serialize, Deserialize, PartialEq, Clone, Default, Debug)]
pub struct VersionInfo {
    #[serde(default, skip_serializing_if = "crate::is_default")]
    pub commit_message: String,
    #[serde(default)]
    pub sha: String,
    #[serde(default)]
    pub release: String,
}
