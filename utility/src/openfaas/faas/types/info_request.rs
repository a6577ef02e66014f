use crate::openfaas::faas_provider::types::{ProviderInfo, VersionInfo};
use serde::{Deserialize, Serialize};

// GatewayInfo provides information about the gateway and it's connected components
#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
pub struct GatewayInfo {
    #[serde(default)]
    pub provider: ProviderInfo,
    #[serde(default)]
    pub version: VersionInfo,
    #[serde(default)]
    pub arch: String,
}
