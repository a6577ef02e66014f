use crate::gateway::FunctionGateway;
use std::fmt;
use tracing::debug;
use utility::faas::types::info_request::GatewayInfo;
use utility::{Error, Result};

/// substring of the provider name reported by the Community Edition
pub const COMMUNITY_EDITION_MARKER: &str = "ce";
/// substring of the provider name reported when the operator is enabled
pub const OPERATOR_MARKER: &str = "operator";

/// Role a gateway plays in a migration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Source,
    Target,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Source => write!(f, "Source"),
            Role::Target => write!(f, "Target"),
        }
    }
}

impl Role {
    /// checks the gateway can play this role. Any gateway can be a source, a target
    /// must run the operator and must not be the Community Edition.
    pub fn validate(&self, info: &GatewayInfo) -> Result<()> {
        match self {
            Role::Source => Ok(()),
            Role::Target => validate_target(info),
        }
    }
}

/// probe reads the identity of a gateway
pub async fn probe<G>(gateway: &G) -> Result<GatewayInfo>
where
    G: FunctionGateway + ?Sized,
{
    let info = gateway.get_info().await?;
    debug!(provider = %info.provider.name, release = %info.provider.version.release, "probed gateway");
    Ok(info)
}

pub fn validate_target(info: &GatewayInfo) -> Result<()> {
    let provider = info.provider.name.as_str();
    if provider.contains(COMMUNITY_EDITION_MARKER) {
        return Err(Error::Compatibility(format!(
            "OpenFaaS CE detected (provider {})",
            provider
        )));
    }
    if !provider.contains(OPERATOR_MARKER) {
        return Err(Error::Compatibility(format!(
            "target cluster must have operator mode enabled (provider {})",
            provider
        )));
    }
    Ok(())
}

/// human readable block printed for each cluster before anything is changed
pub fn describe_cluster(role: Role, info: &GatewayInfo) -> String {
    format!(
        "{}:\n - {}/{}\n - version: {}\n - commit: {}\n",
        role,
        info.provider.orchestration,
        info.provider.name,
        info.provider.version.release,
        info.provider.version.sha
    )
}
