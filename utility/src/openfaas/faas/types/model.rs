use crate::is_default;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// FunctionDeployment represents a request to create or update a Function.
// It only carries the deployable spec, never runtime status.
#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
pub struct FunctionDeployment {
    // Service is the name of the function deployment
    #[serde(default)]
    pub service: String,
    // Image is a fully-qualified container image
    #[serde(default)]
    pub image: String,

    // Namespace for the function, if supported by the faas_provider
    #[serde(default, skip_serializing_if = "is_default")]
    pub namespace: String,

    // EnvProcess overrides the fprocess environment variable and can be used
    // with the watchdog
    #[serde(rename = "envProcess")]
    #[serde(default, skip_serializing_if = "is_default")]
    pub env_process: String,

    // EnvVars can be provided to set environment variables for the function runtime.
    #[serde(rename = "envVars")]
    #[serde(default, skip_serializing_if = "is_default")]
    pub env_vars: HashMap<String, String>,

    // Constraints are specific to the faas_provider.
    #[serde(default, skip_serializing_if = "is_default")]
    pub constraints: Vec<String>,

    // Secrets list of secrets to be made available to function
    #[serde(default, skip_serializing_if = "is_default")]
    pub secrets: Vec<String>,

    // Labels are metadata for functions which may be used by the
    // faas_provider or the gateway
    #[serde(default, skip_serializing_if = "is_default")]
    pub labels: HashMap<String, String>,

    // Annotations are metadata for functions which may be used by the
    // faas_provider or the gateway
    #[serde(default, skip_serializing_if = "is_default")]
    pub annotations: HashMap<String, String>,

    // Limits for function
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<FunctionResources>,

    // Requests of resources requested by function
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests: Option<FunctionResources>,

    // ReadOnlyRootFilesystem removes write-access from the root filesystem
    // mount-point.
    #[serde(rename = "readOnlyRootFilesystem")]
    #[serde(default, skip_serializing_if = "is_default")]
    pub read_only_root_filesystem: bool,
}

// FunctionResources Memory and CPU
#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
pub struct FunctionResources {
    #[serde(default, skip_serializing_if = "is_default")]
    pub memory: String,
    #[serde(default, skip_serializing_if = "is_default")]
    pub cpu: String,
}

// FunctionStatus exported for system/functions endpoint
#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
pub struct FunctionStatus {
    // Name is the name of the function deployment
    #[serde(default)]
    pub name: String,

    // Image is a fully-qualified container image
    #[serde(default)]
    pub image: String,

    // Namespace for the function, if supported by the faas_provider
    #[serde(default, skip_serializing_if = "is_default")]
    pub namespace: String,

    // EnvProcess overrides the fprocess environment variable and can be used
    // with the watchdog
    #[serde(rename = "envProcess")]
    #[serde(default, skip_serializing_if = "is_default")]
    pub env_process: String,

    // EnvVars set environment variables for the function runtime
    #[serde(rename = "envVars")]
    #[serde(default, skip_serializing_if = "is_default")]
    pub env_vars: HashMap<String, String>,

    // Constraints are specific to the faas_provider
    #[serde(default, skip_serializing_if = "is_default")]
    pub constraints: Vec<String>,

    // secrets list of secrets to be made available to function
    #[serde(default, skip_serializing_if = "is_default")]
    pub secrets: Vec<String>,

    // Labels are metadata for functions which may be used by the
    // faas_provider or the gateway
    #[serde(default, skip_serializing_if = "is_default")]
    pub labels: HashMap<String, String>,

    // Annotations are metadata for functions which may be used by the
    // faas_provider or the gateway
    #[serde(default, skip_serializing_if = "is_default")]
    pub annotations: HashMap<String, String>,

    // Limits for function
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<FunctionResources>,

    // Requests of resources requested by function
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests: Option<FunctionResources>,

    // ReadOnlyRootFilesystem removes write-access from the root filesystem
    // mount-point.
    #[serde(rename = "readOnlyRootFilesystem")]
    #[serde(default, skip_serializing_if = "is_default")]
    pub read_only_root_filesystem: bool,

    // ================
    // Fields for status
    // ================

    // InvocationCount count of invocations
    #[serde(rename = "invocationCount")]
    #[serde(default, skip_serializing_if = "is_default")]
    pub invocation_count: f64,

    // Replicas desired within the cluster
    #[serde(default, skip_serializing_if = "is_default")]
    pub replicas: u64,

    // AvailableReplicas is the count of replicas ready to receive
    // invocations as reported by the faas_provider
    #[serde(rename = "availableReplicas")]
    #[serde(default, skip_serializing_if = "is_default")]
    pub available_replicas: u64,

    // CreatedAt is the time read back from the faas backend's
    // data store for when the function or its container was created.
    //rfc3339
    #[serde(rename = "createdAt")]
    #[serde(default, skip_serializing_if = "is_default")]
    pub created_at: String,
}

impl From<&FunctionStatus> for FunctionDeployment {
    /// copies the deployable part of a described function, dropping the status fields
    fn from(status: &FunctionStatus) -> Self {
        FunctionDeployment {
            service: status.name.clone(),
            image: status.image.clone(),
            namespace: status.namespace.clone(),
            env_process: status.env_process.clone(),
            env_vars: status.env_vars.clone(),
            constraints: status.constraints.clone(),
            secrets: status.secrets.clone(),
            labels: status.labels.clone(),
            annotations: status.annotations.clone(),
            limits: status.limits.clone(),
            requests: status.requests.clone(),
            read_only_root_filesystem: status.read_only_root_filesystem,
        }
    }
}
