#![allow(dead_code)]

use async_trait::async_trait;
use mirror::FunctionGateway;
use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;
use utility::faas::types::info_request::GatewayInfo;
use utility::faas::types::model::{FunctionDeployment, FunctionResources, FunctionStatus};
use utility::faas_provider::types::ProviderInfo;
use utility::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Info,
    List(String),
    Get(String, String),
    Deploy(FunctionDeployment),
    Update(FunctionDeployment),
}

/// in-memory gateway recording every call made to it
#[derive(Default)]
pub struct FakeGateway {
    pub provider: String,
    /// keyed by (namespace, name)
    pub functions: BTreeMap<(String, String), FunctionStatus>,
    /// names whose describe answers with a server error
    pub broken: HashSet<String>,
    /// names whose create or update answers with a server error
    pub failing_writes: HashSet<String>,
    pub calls: Mutex<Vec<Call>>,
}

impl FakeGateway {
    pub fn new(provider: &str) -> FakeGateway {
        FakeGateway {
            provider: provider.to_string(),
            ..Default::default()
        }
    }

    pub fn with_function(mut self, status: FunctionStatus) -> FakeGateway {
        self.functions
            .insert((status.namespace.clone(), status.name.clone()), status);
        self
    }

    pub fn with_broken(mut self, name: &str) -> FakeGateway {
        self.broken.insert(name.to_string());
        self
    }

    pub fn with_failing_write(mut self, name: &str) -> FakeGateway {
        self.failing_writes.insert(name.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Deploy(_) | Call::Update(_)))
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn write_status(&self, spec: &FunctionDeployment, ok: u16) -> Result<u16> {
        if self.failing_writes.contains(&spec.service) {
            return Err(Error::UnexpectedStatus {
                status: 500,
                body: "quota exceeded".to_string(),
            });
        }
        Ok(ok)
    }
}

#[async_trait]
impl FunctionGateway for FakeGateway {
    async fn list_functions(&self, namespace: &str) -> Result<Vec<FunctionStatus>> {
        self.record(Call::List(namespace.to_string()));
        Ok(self
            .functions
            .values()
            .filter(|f| f.namespace == namespace)
            .map(|f| FunctionStatus {
                name: f.name.clone(),
                image: f.image.clone(),
                namespace: f.namespace.clone(),
                replicas: f.replicas,
                ..Default::default()
            })
            .collect())
    }

    async fn get_function(&self, name: &str, namespace: &str) -> Result<FunctionStatus> {
        self.record(Call::Get(name.to_string(), namespace.to_string()));
        if self.broken.contains(name) {
            return Err(Error::UnexpectedStatus {
                status: 500,
                body: "connection reset".to_string(),
            });
        }
        self.functions
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    async fn deploy(&self, spec: &FunctionDeployment) -> Result<u16> {
        self.record(Call::Deploy(spec.clone()));
        self.write_status(spec, 202)
    }

    async fn update(&self, spec: &FunctionDeployment) -> Result<u16> {
        self.record(Call::Update(spec.clone()));
        self.write_status(spec, 200)
    }

    async fn get_info(&self) -> Result<GatewayInfo> {
        self.record(Call::Info);
        Ok(GatewayInfo {
            provider: ProviderInfo {
                name: self.provider.clone(),
                orchestration: "kubernetes".to_string(),
                ..Default::default()
            },
            ..Default::default()
        })
    }
}

pub fn function(name: &str, image: &str) -> FunctionStatus {
    FunctionStatus {
        name: name.to_string(),
        image: image.to_string(),
        namespace: "openfaas-fn".to_string(),
        ..Default::default()
    }
}

/// a function with every deployable field and every status field populated
pub fn full_function(name: &str) -> FunctionStatus {
    FunctionStatus {
        name: name.to_string(),
        image: "ghcr.io/openfaas/nodeinfo:latest".to_string(),
        namespace: "openfaas-fn".to_string(),
        env_process: "node index.js".to_string(),
        env_vars: [("write_timeout", "10s"), ("read_timeout", "10s")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        constraints: vec![
            "node.platform.os == linux".to_string(),
            "node.role == worker".to_string(),
        ],
        secrets: vec!["api-key".to_string(), "db-password".to_string()],
        labels: [("com.openfaas.scale.max", "10")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        annotations: [("prometheus.io.scrape", "false")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        limits: Some(FunctionResources {
            memory: "256Mi".to_string(),
            cpu: "500m".to_string(),
        }),
        requests: Some(FunctionResources {
            memory: "128Mi".to_string(),
            cpu: "100m".to_string(),
        }),
        read_only_root_filesystem: true,
        invocation_count: 42.,
        replicas: 3,
        available_replicas: 2,
        created_at: "2023-03-01T09:00:00Z".to_string(),
    }
}

pub fn lines(out: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(out)
        .lines()
        .map(|l| l.to_string())
        .collect()
}
