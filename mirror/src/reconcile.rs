use crate::gateway::FunctionGateway;
use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;
use tracing::{debug, error, info};
use utility::faas::types::model::{FunctionDeployment, FunctionStatus};
use utility::{Error, Result, DEFAULT_FUNCTION_NAMESPACE};

/// MirrorOptions controls a single migration run
#[derive(Debug, Clone, PartialEq)]
pub struct MirrorOptions {
    /// namespace listed on the source gateway
    pub namespace: String,
    /// report what would be deployed without contacting the target
    pub dry_run: bool,
}

impl Default for MirrorOptions {
    fn default() -> Self {
        MirrorOptions {
            namespace: DEFAULT_FUNCTION_NAMESPACE.to_string(),
            dry_run: false,
        }
    }
}

/// Verb the call used to apply a function on the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Create,
    Update,
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verb::Create => write!(f, "POST"),
            Verb::Update => write!(f, "PUT"),
        }
    }
}

/// Outcome of one function applied to the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub name: String,
    pub verb: Verb,
    pub status: u16,
}

/// Lookup result of asking a gateway whether a function exists.
/// A failed request is kept apart from a missing function so it can't be mistaken for one.
#[derive(Debug)]
pub enum Lookup {
    Found(FunctionStatus),
    NotFound,
    Failed(Error),
}

pub async fn lookup<G>(gateway: &G, name: &str, namespace: &str) -> Lookup
where
    G: FunctionGateway + ?Sized,
{
    match gateway.get_function(name, namespace).await {
        Ok(status) => Lookup::Found(status),
        Err(e) if e.is_not_found() => Lookup::NotFound,
        Err(e) => Lookup::Failed(e),
    }
}

/// reads every function in `namespace` from the source, keyed and ordered by name.
/// Fails on the first function that can't be described.
pub async fn fetch_definitions<G>(
    source: &G,
    namespace: &str,
) -> Result<BTreeMap<String, FunctionStatus>>
where
    G: FunctionGateway + ?Sized,
{
    let summaries = source.list_functions(namespace).await?;
    debug!(namespace, count = summaries.len(), "listed source functions");

    let mut deployed = BTreeMap::new();
    for summary in summaries {
        let spec = source
            .get_function(summary.name.as_str(), namespace)
            .await
            .map_err(|e| {
                error!(function = %summary.name, "can't read function from source: {}", e);
                e
            })?;
        deployed.insert(summary.name, spec);
    }
    Ok(deployed)
}

/// mirror copies every function from `source` onto `target`.
///
/// One `=> Deploy` line is written to `out` per source function and, unless
/// `dry_run` is set, one `<= name: status [verb]` line once the target answered.
/// The first error ends the run; functions applied before it stay applied.
pub async fn mirror<S, T, W>(
    source: &S,
    target: &T,
    options: &MirrorOptions,
    out: &mut W,
) -> Result<Vec<Outcome>>
where
    S: FunctionGateway + ?Sized,
    T: FunctionGateway + ?Sized,
    W: Write,
{
    let deployed = fetch_definitions(source, options.namespace.as_str()).await?;

    let mut outcomes = Vec::with_capacity(deployed.len());
    for (name, spec) in &deployed {
        writeln!(out, "=> Deploy: {} to target cluster", name)?;
        if options.dry_run {
            continue;
        }

        // the namespace is taken from the source definition as-is
        let verb = match lookup(target, name, spec.namespace.as_str()).await {
            Lookup::Found(_) => Verb::Update,
            Lookup::NotFound => Verb::Create,
            Lookup::Failed(e) => {
                return Err(Error::Custom(format!(
                    "can't check whether {} exists on the target cluster: {}",
                    name, e
                )))
            }
        };

        let fn_deployment = FunctionDeployment::from(spec);
        let status = match verb {
            Verb::Create => target.deploy(&fn_deployment).await?,
            Verb::Update => target.update(&fn_deployment).await?,
        };
        info!(function = %name, %verb, status, "applied function to target");

        writeln!(out, "<= {}: {} [{}]", name, status, verb)?;
        outcomes.push(Outcome {
            name: name.clone(),
            verb,
            status,
        });
    }

    Ok(outcomes)
}
