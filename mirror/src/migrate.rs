use crate::gateway::FunctionGateway;
use crate::probe::{describe_cluster, probe, Role};
use crate::reconcile::{mirror, MirrorOptions, Outcome};
use std::io::Write;
use utility::Result;

/// migrate prints the identity of both gateways and then mirrors the source's functions
/// onto the target. An unsuitable target stops the run before the source is listed.
pub async fn migrate<S, T, W>(
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
    let source_info = probe(source).await?;
    writeln!(out, "{}", describe_cluster(Role::Source, &source_info))?;
    Role::Source.validate(&source_info)?;

    let target_info = probe(target).await?;
    writeln!(out, "{}", describe_cluster(Role::Target, &target_info))?;
    Role::Target.validate(&target_info)?;

    mirror(source, target, options, out).await
}
