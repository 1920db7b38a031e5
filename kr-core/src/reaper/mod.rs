use std::collections::BTreeSet;
use std::fmt;

use tracing::*;

use crate::errors::*;
use crate::prelude::*;

#[derive(Clone, Debug)]
pub struct ReaperConfig {
    pub namespace: String,
    pub operator_name: String,
}

// The kinds we know how to delete, named the way kubectl addresses them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReapKind {
    PlanExecution,
    Instance,
    OperatorVersion,
    Operator,
}

impl fmt::Display for ReapKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReapKind::PlanExecution => write!(f, "planexecution.kudo.dev"),
            ReapKind::Instance => write!(f, "instance.kudo.dev"),
            ReapKind::OperatorVersion => write!(f, "operatorversion.kudo.dev"),
            ReapKind::Operator => write!(f, "operator.kudo.dev"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deletion {
    pub kind: ReapKind,
    pub name: String,
}

impl Deletion {
    fn new(kind: ReapKind, name: &str) -> Deletion {
        Deletion { kind, name: name.into() }
    }
}

// An ordered list of delete calls to issue; references are torn down before
// their referents (plan executions and instances, then operator versions,
// then the operator itself) so the apiserver never sees a dangling reference.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct TeardownPlan {
    deletions: Vec<Deletion>,
}

impl TeardownPlan {
    pub fn build(operator_name: &str, instances: &[Instance]) -> TeardownPlan {
        let mut deletions = vec![];
        let mut versions = BTreeSet::new();

        for inst in instances {
            if !inst.managed_by(operator_name) {
                continue;
            }
            versions.insert(inst.spec.operator_version.name.clone());

            // An instance's active plan (if it has one) references the
            // instance, so it has to go first.
            if let Some(plan) = inst.status.as_ref().and_then(|status| status.active_plan.as_ref()) {
                deletions.push(Deletion::new(ReapKind::PlanExecution, &plan.name));
            }
            deletions.push(Deletion::new(ReapKind::Instance, &inst.name_any()));
        }

        deletions.extend(versions.into_iter().map(|name| Deletion { kind: ReapKind::OperatorVersion, name }));

        // The operator goes even if no instances were found; this guarantees
        // full teardown of operators that were installed but never deployed.
        deletions.push(Deletion::new(ReapKind::Operator, operator_name));

        TeardownPlan { deletions }
    }

    pub fn deletions(&self) -> &[Deletion] {
        &self.deletions
    }
}

#[derive(Debug, Default, Eq, PartialEq)]
pub struct TeardownReport {
    pub deleted: usize,
    pub failed: usize,
}

pub async fn run_teardown(client: kube::Client, config: &ReaperConfig) -> anyhow::Result<TeardownReport> {
    let instance_api = kube::Api::<Instance>::namespaced(client.clone(), &config.namespace);
    let instances = instance_api
        .list(&Default::default())
        .await
        .map_err(|err| ReaperError::query_failed(&config.namespace, err))?;

    let plan = TeardownPlan::build(&config.operator_name, &instances.items);
    Ok(execute_plan(client, config, &plan).await)
}

// Every delete is fire-and-forget: a failure (including "not found") is
// logged and counted but never stops the teardown.
pub async fn execute_plan(client: kube::Client, config: &ReaperConfig, plan: &TeardownPlan) -> TeardownReport {
    let mut report = TeardownReport::default();

    for del in plan.deletions() {
        info!("deleting {} {}/{}", del.kind, config.namespace, del.name);
        match delete_one(&client, &config.namespace, del).await {
            Ok(()) => report.deleted += 1,
            Err(err) => {
                warn!("could not delete {} {}/{}: {err}", del.kind, config.namespace, del.name);
                report.failed += 1;
            },
        }
    }

    report
}

async fn delete_one(client: &kube::Client, ns: &str, del: &Deletion) -> kube::Result<()> {
    let dp = Default::default();
    match del.kind {
        ReapKind::PlanExecution => {
            kube::Api::<PlanExecution>::namespaced(client.clone(), ns)
                .delete(&del.name, &dp)
                .await?;
        },
        ReapKind::Instance => {
            kube::Api::<Instance>::namespaced(client.clone(), ns).delete(&del.name, &dp).await?;
        },
        ReapKind::OperatorVersion => {
            kube::Api::<OperatorVersion>::namespaced(client.clone(), ns)
                .delete(&del.name, &dp)
                .await?;
        },
        ReapKind::Operator => {
            kube::Api::<Operator>::namespaced(client.clone(), ns).delete(&del.name, &dp).await?;
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests;
