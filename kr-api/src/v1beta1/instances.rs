use std::collections::BTreeMap;

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::v1beta1::ObjectRef;

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "kudo.dev", version = "v1beta1", kind = "Instance", namespaced)]
#[kube(status = "InstanceStatus")]
#[kube(
    printcolumn = r#"{"name":"operator version", "type":"string", "description":"operator version the instance was deployed from", "jsonPath":".spec.operatorVersion.name"}"#,
    printcolumn = r#"{"name":"active plan", "type":"string", "description":"currently-running plan, if any", "jsonPath":".status.activePlan.name"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct InstanceSpec {
    // Required fields
    pub operator_version: ObjectRef,

    // Optional fields
    pub parameters: Option<BTreeMap<String, String>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceStatus {
    pub active_plan: Option<ObjectRef>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "kudo.dev", version = "v1beta1", kind = "PlanExecution", namespaced)]
#[serde(rename_all = "camelCase")]
pub struct PlanExecutionSpec {
    pub instance: ObjectRef,
    pub plan_name: Option<String>,
}
