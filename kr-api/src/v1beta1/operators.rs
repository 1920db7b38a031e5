use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::v1beta1::ObjectRef;

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "kudo.dev", version = "v1beta1", kind = "Operator", namespaced)]
#[serde(rename_all = "camelCase")]
pub struct OperatorSpec {
    pub description: Option<String>,
    pub kubernetes_version: Option<String>,
    pub maintainers: Option<Vec<String>>,
    pub url: Option<String>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "kudo.dev", version = "v1beta1", kind = "OperatorVersion", namespaced)]
#[serde(rename_all = "camelCase")]
pub struct OperatorVersionSpec {
    pub operator: ObjectRef,
    pub version: Option<String>,
}
