use std::collections::BTreeMap;

use kr_api::v1beta1::{InstanceSpec, InstanceStatus};
use kr_core::prelude::*;
use rstest::fixture;
use serde_json::json;

use crate::constants::*;

pub fn kudo_instance(name: &str, operator: Option<&str>, version: &str, active_plan: Option<&str>) -> Instance {
    let mut inst = Instance::new(name, InstanceSpec {
        operator_version: ObjectRef::new(version),
        parameters: None,
    });
    inst.metadata.namespace = Some(TEST_NAMESPACE.into());
    if let Some(op) = operator {
        inst.metadata.labels = Some(BTreeMap::from([(KUDO_OPERATOR_LABEL_KEY.into(), op.into())]));
    }
    inst.status = active_plan.map(|plan| InstanceStatus { active_plan: Some(ObjectRef::new(plan)) });
    inst
}

#[fixture]
pub fn test_instance(#[default(TEST_INSTANCE)] name: &str) -> Instance {
    kudo_instance(name, Some(TEST_OPERATOR_NAME), TEST_VERSION, Some(TEST_PLAN))
}

// An instance that has no plan currently running (status present, activePlan empty)
#[fixture]
pub fn test_idle_instance(#[default(TEST_INSTANCE)] name: &str) -> Instance {
    let mut inst = kudo_instance(name, Some(TEST_OPERATOR_NAME), TEST_VERSION, None);
    inst.status = Some(InstanceStatus { active_plan: None });
    inst
}

#[fixture]
pub fn test_unrelated_instance() -> Instance {
    kudo_instance("somebody-elses-instance", Some("other-operator"), "other-operator-0.1.0", None)
}

pub fn instance_list(instances: &[Instance]) -> serde_json::Value {
    json!({
        "apiVersion": "kudo.dev/v1beta1",
        "kind": "InstanceList",
        "metadata": {},
        "items": instances,
    })
}
