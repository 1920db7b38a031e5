#![cfg_attr(coverage, feature(coverage_attribute))]
pub mod constants;
pub mod errors;
pub mod k8s;
pub mod logging;
pub mod reaper;

pub mod prelude {
    pub use kube::ResourceExt;
    pub use kr_api::v1beta1::{
        Instance,
        ObjectRef,
        Operator,
        OperatorVersion,
        PlanExecution,
    };

    pub use crate::constants::*;
    pub use crate::errors::EmptyResult;
    pub use crate::k8s::KudoResourceExt;
}
