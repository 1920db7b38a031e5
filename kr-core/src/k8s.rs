use kube::ResourceExt;

use crate::constants::*;

pub trait KudoResourceExt {
    fn operator_label(&self) -> Option<&str>;
    fn managed_by(&self, operator_name: &str) -> bool;
}

impl<T: kube::Resource> KudoResourceExt for T {
    fn operator_label(&self) -> Option<&str> {
        self.labels().get(KUDO_OPERATOR_LABEL_KEY).map(String::as_str)
    }

    // Objects with no operator label belong to no operator, so they never match.
    fn managed_by(&self, operator_name: &str) -> bool {
        self.operator_label() == Some(operator_name)
    }
}
