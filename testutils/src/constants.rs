pub const TEST_NAMESPACE: &str = "test-namespace";
pub const TEST_OPERATOR_NAME: &str = "the-operator";
pub const TEST_INSTANCE: &str = "the-instance";
pub const TEST_VERSION: &str = "the-operator-1.2.3";
pub const TEST_PLAN: &str = "the-instance-deploy-12345";

pub const KUDO_API_BASE: &str = "/apis/kudo.dev/v1beta1";
