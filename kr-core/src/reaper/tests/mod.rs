mod teardown_test;

use kr_testutils::*;
use rstest::*;

use super::*;

#[fixture]
fn config() -> ReaperConfig {
    ReaperConfig {
        namespace: TEST_NAMESPACE.into(),
        operator_name: TEST_OPERATOR_NAME.into(),
    }
}
