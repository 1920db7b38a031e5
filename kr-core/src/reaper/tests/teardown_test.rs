use httpmock::prelude::*;
use tracing_test::traced_test;

use super::*;
use crate::errors::ReaperError;

fn instances_path() -> String {
    format!("{KUDO_API_BASE}/namespaces/{TEST_NAMESPACE}/instances")
}

#[rstest]
#[tokio::test]
async fn test_run_teardown(config: ReaperConfig, test_instance: Instance, test_unrelated_instance: Instance) {
    let (mut fake_apiserver, client) = make_fake_apiserver();

    let list_body = instance_list(&[test_instance, test_unrelated_instance]);
    fake_apiserver.handle(move |when, then| {
        when.method(GET).path(instances_path());
        then.json_body(list_body.clone());
    });
    fake_apiserver
        .handle_delete(format!("{KUDO_API_BASE}/namespaces/{TEST_NAMESPACE}/planexecutions/{TEST_PLAN}"))
        .handle_delete(format!("{KUDO_API_BASE}/namespaces/{TEST_NAMESPACE}/instances/{TEST_INSTANCE}"))
        .handle_delete(format!("{KUDO_API_BASE}/namespaces/{TEST_NAMESPACE}/operatorversions/{TEST_VERSION}"))
        .handle_delete(format!("{KUDO_API_BASE}/namespaces/{TEST_NAMESPACE}/operators/{TEST_OPERATOR_NAME}"));
    fake_apiserver.build();

    let report = run_teardown(client, &config).await.unwrap();

    assert_eq!(report, TeardownReport { deleted: 4, failed: 0 });
    fake_apiserver.assert();
}

#[rstest]
#[tokio::test]
async fn test_run_teardown_no_instances(config: ReaperConfig) {
    let (mut fake_apiserver, client) = make_fake_apiserver();

    fake_apiserver.handle(move |when, then| {
        when.method(GET).path(instances_path());
        then.json_body(instance_list(&[]));
    });
    fake_apiserver
        .handle_delete(format!("{KUDO_API_BASE}/namespaces/{TEST_NAMESPACE}/operators/{TEST_OPERATOR_NAME}"));
    fake_apiserver.build();

    let report = run_teardown(client, &config).await.unwrap();

    // the operator delete still goes out even with nothing deployed
    assert_eq!(report, TeardownReport { deleted: 1, failed: 0 });
    fake_apiserver.assert();
}

#[rstest]
#[tokio::test]
#[traced_test]
async fn test_run_teardown_delete_failures_continue(config: ReaperConfig, test_instance: Instance) {
    let (mut fake_apiserver, client) = make_fake_apiserver();

    let list_body = instance_list(&[test_instance]);
    fake_apiserver.handle(move |when, then| {
        when.method(GET).path(instances_path());
        then.json_body(list_body.clone());
    });

    // the plan execution is already gone and the instance delete blows up;
    // neither one should stop the rest of the teardown
    fake_apiserver
        .handle_not_found(format!("{KUDO_API_BASE}/namespaces/{TEST_NAMESPACE}/planexecutions/{TEST_PLAN}"));
    fake_apiserver.handle(move |when, then| {
        when.method(DELETE)
            .path(format!("{KUDO_API_BASE}/namespaces/{TEST_NAMESPACE}/instances/{TEST_INSTANCE}"));
        then.status(500).json_body(serde_json::json!({
            "kind": "Status",
            "apiVersion": "v1",
            "metadata": {},
            "status": "Failure",
            "reason": "InternalError",
            "code": 500
        }));
    });
    fake_apiserver
        .handle_delete(format!("{KUDO_API_BASE}/namespaces/{TEST_NAMESPACE}/operatorversions/{TEST_VERSION}"))
        .handle_delete(format!("{KUDO_API_BASE}/namespaces/{TEST_NAMESPACE}/operators/{TEST_OPERATOR_NAME}"));
    fake_apiserver.build();

    let report = run_teardown(client, &config).await.unwrap();

    assert_eq!(report, TeardownReport { deleted: 2, failed: 2 });
    assert!(logs_contain("could not delete planexecution.kudo.dev"));
    assert!(logs_contain("could not delete instance.kudo.dev"));
    fake_apiserver.assert();
}

#[rstest]
#[tokio::test]
async fn test_run_teardown_list_fails(config: ReaperConfig) {
    let (mut fake_apiserver, client) = make_fake_apiserver();

    fake_apiserver.handle(move |when, then| {
        when.method(GET).path(instances_path());
        then.status(500).json_body(serde_json::json!({
            "kind": "Status",
            "apiVersion": "v1",
            "metadata": {},
            "status": "Failure",
            "reason": "InternalError",
            "code": 500
        }));
    });
    fake_apiserver.build();

    let err = run_teardown(client, &config).await.unwrap_err().downcast().unwrap();
    assert!(matches!(err, ReaperError::QueryFailed { .. }));
}

#[rstest]
#[tokio::test]
async fn test_run_teardown_malformed_list(config: ReaperConfig) {
    let (mut fake_apiserver, client) = make_fake_apiserver();

    fake_apiserver.handle(move |when, then| {
        when.method(GET).path(instances_path());
        then.status(200).body("this is not json");
    });
    fake_apiserver.build();

    let err = run_teardown(client, &config).await.unwrap_err().downcast().unwrap();
    assert!(matches!(err, ReaperError::QueryFailed { .. }));
}
