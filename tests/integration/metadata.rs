//! End-to-end metadata CRUD flows against a mock vCloud Director.

use std::collections::BTreeMap;
use std::time::Duration;

use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vcd_api::metadata::{
    ErrorKind, MetadataApi, MetadataDomain, MetadataValue, MetadataValueKind, MetadataVisibility,
    Vm,
};
use vcd_api::ClientConfig;

use crate::common;

/// An API client with a poll interval suitable for tests that wait on tasks.
fn fast_polling_api(server: &MockServer) -> MetadataApi {
    common::init_tracing();
    let config = ClientConfig::builder()
        .with_task_poll_interval(Duration::from_millis(10))
        .with_task_timeout(Duration::from_secs(5))
        .build();
    MetadataApi::with_config(format!("{}/api", server.uri()), "integration-token", config).unwrap()
}

#[tokio::test]
async fn add_then_get_returns_the_stored_value() {
    let mock_server = MockServer::start().await;
    let vm = Vm::new(format!("{}/api/vApp/vm-1", mock_server.uri()));

    // The write must carry GENERAL/READWRITE on the wire and is answered
    // with a running task.
    Mock::given(method("PUT"))
        .and(path("/api/vApp/vm-1/metadata/env"))
        .and(header(
            "Content-Type",
            "application/vnd.vmware.vcloud.metadata.value+xml",
        ))
        .and(body_string_contains(
            r#"<Domain visibility="READWRITE">GENERAL</Domain>"#,
        ))
        .and(body_string_contains("<Value>prod</Value>"))
        .respond_with(common::task_accepted(&mock_server.uri(), "t1", "running"))
        .expect(1)
        .mount(&mock_server)
        .await;

    // The task completes on the first poll.
    Mock::given(method("GET"))
        .and(path("/api/task/t1"))
        .respond_with(common::task_refreshed(&mock_server.uri(), "t1", "success"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/vApp/vm-1/metadata/env"))
        .respond_with(common::metadata_value_ok(
            "GENERAL",
            "READWRITE",
            "MetadataStringValue",
            "prod",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = fast_polling_api(&mock_server);
    api.add_entry_and_wait(
        &vm,
        "env",
        "prod",
        MetadataValueKind::String,
        MetadataVisibility::ReadWrite,
        MetadataDomain::General,
    )
    .await
    .unwrap();

    let value = api
        .get_entry(&vm, MetadataDomain::General, "env")
        .await
        .unwrap();
    assert_eq!(value.typed_value.value, "prod");
    assert_eq!(value.typed_value.kind, MetadataValueKind::String);

    let domain = value.domain.unwrap();
    assert_eq!(domain.domain, MetadataDomain::General);
    assert_eq!(domain.visibility, MetadataVisibility::ReadWrite);
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let mock_server = MockServer::start().await;
    let vm = Vm::new(format!("{}/api/vApp/vm-1", mock_server.uri()));

    // The deletion task is already terminal in the creation response, so
    // the wait returns without polling.
    Mock::given(method("DELETE"))
        .and(path("/api/vApp/vm-1/metadata/env"))
        .respond_with(common::task_accepted(&mock_server.uri(), "t2", "success"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/vApp/vm-1/metadata/env"))
        .respond_with(common::vcd_error(
            404,
            "The metadata entry could not be found",
            "ENTITY_NOT_FOUND",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = common::api_for(&mock_server);
    api.delete_entry_and_wait(&vm, MetadataDomain::General, "env")
        .await
        .unwrap();

    let err = api
        .get_entry(&vm, MetadataDomain::General, "env")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn merge_sends_mixed_domain_entries_verbatim() {
    let mock_server = MockServer::start().await;
    let vm = Vm::new(format!("{}/api/vApp/vm-1", mock_server.uri()));

    // The batch goes to the collection path without a trailing slash, and
    // each entry keeps the domain tag it was supplied with.
    Mock::given(method("POST"))
        .and(path("/api/vApp/vm-1/metadata"))
        .and(header(
            "Content-Type",
            "application/vnd.vmware.vcloud.metadata+xml",
        ))
        .and(body_string_contains("<Key>env</Key>"))
        .and(body_string_contains(
            r#"<Domain visibility="READWRITE">GENERAL</Domain>"#,
        ))
        .and(body_string_contains("<Key>billing-id</Key>"))
        .and(body_string_contains(
            r#"<Domain visibility="PRIVATE">SYSTEM</Domain>"#,
        ))
        .respond_with(common::task_accepted(&mock_server.uri(), "t3", "success"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut entries = BTreeMap::new();
    entries.insert(
        "env".to_string(),
        MetadataValue::string("prod")
            .with_domain(MetadataDomain::General, MetadataVisibility::ReadWrite),
    );
    entries.insert(
        "billing-id".to_string(),
        MetadataValue::number(981)
            .with_domain(MetadataDomain::System, MetadataVisibility::Hidden),
    );

    common::api_for(&mock_server)
        .merge_all_and_wait(&vm, &entries)
        .await
        .unwrap();
}

#[tokio::test]
async fn merge_with_empty_map_still_returns_a_task() {
    let mock_server = MockServer::start().await;
    let vm = Vm::new(format!("{}/api/vApp/vm-1", mock_server.uri()));

    Mock::given(method("POST"))
        .and(path("/api/vApp/vm-1/metadata"))
        .respond_with(common::task_accepted(&mock_server.uri(), "t4", "running"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let task = common::api_for(&mock_server)
        .merge_all(&vm, &BTreeMap::new())
        .await
        .unwrap();
    assert_eq!(task.operation_name(), Some("metadataUpdate"));
}

#[tokio::test]
async fn system_readwrite_rejection_names_the_key() {
    let mock_server = MockServer::start().await;
    let vm = Vm::new(format!("{}/api/vApp/vm-1", mock_server.uri()));

    // The server rejects READWRITE on SYSTEM entries with a generic message
    // ending in the word "visibility".
    Mock::given(method("PUT"))
        .and(path("/api/vApp/vm-1/metadata/SYSTEM/secret"))
        .respond_with(common::vcd_error(
            500,
            "[ 18a3f2c1 ] visibility",
            "INTERNAL_SERVER_ERROR",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = common::api_for(&mock_server)
        .add_entry(
            &vm,
            "secret",
            "x",
            MetadataValueKind::String,
            MetadataVisibility::ReadWrite,
            MetadataDomain::System,
        )
        .await
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::InvalidVisibility { .. }));
    let message = err.to_string();
    assert!(message.contains("secret"));
    assert!(message.contains("READWRITE"));
    assert!(message.contains("SYSTEM"));
}

#[tokio::test]
async fn get_all_returns_entries_from_every_domain() {
    let mock_server = MockServer::start().await;
    let vm = Vm::new(format!("{}/api/vApp/vm-1", mock_server.uri()));

    Mock::given(method("GET"))
        .and(path("/api/vApp/vm-1/metadata/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"<Metadata xmlns="http://www.vmware.com/vcloud/v1.5" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
                <MetadataEntry>
                    <Domain visibility="READWRITE">GENERAL</Domain>
                    <Key>env</Key>
                    <TypedValue xsi:type="MetadataStringValue"><Value>prod</Value></TypedValue>
                </MetadataEntry>
                <MetadataEntry>
                    <Domain visibility="READONLY">SYSTEM</Domain>
                    <Key>billing-id</Key>
                    <TypedValue xsi:type="MetadataNumberValue"><Value>981</Value></TypedValue>
                </MetadataEntry>
            </Metadata>"#,
            common::METADATA_CONTENT_TYPE,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let metadata = common::api_for(&mock_server).get_all(&vm).await.unwrap();
    assert_eq!(metadata.len(), 2);
    assert_eq!(metadata.get("env").unwrap().typed_value.value, "prod");
    assert!(metadata
        .get("billing-id")
        .unwrap()
        .domain
        .as_ref()
        .unwrap()
        .domain
        .is_system());
}
