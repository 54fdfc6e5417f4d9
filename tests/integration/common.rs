//! Shared helpers for the integration suite.
//!
//! Every test runs against a wiremock server standing in for a vCloud
//! Director instance, so the suite needs no credentials or network access.

use std::sync::Once;

use wiremock::{MockServer, ResponseTemplate};

use vcd_api::metadata::MetadataApi;

pub const TASK_CONTENT_TYPE: &str = "application/vnd.vmware.vcloud.task+xml;version=37.0";
pub const METADATA_CONTENT_TYPE: &str = "application/vnd.vmware.vcloud.metadata+xml;version=37.0";
pub const METADATA_VALUE_CONTENT_TYPE: &str =
    "application/vnd.vmware.vcloud.metadata.value+xml;version=37.0";
pub const ERROR_CONTENT_TYPE: &str = "application/vnd.vmware.vcloud.error+xml;version=37.0";

static INIT: Once = Once::new();

/// Initialize tracing output for test debugging (RUST_LOG aware).
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A metadata API client pointed at the mock server.
pub fn api_for(server: &MockServer) -> MetadataApi {
    init_tracing();
    MetadataApi::new(format!("{}/api", server.uri()), "integration-token").unwrap()
}

pub fn task_body(server_uri: &str, task_id: &str, status: &str) -> String {
    format!(
        r#"<Task xmlns="http://www.vmware.com/vcloud/v1.5" href="{server_uri}/api/task/{task_id}" id="urn:vcloud:task:11111111-2222-3333-4444-555555555555" name="task" status="{status}" operation="Updating metadata" operationName="metadataUpdate"/>"#
    )
}

/// A 202 Accepted response carrying a Task document.
pub fn task_accepted(server_uri: &str, task_id: &str, status: &str) -> ResponseTemplate {
    ResponseTemplate::new(202)
        .set_body_raw(task_body(server_uri, task_id, status), TASK_CONTENT_TYPE)
}

/// A 200 response carrying a refreshed Task document.
pub fn task_refreshed(server_uri: &str, task_id: &str, status: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_raw(task_body(server_uri, task_id, status), TASK_CONTENT_TYPE)
}

/// A 200 response carrying a single MetadataValue document.
pub fn metadata_value_ok(
    domain: &str,
    visibility: &str,
    kind: &str,
    value: &str,
) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(
        format!(
            r#"<MetadataValue xmlns="http://www.vmware.com/vcloud/v1.5" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><Domain visibility="{visibility}">{domain}</Domain><TypedValue xsi:type="{kind}"><Value>{value}</Value></TypedValue></MetadataValue>"#
        ),
        METADATA_VALUE_CONTENT_TYPE,
    )
}

/// A VCD error document response with the given status.
pub fn vcd_error(status: u16, message: &str, minor_code: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(
        format!(
            r#"<Error xmlns="http://www.vmware.com/vcloud/v1.5" message="{message}" majorErrorCode="{status}" minorErrorCode="{minor_code}"/>"#
        ),
        ERROR_CONTENT_TYPE,
    )
}
