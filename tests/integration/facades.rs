//! Façade-specific href routing: the admin rewrite for org VDC networks
//! and the synthesized hrefs for OpenAPI networks.

use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vcd_api::metadata::{
    Catalog, MetadataDomain, MetadataValueKind, MetadataVisibility, OpenApiOrgVdcNetwork,
    OrgVdcNetwork,
};

use crate::common;

#[tokio::test]
async fn org_vdc_network_reads_tenant_href_and_mutates_admin_href() {
    let mock_server = MockServer::start().await;
    let net = OrgVdcNetwork::new(format!("{}/api/network/net-1", mock_server.uri()));

    Mock::given(method("GET"))
        .and(path("/api/network/net-1/metadata/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"<Metadata xmlns="http://www.vmware.com/vcloud/v1.5"/>"#,
            common::METADATA_CONTENT_TYPE,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/admin/network/net-1/metadata/owner"))
        .and(body_string_contains("<Value>net-team</Value>"))
        .respond_with(common::task_accepted(&mock_server.uri(), "t1", "success"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = common::api_for(&mock_server);
    let metadata = api.get_all(&net).await.unwrap();
    assert!(metadata.is_empty());

    api.add_entry_and_wait(
        &net,
        "owner",
        "net-team",
        MetadataValueKind::String,
        MetadataVisibility::ReadWrite,
        MetadataDomain::General,
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn openapi_network_routes_through_synthesized_hrefs() {
    let mock_server = MockServer::start().await;
    let net = OpenApiOrgVdcNetwork::new(
        format!("{}/api", mock_server.uri()),
        "urn:vcloud:network:ab6f1e3b-9e1c-4a2b-8f3d-0c1d2e3f4a5b",
    );

    Mock::given(method("GET"))
        .and(path(
            "/api/network/ab6f1e3b-9e1c-4a2b-8f3d-0c1d2e3f4a5b/metadata/owner",
        ))
        .respond_with(common::metadata_value_ok(
            "GENERAL",
            "READWRITE",
            "MetadataStringValue",
            "net-team",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(
            "/api/admin/network/ab6f1e3b-9e1c-4a2b-8f3d-0c1d2e3f4a5b/metadata/owner",
        ))
        .respond_with(common::task_accepted(&mock_server.uri(), "t2", "success"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = common::api_for(&mock_server);
    let value = api
        .get_entry(&net, MetadataDomain::General, "owner")
        .await
        .unwrap();
    assert_eq!(value.typed_value.value, "net-team");

    api.delete_entry_and_wait(&net, MetadataDomain::General, "owner")
        .await
        .unwrap();
}

#[tokio::test]
async fn plain_facades_use_their_stored_href_for_everything() {
    let mock_server = MockServer::start().await;
    let catalog = Catalog::new(format!("{}/api/catalog/cat-1", mock_server.uri()));

    Mock::given(method("GET"))
        .and(path("/api/catalog/cat-1/metadata/SYSTEM/billing-id"))
        .respond_with(common::metadata_value_ok(
            "SYSTEM",
            "READONLY",
            "MetadataNumberValue",
            "981",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/catalog/cat-1/metadata/SYSTEM/billing-id"))
        .respond_with(common::task_accepted(&mock_server.uri(), "t3", "success"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = common::api_for(&mock_server);
    let value = api
        .get_entry(&catalog, MetadataDomain::System, "billing-id")
        .await
        .unwrap();
    assert_eq!(value.typed_value.kind, MetadataValueKind::Number);

    api.delete_entry_and_wait(&catalog, MetadataDomain::System, "billing-id")
        .await
        .unwrap();
}
