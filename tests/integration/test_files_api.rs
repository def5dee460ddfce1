use onlyoffice_node::core::node::{BatchExecutor, BatchSettings, ItemOutput};
use onlyoffice_node::core::types::ErrorCategory;
use onlyoffice_node::core::{codes, OnlyOfficeCredentials, OnlyOfficeNode};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "integration-token";

fn node_for(server: &MockServer) -> OnlyOfficeNode {
    let credentials = OnlyOfficeCredentials::new(&server.uri(), TOKEN).unwrap();
    OnlyOfficeNode::connect(credentials, Some(Duration::from_secs(5))).unwrap()
}

#[tokio::test]
async fn test_list_folder_sends_bearer_and_normalizes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/2.0/files/@common"))
        .and(header("authorization", "Bearer integration-token"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "response": {
                "folders": [{"id": 11, "title": "Shared"}],
                "files": [{"id": 12, "title": "plan.docx"}]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = node_for(&server)
        .execute_item(&json!({"resource": "folder", "operation": "list", "folderId": "@common"}))
        .await
        .unwrap();

    assert_eq!(
        output,
        ItemOutput::Entries(vec![
            json!({"id": 11, "title": "Shared"}),
            json!({"id": 12, "title": "plan.docx"})
        ])
    );
}

#[tokio::test]
async fn test_create_file_posts_template_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/2.0/files/77/file"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"title": "Q1.xlsx", "templateId": 2})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"response": {"id": 501}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let output = node_for(&server)
        .execute_item(&json!({
            "resource": "file",
            "operation": "create",
            "parentFolderId": "77",
            "title": "Q1",
            "fileType": "spreadsheet"
        }))
        .await
        .unwrap();

    assert_eq!(output.into_records(), vec![json!({"response": {"id": 501}})]);
}

#[tokio::test]
async fn test_non_json_listing_becomes_diagnostic_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/2.0/files/@my"))
        .respond_with(ResponseTemplate::new(200).set_body_string("maintenance window"))
        .mount(&server)
        .await;

    let records = node_for(&server)
        .execute_item(&json!({"operation": "list"}))
        .await
        .unwrap()
        .into_records();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["rawResponse"], "maintenance window");
    assert!(records[0]["error"].is_string());
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/2.0/files/file/4"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .mount(&server)
        .await;

    let err = node_for(&server)
        .execute_item(&json!({"resource": "file", "operation": "delete", "itemId": "4"}))
        .await
        .unwrap_err();

    assert_eq!(err.category, ErrorCategory::AuthenticationError);
    assert_eq!(err.code, codes::HTTP_UNAUTHORIZED);
    assert_eq!(err.context.get("status"), Some(&"401".to_string()));
}

#[tokio::test]
async fn test_server_error_is_captured_with_continue_on_fail() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/2.0/files/folder/8"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/2.0/files/fileops/copy"))
        .and(body_json(json!({
            "folderIds": [],
            "fileIds": ["5"],
            "destFolderId": "9",
            "conflictResolveType": "Overwrite"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": []})))
        .mount(&server)
        .await;

    let node = node_for(&server);
    let items = vec![
        json!({"resource": "folder", "operation": "rename", "itemId": "8", "newTitle": "Archive"}),
        json!({
            "resource": "file",
            "operation": "copy",
            "itemId": "5",
            "destFolderId": "9",
            "conflictResolveType": "overwrite"
        }),
    ];

    let records = BatchExecutor::new(&node, BatchSettings { continue_on_fail: true })
        .run(&items)
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    let message = records[0]["error"].as_str().unwrap();
    assert!(message.contains("500"));
    assert_eq!(records[1], json!({"response": []}));
}

#[tokio::test]
async fn test_dot_segment_delete_never_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": 0})))
        .expect(0)
        .mount(&server)
        .await;

    let err = node_for(&server)
        .execute_item(&json!({"resource": "folder", "operation": "delete", "itemId": ".."}))
        .await
        .unwrap_err();

    assert_eq!(err.code, codes::INVALID_PARAMETER);
    assert_eq!(err.context.get("parameter"), Some(&"itemId".to_string()));
}
