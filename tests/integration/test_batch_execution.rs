use async_trait::async_trait;
use onlyoffice_node::core::node::{BatchExecutor, BatchSettings, RequestSpec};
use onlyoffice_node::core::{AppError, FilesTransport, OnlyOfficeNode};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// Records every request and answers with a listing for GETs, an echo otherwise.
#[derive(Default)]
struct RecordingTransport {
    requests: Mutex<Vec<RequestSpec>>,
}

#[async_trait]
impl FilesTransport for RecordingTransport {
    async fn send(&self, request: &RequestSpec) -> Result<Value, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        if request.path.starts_with("/files/@") {
            Ok(json!({
                "response": {
                    "folders": [{"id": "f1", "title": "Projects"}],
                    "files": [{"id": "d1", "title": "notes.docx"}]
                }
            }))
        } else {
            Ok(json!({"response": {"path": request.path}}))
        }
    }
}

fn setup() -> (OnlyOfficeNode, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::default());
    (OnlyOfficeNode::new(transport.clone()), transport)
}

#[tokio::test]
async fn test_continue_on_fail_keeps_one_record_per_item() {
    let (node, transport) = setup();
    let items = vec![
        json!({"resource": "folder", "operation": "create", "title": "Reports"}),
        json!({"resource": "file", "operation": "archive"}),
        json!({"resource": "file", "operation": "rename", "itemId": "9", "newTitle": "b.docx"}),
    ];

    let records = BatchExecutor::new(&node, BatchSettings { continue_on_fail: true })
        .run(&items)
        .await
        .unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0], json!({"response": {"path": "/files/folder/@my"}}));
    assert_eq!(
        records[1],
        json!({"error": "Unknown file operation: archive"})
    );
    assert_eq!(records[2], json!({"response": {"path": "/files/file/9"}}));
    assert_eq!(transport.requests.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_abort_stops_before_later_items() {
    let (node, transport) = setup();
    let items = vec![
        json!({"resource": "file", "operation": "archive"}),
        json!({"resource": "folder", "operation": "delete", "itemId": "3"}),
    ];

    let err = BatchExecutor::new(&node, BatchSettings::default())
        .run(&items)
        .await
        .unwrap_err();

    assert!(err.message.contains("archive"));
    assert!(transport.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_entries_become_separate_records() {
    let (node, transport) = setup();
    let items = vec![
        json!({"operation": "list"}),
        json!({"resource": "file", "operation": "list", "folderId": "@common"}),
    ];

    let records = BatchExecutor::new(&node, BatchSettings::default())
        .run(&items)
        .await
        .unwrap();

    assert_eq!(records.len(), 4);
    assert_eq!(records[0]["id"], "f1");
    assert_eq!(records[1]["id"], "d1");
    let paths: Vec<String> = transport
        .requests
        .lock()
        .unwrap()
        .iter()
        .map(|r| r.path.clone())
        .collect();
    assert_eq!(paths, vec!["/files/@my", "/files/@common"]);
}

#[tokio::test]
async fn test_missing_parameter_is_captured_as_error_record() {
    let (node, _) = setup();
    let items = vec![json!({"resource": "folder", "operation": "move", "itemId": "10"})];

    let records = BatchExecutor::new(&node, BatchSettings { continue_on_fail: true })
        .run(&items)
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    let message = records[0]["error"].as_str().unwrap();
    assert!(message.contains("destFolderId"));
}
