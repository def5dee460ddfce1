use onlyoffice_node::core::node::normalize::{normalize, PARSE_FAILURE};
use serde_json::{json, Value};

fn entries(prefix: &str, count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| json!({"id": format!("{}{}", prefix, i), "title": format!("{} {}", prefix, i)}))
        .collect()
}

fn concat(folders: &[Value], files: &[Value]) -> Vec<Value> {
    folders.iter().chain(files.iter()).cloned().collect()
}

#[test]
fn test_envelope_returns_folders_then_files() {
    for (folder_count, file_count) in [(0, 0), (1, 0), (0, 2), (3, 4)] {
        let folders = entries("folder", folder_count);
        let files = entries("file", file_count);
        let raw = json!({"response": {"folders": folders, "files": files}, "status": 0});
        assert_eq!(normalize(&raw), concat(&folders, &files));
    }
}

#[test]
fn test_data_sequence_is_returned_unchanged() {
    let data = vec![json!({"id": 1}), json!("loose"), json!(null), json!([1, 2])];
    let raw = json!({"data": data});
    assert_eq!(normalize(&raw), data);
}

#[test]
fn test_flat_listing_without_envelope() {
    let folders = entries("folder", 2);
    let files = entries("file", 1);
    let raw = json!({"files": files, "folders": folders});
    assert_eq!(normalize(&raw), concat(&folders, &files));
}

#[test]
fn test_textual_envelope_is_parsed() {
    let raw = Value::String(r#"{"response":{"folders":[{"id":"a"}],"files":[{"id":"b"}]}}"#.into());
    assert_eq!(normalize(&raw), vec![json!({"id": "a"}), json!({"id": "b"})]);
}

#[test]
fn test_unparseable_text_yields_diagnostic_record() {
    let text = "<html>502 Bad Gateway</html>";
    let result = normalize(&Value::String(text.into()));
    assert_eq!(result.len(), 1);
    assert_eq!(result[0]["error"], json!(PARSE_FAILURE));
    assert_eq!(result[0]["rawResponse"], json!(text));
}

#[test]
fn test_sequence_with_encoded_listing_first() {
    let raw = json!([r#"{"files":[{"id":"b"}],"folders":[{"id":"a"}]}"#]);
    assert_eq!(normalize(&raw), vec![json!({"id": "a"}), json!({"id": "b"})]);
}

#[test]
fn test_envelope_takes_precedence_over_flat_keys() {
    let raw = json!({
        "response": {"files": [{"id": "inner"}]},
        "files": [{"id": "outer"}]
    });
    assert_eq!(normalize(&raw), vec![json!({"id": "inner"})]);
}

#[test]
fn test_null_and_empty_inputs_never_fail() {
    assert_eq!(normalize(&Value::Null), vec![Value::Null]);
    assert!(normalize(&json!([])).is_empty());
    assert!(normalize(&json!({"response": {"folders": [], "files": []}})).is_empty());
}

#[test]
fn test_textual_array_yields_one_record_per_element() {
    let raw = Value::String(r#"[{"id":1},{"id":2}]"#.into());
    assert_eq!(normalize(&raw), vec![json!({"id": 1}), json!({"id": 2})]);

    let nested = json!([r#"[{"id":3}]"#, "ignored"]);
    assert_eq!(normalize(&nested), vec![json!({"id": 3})]);
}
