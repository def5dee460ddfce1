#![allow(clippy::result_large_err)]

use crate::core::error::AppError;
use onlyoffice_types::{NodeParameters, Operation, Resource};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;

/// ASCII set for encoding ids as a single path segment.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'%')
    .add(b'"')
    .add(b'\\');

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outbound call, relative to `<baseUrl>/api/2.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestSpec {
    pub method: HttpMethod,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl RequestSpec {
    fn get(path: String) -> Self {
        Self {
            method: HttpMethod::Get,
            path,
            body: None,
        }
    }

    fn with_body(method: HttpMethod, path: String, body: Value) -> Self {
        Self {
            method,
            path,
            body: Some(body),
        }
    }
}

/// Parse the raw selectors and map them onto a request.
///
/// An unknown resource or operation fails before any parameter is read.
pub fn build_request(
    resource: &str,
    operation: &str,
    params: &NodeParameters,
) -> Result<RequestSpec, AppError> {
    let (resource, operation) = parse_selectors(resource, operation)?;
    request_for(resource, operation, params)
}

pub fn parse_selectors(resource: &str, operation: &str) -> Result<(Resource, Operation), AppError> {
    let resource = resource
        .parse::<Resource>()
        .map_err(|err| AppError::unsupported_resource(&err.value))?;
    let operation = operation
        .parse::<Operation>()
        .map_err(|_| AppError::unsupported_operation(resource.as_str(), operation))?;
    Ok((resource, operation))
}

/// Pure mapping of typed selectors plus parameters onto a request.
///
/// Fails only when an id cannot stand as a single path segment.
pub fn request_for(
    resource: Resource,
    operation: Operation,
    params: &NodeParameters,
) -> Result<RequestSpec, AppError> {
    let request = match (resource, operation) {
        (_, Operation::List) => {
            RequestSpec::get(format!("/files/{}", segment("folderId", &params.folder_id)?))
        }
        (Resource::Folder, Operation::Create) => RequestSpec::with_body(
            HttpMethod::Post,
            format!(
                "/files/folder/{}",
                segment("parentFolderId", &params.parent_folder_id)?
            ),
            json!({ "title": params.title }),
        ),
        (Resource::File, Operation::Create) => RequestSpec::with_body(
            HttpMethod::Post,
            format!(
                "/files/{}/file",
                segment("parentFolderId", &params.parent_folder_id)?
            ),
            json!({
                "title": format!("{}.{}", params.title, params.file_type.extension()),
                "templateId": params.file_type.template_id(),
            }),
        ),
        (_, Operation::Rename) => RequestSpec::with_body(
            HttpMethod::Put,
            format!("/files/{}/{}", resource, segment("itemId", &params.item_id)?),
            json!({ "title": params.new_title }),
        ),
        (_, Operation::Move | Operation::Copy) => {
            let ids = vec![params.item_id.clone()];
            let (folder_ids, file_ids) = match resource {
                Resource::Folder => (ids, Vec::new()),
                Resource::File => (Vec::new(), ids),
            };
            RequestSpec::with_body(
                HttpMethod::Put,
                format!("/files/fileops/{}", operation),
                json!({
                    "folderIds": folder_ids,
                    "fileIds": file_ids,
                    "destFolderId": params.dest_folder_id,
                    "conflictResolveType": params.conflict_resolve_type,
                }),
            )
        }
        (Resource::Folder, Operation::Delete) => RequestSpec::with_body(
            HttpMethod::Delete,
            format!("/files/folder/{}", segment("itemId", &params.item_id)?),
            if params.delete_immediately {
                json!({ "deleteAfter": true })
            } else {
                json!({})
            },
        ),
        (Resource::File, Operation::Delete) => RequestSpec::with_body(
            HttpMethod::Delete,
            format!("/files/file/{}", segment("itemId", &params.item_id)?),
            json!({ "deleteAfter": params.delete_immediately }),
        ),
    };
    Ok(request)
}

/// Encode an id as exactly one path segment.
///
/// `.` and `..` survive percent-encoding as dot segments (`%2E%2E` included),
/// so URL resolution would retarget the call at a parent resource.
fn segment(name: &str, id: &str) -> Result<String, AppError> {
    let id = id.trim();
    if id == "." || id == ".." {
        let mut err = AppError::invalid_parameter(format!(
            "{} '{}' is not a valid item id",
            name, id
        ));
        err.add_context("parameter", name);
        return Err(err);
    }
    Ok(utf8_percent_encode(id, PATH_SEGMENT_ENCODE_SET).to_string())
}
