//! Parameter and selector types shared by the OnlyOffice node and its callers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Folder id that resolves to the current user's "My Documents" root.
pub const MY_DOCUMENTS: &str = "@my";

/// Folder id that resolves to the shared "Common Documents" root.
pub const COMMON_DOCUMENTS: &str = "@common";

/// A file or folder record returned by the server. Passed through untouched.
pub type FileSystemEntry = serde_json::Value;

/// Error produced when a selector string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Entity class an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Folder,
    File,
}

impl Resource {
    pub const ALL: [Resource; 2] = [Resource::Folder, Resource::File];

    pub fn as_str(self) -> &'static str {
        match self {
            Resource::Folder => "folder",
            Resource::File => "file",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "folder" => Ok(Resource::Folder),
            "file" => Ok(Resource::File),
            other => Err(UnknownVariant {
                kind: "resource",
                value: other.to_string(),
            }),
        }
    }
}

/// Action requested against a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    List,
    Create,
    Rename,
    Move,
    Copy,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::List,
        Operation::Create,
        Operation::Rename,
        Operation::Move,
        Operation::Copy,
        Operation::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Rename => "rename",
            Operation::Move => "move",
            Operation::Copy => "copy",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == value.trim())
            .ok_or_else(|| UnknownVariant {
                kind: "operation",
                value: value.to_string(),
            })
    }
}

/// Kind of blank document created by `file create`.
///
/// Accepts both the extension (`xlsx`) and the long name (`spreadsheet`).
/// Anything else is kept verbatim and falls back to the document template.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FileKind {
    #[default]
    Document,
    Spreadsheet,
    Presentation,
    Other(String),
}

impl FileKind {
    /// Extension appended to the title, without the leading dot.
    pub fn extension(&self) -> &str {
        match self {
            FileKind::Document => "docx",
            FileKind::Spreadsheet => "xlsx",
            FileKind::Presentation => "pptx",
            FileKind::Other(raw) => raw,
        }
    }

    /// Server template used for the blank file.
    pub fn template_id(&self) -> u32 {
        match self {
            FileKind::Document => 1,
            FileKind::Spreadsheet => 2,
            FileKind::Presentation => 3,
            FileKind::Other(_) => 1,
        }
    }
}

impl From<&str> for FileKind {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "docx" | "document" => FileKind::Document,
            "xlsx" | "spreadsheet" => FileKind::Spreadsheet,
            "pptx" | "presentation" => FileKind::Presentation,
            _ => FileKind::Other(value.to_string()),
        }
    }
}

impl From<String> for FileKind {
    fn from(value: String) -> Self {
        FileKind::from(value.as_str())
    }
}

impl From<FileKind> for String {
    fn from(kind: FileKind) -> Self {
        kind.extension().to_string()
    }
}

/// Server-side policy for name collisions during move/copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ConflictResolveType {
    #[default]
    Skip,
    Overwrite,
    Duplicate,
}

impl ConflictResolveType {
    pub fn as_str(self) -> &'static str {
        match self {
            ConflictResolveType::Skip => "Skip",
            ConflictResolveType::Overwrite => "Overwrite",
            ConflictResolveType::Duplicate => "Duplicate",
        }
    }
}

impl fmt::Display for ConflictResolveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConflictResolveType {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(ConflictResolveType::Skip),
            "overwrite" => Ok(ConflictResolveType::Overwrite),
            "duplicate" => Ok(ConflictResolveType::Duplicate),
            _ => Err(UnknownVariant {
                kind: "conflict resolution mode",
                value: value.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ConflictResolveType {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Per-item node parameters, keyed by the node's camelCase parameter names.
///
/// `resource` and `operation` stay as raw strings so that an unknown value
/// surfaces as an operation error at dispatch time rather than a decode error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeParameters {
    pub resource: String,
    pub operation: String,
    pub folder_id: String,
    pub parent_folder_id: String,
    pub title: String,
    pub file_type: FileKind,
    pub item_id: String,
    pub new_title: String,
    pub dest_folder_id: String,
    pub conflict_resolve_type: ConflictResolveType,
    pub delete_immediately: bool,
}

impl Default for NodeParameters {
    fn default() -> Self {
        Self {
            resource: Resource::Folder.as_str().to_string(),
            operation: Operation::List.as_str().to_string(),
            folder_id: MY_DOCUMENTS.to_string(),
            parent_folder_id: MY_DOCUMENTS.to_string(),
            title: String::new(),
            file_type: FileKind::Document,
            item_id: String::new(),
            new_title: String::new(),
            dest_folder_id: String::new(),
            conflict_resolve_type: ConflictResolveType::Skip,
            delete_immediately: false,
        }
    }
}

impl NodeParameters {
    pub fn new(resource: Resource, operation: Operation) -> Self {
        Self {
            resource: resource.as_str().to_string(),
            operation: operation.as_str().to_string(),
            ..Self::default()
        }
    }

    /// Look up a string parameter by its wire name.
    pub fn string_param(&self, name: &str) -> Option<&str> {
        match name {
            "resource" => Some(&self.resource),
            "operation" => Some(&self.operation),
            "folderId" => Some(&self.folder_id),
            "parentFolderId" => Some(&self.parent_folder_id),
            "title" => Some(&self.title),
            "fileType" => Some(self.file_type.extension()),
            "itemId" => Some(&self.item_id),
            "newTitle" => Some(&self.new_title),
            "destFolderId" => Some(&self.dest_folder_id),
            "conflictResolveType" => Some(self.conflict_resolve_type.as_str()),
            _ => None,
        }
    }
}
