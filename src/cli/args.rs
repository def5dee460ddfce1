use clap::Args;
use serde_json::{Map, Value};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// JSON file holding an array of input items; `-` or omitted reads stdin
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Record failing items as {"error": ...} and keep going
    #[arg(long, help_heading = "Execution")]
    pub continue_on_fail: bool,

    /// Path to custom config file (default: ./onlyoffice.toml)
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, help_heading = "Output Options")]
    pub pretty: bool,
}

impl RunArgs {
    /// Input path, or `None` when items come from stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input
            .as_ref()
            .filter(|path| path.as_os_str() != "-")
    }
}

#[derive(Args, Debug, Clone)]
pub struct ExecArgs {
    /// Resource to operate on (folder, file)
    #[arg(long, default_value = "folder")]
    pub resource: String,

    /// Operation to perform (list, create, rename, move, copy, delete)
    #[arg(long, default_value = "list")]
    pub operation: String,

    /// Folder to list (@my, @common or an id)
    #[arg(long, value_name = "ID", help_heading = "Parameters")]
    pub folder_id: Option<String>,

    /// Folder receiving a created item
    #[arg(long, value_name = "ID", help_heading = "Parameters")]
    pub parent_folder_id: Option<String>,

    /// Title for created items
    #[arg(long, help_heading = "Parameters")]
    pub title: Option<String>,

    /// Kind of created file (docx, xlsx, pptx)
    #[arg(long, value_name = "KIND", help_heading = "Parameters")]
    pub file_type: Option<String>,

    /// Item to rename, move, copy or delete
    #[arg(long, value_name = "ID", help_heading = "Parameters")]
    pub item_id: Option<String>,

    /// New title for rename
    #[arg(long, help_heading = "Parameters")]
    pub new_title: Option<String>,

    /// Destination folder for move and copy
    #[arg(long, value_name = "ID", help_heading = "Parameters")]
    pub dest_folder_id: Option<String>,

    /// Conflict handling for move and copy (Skip, Overwrite, Duplicate)
    #[arg(long, value_name = "MODE", help_heading = "Parameters")]
    pub conflict_resolve_type: Option<String>,

    /// Delete permanently instead of moving to trash
    #[arg(long, help_heading = "Parameters")]
    pub delete_immediately: bool,

    /// Path to custom config file (default: ./onlyoffice.toml)
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, help_heading = "Output Options")]
    pub pretty: bool,
}

impl ExecArgs {
    /// Build the single input item, leaving unset flags to the node defaults.
    pub fn to_item(&self) -> Value {
        let mut item = Map::new();
        item.insert("resource".into(), Value::String(self.resource.clone()));
        item.insert("operation".into(), Value::String(self.operation.clone()));

        let optional = [
            ("folderId", &self.folder_id),
            ("parentFolderId", &self.parent_folder_id),
            ("title", &self.title),
            ("fileType", &self.file_type),
            ("itemId", &self.item_id),
            ("newTitle", &self.new_title),
            ("destFolderId", &self.dest_folder_id),
            ("conflictResolveType", &self.conflict_resolve_type),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                item.insert(name.into(), Value::String(value.clone()));
            }
        }
        if self.delete_immediately {
            item.insert("deleteImmediately".into(), Value::Bool(true));
        }
        Value::Object(item)
    }
}

#[derive(Args, Debug, Clone)]
pub struct DescribeArgs {
    /// Print the credential description instead of the node description
    #[arg(long)]
    pub credentials: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}
