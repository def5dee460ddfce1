//! Static metadata describing the node and its credential.
//!
//! The host renders these descriptions as a parameter form; here they also
//! drive required-parameter validation before a request is built.

use onlyoffice_types::{NodeParameters, Operation, Resource, COMMON_DOCUMENTS, MY_DOCUMENTS};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;

pub const NODE_NAME: &str = "onlyOffice";
pub const CREDENTIAL_NAME: &str = "onlyOfficeApi";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Options,
    String,
    Boolean,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyOption {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// Parameter -> allowed values; a property is shown when every key matches.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DisplayOptions {
    pub show: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeProperty {
    pub display_name: String,
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub default: Value,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub no_data_expression: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<PropertyOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_options: Option<DisplayOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NodeProperty {
    fn new(display_name: &str, name: &str, property_type: PropertyType, default: Value) -> Self {
        Self {
            display_name: display_name.to_string(),
            name: name.to_string(),
            property_type,
            default,
            required: false,
            no_data_expression: false,
            options: Vec::new(),
            display_options: None,
            description: None,
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn no_data_expression(mut self) -> Self {
        self.no_data_expression = true;
        self
    }

    fn option(mut self, name: &str, value: &str, action: Option<&str>) -> Self {
        self.options.push(PropertyOption {
            name: name.to_string(),
            value: value.to_string(),
            action: action.map(str::to_string),
        });
        self
    }

    fn show_when(mut self, parameter: &str, values: &[&str]) -> Self {
        self.display_options
            .get_or_insert_with(DisplayOptions::default)
            .show
            .insert(
                parameter.to_string(),
                values.iter().map(|v| v.to_string()).collect(),
            );
        self
    }

    fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Whether the host would show this property for the given selectors.
    pub fn applies_to(&self, resource: Resource, operation: Operation) -> bool {
        let Some(display) = &self.display_options else {
            return true;
        };
        display.show.iter().all(|(parameter, allowed)| {
            let current = match parameter.as_str() {
                "resource" => resource.as_str(),
                "operation" => operation.as_str(),
                _ => return true,
            };
            allowed.iter().any(|value| value == current)
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRef {
    pub name: String,
    pub required: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDefaults {
    #[serde(rename = "baseURL")]
    pub base_url: String,
    pub headers: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescription {
    pub display_name: String,
    pub name: String,
    pub icon: String,
    pub group: Vec<String>,
    pub version: u32,
    pub subtitle: String,
    pub description: String,
    pub defaults: BTreeMap<String, String>,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub credentials: Vec<CredentialRef>,
    pub request_defaults: RequestDefaults,
    pub properties: Vec<NodeProperty>,
}

impl NodeDescription {
    pub fn onlyoffice() -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Self {
            display_name: "OnlyOffice".to_string(),
            name: NODE_NAME.to_string(),
            icon: "file:onlyoffice.svg".to_string(),
            group: vec!["transform".to_string()],
            version: 1,
            subtitle: r#"={{$parameter["operation"] + ": " + $parameter["resource"]}}"#.to_string(),
            description: "Interact with OnlyOffice files and folders".to_string(),
            defaults: BTreeMap::from([("name".to_string(), "OnlyOffice".to_string())]),
            inputs: vec!["main".to_string()],
            outputs: vec!["main".to_string()],
            credentials: vec![CredentialRef {
                name: CREDENTIAL_NAME.to_string(),
                required: true,
            }],
            request_defaults: RequestDefaults {
                base_url: "={{$credentials.baseUrl}}/api/2.0".to_string(),
                headers,
            },
            properties: node_properties(),
        }
    }

    pub fn property(&self, name: &str) -> Option<&NodeProperty> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Properties the host would show for a resource/operation pair.
    pub fn visible_properties(
        &self,
        resource: Resource,
        operation: Operation,
    ) -> impl Iterator<Item = &NodeProperty> {
        self.properties
            .iter()
            .filter(move |p| p.applies_to(resource, operation))
    }

    /// Names of required string parameters left empty for this item.
    pub fn missing_required(
        &self,
        resource: Resource,
        operation: Operation,
        params: &NodeParameters,
    ) -> Vec<String> {
        self.visible_properties(resource, operation)
            .filter(|p| p.required && p.property_type == PropertyType::String)
            .filter(|p| {
                params
                    .string_param(&p.name)
                    .map(|value| value.trim().is_empty())
                    .unwrap_or(true)
            })
            .map(|p| p.name.clone())
            .collect()
    }
}

fn operation_property(resource: Resource) -> NodeProperty {
    let noun = match resource {
        Resource::Folder => "folder",
        Resource::File => "file",
    };
    let mut property = NodeProperty::new("Operation", "operation", PropertyType::Options, json!("list"))
        .no_data_expression()
        .show_when("resource", &[resource.as_str()]);
    for op in Operation::ALL {
        let label = capitalize(op.as_str());
        let action = match op {
            Operation::List => format!("List {}s", noun),
            _ => format!("{} {}", label, noun),
        };
        property = property.option(&label, op.as_str(), Some(&action));
    }
    property
}

fn node_properties() -> Vec<NodeProperty> {
    vec![
        NodeProperty::new("Resource", "resource", PropertyType::Options, json!("folder"))
            .no_data_expression()
            .option("Folder", "folder", None)
            .option("File", "file", None),
        operation_property(Resource::Folder),
        operation_property(Resource::File),
        NodeProperty::new("Folder ID", "folderId", PropertyType::String, json!(MY_DOCUMENTS))
            .required()
            .show_when("operation", &["list"])
            .describe(&format!(
                "ID of the folder to list contents from. Use {} for My Documents, {} for Common Documents.",
                MY_DOCUMENTS, COMMON_DOCUMENTS
            )),
        NodeProperty::new(
            "Parent Folder ID",
            "parentFolderId",
            PropertyType::String,
            json!(MY_DOCUMENTS),
        )
        .required()
        .show_when("operation", &["create"])
        .describe("ID of the parent folder where the new item will be created"),
        NodeProperty::new("Title", "title", PropertyType::String, json!(""))
            .required()
            .show_when("operation", &["create"])
            .describe("Name of the new folder or file"),
        NodeProperty::new("File Type", "fileType", PropertyType::Options, json!("docx"))
            .required()
            .option("Document (.docx)", "docx", None)
            .option("Spreadsheet (.xlsx)", "xlsx", None)
            .option("Presentation (.pptx)", "pptx", None)
            .show_when("resource", &["file"])
            .show_when("operation", &["create"])
            .describe("Type of file to create"),
        NodeProperty::new("Item ID", "itemId", PropertyType::String, json!(""))
            .required()
            .show_when("operation", &["rename", "move", "copy", "delete"])
            .describe("ID of the folder or file to operate on"),
        NodeProperty::new("New Title", "newTitle", PropertyType::String, json!(""))
            .required()
            .show_when("operation", &["rename"])
            .describe("New name for the folder or file"),
        NodeProperty::new(
            "Destination Folder ID",
            "destFolderId",
            PropertyType::String,
            json!(""),
        )
        .required()
        .show_when("operation", &["move", "copy"])
        .describe("ID of the destination folder"),
        NodeProperty::new(
            "Conflict Resolution",
            "conflictResolveType",
            PropertyType::Options,
            json!("Skip"),
        )
        .option("Skip", "Skip", None)
        .option("Overwrite", "Overwrite", None)
        .option("Duplicate", "Duplicate", None)
        .show_when("operation", &["move", "copy"])
        .describe("How to handle conflicts when moving or copying"),
        NodeProperty::new(
            "Delete Immediately",
            "deleteImmediately",
            PropertyType::Boolean,
            json!(false),
        )
        .show_when("operation", &["delete"])
        .describe("Whether to delete immediately or move to trash"),
    ]
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialProperty {
    pub display_name: String,
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub default: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub description: String,
    pub required: bool,
    /// Rendered as a password field and never echoed.
    pub secret: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialDescription {
    pub name: String,
    pub display_name: String,
    pub documentation_url: String,
    pub properties: Vec<CredentialProperty>,
    /// Headers injected into every authenticated request.
    pub authenticate: BTreeMap<String, String>,
}

impl CredentialDescription {
    pub fn onlyoffice() -> Self {
        Self {
            name: CREDENTIAL_NAME.to_string(),
            display_name: "OnlyOffice API".to_string(),
            documentation_url: "https://api.onlyoffice.com/".to_string(),
            properties: vec![
                CredentialProperty {
                    display_name: "Base URL".to_string(),
                    name: "baseUrl".to_string(),
                    property_type: PropertyType::String,
                    default: String::new(),
                    placeholder: Some("https://your-onlyoffice-instance.com".to_string()),
                    description: "The base URL of your OnlyOffice instance".to_string(),
                    required: true,
                    secret: false,
                },
                CredentialProperty {
                    display_name: "Access Token".to_string(),
                    name: "token".to_string(),
                    property_type: PropertyType::String,
                    default: String::new(),
                    placeholder: None,
                    description: "The API token for authentication".to_string(),
                    required: true,
                    secret: true,
                },
            ],
            authenticate: BTreeMap::from([(
                "Authorization".to_string(),
                "=Bearer {{$credentials.token}}".to_string(),
            )]),
        }
    }
}
