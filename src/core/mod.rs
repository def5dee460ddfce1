pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod node;
pub mod types;

pub use client::{FilesApiClient, FilesTransport};
pub use config::{ConfigLoader, ConfigValidator, NodeConfig};
pub use credentials::{OnlyOfficeCredentials, SecretToken};
pub use error::{codes, AppError, DefaultErrorReporter, ErrorReporter};
pub use node::{ItemOutput, OnlyOfficeNode};
pub use types::*;
