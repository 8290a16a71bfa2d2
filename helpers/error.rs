use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a contract interaction run.
#[derive(Error, Debug)]
pub enum InteractError {
    #[error("Failed to read artifact {path}: {source}")]
    ArtifactRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse artifact {path}: {source}")]
    ArtifactParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Artifact has no deployment for network {0}")]
    ArtifactResolution(String),
    #[error("Contract interface cannot encode `{method}`: {reason}")]
    Interface { method: String, reason: String },
    #[error("Cannot reach node: {0}")]
    Connection(String),
    #[error("Node has no managed accounts to send from")]
    NoAccount,
    #[error("Transaction rejected: {0}")]
    Transaction(String),
    #[error("Query failed: {0}")]
    Query(String),
}
