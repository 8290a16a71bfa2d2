//! Truffle build artifacts

use std::{collections::HashMap, fs, path::Path};

use ethers::{
    abi::Abi,
    types::{Address, H256},
};
use serde::Deserialize;

use crate::error::InteractError;

/// The parts of a compiled contract artifact needed to call a deployment.
///
/// Truffle writes far more than this (bytecode, source maps, AST); those
/// fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    #[serde(default)]
    pub contract_name: Option<String>,
    pub abi: Abi,
    #[serde(default)]
    pub networks: HashMap<String, NetworkDeployment>,
}

/// A single deployment of the contract on one network.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDeployment {
    pub address: Address,
    #[serde(default)]
    pub transaction_hash: Option<H256>,
}

impl ContractArtifact {
    /// Read and parse an artifact file
    pub fn load(path: &Path) -> Result<Self, InteractError> {
        let contents = fs::read_to_string(path).map_err(|source| InteractError::ArtifactRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| InteractError::ArtifactParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Deployment registered under `network_id`.
    pub fn deployment(&self, network_id: &str) -> Result<&NetworkDeployment, InteractError> {
        self.networks
            .get(network_id)
            .ok_or_else(|| InteractError::ArtifactResolution(network_id.to_string()))
    }

    pub fn name(&self) -> &str {
        self.contract_name.as_deref().unwrap_or("contract")
    }
}
