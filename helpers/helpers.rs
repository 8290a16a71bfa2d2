//! Common helper functions for the SimpleStorage script and tests

use std::{sync::Arc, time::Duration};

use ethers::providers::{Http, Middleware, Provider};

pub mod artifact;
pub mod config;
pub mod error;
pub mod interact;
pub mod logging;

pub use artifact::{ContractArtifact, NetworkDeployment};
pub use config::ScriptConfig;
pub use error::InteractError;
pub use interact::{interact, list_accounts, report, report_line, select_sender, ContractHandle};
pub use logging::init_tracing;

/// Client and contract handle for one interaction run
pub struct ScriptSetup<M> {
    pub client: Arc<M>,
    pub storage: ContractHandle<M>,
}

/// Build an HTTP JSON-RPC client for `endpoint`.
///
/// Nothing is sent here; an unreachable node surfaces on the first request.
pub fn connect(
    endpoint: &str,
    poll_interval: Duration,
) -> Result<Arc<Provider<Http>>, InteractError> {
    let provider = Provider::<Http>::try_from(endpoint)
        .map_err(|e| InteractError::Connection(format!("invalid endpoint {endpoint}: {e}")))?
        .interval(poll_interval);
    Ok(Arc::new(provider))
}

/// Bind the artifact's deployment on `network_id` to an existing client
pub fn setup_with_client<M: Middleware + 'static>(
    client: Arc<M>,
    artifact: &ContractArtifact,
    network_id: &str,
) -> Result<ScriptSetup<M>, InteractError> {
    let storage = ContractHandle::resolve(artifact, network_id, client.clone())?;
    tracing::info!(
        contract = artifact.name(),
        network_id,
        address = ?storage.address(),
        "Resolved contract deployment"
    );
    Ok(ScriptSetup { client, storage })
}

/// Load the artifact, connect to the node and resolve the contract handle
pub fn setup_script(config: &ScriptConfig) -> Result<ScriptSetup<Provider<Http>>, InteractError> {
    let artifact = ContractArtifact::load(&config.artifact_path)?;
    let client = connect(&config.endpoint, config.poll_interval)?;
    tracing::info!(endpoint = %config.endpoint, "Connected to node");
    setup_with_client(client, &artifact, &config.network_id)
}
